use facewarp_image::{Image, ImageDtype, ImageSize};
use facewarp_imgproc::interpolation::ResampleOptions;
use facewarp_imgproc::warp::warp_affine_inverse;
use facewarp_linalg::{estimate_similarity, SimilarityTransform};

use crate::error::{check_target_size, FaceError};
use crate::landmarks::{FaceLandmarks, ReferenceLandmarks};

/// Estimate the similarity transform mapping `src` landmarks onto `dst` landmarks.
///
/// Point `i` of `src` must correspond to point `i` of `dst`.
///
/// # Errors
///
/// * [`FaceError::InsufficientCorrespondence`] if the sets differ in length or have fewer
///   than two points.
/// * [`FaceError::DegenerateGeometry`] if the source points coincide or a landmark is not
///   finite.
pub fn estimate_transform(
    src: &[[f32; 2]],
    dst: &[[f32; 2]],
) -> Result<SimilarityTransform, FaceError> {
    Ok(estimate_similarity(src, dst)?)
}

/// Warp a face into the pose given by reference landmarks.
///
/// Uses bilinear interpolation with a black fill. See [`align_image_with_landmarks_with`].
pub fn align_image_with_landmarks<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    src: &[[f32; 2]],
    dst: &[[f32; 2]],
    height: usize,
    width: usize,
) -> Result<Image<T, C>, FaceError> {
    align_image_with_landmarks_with(image, src, dst, height, width, &ResampleOptions::default())
}

/// Warp a face into the pose given by reference landmarks.
///
/// The similarity transform best mapping the observed `src` landmarks onto the `dst`
/// landmarks, in the least-squares sense, is estimated and applied to the image. The output
/// is a new `width × height` image in which the face landmarks sit near `dst`. Output pixels
/// whose source lies outside the image are filled according to `options.border`.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `src` - The landmarks observed in `image`.
/// * `dst` - The reference landmarks in output coordinates, in the same order as `src`.
/// * `height` - The output height.
/// * `width` - The output width.
/// * `options` - The interpolation, border and execution options.
///
/// # Errors
///
/// * [`FaceError::InvalidInputDimension`] if the target size is zero.
/// * [`FaceError::InsufficientCorrespondence`] if the landmark sets differ in length or
///   have fewer than two points.
/// * [`FaceError::DegenerateGeometry`] if the source or destination points coincide, or a
///   landmark is not finite.
/// * [`FaceError::Image`] if the target size is too large to allocate.
pub fn align_image_with_landmarks_with<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    src: &[[f32; 2]],
    dst: &[[f32; 2]],
    height: usize,
    width: usize,
    options: &ResampleOptions,
) -> Result<Image<T, C>, FaceError> {
    check_target_size(height, width)?;

    let transform = estimate_similarity(src, dst)?;

    // output pixels are sampled backwards; coincident destination points give a zero scale
    let inverse = transform.inverse()?;

    log::debug!(
        "aligning {}x{} image to {width}x{height}: scale={} rotation={} translation={:?}",
        image.width(),
        image.height(),
        transform.scale,
        transform.rotation,
        transform.translation
    );

    let mut aligned = Image::from_size_val(ImageSize { width, height }, T::default())?;
    warp_affine_inverse(image, &mut aligned, &inverse.matrix(), options);

    Ok(aligned)
}

/// Align a face given its five named landmarks onto a reference layout.
///
/// The output has the size of the reference layout.
pub fn align_face<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    landmarks: &FaceLandmarks,
    reference: &ReferenceLandmarks,
) -> Result<Image<T, C>, FaceError> {
    align_face_with(image, landmarks, reference, &ResampleOptions::default())
}

/// Align a face given its five named landmarks onto a reference layout, with options.
pub fn align_face_with<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    landmarks: &FaceLandmarks,
    reference: &ReferenceLandmarks,
    options: &ResampleOptions,
) -> Result<Image<T, C>, FaceError> {
    align_image_with_landmarks_with(
        image,
        &landmarks.to_array(),
        &reference.landmarks.to_array(),
        reference.height,
        reference.width,
        options,
    )
}
