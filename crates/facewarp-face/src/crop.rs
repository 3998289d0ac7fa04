use facewarp_image::{Image, ImageDtype, ImageSize};
use facewarp_imgproc::crop::{crop_and_resize, crop_image};
use facewarp_imgproc::interpolation::ResampleOptions;

use crate::bbox::BoundingBox;
use crate::error::{check_target_size, FaceError};

/// Crop a bounding box out of an image into a new `width × height` image.
///
/// Uses bilinear interpolation and a black fill for the parts of the box outside the image.
/// See [`crop_image_by_box_with`].
pub fn crop_image_by_box<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    bbox: &BoundingBox,
    height: usize,
    width: usize,
) -> Result<Image<T, C>, FaceError> {
    crop_image_by_box_with(image, bbox, height, width, &ResampleOptions::default())
}

/// Crop a bounding box out of an image into a new `width × height` image.
///
/// The box is mapped onto the whole output with pixel centers aligned, scaling each axis by
/// `box / output` size, so a box with the output size at integer coordinates copies the source
/// pixels unchanged. The output always has the requested size. A box inside the image never
/// produces fill pixels; parts of the box outside the image, up to the whole box, are filled
/// according to `options.border`.
///
/// # Arguments
///
/// * `image` - The source image.
/// * `bbox` - The region to crop, in source pixel coordinates.
/// * `height` - The output height.
/// * `width` - The output width.
/// * `options` - The interpolation, border and execution options.
///
/// # Errors
///
/// * [`FaceError::InvalidInputDimension`] if the target size is zero or the box does not have
///   a positive finite size.
/// * [`FaceError::Image`] if the target size is too large to allocate.
///
/// # Example
///
/// ```
/// use facewarp_face::{crop_image_by_box_with, BorderMode, BoundingBox, ResampleOptions};
/// use facewarp_image::{Image, ImageSize};
///
/// let image = Image::<u8, 1>::from_size_val(ImageSize { width: 4, height: 4 }, 9).unwrap();
/// let options = ResampleOptions { border: BorderMode::Constant(1.0), ..Default::default() };
///
/// let cropped = crop_image_by_box_with(&image, &BoundingBox::new(3.0, 0.0, 2.0, 1.0), 1, 2, &options).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[9, 1]);
/// ```
pub fn crop_image_by_box_with<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    bbox: &BoundingBox,
    height: usize,
    width: usize,
    options: &ResampleOptions,
) -> Result<Image<T, C>, FaceError> {
    check_target_size(height, width)?;

    if !bbox.is_valid() {
        return Err(FaceError::InvalidInputDimension(format!(
            "bounding box must have a positive finite size, got {bbox:?}"
        )));
    }

    let src_size = image.size();
    if bbox.clamp_to(src_size).is_none() {
        log::debug!("bounding box {bbox:?} lies outside the {src_size} image, output is all fill");
    }

    let out_size = ImageSize { width, height };
    let mut dst = Image::from_size_val(out_size, T::default())?;

    if is_pixel_copy(bbox, src_size, out_size) {
        log::trace!("crop {bbox:?} is an exact pixel copy");
        crop_image(image, &mut dst, bbox.x as usize, bbox.y as usize)?;
    } else {
        crop_and_resize(
            image,
            &mut dst,
            bbox.x,
            bbox.y,
            bbox.width,
            bbox.height,
            options,
        )?;
    }

    Ok(dst)
}

/// True when the crop reduces to copying whole pixels from inside the image.
fn is_pixel_copy(bbox: &BoundingBox, src_size: ImageSize, out_size: ImageSize) -> bool {
    bbox.x.fract() == 0.0
        && bbox.y.fract() == 0.0
        && bbox.width == out_size.width as f32
        && bbox.height == out_size.height as f32
        && bbox.is_inside(src_size)
}
