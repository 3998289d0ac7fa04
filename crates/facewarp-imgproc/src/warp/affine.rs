use facewarp_image::{Image, ImageDtype, ImageError};

use crate::interpolation::{interpolate_pixel, ResampleOptions};
use crate::parallel;

/// Invert a row-major `[a, b, tx, c, d, ty]` affine matrix.
///
/// # Errors
///
/// Returns [`ImageError::NonInvertibleTransform`] if the linear part is singular.
///
/// ```
/// use facewarp_imgproc::warp::invert_affine_transform;
///
/// let m_inv = invert_affine_transform(&[2.0, 0.0, 4.0, 0.0, 2.0, -6.0]).unwrap();
///
/// assert_eq!(m_inv, [0.5, 0.0, -2.0, 0.0, 0.5, 3.0]);
/// ```
pub fn invert_affine_transform(m: &[f32; 6]) -> Result<[f32; 6], ImageError> {
    let [a, b, tx, c, d, ty] = *m;

    let det = a * d - b * c;
    if det == 0.0 || !det.is_finite() {
        return Err(ImageError::NonInvertibleTransform(det));
    }

    let (ia, ib) = (d / det, -b / det);
    let (ic, id) = (-c / det, a / det);

    Ok([ia, ib, -(ia * tx + ib * ty), ic, id, -(ic * tx + id * ty)])
}

/// Build the matrix rotating by `angle` degrees and scaling by `scale` around `center`.
///
/// Positive angles turn counter-clockwise in image coordinates (y down), and `center` is
/// left in place.
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let angle = angle.to_radians();
    let alpha = scale * angle.cos();
    let beta = scale * angle.sin();

    let tx = (1.0 - alpha) * center.0 - beta * center.1;
    let ty = beta * center.0 + (1.0 - alpha) * center.1;

    [alpha, beta, tx, -beta, alpha, ty]
}

#[inline]
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Warp `src` into `dst` with an already inverted affine matrix.
///
/// `m_inv` maps destination coordinates to source coordinates: every pixel `(x, y)` of `dst`
/// is sampled in `src` at `m_inv · (x, y)`. Use it when the inverse is known in closed form,
/// as for a similarity transform; [`warp_affine`] inverts a forward matrix first.
pub fn warp_affine_inverse<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m_inv: &[f32; 6],
    options: &ResampleOptions,
) {
    let (interpolation, border) = (options.interpolation, options.border);

    parallel::iter_rows_resample(dst, options.strategy, |x, y, dst_pixel| {
        let (u, v) = transform_point(x as f32, y as f32, m_inv);
        let pixel = interpolate_pixel(src, u, v, interpolation, border);
        dst_pixel
            .iter_mut()
            .zip(pixel.iter())
            .for_each(|(out, &val)| *out = T::from_f32(val));
    });
}

/// Warp `src` into `dst` with the affine matrix `m`.
///
/// `m` maps source coordinates to destination coordinates. Each pixel of `dst` is mapped back
/// through the inverse of `m` and sampled in `src`; samples outside `src` are resolved by the
/// border mode of `options`. The size of `dst` is the output size.
///
/// # Errors
///
/// Returns [`ImageError::NonInvertibleTransform`] if `m` can not be inverted.
///
/// # Example
///
/// ```
/// use facewarp_image::{Image, ImageSize};
/// use facewarp_imgproc::interpolation::ResampleOptions;
/// use facewarp_imgproc::warp::warp_affine;
///
/// let src = Image::<u8, 1>::new(ImageSize { width: 3, height: 1 }, vec![10, 20, 30]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(ImageSize { width: 2, height: 1 }, 0).unwrap();
///
/// // move the image one pixel to the left
/// warp_affine(&src, &mut dst, &[1.0, 0.0, -1.0, 0.0, 1.0, 0.0], &ResampleOptions::default()).unwrap();
///
/// assert_eq!(dst.as_slice(), &[20, 30]);
/// ```
pub fn warp_affine<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &[f32; 6],
    options: &ResampleOptions,
) -> Result<(), ImageError> {
    let m_inv = invert_affine_transform(m)?;

    log::debug!(
        "warp_affine {}x{} -> {}x{} with m_inv {:?}",
        src.width(),
        src.height(),
        dst.width(),
        dst.height(),
        m_inv
    );

    warp_affine_inverse(src, dst, &m_inv, options);

    Ok(())
}
