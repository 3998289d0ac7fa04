use facewarp_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The pixel values of the closest pixel.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.max(0.0).round() as usize).min(cols - 1);
    let iv = (v.max(0.0).round() as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;
    let data = &image.as_slice()[base..base + C];

    let mut pixel = [0.0; C];
    for (out, &val) in pixel.iter_mut().zip(data.iter()) {
        *out = val.into();
    }

    pixel
}
