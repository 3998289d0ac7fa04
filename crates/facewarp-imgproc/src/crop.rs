use facewarp_image::{Image, ImageDtype, ImageError};

use crate::interpolation::{interpolate_pixel, ResampleOptions};
use crate::parallel;

/// Crop an image to a specified region.
///
/// The region starts at `(x, y)` and has the size of `dst`; it must lie inside `src`.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image to store the cropped image.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
///
/// # Errors
///
/// Returns [`ImageError::CropOutOfBounds`] if the region exceeds the source image.
///
/// # Examples
///
/// ```rust
/// use facewarp_image::{Image, ImageSize};
/// use facewarp_imgproc::crop::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy,
{
    let (dst_cols, dst_rows) = (dst.cols(), dst.rows());

    if x + dst_cols > src.cols() || y + dst_rows > src.rows() {
        return Err(ImageError::CropOutOfBounds(
            x,
            y,
            dst_cols,
            dst_rows,
            src.cols(),
            src.rows(),
        ));
    }

    let src_stride = src.cols() * C;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src_stride + x * C;
            let src_slice = &src_data[offset..offset + dst_cols * C];

            // copy the slice to the destination
            dst_row.copy_from_slice(src_slice);
        });

    Ok(())
}

/// Crop a region of arbitrary position and size, resampling it to the size of `dst`.
///
/// The region `[x, x + width) × [y, y + height)` may extend beyond `src` or lie fully outside
/// of it. Pixel centers are aligned: output pixel `(i, j)` samples the source at
/// `(x + (i + 0.5) · width / W - 0.5, y + (j + 0.5) · height / H - 0.5)`, where `W × H` is the
/// size of `dst`, clamped to the pixels the region covers. A region of the same size as `dst`
/// at integer coordinates therefore reproduces the source pixels exactly, and a region inside
/// `src` never samples outside of it. Parts of the region outside `src` are filled according
/// to the border mode of `options`.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, its size is the output size.
/// * `x` - The x-coordinate of the top-left corner of the region.
/// * `y` - The y-coordinate of the top-left corner of the region.
/// * `width` - The width of the region in source pixels.
/// * `height` - The height of the region in source pixels.
/// * `options` - The interpolation, border and execution options.
///
/// # Errors
///
/// Returns [`ImageError::InvalidRegionSize`] if the region size is not positive and finite.
///
/// # Examples
///
/// ```rust
/// use facewarp_image::{Image, ImageSize};
/// use facewarp_imgproc::crop::crop_and_resize;
/// use facewarp_imgproc::interpolation::ResampleOptions;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 2 }, vec![
///     1u8, 2,
///     3u8, 4,
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_and_resize(&image, &mut cropped, 1.0, 1.0, 2.0, 2.0, &ResampleOptions::default()).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[4u8, 0, 0, 0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn crop_and_resize<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    options: &ResampleOptions,
) -> Result<(), ImageError> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(width) || !valid(height) || !x.is_finite() || !y.is_finite() {
        return Err(ImageError::InvalidRegionSize(width, height));
    }

    log::debug!(
        "crop_and_resize region ({x}, {y}, {width}x{height}) -> {}x{}",
        dst.cols(),
        dst.rows()
    );

    let us = sample_positions(x, width, dst.cols());
    let vs = sample_positions(y, height, dst.rows());
    let (interpolation, border) = (options.interpolation, options.border);

    parallel::iter_rows_resample(dst, options.strategy, |i, j, dst_pixel| {
        let pixel = interpolate_pixel(src, us[i], vs[j], interpolation, border);
        dst_pixel
            .iter_mut()
            .zip(pixel.iter())
            .for_each(|(out, &val)| *out = T::from_f32(val));
    });

    Ok(())
}

/// Source coordinates of `n` output samples spread over `[start, start + len)`.
///
/// Samples are taken at pixel centers and clamped to the first and last pixel the span
/// covers, so upscaling never reaches past the span into the neighbouring pixels.
fn sample_positions(start: f32, len: f32, n: usize) -> Vec<f32> {
    let step = len / n as f32;
    let (lo, hi) = (start, (start + len - 1.0).max(start));
    (0..n)
        .map(|i| (start + (i as f32 + 0.5) * step - 0.5).clamp(lo, hi))
        .collect()
}
