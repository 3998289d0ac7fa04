use super::bilinear::bilinear_interpolation;
use super::border::BorderMode;
use super::nearest::nearest_neighbor_interpolation;
use facewarp_image::{Image, ImageDtype};

/// Slack, in pixels, for coordinates that land on the image edge up to rounding error.
const EDGE_TOLERANCE: f32 = 1e-3;

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The fill policy for coordinates outside the image.
///
/// # Returns
///
/// The interpolated values of every channel.
///
/// # Example
///
/// ```
/// use facewarp_image::{Image, ImageSize};
/// use facewarp_imgproc::interpolation::{interpolate_pixel, BorderMode, InterpolationMode};
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![10, 20]).unwrap();
///
/// let inside = interpolate_pixel(&image, 0.5, 0.0, InterpolationMode::Bilinear, BorderMode::default());
/// let outside = interpolate_pixel(&image, 2.5, 0.0, InterpolationMode::Bilinear, BorderMode::default());
///
/// assert_eq!(inside, [15.0]);
/// assert_eq!(outside, [0.0]);
/// ```
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> [f32; C] {
    let (u, v) = match border {
        BorderMode::Constant(value) => {
            let max_u = (image.cols() - 1) as f32 + EDGE_TOLERANCE;
            let max_v = (image.rows() - 1) as f32 + EDGE_TOLERANCE;
            // NaN coordinates are never inside
            let inside = (-EDGE_TOLERANCE..=max_u).contains(&u)
                && (-EDGE_TOLERANCE..=max_v).contains(&v);
            if !inside {
                return [value; C];
            }
            (u, v)
        }
        _ => (
            border.map_coord(u, image.cols()),
            border.map_coord(v, image.rows()),
        ),
    };

    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}
