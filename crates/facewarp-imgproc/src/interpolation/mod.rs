//! Pixel interpolation methods for image transformations.
//!
//! This module provides the sampling kernels used when resampling images during
//! geometric transformations like cropping with rescale or affine warping.
//!
//! # Interpolation Modes
//!
//! - **Bilinear**: Smooth linear interpolation between the four nearest pixels
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//!
//! # Border Modes
//!
//! Source coordinates landing outside the image are resolved by a [`BorderMode`]:
//! a constant fill (black by default), edge replication or mirroring.

mod bilinear;
mod border;
mod interpolate;
mod nearest;

pub use border::BorderMode;
pub use interpolate::{interpolate_pixel, InterpolationMode};

use crate::parallel::ExecutionStrategy;

/// Options shared by every resampling operation.
///
/// # Example
///
/// ```
/// use facewarp_imgproc::interpolation::{BorderMode, InterpolationMode, ResampleOptions};
///
/// let options = ResampleOptions {
///     border: BorderMode::Replicate,
///     ..Default::default()
/// };
///
/// assert_eq!(options.interpolation, InterpolationMode::Bilinear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResampleOptions {
    /// The interpolation kernel.
    pub interpolation: InterpolationMode,
    /// The fill policy for samples outside the source image.
    pub border: BorderMode,
    /// How the output rows are scheduled.
    pub strategy: ExecutionStrategy,
}
