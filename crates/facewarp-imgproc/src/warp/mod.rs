//! Geometric image transformations using affine warps.
//!
//! [`warp_affine`] resamples a source image into a destination of any size by mapping every
//! destination pixel back into the source. Landmark alignment feeds it the similarity matrix
//! of the estimated transform; [`get_rotation_matrix2d`] and [`invert_affine_transform`] help
//! callers build their own.
//!
//! Affine matrices are row-major 2x3 arrays `[a, b, tx, c, d, ty]` mapping a source point
//! `(x, y)` to `(a x + b y + tx, c x + d y + ty)`.
//!
//! # Examples
//!
//! Rotating a 256x256 image by 45 degrees around its center:
//!
//! ```
//! use facewarp_image::{Image, ImageSize};
//! use facewarp_imgproc::interpolation::ResampleOptions;
//! use facewarp_imgproc::warp::{get_rotation_matrix2d, warp_affine};
//!
//! let size = ImageSize { width: 256, height: 256 };
//! let src = Image::<u8, 3>::from_size_val(size, 255).unwrap();
//! let mut dst = Image::<u8, 3>::from_size_val(size, 0).unwrap();
//!
//! let m = get_rotation_matrix2d((127.5, 127.5), 45.0, 1.0);
//! warp_affine(&src, &mut dst, &m, &ResampleOptions::default()).unwrap();
//!
//! // the center stays, the corners now come from outside the source
//! assert_eq!(dst.pixel(128, 128), Some(&[255u8, 255, 255][..]));
//! assert_eq!(dst.pixel(0, 0), Some(&[0u8, 0, 0][..]));
//! ```

mod affine;

pub use affine::{
    get_rotation_matrix2d, invert_affine_transform, warp_affine, warp_affine_inverse,
};
