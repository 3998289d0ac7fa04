#![deny(missing_docs)]
//! Face crop and landmark alignment operations.
//!
//! Two pure operations prepare detected faces for a recognition model:
//!
//! - [`crop_image_by_box`] extracts a bounding box into a fixed-size image.
//! - [`align_image_with_landmarks`] estimates the similarity transform mapping observed
//!   landmarks onto a reference layout and warps the face into that canonical pose.
//!
//! Both allocate and return a new image, never touch their input, and report invalid input
//! before any output is produced. Samples falling outside the source image take the fill
//! value of the configured [`BorderMode`], black by default.
//!
//! # Example
//!
//! ```
//! use facewarp_face::{align_face, FaceLandmarks, ReferenceLandmarks};
//! use facewarp_image::{Image, ImageSize};
//!
//! let image = Image::<u8, 3>::from_size_val(ImageSize { width: 640, height: 480 }, 128).unwrap();
//!
//! let detected = FaceLandmarks {
//!     left_eye: [290.0, 200.0],
//!     right_eye: [350.0, 202.0],
//!     nose: [320.0, 235.0],
//!     mouth_left: [296.0, 270.0],
//!     mouth_right: [345.0, 271.0],
//! };
//!
//! let aligned = align_face(&image, &detected, &ReferenceLandmarks::arcface_112()).unwrap();
//!
//! assert_eq!(aligned.size(), ImageSize { width: 112, height: 112 });
//! ```

mod align;
mod bbox;
mod crop;
mod error;
mod landmarks;

pub use align::{
    align_face, align_face_with, align_image_with_landmarks, align_image_with_landmarks_with,
    estimate_transform,
};
pub use bbox::BoundingBox;
pub use crop::{crop_image_by_box, crop_image_by_box_with};
pub use error::FaceError;
pub use landmarks::{FaceLandmarks, ReferenceLandmarks};

pub use facewarp_imgproc::interpolation::{BorderMode, InterpolationMode, ResampleOptions};
pub use facewarp_imgproc::parallel::ExecutionStrategy;
pub use facewarp_linalg::SimilarityTransform;
