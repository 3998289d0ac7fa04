#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Similarity transform estimation (Umeyama) between 2D point sets.
pub mod similarity;

/// Module to calculate the SVD of a 2x2 matrix.
pub mod svd;

pub use similarity::{estimate_similarity, SimilarityError, SimilarityTransform};
