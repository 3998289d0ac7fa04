use facewarp_image::ImageError;
use facewarp_linalg::SimilarityError;

/// An error type for the face operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FaceError {
    /// A target size or a box size is not positive.
    #[error("Invalid input dimension: {0}")]
    InvalidInputDimension(String),

    /// Fewer than two landmarks, or landmark sets of different lengths.
    #[error("Insufficient correspondence: {src} source and {dst} destination landmarks, need at least 2 pairs")]
    InsufficientCorrespondence {
        /// Number of source landmarks.
        src: usize,
        /// Number of destination landmarks.
        dst: usize,
    },

    /// The landmarks do not determine a usable transform.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Error raised by the underlying image operations.
    #[error(transparent)]
    Image(#[from] ImageError),
}

impl From<SimilarityError> for FaceError {
    fn from(err: SimilarityError) -> Self {
        match err {
            SimilarityError::MismatchedInputLengths(src, dst) => {
                FaceError::InsufficientCorrespondence { src, dst }
            }
            SimilarityError::InsufficientPoints(n) => {
                FaceError::InsufficientCorrespondence { src: n, dst: n }
            }
            SimilarityError::DegenerateSource(_)
            | SimilarityError::NonFinitePoint(_)
            | SimilarityError::ZeroScale => {
                FaceError::DegenerateGeometry(err.to_string())
            }
        }
    }
}

/// Rejects a zero target size before anything is allocated.
pub(crate) fn check_target_size(height: usize, width: usize) -> Result<(), FaceError> {
    if height == 0 || width == 0 {
        return Err(FaceError::InvalidInputDimension(format!(
            "target size must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}
