//! Similarity alignment of 2D point sets (Umeyama).
//!
//! Estimates the uniform scale `s`, rotation `R` and translation `t` minimizing
//! `Σ |dst_i - (s R src_i + t)|²` over corresponding points.
//!
//! Reference: S. Umeyama, "Least-squares estimation of transformation parameters between
//! two point patterns", IEEE TPAMI 13(4), 1991.

use glam::{DMat2, DVec2};
use thiserror::Error;

use crate::svd::svd2;

/// Source variance below which the points are considered coincident.
const DEGENERATE_VARIANCE: f64 = 1e-12;

/// Error type for similarity estimation.
#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    /// Source and destination arrays must have the same length.
    #[error("Source ({0}) and destination ({1}) point sets must have the same length")]
    MismatchedInputLengths(usize, usize),

    /// At least two correspondences are needed to fix scale and rotation.
    #[error("At least 2 point correspondences are required, got {0}")]
    InsufficientPoints(usize),

    /// All the source points coincide so scale and rotation are undefined.
    #[error("Source points are coincident (variance {0:e})")]
    DegenerateSource(f64),

    /// A point has a NaN or infinite coordinate.
    #[error("Point {0} has a non-finite coordinate")]
    NonFinitePoint(usize),

    /// A transform with zero scale has no inverse.
    #[error("Similarity transform with zero scale is not invertible")]
    ZeroScale,
}

/// A 2D similarity transform `p' = s R(θ) p + t`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityTransform {
    /// Uniform scale factor.
    pub scale: f32,
    /// Counter-clockwise rotation angle in radians.
    pub rotation: f32,
    /// Translation applied after scaling and rotation.
    pub translation: [f32; 2],
}

impl Default for SimilarityTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl SimilarityTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            translation: [0.0, 0.0],
        }
    }

    /// The row-major 2x3 affine matrix `[a, b, tx, c, d, ty]`.
    ///
    /// ```
    /// use facewarp_linalg::SimilarityTransform;
    ///
    /// let t = SimilarityTransform { scale: 2.0, rotation: 0.0, translation: [1.0, -1.0] };
    /// assert_eq!(t.matrix(), [2.0, 0.0, 1.0, 0.0, 2.0, -1.0]);
    /// ```
    pub fn matrix(&self) -> [f32; 6] {
        let (sin, cos) = self.rotation.sin_cos();
        let (a, b) = (self.scale * cos, self.scale * sin);
        [a, -b, self.translation[0], b, a, self.translation[1]]
    }

    /// Map a point through the transform.
    pub fn apply(&self, p: [f32; 2]) -> [f32; 2] {
        let m = self.matrix();
        [
            m[0] * p[0] + m[1] * p[1] + m[2],
            m[3] * p[0] + m[4] * p[1] + m[5],
        ]
    }

    /// The inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`SimilarityError::ZeroScale`] when the scale is zero or not finite.
    pub fn inverse(&self) -> Result<Self, SimilarityError> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return Err(SimilarityError::ZeroScale);
        }

        let scale = 1.0 / self.scale;
        let rotation = -self.rotation;
        let (sin, cos) = rotation.sin_cos();
        let [tx, ty] = self.translation;

        Ok(Self {
            scale,
            rotation,
            translation: [
                -scale * (cos * tx - sin * ty),
                -scale * (sin * tx + cos * ty),
            ],
        })
    }
}

/// Estimate the similarity transform mapping `src` points onto `dst` points.
///
/// Point `i` of `src` corresponds to point `i` of `dst`. The estimate is the least-squares
/// optimum; with exactly two distinct points it is exact.
///
/// # Arguments
///
/// * `src` - The observed points.
/// * `dst` - The reference points, in the same order.
///
/// # Errors
///
/// * [`SimilarityError::MismatchedInputLengths`] if the sets differ in length.
/// * [`SimilarityError::InsufficientPoints`] if there are fewer than two points.
/// * [`SimilarityError::NonFinitePoint`] if a point of either set is NaN or infinite.
/// * [`SimilarityError::DegenerateSource`] if the source points coincide.
///
/// # Example
///
/// ```
/// use facewarp_linalg::estimate_similarity;
///
/// let src = [[0.0, 0.0], [1.0, 0.0]];
/// let dst = [[2.0, 2.0], [2.0, 4.0]];
///
/// let t = estimate_similarity(&src, &dst).unwrap();
///
/// assert!((t.scale - 2.0).abs() < 1e-6);
/// assert!((t.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn estimate_similarity(
    src: &[[f32; 2]],
    dst: &[[f32; 2]],
) -> Result<SimilarityTransform, SimilarityError> {
    if src.len() != dst.len() {
        return Err(SimilarityError::MismatchedInputLengths(
            src.len(),
            dst.len(),
        ));
    }
    if src.len() < 2 {
        return Err(SimilarityError::InsufficientPoints(src.len()));
    }
    if let Some(i) = src
        .iter()
        .zip(dst.iter())
        .position(|(ps, pd)| !ps.iter().chain(pd.iter()).all(|v| v.is_finite()))
    {
        return Err(SimilarityError::NonFinitePoint(i));
    }

    let to_dvec = |p: &[f32; 2]| DVec2::new(p[0] as f64, p[1] as f64);
    let n = src.len() as f64;

    // 1. centroids
    let mu_s = src.iter().map(to_dvec).sum::<DVec2>() / n;
    let mu_d = dst.iter().map(to_dvec).sum::<DVec2>() / n;

    // 2. source variance and covariance H = 1/n Σ (d_i - mu_d)(s_i - mu_s)^T
    let mut var_s = 0.0f64;
    let mut h = DMat2::ZERO;
    for (ps, pd) in src.iter().zip(dst.iter()) {
        let sc = to_dvec(ps) - mu_s;
        let dc = to_dvec(pd) - mu_d;
        var_s += sc.length_squared();
        // outer product dc * sc^T, column j is dc * sc[j]
        h += DMat2::from_cols(dc * sc.x, dc * sc.y);
    }
    var_s /= n;
    h *= 1.0 / n;

    if var_s <= DEGENERATE_VARIANCE {
        return Err(SimilarityError::DegenerateSource(var_s));
    }

    // 3. rotation from the SVD of the covariance, avoiding reflections
    let svd = svd2(&h);
    let d = if svd.u.determinant() * svd.v.determinant() < 0.0 {
        -1.0
    } else {
        1.0
    };
    let correction = DMat2::from_diagonal(DVec2::new(1.0, d));
    let r = svd.u * correction * svd.v.transpose();

    // 4. scale and translation
    let scale = (svd.s.x + d * svd.s.y) / var_s;
    let t = mu_d - scale * (r * mu_s);
    let rotation = r.x_axis.y.atan2(r.x_axis.x);

    log::debug!(
        "similarity from {} points: scale={scale:.6} rotation={rotation:.6} t=({:.3}, {:.3})",
        src.len(),
        t.x,
        t.y
    );

    Ok(SimilarityTransform {
        scale: scale as f32,
        rotation: rotation as f32,
        translation: [t.x as f32, t.y as f32],
    })
}
