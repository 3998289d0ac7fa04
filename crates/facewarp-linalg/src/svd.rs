//! Closed-form 2×2 Singular Value Decomposition (SVD).
//!
//! For any matrix A ∈ ℝ²ˣ² the SVD decomposes it into:
//!
//! ```text
//! A = U Σ Vᵀ
//! ```
//!
//! where U and V are orthogonal and Σ = diag(σ₁, σ₂) with σ₁ ≥ σ₂ ≥ 0.
//!
//! In two dimensions the decomposition has an analytic form. Writing
//!
//! ```text
//! E = (a + d) / 2    F = (a - d) / 2
//! G = (c + b) / 2    H = (c - b) / 2
//! ```
//!
//! for A = [[a, b], [c, d]], the matrix splits into a rotation-scale part (E, H) and a
//! reflection-scale part (F, G), which gives
//! `A = Rot(φ) · diag(Q + R, Q - R) · Rot(θ)` with `Q = |(E, H)|`, `R = |(F, G)|`.
//!
//! # Example
//!
//! ```
//! use glam::DMat2;
//! use facewarp_linalg::svd::svd2;
//!
//! let m = DMat2::from_cols_array(&[3.0, 0.0, 0.0, -2.0]);
//! let svd = svd2(&m);
//!
//! assert!((svd.s.x - 3.0).abs() < 1e-12);
//! assert!((svd.s.y - 2.0).abs() < 1e-12);
//! assert!(svd.reconstruct().abs_diff_eq(m, 1e-12));
//! ```

use glam::{DMat2, DVec2};

/// Result of the 2×2 singular value decomposition `A = U diag(s) Vᵀ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svd2 {
    /// Left singular vectors, a proper rotation.
    pub u: DMat2,
    /// Singular values in descending order, both non negative.
    pub s: DVec2,
    /// Right singular vectors. Its determinant is -1 when `det(A) < 0`.
    pub v: DMat2,
}

impl Svd2 {
    /// Recompose `U diag(s) Vᵀ`.
    pub fn reconstruct(&self) -> DMat2 {
        self.u * DMat2::from_diagonal(self.s) * self.v.transpose()
    }
}

/// Compute the SVD of a 2×2 matrix in closed form.
///
/// # Arguments
///
/// * `m` - The input matrix.
///
/// # Returns
///
/// The decomposition with `U` a rotation and singular values sorted in descending order.
pub fn svd2(m: &DMat2) -> Svd2 {
    // glam is column major: x_axis is the first column
    let (a, b) = (m.x_axis.x, m.y_axis.x);
    let (c, d) = (m.x_axis.y, m.y_axis.y);

    let e = 0.5 * (a + d);
    let f = 0.5 * (a - d);
    let g = 0.5 * (c + b);
    let h = 0.5 * (c - b);

    let q = e.hypot(h);
    let r = f.hypot(g);

    let a1 = g.atan2(f);
    let a2 = h.atan2(e);
    let theta = 0.5 * (a2 - a1);
    let phi = 0.5 * (a2 + a1);

    let u = DMat2::from_angle(phi);
    let mut v = DMat2::from_angle(theta).transpose();

    let s1 = q + r;
    let mut s2 = q - r;

    // move the sign of the second singular value into V
    if s2 < 0.0 {
        s2 = -s2;
        v.y_axis = -v.y_axis;
    }

    Svd2 {
        u,
        s: DVec2::new(s1, s2),
        v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_orthogonal(m: &DMat2) {
        let eye = m.transpose() * *m;
        assert!(eye.abs_diff_eq(DMat2::IDENTITY, 1e-10), "{eye:?}");
    }

    #[test]
    fn test_svd2_identity() {
        let svd = svd2(&DMat2::IDENTITY);
        assert_relative_eq!(svd.s.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(svd.s.y, 1.0, epsilon = 1e-12);
        assert!(svd.reconstruct().abs_diff_eq(DMat2::IDENTITY, 1e-12));
    }

    #[test]
    fn test_svd2_rotation_scale() {
        let m = DMat2::from_angle(0.7) * 3.0;
        let svd = svd2(&m);
        assert_relative_eq!(svd.s.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(svd.s.y, 3.0, epsilon = 1e-12);
        assert!(svd.reconstruct().abs_diff_eq(m, 1e-12));
    }

    #[test]
    fn test_svd2_zero() {
        let svd = svd2(&DMat2::ZERO);
        assert_eq!(svd.s, DVec2::ZERO);
        assert_orthogonal(&svd.u);
        assert_orthogonal(&svd.v);
    }

    #[test]
    fn test_svd2_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let m = DMat2::from_cols_array(&[
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            ]);
            let svd = svd2(&m);

            assert!(svd.s.x >= svd.s.y);
            assert!(svd.s.y >= 0.0);
            assert_relative_eq!(svd.u.determinant(), 1.0, epsilon = 1e-10);
            assert_orthogonal(&svd.u);
            assert_orthogonal(&svd.v);
            assert!(svd.reconstruct().abs_diff_eq(m, 1e-9), "{m:?}");

            if m.determinant() < 0.0 {
                assert_relative_eq!(svd.v.determinant(), -1.0, epsilon = 1e-10);
            }
        }
    }
}
