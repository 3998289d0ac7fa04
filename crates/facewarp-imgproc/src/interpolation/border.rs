/// The fill policy applied when a sample falls outside the source image.
///
/// A coordinate is inside when it lies in `[0, width - 1] × [0, height - 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderMode {
    /// Outside samples take this value in every channel.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant(f32),

    /// Outside coordinates are clamped to the nearest edge.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// Outside coordinates are mirrored at the edge, without repeating the edge pixel.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::Constant(0.0)
    }
}

impl BorderMode {
    /// Maps a continuous coordinate into `[0, len - 1]`.
    ///
    /// [`BorderMode::Constant`] never remaps; callers fill instead.
    ///
    /// # Arguments
    /// - `u`: The (possibly out-of-range) coordinate.
    /// - `len`: The valid length of the dimension.
    #[inline]
    pub fn map_coord(&self, u: f32, len: usize) -> f32 {
        let last = len.saturating_sub(1) as f32;
        if !u.is_finite() {
            return 0.0;
        }
        match self {
            BorderMode::Constant(_) => u,
            BorderMode::Replicate => u.clamp(0.0, last),
            BorderMode::Reflect101 => {
                if last == 0.0 {
                    return 0.0;
                }
                let period = 2.0 * last;
                let u = u.abs() % period;
                if u > last {
                    period - u
                } else {
                    u
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BorderMode;

    #[test]
    fn test_replicate() {
        let b = BorderMode::Replicate;
        assert_eq!(b.map_coord(-3.5, 4), 0.0);
        assert_eq!(b.map_coord(1.5, 4), 1.5);
        assert_eq!(b.map_coord(9.0, 4), 3.0);
    }

    #[test]
    fn test_reflect101() {
        let b = BorderMode::Reflect101;
        assert_eq!(b.map_coord(-1.0, 4), 1.0);
        assert_eq!(b.map_coord(4.0, 4), 2.0);
        assert_eq!(b.map_coord(3.0, 4), 3.0);
        assert_eq!(b.map_coord(7.0, 4), 1.0);
        assert_eq!(b.map_coord(5.0, 1), 0.0);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(BorderMode::Replicate.map_coord(f32::NAN, 4), 0.0);
        assert_eq!(BorderMode::Reflect101.map_coord(f32::INFINITY, 4), 0.0);
    }
}
