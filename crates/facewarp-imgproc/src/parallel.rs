use rayon::prelude::*;

use facewarp_image::Image;

/// Controls how the output rows of a resampling operation are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Run sequentially on the calling thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process output rows in parallel.
    ///
    /// Only the rows of the single output image are split; nothing is shared between calls.
    ParallelRows,
}

/// Apply a function to each output pixel, given its `(x, y)` position.
///
/// The closure receives the column, the row and the `C` channel values of the pixel to fill.
pub fn iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) where
    T: Send,
{
    let row_stride = dst.cols() * C;
    let fill_row = |(y, dst_row): (usize, &mut [T])| {
        dst_row
            .chunks_exact_mut(C)
            .enumerate()
            .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
    };

    match strategy {
        ExecutionStrategy::Serial => dst
            .as_slice_mut()
            .chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(fill_row),
        ExecutionStrategy::ParallelRows => dst
            .as_slice_mut()
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(fill_row),
    }
}
