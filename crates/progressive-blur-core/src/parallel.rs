//! Row-band iteration shared by the mask, blur and composite stages.
//!
//! Every stage writes each output row independently of the others, so rows
//! can be handed to worker threads without locking. With the `parallel`
//! feature the rows are spread over the rayon pool; without it the same
//! closure runs sequentially and produces identical output.

/// Call `f(y, row)` for every `row_len`-sized row of `buf`.
///
/// Empty buffers and a zero row length are a no-op.
pub(crate) fn for_each_row<T, F>(buf: &mut [T], row_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if buf.is_empty() || row_len == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        buf.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        buf.chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}
