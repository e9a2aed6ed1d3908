//! Elementwise kernels which split large tensors across the rayon thread pool.
//!
//! The destination is partitioned into contiguous chunks, each written by exactly one worker. Every cell is
//! assigned from its own previous value and the matching source cell, so no worker accumulates into memory
//! it did not initialize, and the results are identical to the sequential loop. Tensors below
//! [`ParallelConfig::min_parallel_size`] are processed on the calling thread.

use super::*;
use log::trace;
use rayon::prelude::*;

/// Configuration for parallel elementwise operations.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Minimum number of elements to use parallel processing (default: 65,536).
    pub min_parallel_size: usize,

    /// Number of chunks to partition into (None = size of the current rayon pool).
    pub num_threads: Option<usize>,

    /// Minimum number of elements in one chunk (default: 4,096).
    pub min_chunk_len: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_parallel_size: 1 << 16,
            num_threads: None,
            min_chunk_len: 1 << 12,
        }
    }
}

impl ParallelConfig {
    /// Sets the number of chunks the work is partitioned into.
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads.max(1));
        self
    }

    /// Sets the element count from which work is distributed.
    pub fn with_min_parallel_size(mut self, min_parallel_size: usize) -> Self {
        self.min_parallel_size = min_parallel_size;
        self
    }

    /// Sets the smallest chunk a single worker receives.
    pub fn with_min_chunk_len(mut self, min_chunk_len: usize) -> Self {
        self.min_chunk_len = min_chunk_len.max(1);
        self
    }

    fn get_num_threads(&self) -> usize {
        self.num_threads
            .unwrap_or_else(rayon::current_num_threads)
            .max(1)
    }

    fn get_chunk_len(&self, total_items: usize) -> usize {
        total_items
            .div_ceil(self.get_num_threads())
            .max(self.min_chunk_len)
            .max(1)
    }

    fn is_parallel(&self, total_items: usize) -> bool {
        total_items >= self.min_parallel_size && total_items > self.min_chunk_len
    }
}

fn zip_slices<T, F>(dst: &mut [T], src: &[T], config: &ParallelConfig, op: F)
where
    T: Send + Sync,
    F: Fn(&mut T, &T) + Send + Sync,
{
    debug_assert_eq!(dst.len(), src.len());

    if !config.is_parallel(dst.len()) {
        dst.iter_mut().zip(src).for_each(|(d, s)| op(d, s));
        return;
    }

    let chunk_len = config.get_chunk_len(dst.len());
    trace!("zipping {} elements in chunks of {chunk_len}", dst.len());

    dst.par_chunks_mut(chunk_len)
        .zip(src.par_chunks(chunk_len))
        .for_each(|(d, s)| d.iter_mut().zip(s).for_each(|(d, s)| op(d, s)));
}

fn map_slice<T, F>(dst: &mut [T], config: &ParallelConfig, op: F)
where
    T: Send + Sync,
    F: Fn(&mut T) + Send + Sync,
{
    if !config.is_parallel(dst.len()) {
        dst.iter_mut().for_each(op);
        return;
    }

    let chunk_len = config.get_chunk_len(dst.len());
    trace!("mapping {} elements in chunks of {chunk_len}", dst.len());

    dst.par_chunks_mut(chunk_len).for_each(|d| d.iter_mut().for_each(&op));
}

impl<T: Element, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Applies `op` to each element of `self` paired with the element at the same linear offset in `other`.
    /// Shapes are not compared.
    pub fn zip_apply<F>(&mut self, other: &Self, config: &ParallelConfig, op: F)
    where
        F: Fn(&mut T, &T) + Send + Sync,
    {
        zip_slices(self.storage.as_mut_slice(), other.storage.as_slice(), config, op);
    }

    /// Applies `op` to each element in place.
    pub fn map_apply<F>(&mut self, config: &ParallelConfig, op: F)
    where
        F: Fn(&mut T) + Send + Sync,
    {
        map_slice(self.storage.as_mut_slice(), config, op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forced() -> ParallelConfig {
        ParallelConfig::default()
            .with_min_parallel_size(0)
            .with_min_chunk_len(7)
            .with_threads(4)
    }

    #[test]
    fn test_chunking() {
        let config = forced();
        assert_eq!(config.get_chunk_len(100), 25);
        assert_eq!(config.get_chunk_len(10), 7);
        assert!(config.is_parallel(100));
        assert!(!config.is_parallel(7));

        let config = ParallelConfig::default();
        assert!(!config.is_parallel(1000));
        assert!(config.is_parallel(1 << 16));
    }

    #[test]
    fn test_parallel_matches_sequential() -> Result<()> {
        let values = (0..1000).map(|v| v as i64).collect::<Vec<_>>();
        let a = Tensor::<i64, 3, 1000>::from_vec(values.clone(), &[10, 10, 10])?;
        let reversed = values.iter().rev().copied().collect();
        let b = Tensor::<i64, 3, 1000>::from_vec(reversed, &[10, 10, 10])?;

        let mut sequential = a.clone();
        sequential.zip_apply(&b, &ParallelConfig::default(), |x, y| *x = *x * 3 - *y);

        let mut parallel = a.clone();
        parallel.zip_apply(&b, &forced(), |x, y| *x = *x * 3 - *y);

        assert_eq!(sequential, parallel);
        assert_eq!(parallel[0], -999);
        assert_eq!(parallel[999], 2997);

        Ok(())
    }

    #[test]
    fn test_map_apply() {
        let mut tensor = Tensor::<f64, 2, 10000>::filled(1.5);
        tensor.map_apply(&forced(), |v| *v *= 2.0);
        assert!(tensor.iter().all(|&v| v == 3.0));

        tensor.map_apply(&ParallelConfig::default(), |v| *v -= 1.0);
        assert!(tensor.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_large_tensor_uses_default_threshold() {
        let mut a = Tensor::<i32, 2, 262144>::filled(2);
        let b = Tensor::<i32, 2, 262144>::filled(5);
        a.zip_apply(&b, &ParallelConfig::default(), |x, y| *x += *y);
        assert!(a.iter().all(|&v| v == 7));
    }
}
