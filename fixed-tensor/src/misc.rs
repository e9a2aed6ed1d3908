use super::*;
use std::fmt;

impl<T: PartialEq, const R: usize, const S: usize> PartialEq for Tensor<T, R, S> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.storage == other.storage
    }
}

impl<T: Eq, const R: usize, const S: usize> Eq for Tensor<T, R, S> {}

impl<T: fmt::Debug, const R: usize, const S: usize> fmt::Debug for Tensor<T, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("elements", &self.storage.as_slice())
            .finish()
    }
}
