use super::*;
use crate::layout::ravel;
use log::debug;
use std::ops::{Index, IndexMut};

impl<T, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Returns the number of elements.
    pub const fn size(&self) -> usize {
        S
    }

    /// Returns the number of axes.
    pub const fn rank(&self) -> usize {
        R
    }

    pub fn shape(&self) -> &[usize; R] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize; R] {
        &self.strides
    }

    pub fn storage(&self) -> &Storage<T, S> {
        &self.storage
    }

    /// Returns the elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Consumes the tensor and returns its elements in row-major order.
    pub fn into_storage(self) -> Storage<T, S> {
        self.storage
    }

    // Linear offset of a multi-index, with every axis checked
    fn checked_offset(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != R {
            return Err(TensorError::InvalidArgument(format!(
                "Index rank mismatch: {} != {R}",
                indices.len()
            )));
        }

        let mut offset = 0;
        for (axis, &idx) in indices.iter().enumerate() {
            if idx >= self.shape[axis] {
                return Err(TensorError::OutOfRange(format!(
                    "Index {idx} out of range for axis {axis} with extent {}",
                    self.shape[axis]
                )));
            }
            offset += idx * self.strides[axis];
        }
        Ok(offset)
    }

    /// Gets the element at a multi-index, checking its length and every axis.
    pub fn get(&self, indices: &[usize]) -> Result<&T> {
        let offset = self.checked_offset(indices)?;
        Ok(self.storage.get(offset)?)
    }

    /// Mutable counterpart of [`Tensor::get`].
    pub fn get_mut(&mut self, indices: &[usize]) -> Result<&mut T> {
        let offset = self.checked_offset(indices)?;
        Ok(self.storage.get_mut(offset)?)
    }

    /// Gets the element at a linear offset, failing with [`TensorError::OutOfRange`] if `index >= S`.
    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= S {
            return Err(TensorError::OutOfRange(format!(
                "Index {index} out of range for tensor of size {S}"
            )));
        }
        Ok(self.storage.get(index)?)
    }

    /// Mutable counterpart of [`Tensor::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= S {
            return Err(TensorError::OutOfRange(format!(
                "Index {index} out of range for tensor of size {S}"
            )));
        }
        Ok(self.storage.get_mut(index)?)
    }
}

impl<T: Element, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Reinterprets the elements under a new shape with `R2` axes and the same size.
    /// Elements keep their linear order.
    pub fn reshape<const R2: usize>(&self, shape: &[usize]) -> Result<Tensor<T, R2, S>> {
        let reshaped = Tensor::from_storage_with_shape(self.storage.clone(), shape)?;
        debug!("reshaped tensor {:?} into {:?}", self.shape, reshaped.shape);
        Ok(reshaped)
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.storage.fill(value);
    }

    pub fn zero(&mut self) {
        self.storage.zero();
    }
}

/// Multi-index access. Individual axes are not checked: an index past the extent of an axis silently
/// addresses another element, only offsets beyond the storage panic.
impl<T, const R: usize, const S: usize> Index<[usize; R]> for Tensor<T, R, S> {
    type Output = T;

    fn index(&self, index: [usize; R]) -> &Self::Output {
        &self.storage[ravel(&index, &self.strides)]
    }
}

impl<T, const R: usize, const S: usize> IndexMut<[usize; R]> for Tensor<T, R, S> {
    fn index_mut(&mut self, index: [usize; R]) -> &mut Self::Output {
        &mut self.storage[ravel(&index, &self.strides)]
    }
}

/// Linear access into the row-major storage.
impl<T, const R: usize, const S: usize> Index<usize> for Tensor<T, R, S> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.storage[index]
    }
}

impl<T, const R: usize, const S: usize> IndexMut<usize> for Tensor<T, R, S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.storage[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_index_reads_linear_writes() {
        let mut tensor = Tensor::<f32, 3, 27>::new();
        tensor[0] = 1.0;
        tensor[1] = 2.0;
        tensor[2] = 3.0;

        assert_eq!(tensor[[0, 0, 0]], 1.0);
        assert_eq!(tensor[[0, 0, 1]], 2.0);
        assert_eq!(tensor[[0, 0, 2]], 3.0);

        tensor[[2, 1, 0]] = 9.0;
        assert_eq!(tensor[21], 9.0);
    }

    #[test]
    fn test_checked_get() -> Result<()> {
        let mut tensor = Tensor::<i32, 2, 6>::from_vec((0..6).collect(), &[2, 3])?;
        assert_eq!(*tensor.get(&[1, 2])?, 5);

        *tensor.get_mut(&[0, 1])? = 10;
        assert_eq!(tensor[[0, 1]], 10);

        assert!(matches!(
            tensor.get(&[0, 3]),
            Err(TensorError::OutOfRange(_))
        ));
        assert!(matches!(
            tensor.get(&[0]),
            Err(TensorError::InvalidArgument(_))
        ));
        assert!(matches!(
            tensor.get_mut(&[2, 0]),
            Err(TensorError::OutOfRange(_))
        ));

        Ok(())
    }

    #[test]
    fn test_multi_index_does_not_check_axes() -> Result<()> {
        let tensor = Tensor::<i32, 2, 6>::from_vec((0..6).collect(), &[2, 3])?;
        // [0, 4] wraps into the next row
        assert_eq!(tensor[[0, 4]], 4);
        Ok(())
    }

    #[test]
    fn test_at() -> Result<()> {
        let mut tensor = Tensor::<i32, 2, 4>::filled(3);
        *tensor.at_mut(3)? = 8;

        assert_eq!(*tensor.at(3)?, 8);
        assert_eq!(*tensor.at(0)?, 3);
        assert!(matches!(tensor.at(4), Err(TensorError::OutOfRange(_))));
        assert!(matches!(tensor.at_mut(100), Err(TensorError::OutOfRange(_))));

        Ok(())
    }

    #[test]
    fn test_accessors() -> Result<()> {
        let tensor = Tensor::<u8, 4, 24>::with_shape(&[1, 2, 3, 4])?;
        assert_eq!(tensor.size(), 24);
        assert_eq!(tensor.rank(), 4);
        assert_eq!(tensor.shape(), &[1, 2, 3, 4]);
        assert_eq!(tensor.strides(), &[24, 12, 4, 1]);
        assert_eq!(tensor.storage().len(), 24);
        assert_eq!(tensor.as_slice().len(), 24);

        let tensor = Tensor::<i32, 2, 4>::from_vec(vec![1, 2, 3, 4], &[2, 2])?;
        let storage = tensor.into_storage();
        assert_eq!(storage, Storage::from([1, 2, 3, 4]));

        Ok(())
    }

    #[test]
    fn test_reshape() -> Result<()> {
        let tensor =
            Tensor::<f32, 10, 10>::with_shape_filled(&[10, 1, 1, 1, 1, 1, 1, 1, 1, 1], 5.0)?;
        let reshaped = tensor.reshape::<2>(&[2, 5])?;
        assert_eq!(reshaped.shape(), &[2, 5]);
        assert_eq!(reshaped.strides(), &[5, 1]);
        assert!(reshaped.iter().all(|&v| v == 5.0));

        let tensor = Tensor::<i32, 2, 12>::from_vec((0..12).collect(), &[3, 4])?;
        let reshaped = tensor.reshape::<3>(&[2, 3, 2])?;
        assert_eq!(reshaped.as_slice(), tensor.as_slice());
        assert_eq!(reshaped[[1, 0, 1]], 7);

        Ok(())
    }

    #[test]
    fn test_reshape_errors() -> Result<()> {
        let tensor = Tensor::<i32, 2, 12>::with_shape(&[3, 4])?;

        assert!(matches!(
            tensor.reshape::<2>(&[2, 5]),
            Err(TensorError::InvalidArgument(_))
        ));
        assert!(matches!(
            tensor.reshape::<3>(&[3, 4]),
            Err(TensorError::InvalidArgument(_))
        ));

        Ok(())
    }

    #[test]
    fn test_fill_and_zero() {
        let mut tensor = Tensor::<f64, 2, 9>::new();
        tensor.fill(0.25);
        assert!(tensor.iter().all(|&v| v == 0.25));

        tensor.zero();
        assert!(tensor.iter().all(|&v| v == 0.0));
    }
}
