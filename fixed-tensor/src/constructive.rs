use super::*;
use crate::layout::{row_major_strides, validate_shape};
use crate::root::exact_root;

impl<T, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Extent of every axis when the shape is inferred from the size alone.
    /// Evaluating it for a size which is not an exact `R`-th power fails the build.
    ///
    /// ```
    /// use fixed_tensor::Tensor;
    ///
    /// assert_eq!(Tensor::<f32, 3, 27>::UNIFORM_EXTENT, 3);
    /// assert_eq!(Tensor::<f32, 0, 1>::UNIFORM_EXTENT, 1);
    /// ```
    pub const UNIFORM_EXTENT: usize = match exact_root(S, R) {
        Some(extent) => extent,
        None => panic!(
            "tensor size must be an exact power of the tensor rank, hint: provide the shape explicitly"
        ),
    };

    /// Wraps a storage, giving every axis the same extent.
    pub fn from_storage(storage: Storage<T, S>) -> Self {
        let shape = [Self::UNIFORM_EXTENT; R];
        Self {
            storage,
            strides: row_major_strides(&shape),
            shape,
        }
    }

    /// Wraps a storage with an explicit shape, which must have `R` axes holding `S` elements.
    pub fn from_storage_with_shape(storage: Storage<T, S>, shape: &[usize]) -> Result<Self> {
        let shape = validate_shape::<R, S>(shape)?;
        Ok(Self {
            storage,
            strides: row_major_strides(&shape),
            shape,
        })
    }
}

impl<T: Element, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Creates a zero-filled tensor with equal extents on every axis.
    ///
    /// ```
    /// use fixed_tensor::Tensor;
    ///
    /// let tensor = Tensor::<i32, 2, 9>::new();
    /// assert_eq!(tensor.shape(), &[3, 3]);
    /// ```
    ///
    /// Six elements cannot be split evenly over two axes:
    ///
    /// ```compile_fail
    /// use fixed_tensor::Tensor;
    ///
    /// const _: usize = Tensor::<i32, 2, 6>::UNIFORM_EXTENT;
    /// let _ = Tensor::<i32, 2, 6>::new();
    /// ```
    pub fn new() -> Self {
        Self::from_storage(Storage::zeroed())
    }

    /// Creates a tensor with equal extents on every axis, filled with `value`.
    pub fn filled(value: T) -> Self {
        Self::from_storage(Storage::filled(value))
    }

    /// Creates a zero-filled tensor with the given shape.
    pub fn with_shape(shape: &[usize]) -> Result<Self> {
        Self::from_storage_with_shape(Storage::zeroed(), shape)
    }

    /// Creates a tensor with the given shape, filled with `value`.
    pub fn with_shape_filled(shape: &[usize], value: T) -> Result<Self> {
        Self::from_storage_with_shape(Storage::filled(value), shape)
    }

    /// Copies row-major `data` into a tensor with the given shape.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        Self::from_storage_with_shape(Storage::from_slice(&data)?, shape)
    }
}

impl<T: Element, const R: usize, const S: usize> Default for Tensor<T, R, S> {
    fn default() -> Self {
        Self::new()
    }
}
