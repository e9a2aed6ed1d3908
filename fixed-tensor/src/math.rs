use super::*;
use crate::layout::{ravel, row_major_strides, unravel};
use log::{debug, warn};

impl<T: Element, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Multiplies two tensors of the same shape element by element.
    /// Returns an error if the shapes differ.
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.hadamard_with(other, &ParallelConfig::default())
    }

    /// Same as [`Tensor::hadamard`] with an explicit parallel configuration.
    pub fn hadamard_with(&self, other: &Self, config: &ParallelConfig) -> Result<Self> {
        if self.shape != other.shape {
            return Err(TensorError::Logic(format!(
                "Hadamard product requires equal shapes, but got {:?} and {:?}",
                self.shape, other.shape
            )));
        }

        let mut result = self.clone();
        result.zip_apply(other, config, |a, b| *a = *a * *b);
        Ok(result)
    }

    /// Generalized (Kronecker-style) product of tensors with different ranks.
    ///
    /// Not supported: always returns [`TensorError::UnsupportedOperation`].
    ///
    /// ```
    /// use fixed_tensor::{Tensor, TensorError};
    ///
    /// let a = Tensor::<i32, 1, 2>::new();
    /// let b = Tensor::<i32, 2, 4>::new();
    /// let result = a.product::<2, 4, 8>(&b);
    /// assert!(matches!(result, Err(TensorError::UnsupportedOperation(_))));
    /// ```
    ///
    /// The output size must be the product of both sizes:
    ///
    /// ```compile_fail
    /// use fixed_tensor::Tensor;
    ///
    /// const _: () = Tensor::<i32, 1, 2>::assert_product_size::<2, 4, 6>();
    /// let a = Tensor::<i32, 1, 2>::new();
    /// let _ = a.product::<2, 4, 6>(&Tensor::new());
    /// ```
    pub fn product<const R2: usize, const S2: usize, const SO: usize>(
        &self,
        _other: &Tensor<T, R2, S2>,
    ) -> Result<Tensor<T, R, SO>> {
        Self::assert_product_size::<R2, S2, SO>();

        warn!("generalized product requested for ranks {R} and {R2}");
        Err(TensorError::UnsupportedOperation(format!(
            "Generalized product of rank {R} and rank {R2} tensors is not implemented"
        )))
    }

    /// Transpose the tensor by swapping two axes.
    /// Returns a new tensor with the specified axes swapped and the elements physically moved to match
    /// the new row-major layout. Swapping an axis with itself returns a copy.
    /// Returns an error if an axis is out of range.
    pub fn transpose(&self, axis_a: usize, axis_b: usize) -> Result<Self> {
        if axis_a >= R || axis_b >= R {
            return Err(TensorError::OutOfRange(format!(
                "Invalid axes for transpose: {axis_a} and {axis_b} with rank {R}"
            )));
        }

        if axis_a == axis_b {
            return Ok(self.clone());
        }

        let mut shape = self.shape;
        shape.swap(axis_a, axis_b);
        let strides = row_major_strides(&shape);

        // every destination cell is written exactly once, so the copy only provides the allocation
        let mut storage = self.storage.clone();
        for (offset, value) in self.storage.iter().enumerate() {
            let mut index = unravel(offset, &self.shape, &self.strides);
            index.swap(axis_a, axis_b);
            storage[ravel(&index, &strides)] = *value;
        }

        debug!(
            "transposed axes {axis_a} and {axis_b}: {:?} -> {shape:?}",
            self.shape
        );

        Ok(Tensor {
            storage,
            shape,
            strides,
        })
    }
}

impl<T, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Fails the build unless `SO == S * S2`.
    pub const fn assert_product_size<const R2: usize, const S2: usize, const SO: usize>() {
        const { assert!(SO == S * S2, "product size must be the product of both sizes") };
    }
}

impl<T: Element + Accumulate, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Sums all elements with the storage's unsigned accumulator, see [`Storage::sum`].
    pub fn sum(&self) -> T {
        self.storage.sum()
    }

    /// Multiplies all elements with the storage's unsigned accumulator, see [`Storage::product`].
    pub fn product_of_elements(&self) -> T {
        self.storage.product()
    }
}
