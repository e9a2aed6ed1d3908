use super::*;
use log::debug;

impl<T, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Fails the build when a slice of rank `R2` and size `S2` cannot be taken from this tensor.
    pub const fn assert_slice_fits<const R2: usize, const S2: usize>() {
        const {
            assert!(R2 <= R, "slice rank must not exceed the tensor rank");
            assert!(S2 <= S, "slice size must not exceed the tensor size");
        };
    }
}

impl<T: Element, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Copies every `step`-th element of the flat range `start..end` into a new tensor of rank `R2` whose
    /// shape is inferred from `S2`. The multi-dimensional shape of `self` plays no role.
    ///
    /// The range must satisfy `start < end <= S`, `step` must be positive and divide `end - start`, and
    /// the selection must hold exactly `S2` elements.
    ///
    /// ```
    /// use fixed_tensor::Tensor;
    ///
    /// let tensor = Tensor::<i32, 2, 16>::from_vec((0..16).collect(), &[4, 4])?;
    /// let slice = tensor.slice::<2, 4>(1, 9, 2)?;
    /// assert_eq!(slice.shape(), &[2, 2]);
    /// assert_eq!(slice.as_slice(), &[1, 3, 5, 7]);
    /// # Ok::<(), fixed_tensor::TensorError>(())
    /// ```
    ///
    /// A slice can neither have more axes nor more elements than its source:
    ///
    /// ```compile_fail
    /// use fixed_tensor::Tensor;
    ///
    /// const _: () = Tensor::<i32, 1, 4>::assert_slice_fits::<2, 4>();
    /// let tensor = Tensor::<i32, 1, 4>::new();
    /// let _ = tensor.slice::<2, 4>(0, 4, 1);
    /// ```
    ///
    /// ```compile_fail
    /// use fixed_tensor::Tensor;
    ///
    /// const _: () = Tensor::<i32, 2, 4>::assert_slice_fits::<1, 8>();
    /// let tensor = Tensor::<i32, 2, 4>::new();
    /// let _ = tensor.slice::<1, 8>(0, 8, 1);
    /// ```
    pub fn slice<const R2: usize, const S2: usize>(
        &self,
        start: usize,
        end: usize,
        step: usize,
    ) -> Result<Tensor<T, R2, S2>> {
        let storage = self.gather::<R2, S2>(start, end, step)?;
        Ok(Tensor::from_storage(storage))
    }

    /// Same as [`Tensor::slice`], but with an explicit shape for the resulting tensor.
    pub fn slice_with_shape<const R2: usize, const S2: usize>(
        &self,
        start: usize,
        end: usize,
        step: usize,
        shape: &[usize],
    ) -> Result<Tensor<T, R2, S2>> {
        let storage = self.gather::<R2, S2>(start, end, step)?;
        Tensor::from_storage_with_shape(storage, shape)
    }

    fn gather<const R2: usize, const S2: usize>(
        &self,
        start: usize,
        end: usize,
        step: usize,
    ) -> Result<Storage<T, S2>> {
        Self::assert_slice_fits::<R2, S2>();

        if start >= S || end > S || start >= end {
            return Err(TensorError::OutOfRange(format!(
                "Invalid slice range {start}..{end} for tensor of size {S}"
            )));
        }
        if step == 0 {
            return Err(TensorError::InvalidArgument(
                "Slice step must be positive".to_string(),
            ));
        }
        if (end - start) % step != 0 {
            return Err(TensorError::InvalidArgument(format!(
                "Slice range {start}..{end} is not divisible by step {step}"
            )));
        }

        let count = (end - start) / step;
        if count != S2 {
            return Err(TensorError::Logic(format!(
                "Slice {start}..{end} with step {step} selects {count} elements, but the result holds {S2}"
            )));
        }

        debug!("slicing {start}..{end} step {step} from tensor {:?}", self.shape);

        let values = self.storage.as_slice()[start..end]
            .iter()
            .step_by(step)
            .copied()
            .collect::<Vec<_>>();

        Ok(Storage::from_slice(&values)?)
    }
}
