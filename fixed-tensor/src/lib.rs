//! Library crate for fixed_tensor
//!

use num_traits::Num;
use std::fmt;

mod constructive;
mod display;
mod error;
mod iterator;
mod layout;
mod math;
mod misc;
mod ops;
pub mod parallel;
pub mod root;
mod slicing;
mod view;


pub use crate::error::TensorError;
pub use crate::iterator::IndexedIter;
pub use crate::parallel::ParallelConfig;
pub use fixed_storage::{Accumulate, Storage, StorageError};

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// Numeric element types which can be stored in a [`Tensor`].
pub trait Element: Copy + Send + Sync + Num + fmt::Display + fmt::Debug + 'static {}

impl<T> Element for T where T: Copy + Send + Sync + Num + fmt::Display + fmt::Debug + 'static {}

/// Represents a multi-dimensional tensor with element type `T`, rank `R` and a total of `S` elements.
/// Both rank and size are fixed at compile time, the shape is chosen at construction.
///
/// The tensor exclusively owns one contiguous [`Storage`] of `S` elements. The shape is kept in row-major
/// order together with its strides: the last axis varies fastest, `strides[R - 1] == 1` and every other
/// stride is the product of the extents after it. Shape and strides are only ever computed together.
///
/// Structural operations (slicing, reshaping, transposing) never share memory with the source tensor: each
/// of them produces a freshly allocated tensor.
///
/// # Compile time checks
/// Constructors which infer the shape from the size (e.g. [`Tensor::new`]) require `S` to be an exact
/// `R`-th power, and printing is limited to `R <= 3`. Violating either is reported when the offending
/// function is instantiated, not at runtime.
#[derive(Clone)]
pub struct Tensor<T, const R: usize, const S: usize> {
    storage: Storage<T, S>,
    shape: [usize; R],
    strides: [usize; R],
}
