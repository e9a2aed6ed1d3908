//! A fixed-length buffer of elements which lives on the heap.
//!
//! The length `N` is part of the type, so a [`Storage`] can never grow or shrink after construction.

use num_traits::Zero;
use std::fmt;
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Errors reported by [`Storage`] operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("index {index} is out of range for storage of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("expected {expected} elements, but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Owns exactly `N` elements of type `T` in one contiguous heap allocation.
///
/// All single element access through [`Storage::get`], [`Storage::get_mut`], [`Storage::set`] and the
/// index operators is bounds checked.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Storage<T, const N: usize> {
    // invariant: data.len() == N
    data: Box<[T]>,
}

impl<T: Clone, const N: usize> Storage<T, N> {
    /// Creates a storage with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: vec![value; N].into_boxed_slice(),
        }
    }

    /// Copies elements from a contiguous sequence which must hold exactly `N` elements.
    pub fn from_slice(values: &[T]) -> Result<Self, StorageError> {
        if values.len() != N {
            return Err(StorageError::LengthMismatch {
                expected: N,
                actual: values.len(),
            });
        }

        Ok(Self {
            data: values.to_vec().into_boxed_slice(),
        })
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Zero + Clone, const N: usize> Storage<T, N> {
    /// Creates a zero-filled storage.
    pub fn zeroed() -> Self {
        Self::filled(T::zero())
    }

    /// Shorthand for `fill(0)`.
    pub fn zero(&mut self) {
        self.fill(T::zero());
    }
}

impl<T, const N: usize> Storage<T, N> {
    /// Takes ownership of an array with matching length.
    pub fn from_array(values: [T; N]) -> Self {
        Self {
            data: Vec::from(values).into_boxed_slice(),
        }
    }

    /// Returns the number of elements, always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the storage holds no elements.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, StorageError> {
        self.data
            .get(index)
            .ok_or(StorageError::IndexOutOfRange { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, StorageError> {
        self.data
            .get_mut(index)
            .ok_or(StorageError::IndexOutOfRange { index, len: N })
    }

    /// Replaces the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), StorageError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

/// Element types which can be folded into the unsigned 64-bit accumulator used by [`Storage::sum`] and
/// [`Storage::product`].
///
/// Integers are converted to `u64` and combined with wrapping arithmetic. Floating point values are
/// combined in their own arithmetic with the accumulator converted to `Self`, and only the intermediate
/// result is truncated back into the accumulator.
pub trait Accumulate: Copy {
    fn accumulate_add(acc: u64, value: Self) -> u64;

    fn accumulate_mul(acc: u64, value: Self) -> u64;

    fn from_accumulator(acc: u64) -> Self;
}

macro_rules! impl_integer_accumulate {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                fn accumulate_add(acc: u64, value: Self) -> u64 {
                    acc.wrapping_add(value as u64)
                }

                fn accumulate_mul(acc: u64, value: Self) -> u64 {
                    acc.wrapping_mul(value as u64)
                }

                fn from_accumulator(acc: u64) -> Self {
                    acc as $t
                }
            }
        )*
    };
}

macro_rules! impl_float_accumulate {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                fn accumulate_add(acc: u64, value: Self) -> u64 {
                    ((acc as $t) + value) as u64
                }

                fn accumulate_mul(acc: u64, value: Self) -> u64 {
                    ((acc as $t) * value) as u64
                }

                fn from_accumulator(acc: u64) -> Self {
                    acc as $t
                }
            }
        )*
    };
}

impl_integer_accumulate!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_accumulate!(f32, f64);

impl<T: Accumulate, const N: usize> Storage<T, N> {
    /// Sums all elements.
    ///
    /// The running total is an unsigned 64-bit integer whatever `T` is, see [`Accumulate`]. Fractional
    /// parts of intermediate float totals are dropped and negative totals wrap or clamp to zero.
    pub fn sum(&self) -> T {
        let acc = self
            .data
            .iter()
            .fold(0, |acc, &value| T::accumulate_add(acc, value));
        T::from_accumulator(acc)
    }

    /// Multiplies all elements, using the same unsigned accumulator as [`Storage::sum`].
    pub fn product(&self) -> T {
        let acc = self
            .data
            .iter()
            .fold(1, |acc, &value| T::accumulate_mul(acc, value));
        T::from_accumulator(acc)
    }
}

impl<T: fmt::Display, const N: usize> Storage<T, N> {
    /// Prints the elements separated by single spaces, followed by a newline.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<T: Zero + Clone, const N: usize> Default for Storage<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const N: usize> From<[T; N]> for Storage<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T, const N: usize> Index<usize> for Storage<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Storage<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Storage<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Storage<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() -> Result<(), StorageError> {
        let zeros = Storage::<i32, 4>::zeroed();
        assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(zeros, Storage::default());

        let sevens = Storage::<f32, 3>::filled(7.0);
        assert_eq!(sevens.as_slice(), &[7.0, 7.0, 7.0]);

        let copied = Storage::<u8, 3>::from_slice(&[1, 2, 3])?;
        assert_eq!(copied, Storage::from([1, 2, 3]));

        let cloned = copied.clone();
        assert_eq!(cloned.as_slice(), copied.as_slice());
        assert_eq!(cloned.len(), 3);
        assert!(!cloned.is_empty());

        Ok(())
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        assert_eq!(
            Storage::<i32, 3>::from_slice(&[1, 2]),
            Err(StorageError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_bounds_checked_access() -> Result<(), StorageError> {
        let mut storage = Storage::<i64, 3>::zeroed();
        storage.set(2, 9)?;
        *storage.get_mut(0)? = 4;
        storage[1] = 5;

        assert_eq!(*storage.get(0)?, 4);
        assert_eq!(storage[1], 5);
        assert_eq!(storage[2], 9);

        assert_eq!(
            storage.get(3),
            Err(StorageError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(storage.set(10, 1).is_err());

        Ok(())
    }

    #[test]
    #[should_panic(expected = "index 5 is out of range for storage of length 2")]
    fn test_index_operator_panics_out_of_range() {
        let storage = Storage::<i32, 2>::zeroed();
        let _ = storage[5];
    }

    #[test]
    fn test_fill_and_zero() {
        let mut storage = Storage::<f64, 4>::zeroed();
        storage.fill(2.5);
        assert!(storage.iter().all(|&v| v == 2.5));

        storage.zero();
        assert!(storage.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_integer_reductions() {
        let storage = Storage::from([1_i32, 2, 3, 4]);
        assert_eq!(storage.sum(), 10);
        assert_eq!(storage.product(), 24);

        let signed = Storage::from([-2_i32, 3]);
        assert_eq!(signed.sum(), 1);
        assert_eq!(signed.product(), -6);
    }

    #[test]
    fn test_reductions_use_unsigned_accumulator() {
        // each intermediate float total loses its fractional part
        let floats = Storage::<f32, 3>::filled(1.5);
        assert_eq!(floats.sum(), 3.0);

        let floats = Storage::from([2.5_f64, 2.5]);
        assert_eq!(floats.product(), 5.0);

        let floats = Storage::from([0.5_f64, 4.0, 3.0]);
        assert_eq!(floats.product(), 0.0);

        let floats = Storage::from([3.0_f64, -0.5]);
        assert_eq!(floats.sum(), 2.0);

        // the accumulator result is truncated back into the element type
        let bytes = Storage::from([200_u8, 100]);
        assert_eq!(bytes.sum(), 44);
    }

    #[test]
    fn test_display() {
        let storage = Storage::from([1, 2, 3]);
        assert_eq!(storage.to_string(), "1 2 3");

        let empty = Storage::<i32, 0>::zeroed();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
    }
}
