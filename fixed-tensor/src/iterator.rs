use super::*;

impl<T, const R: usize, const S: usize> Tensor<T, R, S> {
    /// Returns an iterator over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Returns an iterator over `(multi-index, element)` pairs in row-major order.
    pub fn indexed_iter(&self) -> IndexedIter<'_, T, R, S> {
        IndexedIter {
            tensor: self,
            current_index: [0; R],
            offset: 0,
        }
    }
}

impl<'a, T, const R: usize, const S: usize> IntoIterator for &'a Tensor<T, R, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the elements of a tensor together with their multi-indices.
pub struct IndexedIter<'a, T, const R: usize, const S: usize> {
    tensor: &'a Tensor<T, R, S>,
    current_index: [usize; R],
    offset: usize,
}

impl<'a, T, const R: usize, const S: usize> Iterator for IndexedIter<'a, T, R, S> {
    type Item = ([usize; R], &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= S {
            return None;
        }

        let item = (self.current_index, &self.tensor.storage[self.offset]);
        self.offset += 1;

        // advance the index like an odometer, last axis first
        for axis in (0..R).rev() {
            self.current_index[axis] += 1;
            if self.current_index[axis] < self.tensor.shape[axis] {
                break;
            }
            self.current_index[axis] = 0;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = S - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T, const R: usize, const S: usize> ExactSizeIterator for IndexedIter<'_, T, R, S> {}
