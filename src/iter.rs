//! Iterators over [`ImmutableList`](crate::ImmutableList).

use std::iter::FusedIterator;
use std::slice;

use crate::chunk::Chunk;

/// Borrowing iterator over a list, in insertion order.
///
/// Run chunks are flattened, so chunk boundaries are invisible to callers.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    chunks: slice::Iter<'a, Chunk<T>>,
    current: slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(spine: &'a [Chunk<T>], remaining: usize) -> Self {
        Self { chunks: spine.iter(), current: [].iter(), remaining }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.current.next() {
                self.remaining -= 1;
                return Some(item);
            }
            self.current = self.chunks.next()?.as_slice().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator, yielding owned elements.
///
/// Elements live in shared chunks, so consuming a list clones them out;
/// the iteration order matches [`Iter`].
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self { inner: elements.into_iter() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
