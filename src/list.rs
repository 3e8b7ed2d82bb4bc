//! Persistent list core.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::chunk::Chunk;
use crate::iter::{IntoIter, Iter};

/// A persistent list with chunked copy-on-write append.
///
/// Guarantees:
/// - No operation mutates an existing list; every "modifying" operation
///   returns a new list and leaves the receiver untouched.
/// - `clone` is O(1): lists share one reference-counted spine.
/// - `push` rebuilds only the spine (one handle per chunk), never elements.
/// - `append` materializes the incoming elements once, as a single chunk,
///   regardless of how many there are.
/// - `len` is O(1); the element count is cached at construction.
///
/// Because there is no interior mutability, a list shared across threads can
/// be read and derived from concurrently without coordination.
///
/// ```
/// use chunklist::ImmutableList;
///
/// let base = ImmutableList::single(1).append([2, 3, 4]);
/// let derived = base.push(5);
///
/// assert_eq!(base.to_vec(), vec![1, 2, 3, 4]);
/// assert_eq!(derived.to_vec(), vec![1, 2, 3, 4, 5]);
/// ```
pub struct ImmutableList<T> {
    spine: Arc<[Chunk<T>]>,
    len: usize,
}

impl<T> ImmutableList<T> {
    /// An empty list.
    pub fn new() -> Self {
        Self { spine: Vec::new().into(), len: 0 }
    }

    /// A one-element list.
    pub fn single(value: T) -> Self {
        Self { spine: vec![Chunk::Single(Arc::new(value))].into(), len: 1 }
    }

    /// A list holding a copy of `values` as one contiguous run.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        if values.is_empty() {
            return Self::new();
        }
        let run: Arc<[T]> = values.into();
        Self { len: run.len(), spine: vec![Chunk::Run(run)].into() }
    }

    /// Number of elements, counted across all chunks.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A new list with `value` appended. The receiver is unchanged.
    pub fn push(&self, value: T) -> Self {
        let mut spine = Vec::with_capacity(self.spine.len() + 1);
        spine.extend(self.spine.iter().cloned());
        spine.push(Chunk::Single(Arc::new(value)));
        Self { spine: spine.into(), len: self.len + 1 }
    }

    /// A new list with every element of `values` appended as one run chunk.
    ///
    /// An empty `values` adds no chunk and returns a list equal to `self`.
    pub fn append<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let run: Arc<[T]> = values.into_iter().collect();
        if run.is_empty() {
            return self.clone();
        }
        let mut spine = Vec::with_capacity(self.spine.len() + 1);
        spine.extend(self.spine.iter().cloned());
        let len = self.len + run.len();
        spine.push(Chunk::Run(run));
        Self { spine: spine.into(), len }
    }

    /// A new list holding the elements of `self` followed by those of
    /// `other`. Both inputs are unchanged; all chunks are shared.
    pub fn concat(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut spine = Vec::with_capacity(self.spine.len() + other.spine.len());
        spine.extend(self.spine.iter().cloned());
        spine.extend(other.spine.iter().cloned());
        Self { spine: spine.into(), len: self.len + other.len }
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let mut index = index;
        for chunk in self.spine.iter() {
            let chunk_len = chunk.len();
            if index < chunk_len {
                return chunk.as_slice().get(index);
            }
            index -= chunk_len;
        }
        None
    }

    /// Iterate over borrowed elements in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.spine, self.len)
    }

    /// Copy every element, in order, into a fresh `Vec`.
    ///
    /// Calling this any number of times yields the same vector; the list is
    /// never drained.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        for chunk in self.spine.iter() {
            out.extend_from_slice(chunk.as_slice());
        }
        out
    }
}

// Manual impl: sharing the spine must not require `T: Clone`.
impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        Self { spine: Arc::clone(&self.spine), len: self.len }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elementwise equality. Chunk boundaries are invisible: a list built as
/// `[1, 2] + [3]` equals one built as `[1] + [2, 3]`.
impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let run: Arc<[T]> = iter.into_iter().collect();
        if run.is_empty() {
            return Self::new();
        }
        Self { len: run.len(), spine: vec![Chunk::Run(run)].into() }
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(values: Vec<T>) -> Self {
        if values.is_empty() {
            return Self::new();
        }
        let run: Arc<[T]> = values.into();
        Self { len: run.len(), spine: vec![Chunk::Run(run)].into() }
    }
}

impl<T, const N: usize> From<[T; N]> for ImmutableList<T> {
    fn from(values: [T; N]) -> Self {
        Vec::from(values).into()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.to_vec())
    }
}
