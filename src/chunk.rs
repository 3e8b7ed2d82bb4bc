//! Spine segments for [`ImmutableList`](crate::ImmutableList).

use std::sync::Arc;

/// One segment of a list spine: a lone element or a contiguous run.
///
/// Both forms are reference counted, so cloning a chunk copies a handle,
/// never elements. This is what keeps spine rebuilds cheap: a derived list
/// re-uses every chunk of its parent.
#[derive(Debug)]
pub(crate) enum Chunk<T> {
    Single(Arc<T>),
    Run(Arc<[T]>),
}

impl<T> Chunk<T> {
    /// View the chunk's elements as one contiguous slice.
    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Chunk::Single(item) => std::slice::from_ref(item.as_ref()),
            Chunk::Run(run) => run,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Chunk::Single(_) => 1,
            Chunk::Run(run) => run.len(),
        }
    }
}

// Manual impl: a handle copy must not require `T: Clone`.
impl<T> Clone for Chunk<T> {
    fn clone(&self) -> Self {
        match self {
            Chunk::Single(item) => Chunk::Single(Arc::clone(item)),
            Chunk::Run(run) => Chunk::Run(Arc::clone(run)),
        }
    }
}
