//! chunklist: a persistent list with chunked copy-on-write append.
//!
//! [`ImmutableList`] never mutates. Appending one element rebuilds only the
//! spine of chunk handles; appending a whole collection stores it as a
//! single shared chunk, so bulk appends cost one allocation no matter how
//! many elements arrive. Cloning a list copies one reference-counted
//! pointer.
//!
//! ```
//! use chunklist::ImmutableList;
//!
//! let base: ImmutableList<i32> = vec![1, 2, 3].into();
//! let extended = base.append(vec![4, 5]).push(6);
//!
//! assert_eq!(base.len(), 3);
//! assert_eq!(extended.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```
//!
//! Lists are `Send + Sync` for `Send + Sync` elements and carry no interior
//! mutability, so a shared list can be derived from on many threads at once.

mod chunk;
mod iter;
mod list;
#[cfg(feature = "serde")]
mod serde_impl;

pub use iter::{IntoIter, Iter};
pub use list::ImmutableList;
