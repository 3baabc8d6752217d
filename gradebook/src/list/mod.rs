/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Node-based sequence containers.
//!
//! Two lists with the same positional API but different cost profiles:
//!
//! | Operation | [`SinglyLinkedList`] | [`DoublyLinkedList`] |
//! |---|---|---|
//! | `push_back` | O(n) – walks to the end, no cached tail | O(1) – cached tail |
//! | `push_front` | O(1) | O(1) |
//! | `get(i)` | O(i) from the head | O(min(i, n − i)) – walks from the nearer end |
//! | `remove_at(i)` | O(i) | O(min(i, n − i)) to locate, O(1) to unlink |
//! | `pop_front` / `pop_back` | O(1) / – | O(1) / O(1) |
//! | `len` / `is_empty` | O(1) | O(1) |
//!
//! # Bounds contract
//! Positional reads (`get`, `get_mut`) return `None` when the index is out of
//! range so callers can probe freely.  Positional removals return the removed
//! value as `Option<T>`; `None` means nothing was removed and the list is
//! unchanged.  Only [`insert_at`](SinglyLinkedList::insert_at) reports a
//! [`ListError`], because silently dropping the value would lose data.
//!
//! Neither list knows anything about the values it stores: identity and
//! equality (e.g. matching a student by key) are the caller's business and are
//! expressed through the predicates passed to `remove_where` / `position`.

pub mod doubly;
pub mod singly;

pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;

use std::fmt;

use thiserror::Error;

/// Error returned by structural insertions at an explicit position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// `index` was outside `0..=len`.
    #[error("index {index} out of bounds for insertion into list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Writes `[a, b, c]` for any iterator of displayable values.
///
/// Shared by the `Display` impls of both lists.
pub(crate) fn fmt_sequence<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
