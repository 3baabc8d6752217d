/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Singly-linked list with owned nodes.
//!
//! ```text
//! head ──► ┌───┬──►┌───┬──►┌───┬──► None
//!          │ a │   │ b │   │ c │
//!          └───┘   └───┘   └───┘
//! ```
//!
//! Invariant: `head.is_none() == (len == 0)`, and following `next` from
//! `head` visits exactly `len` nodes before reaching `None`.
//!
//! There is deliberately no cached tail: appending walks the whole chain.

use std::fmt;

use super::{fmt_sequence, ListError};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly-linked sequence over arbitrary values.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of values in the list.  O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the list holds no values.  O(1).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the link slot reached after walking `steps` nodes from the
    /// head, or the terminating `None` slot if the chain is shorter.
    ///
    /// `link_at(0)` is the head slot; `link_at(len)` is the tail's `next`.
    fn link_at(&mut self, steps: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..steps {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }

    /// Inserts `value` at the front.  O(1).
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Appends `value` after the last node.  O(n): the chain is walked from
    /// the head because no tail pointer is kept.
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        *self.link_at(len) = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] when `index > len`; the list is left
    /// untouched.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let slot = self.link_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at `index`, relinking its predecessor
    /// (or the head) to its successor.
    ///
    /// Returns `None` and leaves the list unchanged when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let slot = self.link_at(index);
        let mut node = slot.take()?;
        *slot = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the first value matching `pred`.
    pub fn remove_where<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.iter().position(pred)?;
        self.remove_at(index)
    }

    /// Keeps only the values for which `keep` returns `true`, in one pass.
    /// Returns how many values were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.len;
        let mut cursor = &mut self.head;
        while let Some(mut node) = cursor.take() {
            if keep(&node.value) {
                *cursor = Some(node);
                match cursor {
                    Some(kept) => cursor = &mut kept.next,
                    None => break,
                }
            } else {
                *cursor = node.next.take();
                self.len -= 1;
            }
        }
        before - self.len
    }

    /// Removes and returns the first value.  O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.value
        })
    }

    /// Value at `index`, or `None` when out of range.  O(index).
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Mutable access to the value at `index`, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative drop: the default recursive drop of a long `Box` chain can
// overflow the stack.
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Walks to the end once, then appends the whole batch.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        let mut added = 0;
        let mut slot = self.link_at(len);
        for value in iter {
            let node = slot.insert(Box::new(Node { value, next: None }));
            slot = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// ── Iterators ─────────────────────────────────────────────────────────────────

/// Borrowing iterator, head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator, head to tail.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Owning iterator, head to tail.
pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
