/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Doubly-linked list backed by a slot arena.
//!
//! Nodes live in a `Vec` and refer to each other by slot index instead of by
//! pointer, which keeps the whole structure in safe Rust while preserving the
//! O(1) splice behaviour of a pointer-based list.  Vacated slots are recycled
//! through a free list.
//!
//! ```text
//!            head                          tail
//!             │                              │
//!             ▼                              ▼
//!   None ◄──┬────┬──►┌────┬──►┌────┬──►┌────┬──► None
//!           │ a  │   │ b  │   │ c  │   │ d  │
//!           └────┘◄──┴────┘◄──┴────┘◄──┴────┘
//! ```
//!
//! Invariants preserved by every operation:
//! * `head.is_none() == tail.is_none() == (len == 0)`;
//! * `head.prev` and `tail.next` are `None`;
//! * for every node `n` with a successor, `n.next.prev == n`, and for every
//!   node with a predecessor, `n.prev.next == n`;
//! * following `next` from `head` visits exactly `len` nodes.

use std::cmp::Ordering;
use std::fmt;

use super::fmt_sequence;

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked sequence over arbitrary values.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    /// Slot arena; `None` marks a vacant slot listed in `free`.
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of values in the list.  O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the list holds no values.  O(1).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ── Slot helpers ──────────────────────────────────────────────────────────

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.nodes.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(slot)?.as_mut()
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Detaches the node in `slot`, splicing its neighbours together, and
    /// returns its value.
    ///
    /// Covers the four structural cases (sole node, head, tail, interior)
    /// uniformly: a missing neighbour means the corresponding end pointer is
    /// moved instead.
    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.nodes.get_mut(slot)?.take()?;

        match node.prev {
            Some(prev) => {
                if let Some(p) = self.node_mut(prev) {
                    p.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(n) = self.node_mut(next) {
                    n.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(slot);
        self.len -= 1;
        Some(node.value)
    }

    /// Slot index of the node at `index`, walking from whichever end is
    /// nearer: from the head when `index < len / 2`, otherwise from the tail.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.node(slot)?.next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in index + 1..self.len {
                slot = self.node(slot)?.prev?;
            }
            Some(slot)
        }
    }

    /// Slot of the first node whose value matches `pred`.
    fn find_slot<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot)?;
            if pred(&node.value) {
                return Some(slot);
            }
            cursor = node.next;
        }
        None
    }

    /// Slot indices in list order.
    fn slot_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            order.push(slot);
            cursor = self.node(slot).and_then(|n| n.next);
        }
        order
    }

    /// Rewrites every `prev`/`next` link so the list follows `order`.
    fn relink(&mut self, order: &[usize]) {
        self.head = order.first().copied();
        self.tail = order.last().copied();
        for (pos, &slot) in order.iter().enumerate() {
            let prev = pos.checked_sub(1).map(|p| order[p]);
            let next = order.get(pos + 1).copied();
            if let Some(node) = self.node_mut(slot) {
                node.prev = prev;
                node.next = next;
            }
        }
    }

    // ── Insertion ─────────────────────────────────────────────────────────────

    /// Appends `value` after the tail.  O(1).
    pub fn push_back(&mut self, value: T) {
        let old_tail = self.tail;
        let slot = self.alloc(Node {
            value,
            prev: old_tail,
            next: None,
        });
        match old_tail.and_then(|t| self.node_mut(t)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Prepends `value` before the head.  O(1).
    pub fn push_front(&mut self, value: T) {
        let old_head = self.head;
        let slot = self.alloc(Node {
            value,
            prev: None,
            next: old_head,
        });
        match old_head.and_then(|h| self.node_mut(h)) {
            Some(head) => head.prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    // ── Removal ───────────────────────────────────────────────────────────────

    /// Removes and returns the value at `index`.
    ///
    /// Returns `None` and leaves the list unchanged when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let slot = self.slot_at(index)?;
        self.unlink(slot)
    }

    /// Removes and returns the first value.  O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let slot = self.head?;
        self.unlink(slot)
    }

    /// Removes and returns the last value.  O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        let slot = self.tail?;
        self.unlink(slot)
    }

    /// Removes the first value matching `pred`, in a single traversal.
    pub fn remove_where<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let slot = self.find_slot(pred)?;
        self.unlink(slot)
    }

    /// Drops every value and releases the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ── Access ────────────────────────────────────────────────────────────────

    /// Value at `index`, or `None` when out of range.
    ///
    /// Walks at most `len / 2` links.
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.slot_at(index)?;
        self.node(slot).map(|n| &n.value)
    }

    /// Mutable access to the value at `index`, or `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_at(index)?;
        self.node_mut(slot).map(|n| &mut n.value)
    }

    /// Mutable access to the first value matching `pred`.
    pub fn find_mut<F>(&mut self, pred: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let slot = self.find_slot(pred)?;
        self.node_mut(slot).map(|n| &mut n.value)
    }

    pub fn first(&self) -> Option<&T> {
        self.head.and_then(|s| self.node(s)).map(|n| &n.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.and_then(|s| self.node(s)).map(|n| &n.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // ── Ordering ──────────────────────────────────────────────────────────────

    /// Stable sort by `compare`.
    ///
    /// Values never move: the slot indices are sorted (a stable merge sort)
    /// and the links are rewritten to follow the new order, so values that
    /// compare equal keep their relative order.  O(n log n).
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }
        let mut order = self.slot_order();
        let nodes = &self.nodes;
        order.sort_by(|&a, &b| {
            match (
                nodes.get(a).and_then(Option::as_ref),
                nodes.get(b).and_then(Option::as_ref),
            ) {
                (Some(x), Some(y)) => compare(&x.value, &y.value),
                _ => Ordering::Equal,
            }
        });
        self.relink(&order);
    }

    /// `true` when adjacent values are non-decreasing under `compare`.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for value in iter {
            if compare(prev, value) == Ordering::Greater {
                return false;
            }
            prev = value;
        }
        true
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_sequence(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// ── Iterators ─────────────────────────────────────────────────────────────────

/// Borrowing iterator; walks forward from the head and backward from the
/// tail until the two ends meet.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator, head to tail.
pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
