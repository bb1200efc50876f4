//! SinglyLinkedList: positional singly linked list with a sentinel head
//!
//! Every positional operation walks the chain from the sentinel, locating the
//! node *before* the position it edits; the permanent dummy head means the
//! front of the list needs no special casing. The length is deliberately not
//! cached: `len` counts by traversal, in contrast to the O(1) length of the
//! array-backed containers.

use crate::containers::chain::{ChainIter, SentinelChain, NIL, SENTINEL};
use crate::error::{CorralError, Result};
use std::fmt;

/// Singly linked list with index-based access.
///
/// Nodes live in an internal arena behind a permanent sentinel head.
/// `push_front` is O(1); `push_back` and the index-based operations are O(n)
/// traversals, as is `len`.
///
/// # Examples
///
/// ```rust
/// use corral::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(1);
/// list.push_back(3);
/// list.insert(1, 2)?;
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert_eq!(list.find(&3), Some(2));
/// assert_eq!(list.remove(0)?, 1);
/// # Ok::<(), corral::CorralError>(())
/// ```
pub struct SinglyLinkedList<T> {
    chain: SentinelChain<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            chain: SentinelChain::new(),
        }
    }

    /// Append a value at the end of the list. O(n): walks to the last node.
    pub fn push_back(&mut self, value: T) {
        let mut last = SENTINEL;
        loop {
            let next = self.chain.next(last);
            if next == NIL {
                break;
            }
            last = next;
        }
        self.chain.insert_after(last, value);
    }

    /// Prepend a value at the front of the list. O(1).
    pub fn push_front(&mut self, value: T) {
        self.chain.insert_after(SENTINEL, value);
    }

    /// Insert `value` at position `index`; `index == len` appends.
    /// Out-of-range error if `index > len`. O(n).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let prev = self.prev_for(index)?;
        self.chain.insert_after(prev, value);
        Ok(())
    }

    /// Remove and return the element at `index`; out-of-range error if
    /// `index >= len`. O(n).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let prev = self.prev_for(index)?;
        // Nothing after `prev` means `index` is exactly the current length.
        self.chain
            .remove_after(prev)
            .ok_or_else(|| CorralError::out_of_range(index, index))
    }

    /// Borrow the element at `index`; out-of-range error if `index >= len`.
    /// O(n).
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_for(index)?;
        Ok(self.chain.value(node))
    }

    /// Mutably borrow the element at `index`; out-of-range error if
    /// `index >= len`. O(n).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node_for(index)?;
        Ok(self.chain.value_mut(node))
    }

    /// Position of the first element equal to `value`, or `None` if absent.
    /// O(n).
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Number of elements. O(n): counted by walking the chain; the length is
    /// deliberately not cached.
    pub fn len(&self) -> usize {
        self.chain.count()
    }

    /// Check if the list is empty. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_chain_empty()
    }

    /// Iterate over the elements front to back
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            inner: self.chain.iter(),
        }
    }

    /// Copy the elements into a `Vec` front to back
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Node holding position `index`, or out-of-range (with the walked
    /// length) if the chain is shorter.
    fn node_for(&self, index: usize) -> Result<u32> {
        let mut idx = self.chain.next(SENTINEL);
        let mut pos = 0;
        while idx != NIL {
            if pos == index {
                return Ok(idx);
            }
            idx = self.chain.next(idx);
            pos += 1;
        }
        Err(CorralError::out_of_range(index, pos))
    }

    /// Node before position `index` (the sentinel for 0), or out-of-range
    /// when fewer than `index` elements exist.
    fn prev_for(&self, index: usize) -> Result<u32> {
        let mut prev = SENTINEL;
        let mut pos = 0;
        while pos < index {
            let next = self.chain.next(prev);
            if next == NIL {
                return Err(CorralError::out_of_range(index, pos));
            }
            prev = next;
            pos += 1;
        }
        Ok(prev)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut cursor = SENTINEL;
        for value in iter {
            cursor = list.chain.insert_after(cursor, value);
        }
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = SENTINEL;
        loop {
            let next = self.chain.next(cursor);
            if next == NIL {
                break;
            }
            cursor = next;
        }
        for value in iter {
            cursor = self.chain.insert_after(cursor, value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a list's elements front to back.
pub struct ListIter<'a, T> {
    inner: ChainIter<'a, T>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
}
