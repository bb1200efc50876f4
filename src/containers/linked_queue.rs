//! LinkedQueue: FIFO over a sentinel chain with a tail reference
//!
//! The dummy head gives dequeue a fixed edit point (the node after the
//! sentinel); the tracked tail index gives enqueue one too. Both ends are
//! O(1). When a dequeue empties the chain the tail falls back to the
//! sentinel, so the next enqueue links in the right place.

use crate::containers::chain::{ChainIter, SentinelChain, NIL, SENTINEL};
use crate::error::{CorralError, Result};
use std::fmt;

/// FIFO queue over a sentinel-headed linked chain.
///
/// `enqueue` appends after the tracked tail; `dequeue` unlinks the node
/// after the sentinel. Both are O(1). `len` is O(n) by traversal; the count
/// is deliberately not cached.
///
/// # Examples
///
/// ```rust
/// use corral::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.front()?, &1);
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.dequeue()?, 2);
/// assert!(queue.dequeue().is_err());
/// # Ok::<(), corral::CorralError>(())
/// ```
pub struct LinkedQueue<T> {
    chain: SentinelChain<T>,
    /// Arena index of the last node; the sentinel when empty.
    tail: u32,
}

impl<T> LinkedQueue<T> {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            chain: SentinelChain::new(),
            tail: SENTINEL,
        }
    }

    /// Append a value at the back of the queue. O(1).
    pub fn enqueue(&mut self, value: T) {
        self.tail = self.chain.insert_after(self.tail, value);
    }

    /// Remove and return the front value; underflow error when empty. O(1).
    pub fn dequeue(&mut self) -> Result<T> {
        let value = self
            .chain
            .remove_after(SENTINEL)
            .ok_or_else(|| CorralError::underflow("dequeue"))?;
        if self.chain.is_chain_empty() {
            self.tail = SENTINEL;
        }
        Ok(value)
    }

    /// Borrow the front value; underflow error when empty. O(1).
    pub fn front(&self) -> Result<&T> {
        let first = self.chain.next(SENTINEL);
        if first == NIL {
            return Err(CorralError::underflow("front"));
        }
        Ok(self.chain.value(first))
    }

    /// Number of elements. O(n): counted by walking the chain; the count is
    /// deliberately not cached.
    pub fn len(&self) -> usize {
        self.chain.count()
    }

    /// Check if the queue is empty. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_chain_empty()
    }

    /// Iterate over the elements front to back
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            inner: self.chain.iter(),
        }
    }

    /// Copy the elements into a `Vec`, front first
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.chain.clear();
        self.tail = SENTINEL;
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        // The cloned arena preserves indices, so the tail carries over.
        Self {
            chain: self.chain.clone(),
            tail: self.tail,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for value in iter {
            queue.enqueue(value);
        }
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a queue's elements, front to back.
pub struct QueueIter<'a, T> {
    inner: ChainIter<'a, T>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
}
