//! Fixed-capacity circular queues: modulo and power-of-two variants
//!
//! A ring buffer with one slot permanently sacrificed, so `full` and `empty`
//! stay distinguishable from the cursors alone: a queue of physical capacity
//! C holds at most C-1 elements. Two variants differ only in how a cursor is
//! mapped into the buffer:
//!
//! - [`RingQueue`] keeps the caller's exact capacity and maps with `%`;
//!   its cursors are bounded, wrapping at the capacity.
//! - [`Pow2RingQueue`] rounds the capacity up to a power of two and maps
//!   with a bitwise AND against `capacity - 1`; its cursors are raw
//!   monotonically increasing counters.
//!
//! For equal capacities the two are observably identical; only the cost of
//! the index mapping differs.

use crate::error::{CorralError, Result};
use std::fmt;
use std::mem::MaybeUninit;

/// Round `capacity` up to the next power of two.
pub(crate) fn next_pow2(capacity: usize) -> usize {
    if capacity <= 1 {
        return 1;
    }
    // Fast power-of-2 check: (n & (n-1)) == 0
    if (capacity & (capacity - 1)) == 0 {
        return capacity;
    }
    // Round up by smearing the high bit rightward
    let mut n = capacity - 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    n |= n >> 32;
    n + 1
}

fn uninit_buffer<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    std::iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect()
}

/// Fixed-capacity FIFO ring buffer with modulo index mapping.
///
/// `head` and `tail` are bounded cursors in `[0, capacity)`. The slot before
/// `head` is kept empty, so a queue built with capacity C accepts at most
/// C-1 elements; `enqueue` on a full queue reports an overflow error and
/// leaves the queue untouched.
///
/// # Examples
///
/// ```rust
/// use corral::RingQueue;
///
/// let mut queue = RingQueue::with_capacity(4);
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// queue.enqueue(3)?;
/// assert!(queue.is_full());
/// assert_eq!(queue.dequeue()?, 1);
/// queue.enqueue(4)?;
/// assert_eq!(queue.to_vec(), vec![2, 3, 4]);
/// # Ok::<(), corral::CorralError>(())
/// ```
pub struct RingQueue<T> {
    buf: Box<[MaybeUninit<T>]>,
    head: usize,
    tail: usize,
}

impl<T> RingQueue<T> {
    /// Create a queue with the given physical capacity (`capacity - 1`
    /// usable slots).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be at least 1");
        Self {
            buf: uninit_buffer(capacity),
            head: 0,
            tail: 0,
        }
    }

    /// Physical capacity of the backing buffer
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Usable slot count: one less than the physical capacity
    #[inline]
    pub fn effective_capacity(&self) -> usize {
        self.capacity() - 1
    }

    /// Number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        (self.tail + self.capacity() - self.head) % self.capacity()
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True when one more enqueue would collide with the sacrificed slot
    #[inline]
    pub fn is_full(&self) -> bool {
        (self.tail + 1) % self.capacity() == self.head
    }

    /// Append a value at the back; overflow error when full.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(CorralError::overflow(self.capacity()));
        }
        self.buf[self.tail].write(value);
        self.tail = (self.tail + 1) % self.capacity();
        Ok(())
    }

    /// Remove and return the front value; underflow error when empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(CorralError::underflow("dequeue"));
        }
        // SAFETY: the queue is non-empty, so the slot at head is live.
        let value = unsafe { self.buf[self.head].assume_init_read() };
        self.head = (self.head + 1) % self.capacity();
        Ok(value)
    }

    /// Borrow the front value; underflow error when empty.
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(CorralError::underflow("front"));
        }
        // SAFETY: the queue is non-empty, so the slot at head is live.
        Ok(unsafe { self.buf[self.head].assume_init_ref() })
    }

    /// Iterate over the elements front to back
    pub fn iter(&self) -> RingIter<'_, T> {
        RingIter::new(&self.buf, self.head, self.len())
    }

    /// Copy the elements into a `Vec` in logical FIFO order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Drop all elements and reset the cursors
    pub fn clear(&mut self) {
        let cap = self.capacity();
        let mut idx = self.head;
        while idx != self.tail {
            // SAFETY: [head, tail) holds the live elements.
            unsafe { self.buf[idx].assume_init_drop() };
            idx = (idx + 1) % cap;
        }
        self.head = 0;
        self.tail = 0;
    }
}

impl<T> Drop for RingQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for RingQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for (i, value) in self.iter().enumerate() {
            copy.buf[i].write(value.clone());
        }
        copy.tail = self.len();
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Fixed-capacity FIFO ring buffer with power-of-two mask mapping.
///
/// The requested capacity is rounded up to the next power of two at
/// construction, and every cursor-to-slot mapping is `cursor & (capacity-1)`
/// instead of a modulo. `head` and `tail` are monotonically increasing
/// counters; their difference is the live count. Behavior is identical to
/// [`RingQueue`] at equal capacity, including the sacrificed slot.
///
/// # Examples
///
/// ```rust
/// use corral::Pow2RingQueue;
///
/// let mut queue = Pow2RingQueue::with_capacity(5); // rounds to 8
/// assert_eq!(queue.capacity(), 8);
/// assert_eq!(queue.effective_capacity(), 7);
/// queue.enqueue(1)?;
/// assert_eq!(queue.front()?, &1);
/// # Ok::<(), corral::CorralError>(())
/// ```
pub struct Pow2RingQueue<T> {
    buf: Box<[MaybeUninit<T>]>,
    mask: usize,
    head: usize,
    tail: usize,
}

impl<T> Pow2RingQueue<T> {
    /// Create a queue with at least the given capacity, rounded up to the
    /// next power of two (`capacity - 1` usable slots after rounding).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be at least 1");
        let capacity = next_pow2(capacity);
        Self {
            buf: uninit_buffer(capacity),
            mask: capacity - 1,
            head: 0,
            tail: 0,
        }
    }

    /// Physical capacity of the backing buffer (a power of two)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Usable slot count: one less than the physical capacity
    #[inline]
    pub fn effective_capacity(&self) -> usize {
        self.mask
    }

    /// Number of elements: the distance between the counters. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head)
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True when the live count has reached `capacity - 1`
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.mask
    }

    /// Append a value at the back; overflow error when full.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(CorralError::overflow(self.capacity()));
        }
        self.buf[self.tail & self.mask].write(value);
        self.tail = self.tail.wrapping_add(1);
        Ok(())
    }

    /// Remove and return the front value; underflow error when empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(CorralError::underflow("dequeue"));
        }
        // SAFETY: the queue is non-empty, so the slot at head is live.
        let value = unsafe { self.buf[self.head & self.mask].assume_init_read() };
        self.head = self.head.wrapping_add(1);
        Ok(value)
    }

    /// Borrow the front value; underflow error when empty.
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(CorralError::underflow("front"));
        }
        // SAFETY: the queue is non-empty, so the slot at head is live.
        Ok(unsafe { self.buf[self.head & self.mask].assume_init_ref() })
    }

    /// Iterate over the elements front to back
    pub fn iter(&self) -> RingIter<'_, T> {
        RingIter::new(&self.buf, self.head & self.mask, self.len())
    }

    /// Copy the elements into a `Vec` in logical FIFO order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Drop all elements and reset the counters
    pub fn clear(&mut self) {
        while self.head != self.tail {
            // SAFETY: counters between head and tail address live slots.
            unsafe { self.buf[self.head & self.mask].assume_init_drop() };
            self.head = self.head.wrapping_add(1);
        }
        self.head = 0;
        self.tail = 0;
    }
}

impl<T> Drop for Pow2RingQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Pow2RingQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for (i, value) in self.iter().enumerate() {
            copy.buf[i].write(value.clone());
        }
        copy.tail = self.len();
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for Pow2RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Pow2RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Borrowing iterator over a ring buffer's live range in FIFO order.
pub struct RingIter<'a, T> {
    buf: &'a [MaybeUninit<T>],
    pos: usize,
    remaining: usize,
}

impl<'a, T> RingIter<'a, T> {
    pub(crate) fn new(buf: &'a [MaybeUninit<T>], pos: usize, remaining: usize) -> Self {
        Self {
            buf,
            pos,
            remaining,
        }
    }
}

impl<'a, T> Iterator for RingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: the constructor points this at the live range.
        let value = unsafe { self.buf[self.pos].assume_init_ref() };
        self.pos = (self.pos + 1) % self.buf.len();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for RingIter<'a, T> {}
