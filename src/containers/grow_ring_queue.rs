//! GrowRingQueue: circular queue that doubles capacity on demand
//!
//! Same ring discipline as the fixed queues (power-of-two capacity, bitwise
//! mask mapping, one sacrificed slot) but instead of refusing a full queue,
//! `enqueue` first doubles the backing store. The resize copies the live
//! elements into a fresh buffer in logical FIFO order, handling a wrapped
//! ring with a two-segment copy, and resets the cursors to `head = 0`,
//! `tail = len`. Capacity never shrinks, no matter how far the queue drains;
//! that is the chosen policy, not an oversight.

use crate::containers::ring_queue::{next_pow2, RingIter};
use crate::error::{CorralError, Result};
use std::alloc::{self, Layout};
use std::fmt;
use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

/// Growable FIFO ring buffer with power-of-two capacity.
///
/// `head` and `tail` are masked cursors and `len` tracks the live count, so
/// `len` is O(1). An enqueue that finds `len == capacity - 1` doubles the
/// capacity before inserting; every other operation is O(1).
///
/// # Examples
///
/// ```rust
/// use corral::GrowRingQueue;
///
/// let mut queue = GrowRingQueue::with_capacity(4);
/// for i in 0..5 {
///     queue.enqueue(i);
/// }
/// // The fifth enqueue grew the queue instead of overflowing.
/// assert_eq!(queue.capacity(), 8);
/// assert_eq!(queue.to_vec(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(queue.dequeue()?, 0);
/// # Ok::<(), corral::CorralError>(())
/// ```
pub struct GrowRingQueue<T> {
    buf: *mut T,
    capacity: usize,
    mask: usize,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> GrowRingQueue<T> {
    /// Capacity used by `new`.
    const DEFAULT_CAPACITY: usize = 8;

    /// Create a queue with the default capacity of 8
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a queue with at least the given capacity, rounded up to the
    /// next power of two.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be at least 1");
        let capacity = next_pow2(capacity);
        Self {
            buf: Self::allocate_buffer(capacity),
            capacity,
            mask: capacity - 1,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Current physical capacity (a power of two, never decreasing)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value at the back, doubling the capacity first when the live
    /// count has reached `capacity - 1`. Amortized O(1).
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.capacity - 1 {
            self.grow();
        }
        // SAFETY: after the growth check the slot at tail is free.
        unsafe {
            ptr::write(self.buf.add(self.tail), value);
        }
        self.tail = (self.tail + 1) & self.mask;
        self.len += 1;
    }

    /// Remove and return the front value; underflow error when empty. O(1).
    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(CorralError::underflow("dequeue"));
        }
        // SAFETY: the queue is non-empty, so the slot at head is live.
        let value = unsafe { ptr::read(self.buf.add(self.head)) };
        self.head = (self.head + 1) & self.mask;
        self.len -= 1;
        Ok(value)
    }

    /// Borrow the front value; underflow error when empty. O(1).
    pub fn front(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(CorralError::underflow("front"));
        }
        // SAFETY: the queue is non-empty, so the slot at head is live.
        Ok(unsafe { &*self.buf.add(self.head) })
    }

    /// Iterate over the elements front to back
    pub fn iter(&self) -> RingIter<'_, T> {
        // The raw buffer is slot-for-slot compatible with MaybeUninit view;
        // the iterator touches only the live range.
        let slots =
            unsafe { slice::from_raw_parts(self.buf as *const MaybeUninit<T>, self.capacity) };
        RingIter::new(slots, self.head, self.len)
    }

    /// Copy the elements into a `Vec` in logical FIFO order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Drop all elements and reset the cursors. Capacity is retained.
    pub fn clear(&mut self) {
        while self.len > 0 {
            // SAFETY: the slot at head is live.
            unsafe { ptr::drop_in_place(self.buf.add(self.head)) };
            self.head = (self.head + 1) & self.mask;
            self.len -= 1;
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Double the capacity, copying the live elements into a fresh buffer in
    /// FIFO order and resetting the cursors to `head = 0`, `tail = len`.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let new_capacity = self.capacity << 1;
        let new_buf = Self::allocate_buffer(new_capacity);

        if self.len > 0 {
            // SAFETY: source and destination do not overlap; the live range
            // is [head, head+len) modulo the old capacity.
            unsafe {
                if self.head < self.tail {
                    ptr::copy_nonoverlapping(self.buf.add(self.head), new_buf, self.len);
                } else {
                    // Wrapped: the segment from head to the physical end,
                    // then the prefix up to tail.
                    let first_part = self.capacity - self.head;
                    ptr::copy_nonoverlapping(self.buf.add(self.head), new_buf, first_part);
                    ptr::copy_nonoverlapping(self.buf, new_buf.add(first_part), self.tail);
                }
            }
        }
        // SAFETY: the old buffer came from allocate_buffer at the old size.
        unsafe { Self::deallocate_buffer(self.buf, self.capacity) };

        log::trace!(
            "GrowRingQueue capacity {} -> {}",
            self.capacity,
            new_capacity
        );
        self.buf = new_buf;
        self.capacity = new_capacity;
        self.mask = new_capacity - 1;
        self.head = 0;
        self.tail = self.len;
    }

    fn allocate_buffer(capacity: usize) -> *mut T {
        let layout = match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };
        // SAFETY: capacity >= 1 and T is sized, so the layout is non-zero.
        let buf = unsafe { alloc::alloc(layout) as *mut T };
        if buf.is_null() {
            alloc::handle_alloc_error(layout);
        }
        buf
    }

    /// # Safety
    ///
    /// `buf` must have been returned by `allocate_buffer(capacity)`.
    unsafe fn deallocate_buffer(buf: *mut T, capacity: usize) {
        let layout = Layout::array::<T>(capacity).unwrap();
        unsafe { alloc::dealloc(buf as *mut u8, layout) };
    }
}

impl<T> Default for GrowRingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for GrowRingQueue<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the buffer came from allocate_buffer at this capacity.
        unsafe { Self::deallocate_buffer(self.buf, self.capacity) };
    }
}

impl<T: Clone> Clone for GrowRingQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity);
        for value in self.iter() {
            copy.enqueue(value.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowRingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowRingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for GrowRingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for value in iter {
            queue.enqueue(value);
        }
        queue
    }
}

impl<T> Extend<T> for GrowRingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

// Safety: GrowRingQueue<T> owns its elements exclusively.
unsafe impl<T: Send> Send for GrowRingQueue<T> {}
unsafe impl<T: Sync> Sync for GrowRingQueue<T> {}
