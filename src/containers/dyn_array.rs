//! DynArray: growable contiguous array with doubling growth
//!
//! The textbook dynamic array: a raw heap buffer, a tracked length, and a
//! capacity that doubles whenever an insertion would not fit. Growth goes
//! through `realloc`, which can often extend the allocation in place instead
//! of copying. Capacity never shrinks.

use crate::error::{check_bounds, CorralError, Result};
use std::alloc::{self, Layout};
use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Capacity of the first allocation; construction itself does not allocate.
const INITIAL_CAPACITY: usize = 4;

/// Growable contiguous array with amortized O(1) append.
///
/// Elements occupy indices `[0, len)` of a buffer of `capacity` slots.
/// `push` doubles the capacity when the buffer is full (the first growth
/// allocates 4 slots); `insert` and `remove` shift the trailing elements by
/// one slot. Indexed access is bounds-checked: `get`/`set` report an
/// out-of-range error rather than panicking.
///
/// # Examples
///
/// ```rust
/// use corral::DynArray;
///
/// let mut arr = DynArray::new();
/// arr.push(42);
/// arr.push(84);
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr[0], 42);
/// assert!(arr.get(2).is_err());
/// ```
pub struct DynArray<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    cap: usize,
}

impl<T> DynArray<T> {
    /// Create a new empty array. No allocation occurs until the first append.
    #[inline]
    pub fn new() -> Self {
        Self {
            ptr: None,
            len: 0,
            cap: 0,
        }
    }

    /// Create an array with room for at least `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        let mut arr = Self::new();
        if cap > 0 {
            arr.grow(cap);
        }
        arr
    }

    /// Number of elements in the array
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the current buffer can hold without growing
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Append an element at the end, doubling the capacity first if the
    /// buffer is full. Amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow(self.len + 1);
        }
        // SAFETY: len < cap after the growth check, so the slot is in-bounds
        // and uninitialized.
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: the old last element is initialized; after the
            // decrement it is no longer reachable through the slice views.
            Some(unsafe { ptr::read(self.as_ptr().add(self.len)) })
        }
    }

    /// Borrow the element at `index`; out-of-range error if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.len)?;
        // SAFETY: bounds checked above.
        Ok(unsafe { &*self.as_ptr().add(index) })
    }

    /// Mutably borrow the element at `index`; out-of-range error if
    /// `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_bounds(index, self.len)?;
        // SAFETY: bounds checked above.
        Ok(unsafe { &mut *self.as_mut_ptr().add(index) })
    }

    /// Replace the element at `index`, dropping the previous value;
    /// out-of-range error if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    /// `index == len` appends; `index > len` is an out-of-range error. O(n).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(CorralError::out_of_range(index, self.len));
        }
        if self.len == self.cap {
            self.grow(self.len + 1);
        }
        // SAFETY: index <= len < cap. `ptr::copy` is overlap-safe (memmove),
        // so the right shift cannot overwrite elements it has yet to move.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the elements after
    /// it one slot left; out-of-range error if `index >= len`. O(n).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.len)?;
        // SAFETY: index < len; the element is read out before the shift
        // reuses its slot.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            let value = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Drop all elements. Capacity is retained.
    pub fn clear(&mut self) {
        // SAFETY: [0, len) is initialized; the length is zeroed first so a
        // panicking Drop cannot expose half-cleared contents.
        let len = self.len;
        self.len = 0;
        for i in 0..len {
            unsafe {
                ptr::drop_in_place(self.as_mut_ptr().add(i));
            }
        }
    }

    /// View the elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            &[]
        } else {
            // SAFETY: [0, len) is initialized and contiguous.
            unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
        }
    }

    /// View the elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.len == 0 {
            &mut []
        } else {
            // SAFETY: [0, len) is initialized and contiguous.
            unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
        }
    }

    /// Iterate over the elements in order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Copy the elements into a `Vec` in order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    #[inline]
    fn as_ptr(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null(),
        }
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Grow to hold at least `min_cap` elements: double the capacity, with
    /// the first allocation sized at `INITIAL_CAPACITY`.
    fn grow(&mut self, min_cap: usize) {
        let new_cap = min_cap
            .max(self.cap.saturating_mul(2))
            .max(INITIAL_CAPACITY);
        let new_layout = match Layout::array::<T>(new_cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        };

        let new_ptr = match self.ptr {
            Some(ptr) => {
                // cap > 0 whenever ptr is set, so the old layout is valid.
                let old_layout = Layout::array::<T>(self.cap).unwrap();
                // SAFETY: ptr was allocated with old_layout; realloc moves
                // the initialized prefix if the block cannot grow in place.
                unsafe {
                    alloc::realloc(ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
                }
            }
            // SAFETY: new_layout has non-zero size (new_cap >= 4, T sized).
            None => unsafe { alloc::alloc(new_layout) as *mut T },
        };

        if new_ptr.is_null() {
            alloc::handle_alloc_error(new_layout);
        }

        log::trace!("DynArray capacity {} -> {}", self.cap, new_cap);
        // SAFETY: null checked above.
        self.ptr = Some(unsafe { NonNull::new_unchecked(new_ptr) });
        self.cap = new_cap;
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
        if let Some(ptr) = self.ptr {
            if self.cap > 0 {
                // SAFETY: the buffer was allocated with this exact layout.
                unsafe {
                    let layout = Layout::array::<T>(self.cap).unwrap();
                    alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
                }
            }
        }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Panicking index sugar; `get` is the checked form.
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        for item in self.as_slice() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        for item in iter {
            arr.push(item);
        }
        arr
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Safety: DynArray<T> owns its elements exclusively.
unsafe impl<T: Send> Send for DynArray<T> {}
unsafe impl<T: Sync> Sync for DynArray<T> {}
