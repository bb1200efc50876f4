//! LIFO stacks: linked and array-backed
//!
//! Two implementations of the same contract. `LinkedStack` pushes and pops
//! at the head of a sentinel chain and counts its length by traversal;
//! `ArrayStack` layers the same interface over `DynArray`, trading pointer
//! chasing for contiguous storage and an O(1) length. LIFO order is
//! identical across the two for any operation sequence.

use crate::containers::chain::{ChainIter, SentinelChain, NIL, SENTINEL};
use crate::containers::DynArray;
use crate::error::{CorralError, Result};
use std::fmt;
use std::iter::Rev;
use std::slice;

/// LIFO stack over a sentinel-headed linked chain.
///
/// `push`, `pop`, and `peek` all edit the node directly after the sentinel,
/// O(1) each. `len` is O(n) by traversal; the count is deliberately not
/// cached.
///
/// # Examples
///
/// ```rust
/// use corral::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// stack.push('A');
/// stack.push('B');
/// assert_eq!(stack.peek()?, &'B');
/// assert_eq!(stack.pop()?, 'B');
/// assert_eq!(stack.pop()?, 'A');
/// assert!(stack.pop().is_err());
/// # Ok::<(), corral::CorralError>(())
/// ```
pub struct LinkedStack<T> {
    chain: SentinelChain<T>,
}

impl<T> LinkedStack<T> {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            chain: SentinelChain::new(),
        }
    }

    /// Push a value on top of the stack. O(1).
    pub fn push(&mut self, value: T) {
        self.chain.insert_after(SENTINEL, value);
    }

    /// Remove and return the top value; underflow error when empty. O(1).
    pub fn pop(&mut self) -> Result<T> {
        self.chain
            .remove_after(SENTINEL)
            .ok_or_else(|| CorralError::underflow("pop"))
    }

    /// Borrow the top value; underflow error when empty. O(1).
    pub fn peek(&self) -> Result<&T> {
        let top = self.chain.next(SENTINEL);
        if top == NIL {
            return Err(CorralError::underflow("peek"));
        }
        Ok(self.chain.value(top))
    }

    /// Number of elements. O(n): counted by walking the chain; the count is
    /// deliberately not cached.
    pub fn len(&self) -> usize {
        self.chain.count()
    }

    /// Check if the stack is empty. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_chain_empty()
    }

    /// Iterate over the elements top to bottom
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            inner: self.chain.iter(),
        }
    }

    /// Copy the elements into a `Vec`, top first
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
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Borrowing iterator over a stack's elements, top to bottom.
pub struct StackIter<'a, T> {
    inner: ChainIter<'a, T>,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
}

/// LIFO stack over a growable array.
///
/// The top of the stack is the last array element, so `push`/`pop`/`peek`
/// are O(1) (amortized for `push`) and `len` is O(1) — the array tracks its
/// length directly, unlike [`LinkedStack`].
///
/// # Examples
///
/// ```rust
/// use corral::ArrayStack;
///
/// let mut stack = ArrayStack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.pop()?, 2);
/// # Ok::<(), corral::CorralError>(())
/// ```
pub struct ArrayStack<T> {
    items: DynArray<T>,
}

impl<T> ArrayStack<T> {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            items: DynArray::new(),
        }
    }

    /// Push a value on top of the stack. Amortized O(1).
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top value; underflow error when empty. O(1).
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| CorralError::underflow("pop"))
    }

    /// Borrow the top value; underflow error when empty. O(1).
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| CorralError::underflow("peek"))
    }

    /// Number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements top to bottom
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Copy the elements into a `Vec`, top first
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Remove all elements. Capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayStack<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stacks_are_empty() {
        let linked: LinkedStack<i32> = LinkedStack::new();
        assert!(linked.is_empty());
        assert_eq!(linked.len(), 0);

        let array: ArrayStack<i32> = ArrayStack::new();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
    }

    #[test]
    fn test_lifo_order_linked() {
        let mut stack = LinkedStack::new();
        for c in ['A', 'B', 'C', 'D'] {
            stack.push(c);
        }
        assert_eq!(stack.pop(), Ok('D'));
        assert_eq!(stack.pop(), Ok('C'));
        assert_eq!(stack.pop(), Ok('B'));
        assert_eq!(stack.pop(), Ok('A'));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_lifo_order_array() {
        let mut stack = ArrayStack::new();
        for c in ['A', 'B', 'C', 'D'] {
            stack.push(c);
        }
        assert_eq!(stack.pop(), Ok('D'));
        assert_eq!(stack.pop(), Ok('C'));
        assert_eq!(stack.pop(), Ok('B'));
        assert_eq!(stack.pop(), Ok('A'));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = LinkedStack::new();
        stack.push(7);
        assert_eq!(stack.peek(), Ok(&7));
        assert_eq!(stack.peek(), Ok(&7));
        assert_eq!(stack.len(), 1);

        let mut stack = ArrayStack::new();
        stack.push(7);
        assert_eq!(stack.peek(), Ok(&7));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_pop_and_peek_underflow() {
        let mut linked: LinkedStack<i32> = LinkedStack::new();
        assert_eq!(linked.pop(), Err(CorralError::underflow("pop")));
        assert_eq!(linked.peek(), Err(CorralError::underflow("peek")));

        let mut array: ArrayStack<i32> = ArrayStack::new();
        assert_eq!(array.pop(), Err(CorralError::underflow("pop")));
        assert_eq!(array.peek(), Err(CorralError::underflow("peek")));
    }

    #[test]
    fn test_interleaved_push_pop() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Ok(2));
        stack.push(3);
        stack.push(4);
        assert_eq!(stack.pop(), Ok(4));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(1));
    }

    #[test]
    fn test_reuse_after_drain() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.pop().unwrap();
        assert!(stack.is_empty());
        stack.push(2);
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_len_tracks_mutations() {
        let mut stack = LinkedStack::new();
        for i in 0..10 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 10);
        for _ in 0..4 {
            stack.pop().unwrap();
        }
        assert_eq!(stack.len(), 6);
        stack.clear();
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_variants_observe_identically() {
        let mut linked = LinkedStack::new();
        let mut array = ArrayStack::new();

        // Same scripted sequence on both; every observation must agree.
        let script: &[i32] = &[3, 1, 4, 1, 5, 9, 2, 6];
        for (i, &v) in script.iter().enumerate() {
            linked.push(v);
            array.push(v);
            if i % 3 == 2 {
                assert_eq!(linked.pop().unwrap(), array.pop().unwrap());
            }
            assert_eq!(linked.peek().unwrap(), array.peek().unwrap());
            assert_eq!(linked.len(), array.len());
        }
        assert_eq!(linked.to_vec(), array.to_vec());
        while let Ok(a) = linked.pop() {
            assert_eq!(a, array.pop().unwrap());
        }
        assert!(array.is_empty());
    }

    #[test]
    fn test_to_vec_is_top_first() {
        let mut linked = LinkedStack::new();
        let mut array = ArrayStack::new();
        for v in 1..=3 {
            linked.push(v);
            array.push(v);
        }
        assert_eq!(linked.to_vec(), vec![3, 2, 1]);
        assert_eq!(array.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_clone_and_eq() {
        let mut stack = LinkedStack::new();
        stack.push("x".to_string());
        stack.push("y".to_string());
        let copy = stack.clone();
        assert_eq!(stack, copy);

        let mut array = ArrayStack::new();
        array.push(1);
        let array_copy = array.clone();
        assert_eq!(array, array_copy);
    }

    #[test]
    fn test_debug_format_is_top_first() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(format!("{:?}", stack), "[2, 1]");
    }
}
