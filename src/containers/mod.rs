//! Teaching-grade container types
//!
//! This module provides the six classic containers, each built from first
//! principles on raw storage or an index-linked arena. Costs are deliberate
//! and documented per operation; where a linked container pays O(n) for a
//! walk, that cost is part of the contract rather than something hidden
//! behind a cached counter.
//!
//! ## Array-backed
//!
//! - **`DynArray<T>`** - Growable array with doubling capacity (starts at 4)
//! - **`ArrayStack<T>`** - LIFO stack on top of `DynArray`
//!
//! ## Linked (sentinel-chain arena)
//!
//! - **`SinglyLinkedList<T>`** - Positional list with head sentinel
//! - **`LinkedStack<T>`** - LIFO stack pushing at the chain head
//! - **`LinkedQueue<T>`** - FIFO queue with a tail cursor for O(1) enqueue
//!
//! ## Ring buffers
//!
//! - **`RingQueue<T>`** - Fixed capacity, modulo index mapping
//! - **`Pow2RingQueue<T>`** - Fixed capacity, bitwise-mask index mapping
//! - **`GrowRingQueue<T>`** - Mask-mapped ring that doubles instead of overflowing

mod chain;
mod dyn_array;
mod grow_ring_queue;
mod linked_list;
mod linked_queue;
mod ring_queue;
mod stack;

pub use dyn_array::DynArray;
pub use grow_ring_queue::GrowRingQueue;
pub use linked_list::{ListIter, SinglyLinkedList};
pub use linked_queue::{LinkedQueue, QueueIter};
pub use ring_queue::{Pow2RingQueue, RingIter, RingQueue};
pub use stack::{ArrayStack, LinkedStack, StackIter};
