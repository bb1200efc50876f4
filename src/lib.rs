//! # Corral: Classic Containers from First Principles
//!
//! This crate implements the six classic container structures over raw storage
//! and index-linked arenas, with every operation's cost stated up front and
//! every failure reported through one small error type.
//!
//! ## Key Features
//!
//! - **Growable Array**: `DynArray<T>` with doubling growth over a raw buffer
//! - **Linked Containers**: list, stack, and queue sharing a sentinel-chain arena
//! - **Ring Queues**: fixed-capacity FIFO in modulo and power-of-two mask variants
//! - **Growable Ring**: `GrowRingQueue<T>` doubles its buffer instead of refusing
//! - **Uniform Errors**: range, underflow, and overflow cover every fallible operation
//! - **Transparent Costs**: documented per-operation complexity, including the
//!   deliberate O(n) walks of the linked containers
//!
//! ## Quick Start
//!
//! ```rust
//! use corral::{ArrayStack, DynArray, GrowRingQueue, LinkedQueue, RingQueue, SinglyLinkedList};
//!
//! // Growable array with positional access
//! let mut arr = DynArray::new();
//! arr.push(1);
//! arr.push(2);
//! arr.insert(1, 10)?;
//! assert_eq!(arr.to_vec(), vec![1, 10, 2]);
//!
//! // Positional singly linked list
//! let mut list = SinglyLinkedList::new();
//! list.push_back("a");
//! list.push_front("b");
//! assert_eq!(list.find(&"a"), Some(1));
//!
//! // LIFO stack
//! let mut stack = ArrayStack::new();
//! stack.push('x');
//! stack.push('y');
//! assert_eq!(stack.pop()?, 'y');
//!
//! // FIFO queue over the linked chain
//! let mut queue = LinkedQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue()?, 1);
//!
//! // Fixed-capacity ring: a full queue refuses new elements
//! let mut ring = RingQueue::with_capacity(4);
//! for i in 0..3 {
//!     ring.enqueue(i)?;
//! }
//! assert!(ring.enqueue(99).is_err());
//!
//! // Growable ring: doubles instead of refusing
//! let mut grow = GrowRingQueue::with_capacity(4);
//! for i in 0..5 {
//!     grow.enqueue(i);
//! }
//! assert_eq!(grow.capacity(), 8);
//! # Ok::<(), corral::CorralError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod error;

// Re-export core types
pub use containers::{
    ArrayStack, DynArray, GrowRingQueue, LinkedQueue, LinkedStack, ListIter, Pow2RingQueue,
    QueueIter, RingIter, RingQueue, SinglyLinkedList, StackIter,
};
pub use error::{CorralError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing corral v{}", VERSION);
}
