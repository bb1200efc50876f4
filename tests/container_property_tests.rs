//! Property-based testing for the container types
//!
//! Each container is driven with randomized operation sequences and checked
//! against a std collection model, so the laws (LIFO, FIFO, positional
//! consistency, capacity behavior) hold over far more interleavings than the
//! unit tests cover.

use corral::{
    ArrayStack, CorralError, DynArray, GrowRingQueue, LinkedQueue, LinkedStack, Pow2RingQueue,
    RingQueue, SinglyLinkedList,
};
use proptest::prelude::*;
use std::collections::VecDeque;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Positional operations; raw indices are reduced to a valid position when
/// the operation is applied.
#[derive(Debug, Clone)]
enum PositionalOp {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Remove(usize),
    Overwrite(usize, i32),
}

fn positional_ops_strategy() -> impl Strategy<Value = Vec<PositionalOp>> {
    prop::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(PositionalOp::Push),
            Just(PositionalOp::Pop),
            (any::<usize>(), any::<i32>()).prop_map(|(i, v)| PositionalOp::Insert(i, v)),
            any::<usize>().prop_map(PositionalOp::Remove),
            (any::<usize>(), any::<i32>()).prop_map(|(i, v)| PositionalOp::Overwrite(i, v)),
        ],
        0..400,
    )
}

/// Enqueue/dequeue interleavings encoded as (value, is_push) pairs
fn queue_ops_strategy(len: usize) -> impl Strategy<Value = Vec<(i32, bool)>> {
    prop::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(|x| (x, true)), // enqueue
            Just((0, false)),                     // dequeue
        ],
        0..len,
    )
}

// =============================================================================
// DYN ARRAY PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_dyn_array_matches_vec(
        elements in prop::collection::vec(any::<i32>(), 0..2000)
    ) {
        let mut arr = DynArray::new();
        for &elem in &elements {
            arr.push(elem);
        }

        prop_assert_eq!(arr.len(), elements.len());
        for (i, &expected) in elements.iter().enumerate() {
            prop_assert_eq!(arr.get(i), Ok(&expected));
        }
    }

    #[test]
    fn prop_dyn_array_push_pop_symmetry(
        elements in prop::collection::vec(any::<u64>(), 0..1000)
    ) {
        let mut arr = DynArray::new();
        for &elem in &elements {
            arr.push(elem);
        }

        let mut popped = Vec::new();
        while let Some(elem) = arr.pop() {
            popped.push(elem);
        }

        popped.reverse();
        prop_assert_eq!(popped, elements);
        prop_assert!(arr.is_empty());
    }

    #[test]
    fn prop_dyn_array_positional_ops_match_vec(ops in positional_ops_strategy()) {
        let mut arr = DynArray::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                PositionalOp::Push(v) => {
                    arr.push(v);
                    model.push(v);
                }
                PositionalOp::Pop => {
                    prop_assert_eq!(arr.pop(), model.pop());
                }
                PositionalOp::Insert(i, v) => {
                    let at = i % (model.len() + 1);
                    arr.insert(at, v).unwrap();
                    model.insert(at, v);
                }
                PositionalOp::Remove(i) => {
                    if model.is_empty() {
                        prop_assert!(arr.remove(0).is_err());
                    } else {
                        let at = i % model.len();
                        prop_assert_eq!(arr.remove(at).unwrap(), model.remove(at));
                    }
                }
                PositionalOp::Overwrite(i, v) => {
                    if model.is_empty() {
                        prop_assert!(arr.set(0, v).is_err());
                    } else {
                        let at = i % model.len();
                        arr.set(at, v).unwrap();
                        model[at] = v;
                    }
                }
            }
            prop_assert_eq!(arr.len(), model.len());
        }

        prop_assert_eq!(arr.to_vec(), model);
    }

    #[test]
    fn prop_dyn_array_out_of_range_reports_length(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        beyond in 0usize..100
    ) {
        let mut arr = DynArray::new();
        for &elem in &elements {
            arr.push(elem);
        }

        let bad_index = elements.len() + beyond;
        prop_assert_eq!(
            arr.get(bad_index),
            Err(CorralError::out_of_range(bad_index, elements.len()))
        );
    }

    #[test]
    fn prop_dyn_array_capacity_doubles_from_four(
        elements in prop::collection::vec(any::<i32>(), 0..600)
    ) {
        let mut arr = DynArray::new();
        for &elem in &elements {
            arr.push(elem);
            let cap = arr.capacity();
            // Push-driven growth yields 0, then 4, 8, 16, ...
            prop_assert!(cap == 0 || (cap >= 4 && cap.is_power_of_two()));
            prop_assert!(cap >= arr.len());
        }
    }
}

// =============================================================================
// SINGLY LINKED LIST PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_list_positional_ops_match_vec(ops in positional_ops_strategy()) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                PositionalOp::Push(v) => {
                    list.push_back(v);
                    model.push(v);
                }
                PositionalOp::Pop => {
                    if model.is_empty() {
                        prop_assert!(list.remove(0).is_err());
                    } else {
                        let last = model.len() - 1;
                        prop_assert_eq!(list.remove(last).unwrap(), model.remove(last));
                    }
                }
                PositionalOp::Insert(i, v) => {
                    let at = i % (model.len() + 1);
                    list.insert(at, v).unwrap();
                    model.insert(at, v);
                }
                PositionalOp::Remove(i) => {
                    if model.is_empty() {
                        prop_assert!(list.remove(0).is_err());
                    } else {
                        let at = i % model.len();
                        prop_assert_eq!(list.remove(at).unwrap(), model.remove(at));
                    }
                }
                PositionalOp::Overwrite(i, v) => {
                    if model.is_empty() {
                        prop_assert!(list.get_mut(0).is_err());
                    } else {
                        let at = i % model.len();
                        *list.get_mut(at).unwrap() = v;
                        model[at] = v;
                    }
                }
            }
            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert_eq!(list.to_vec(), model);
    }

    #[test]
    fn prop_list_find_agrees_with_position(
        elements in prop::collection::vec(0i32..50, 0..100),
        probe in 0i32..50
    ) {
        let mut list = SinglyLinkedList::new();
        for &elem in &elements {
            list.push_back(elem);
        }

        prop_assert_eq!(list.find(&probe), elements.iter().position(|&v| v == probe));
    }

    #[test]
    fn prop_list_push_front_reverses(
        elements in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        let mut list = SinglyLinkedList::new();
        for &elem in &elements {
            list.push_front(elem);
        }

        let mut expected = elements.clone();
        expected.reverse();
        prop_assert_eq!(list.to_vec(), expected);
    }
}

// =============================================================================
// STACK PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_stacks_pop_in_lifo_order(
        elements in prop::collection::vec(any::<i32>(), 0..500)
    ) {
        let mut linked = LinkedStack::new();
        let mut array = ArrayStack::new();
        for &elem in &elements {
            linked.push(elem);
            array.push(elem);
        }

        for &expected in elements.iter().rev() {
            prop_assert_eq!(linked.pop(), Ok(expected));
            prop_assert_eq!(array.pop(), Ok(expected));
        }
        prop_assert!(linked.pop().is_err());
        prop_assert!(array.pop().is_err());
    }

    #[test]
    fn prop_stack_variants_agree(ops in queue_ops_strategy(600)) {
        let mut linked = LinkedStack::new();
        let mut array = ArrayStack::new();

        for (value, is_push) in ops {
            if is_push {
                linked.push(value);
                array.push(value);
            } else {
                prop_assert_eq!(linked.pop(), array.pop());
            }
            prop_assert_eq!(linked.len(), array.len());
            prop_assert_eq!(linked.peek(), array.peek());
        }

        prop_assert_eq!(linked.to_vec(), array.to_vec());
    }
}

// =============================================================================
// QUEUE PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_linked_queue_vs_vecdeque(ops in queue_ops_strategy(600)) {
        let mut queue = LinkedQueue::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for (value, is_push) in ops {
            if is_push {
                queue.enqueue(value);
                model.push_back(value);
            } else {
                prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
        }

        prop_assert_eq!(queue.to_vec(), model.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn prop_grow_ring_vs_vecdeque(ops in queue_ops_strategy(1000)) {
        let mut queue = GrowRingQueue::with_capacity(2);
        let mut model: VecDeque<i32> = VecDeque::new();

        for (value, is_push) in ops {
            if is_push {
                queue.enqueue(value);
                model.push_back(value);
            } else {
                prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
            }
            prop_assert_eq!(queue.len(), model.len());
        }

        prop_assert_eq!(queue.to_vec(), model.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn prop_grow_ring_capacity_invariants(ops in queue_ops_strategy(800)) {
        let mut queue = GrowRingQueue::with_capacity(2);
        let mut last_capacity = queue.capacity();

        for (value, is_push) in ops {
            if is_push {
                queue.enqueue(value);
            } else {
                let _ = queue.dequeue();
            }
            let cap = queue.capacity();
            prop_assert!(cap.is_power_of_two());
            prop_assert!(cap >= last_capacity);
            prop_assert!(queue.len() < cap);
            last_capacity = cap;
        }
    }
}

// =============================================================================
// RING QUEUE PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_ring_queue_vs_bounded_model(
        capacity in 2usize..=16,
        ops in queue_ops_strategy(400)
    ) {
        let mut queue = RingQueue::with_capacity(capacity);
        let mut model: VecDeque<i32> = VecDeque::new();

        for (value, is_push) in ops {
            if is_push {
                if model.len() == capacity - 1 {
                    // One slot stays unused to tell full from empty.
                    prop_assert_eq!(queue.enqueue(value), Err(CorralError::overflow(capacity)));
                    prop_assert!(queue.is_full());
                } else {
                    prop_assert_eq!(queue.enqueue(value), Ok(()));
                    model.push_back(value);
                }
            } else {
                prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
            }
            prop_assert_eq!(queue.len(), model.len());
        }

        prop_assert_eq!(queue.to_vec(), model.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn prop_ring_variants_agree(
        capacity_pow in 1u32..=5,
        ops in queue_ops_strategy(400)
    ) {
        let capacity = 1usize << capacity_pow;
        let mut modulo = RingQueue::with_capacity(capacity);
        let mut masked = Pow2RingQueue::with_capacity(capacity);

        for (value, is_push) in ops {
            if is_push {
                prop_assert_eq!(modulo.enqueue(value), masked.enqueue(value));
            } else {
                prop_assert_eq!(modulo.dequeue(), masked.dequeue());
            }
            prop_assert_eq!(modulo.len(), masked.len());
            prop_assert_eq!(modulo.is_full(), masked.is_full());
            prop_assert_eq!(modulo.front().ok(), masked.front().ok());
        }

        prop_assert_eq!(modulo.to_vec(), masked.to_vec());
    }

    #[test]
    fn prop_pow2_ring_rounds_capacity(requested in 1usize..200) {
        let queue: Pow2RingQueue<i32> = Pow2RingQueue::with_capacity(requested);
        let cap = queue.capacity();
        prop_assert!(cap.is_power_of_two());
        prop_assert!(cap >= requested);
        // Minimal: hint of half would already have been a power of two.
        prop_assert!(cap / 2 < requested || cap == 1);
        prop_assert_eq!(queue.effective_capacity(), cap - 1);
    }

    #[test]
    fn prop_ring_fifo_within_capacity(
        elements in prop::collection::vec(any::<i32>(), 0..7)
    ) {
        let mut queue = RingQueue::with_capacity(8);
        for &elem in &elements {
            queue.enqueue(elem).unwrap();
        }

        for &expected in &elements {
            prop_assert_eq!(queue.dequeue(), Ok(expected));
        }
        prop_assert!(queue.is_empty());
    }
}

// =============================================================================
// CROSS-CONTAINER PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_all_queues_agree(ops in queue_ops_strategy(300)) {
        let mut linked = LinkedQueue::new();
        let mut grow = GrowRingQueue::with_capacity(2);
        // Large enough that the fixed ring never overflows for this op count.
        let mut fixed = RingQueue::with_capacity(512);

        for (value, is_push) in ops {
            if is_push {
                linked.enqueue(value);
                grow.enqueue(value);
                fixed.enqueue(value).unwrap();
            } else {
                let expected = linked.dequeue().ok();
                prop_assert_eq!(grow.dequeue().ok(), expected);
                prop_assert_eq!(fixed.dequeue().ok(), expected);
            }
        }

        prop_assert_eq!(linked.to_vec(), grow.to_vec());
        prop_assert_eq!(linked.to_vec(), fixed.to_vec());
    }
}
