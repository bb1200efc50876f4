//! Shared sentinel-headed chain for the link-based containers
//!
//! `SinglyLinkedList`, `LinkedStack`, and `LinkedQueue` all need the same
//! thing: a singly linked chain behind a permanent dummy head, so that
//! insertion and removal at any position (including the front) go through one
//! uniform "edit the node after `prev`" path with no special cases.
//!
//! The chain is stored as an arena: nodes live in a `Vec` of slots addressed
//! by `u32` index, with `NIL` as the null link. Slot 0 is the sentinel and is
//! never a data element. Freed slots are threaded into a free list through
//! their `next` fields and reused by later insertions, so a long-lived chain
//! does not leak arena slots as elements come and go.

/// Null link: no successor, or an empty free list.
pub(crate) const NIL: u32 = u32::MAX;

/// Arena index of the permanent sentinel node.
pub(crate) const SENTINEL: u32 = 0;

/// One arena slot. The sentinel and freed slots hold no value.
#[derive(Clone)]
struct Slot<T> {
    value: Option<T>,
    next: u32,
}

/// A singly linked chain with a permanent sentinel head, backed by an arena
/// of index-linked slots.
///
/// All structural edits happen relative to a predecessor index, which is what
/// makes the sentinel pay off: the node before the first element always
/// exists.
pub(crate) struct SentinelChain<T> {
    slots: Vec<Slot<T>>,
    /// Head of the free list, threaded through `next`.
    free: u32,
}

impl<T> SentinelChain<T> {
    /// Create an empty chain: just the sentinel.
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![Slot {
                value: None,
                next: NIL,
            }],
            free: NIL,
        }
    }

    /// Index of the node after `idx`, or `NIL` at the end of the chain.
    #[inline]
    pub(crate) fn next(&self, idx: u32) -> u32 {
        self.slots[idx as usize].next
    }

    /// Borrow the value stored at `idx`. `None` for the sentinel.
    #[inline]
    pub(crate) fn get(&self, idx: u32) -> Option<&T> {
        self.slots[idx as usize].value.as_ref()
    }

    /// Mutably borrow the value stored at `idx`.
    #[inline]
    pub(crate) fn get_mut(&mut self, idx: u32) -> Option<&mut T> {
        self.slots[idx as usize].value.as_mut()
    }

    /// Borrow the value at `idx`, which must be a live node (panics on the
    /// sentinel or a freed slot, like out-of-bounds slice indexing).
    #[inline]
    pub(crate) fn value(&self, idx: u32) -> &T {
        self.slots[idx as usize].value.as_ref().expect("not a live node")
    }

    /// Mutably borrow the value at `idx`, which must be a live node.
    #[inline]
    pub(crate) fn value_mut(&mut self, idx: u32) -> &mut T {
        self.slots[idx as usize].value.as_mut().expect("not a live node")
    }

    /// True when no live node follows the sentinel.
    #[inline]
    pub(crate) fn is_chain_empty(&self) -> bool {
        self.next(SENTINEL) == NIL
    }

    /// Link a new node holding `value` directly after `prev`.
    ///
    /// Returns the new node's arena index, which stays valid until that node
    /// is removed.
    pub(crate) fn insert_after(&mut self, prev: u32, value: T) -> u32 {
        let idx = self.alloc(value);
        let succ = self.slots[prev as usize].next;
        self.slots[idx as usize].next = succ;
        self.slots[prev as usize].next = idx;
        idx
    }

    /// Unlink the node after `prev` and return its value, or `None` when
    /// `prev` is the last node.
    pub(crate) fn remove_after(&mut self, prev: u32) -> Option<T> {
        let target = self.slots[prev as usize].next;
        if target == NIL {
            return None;
        }
        self.slots[prev as usize].next = self.slots[target as usize].next;
        let value = self.slots[target as usize].value.take();
        // Thread the freed slot into the free list for reuse.
        self.slots[target as usize].next = self.free;
        self.free = target;
        value
    }

    /// Number of live nodes, counted by walking the chain from the sentinel.
    pub(crate) fn count(&self) -> usize {
        let mut n = 0;
        let mut idx = self.next(SENTINEL);
        while idx != NIL {
            n += 1;
            idx = self.next(idx);
        }
        n
    }

    /// Drop every live node and reset to the empty chain.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[0].next = NIL;
        self.free = NIL;
    }

    /// Iterate the live values in chain order.
    pub(crate) fn iter(&self) -> ChainIter<'_, T> {
        ChainIter {
            chain: self,
            idx: self.next(SENTINEL),
        }
    }

    fn alloc(&mut self, value: T) -> u32 {
        if self.free != NIL {
            let idx = self.free;
            self.free = self.slots[idx as usize].next;
            let slot = &mut self.slots[idx as usize];
            slot.value = Some(value);
            slot.next = NIL;
            idx
        } else {
            // u32 indices bound the arena; NIL itself must stay unused.
            assert!(self.slots.len() < NIL as usize, "chain node limit reached");
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                value: Some(value),
                next: NIL,
            });
            idx
        }
    }
}

impl<T: Clone> Clone for SentinelChain<T> {
    fn clone(&self) -> Self {
        // Cloning the arena verbatim preserves every index, so indices held
        // by the owning container (e.g. a queue's tail) stay valid.
        Self {
            slots: self.slots.clone(),
            free: self.free,
        }
    }
}

/// Borrowing iterator over live values in chain order.
pub(crate) struct ChainIter<'a, T> {
    chain: &'a SentinelChain<T>,
    idx: u32,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.idx == NIL {
            return None;
        }
        let value = self.chain.get(self.idx);
        self.idx = self.chain.next(self.idx);
        value
    }
}
