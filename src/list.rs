extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

/// A stable, opaque reference to a slot in a [`List`] arena.
///
/// Handles are plain indices into the arena's backing storage. A handle
/// stays valid from the `push_front` that produced it until the `remove`
/// (or `pop_back`, or `clear`) that vacates its slot; the arena never moves
/// an occupied slot. Handles are meaningful only for the list that issued
/// them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Handle(usize);

/// A slot in the recency chain.
///
/// Holds a value and handles to the neighboring slots. The chain runs from
/// most recent (`head`) to least recent (`tail`); `more_recent` points
/// toward the head and `less_recent` toward the tail.
struct Slot<T> {
    val: T,
    more_recent: Option<Handle>,
    less_recent: Option<Handle>,
}

/// An arena-backed doubly linked list ordered by recency.
///
/// The list owns all of its slots in a contiguous arena and threads the
/// chain through them by handle, so insertion, relocation, and removal are
/// index reassignments rather than pointer surgery. Vacated slots are
/// recycled through a free list; once every arena slot has been occupied at
/// least once, list operations perform no allocation.
///
/// Invariant: a handle held outside this module always names an occupied
/// slot. Handles are issued by `push_front` and invalidated only by
/// `remove`, `pop_back`, and `clear`; callers must not use a handle past
/// the call that invalidated it.
pub(crate) struct List<T> {
    /// Maximum number of items the list can hold.
    cap: NonZeroUsize,
    /// Current number of occupied slots.
    len: usize,
    /// Slot storage. `None` marks a vacancy awaiting reuse.
    slots: Vec<Option<Slot<T>>>,
    /// Handles of vacated slots, reused before the arena grows.
    free: Vec<Handle>,
    /// Most recently used slot, if any.
    head: Option<Handle>,
    /// Least recently used slot, if any.
    tail: Option<Handle>,
}

impl<T> List<T> {
    /// Creates an empty list that holds at most `cap` items.
    ///
    /// The arena grows on demand up to `cap` slots and never beyond it as
    /// long as the caller keeps `len() <= cap()`.
    pub(crate) fn new(cap: NonZeroUsize) -> List<T> {
        List {
            cap,
            len: 0,
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the maximum number of items the list can hold.
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    /// Returns the current number of items in the list.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    fn slot(&self, handle: Handle) -> &Slot<T> {
        // Handles held by callers always name occupied slots (module
        // invariant), so a vacant slot here is a bug in this module.
        match self.slots[handle.0].as_ref() {
            Some(slot) => slot,
            None => unreachable!("handle names a vacant slot"),
        }
    }

    fn slot_mut(&mut self, handle: Handle) -> &mut Slot<T> {
        match self.slots[handle.0].as_mut() {
            Some(slot) => slot,
            None => unreachable!("handle names a vacant slot"),
        }
    }

    /// Returns a reference to the value named by `handle`.
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slot(handle).val
    }

    /// Returns a mutable reference to the value named by `handle`.
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slot_mut(handle).val
    }

    /// Returns a reference to the least recently used value, if any.
    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.map(|handle| &self.slot(handle).val)
    }

    /// Inserts `val` at the front of the chain and returns its handle.
    ///
    /// Reuses a vacated slot when one is available, growing the arena
    /// otherwise. The caller is responsible for evicting first when the
    /// list is full; this method assumes there is room.
    pub(crate) fn push_front(&mut self, val: T) -> Handle {
        debug_assert!(!self.is_full());
        let slot = Slot {
            val,
            more_recent: None,
            less_recent: self.head,
        };
        let handle = match self.free.pop() {
            Some(handle) => {
                self.slots[handle.0] = Some(slot);
                handle
            }
            None => {
                self.slots.push(Some(slot));
                Handle(self.slots.len() - 1)
            }
        };
        match self.head {
            Some(old_head) => self.slot_mut(old_head).more_recent = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    /// Unlinks a slot from the chain without vacating it.
    fn detach(&mut self, handle: Handle) {
        let (more, less) = {
            let slot = self.slot(handle);
            (slot.more_recent, slot.less_recent)
        };
        match more {
            Some(more) => self.slot_mut(more).less_recent = less,
            None => self.head = less,
        }
        match less {
            Some(less) => self.slot_mut(less).more_recent = more,
            None => self.tail = more,
        }
    }

    /// Moves the slot named by `handle` to the front of the chain.
    ///
    /// Relocates exactly one slot; every other slot keeps its relative
    /// order. No-op when the slot is already at the front.
    pub(crate) fn move_to_front(&mut self, handle: Handle) {
        if self.head == Some(handle) {
            return;
        }
        self.detach(handle);
        let old_head = self.head;
        {
            let slot = self.slot_mut(handle);
            slot.more_recent = None;
            slot.less_recent = old_head;
        }
        if let Some(old_head) = old_head {
            self.slot_mut(old_head).more_recent = Some(handle);
        }
        self.head = Some(handle);
        if self.tail.is_none() {
            self.tail = Some(handle);
        }
    }

    /// Removes the slot named by `handle` and returns its value.
    ///
    /// The handle is invalid afterwards; its slot goes on the free list for
    /// reuse by a later `push_front`.
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        self.detach(handle);
        let slot = match self.slots[handle.0].take() {
            Some(slot) => slot,
            None => unreachable!("handle names a vacant slot"),
        };
        self.free.push(handle);
        self.len -= 1;
        slot.val
    }

    /// Removes the least recently used value, if any.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.remove(tail))
    }

    /// Drops every value and resets the chain.
    ///
    /// The arena's allocation is retained for reuse; handles issued before
    /// the call are all invalid afterwards.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates over the values from most to least recently used.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("cap", &self.cap)
            .field("len", &self.len)
            .finish()
    }
}

/// Iterator over list values in recency order (front to back).
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let handle = self.next?;
        let slot = self.list.slot(handle);
        self.next = slot.less_recent;
        self.remaining -= 1;
        Some(&slot.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
