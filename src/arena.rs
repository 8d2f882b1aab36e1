//! Slot arena backing the node allocation channels.
//!
//! The tree owns two independent arenas, one per node kind. Nodes are
//! addressed by stable `u32` slot indices instead of pointers, so parent
//! back-references are plain indices that never participate in ownership or
//! reclamation. Vacated slots go on a free list and are reused by the next
//! allocation; every `alloc` is paired 1:1 with a `release` (or with a
//! wholesale `clear`).

/// A growable slot allocator with free-list reuse.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<u32>,
    live: usize,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` live entries before
    /// the slot vector reallocates.
    pub fn with_capacity(capacity: usize) -> Arena<T> {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Stores `value` and returns its slot index, reusing a vacated slot
    /// when one is available.
    pub fn alloc(&mut self, value: T) -> u32 {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index as usize] = Some(value);
                index
            }
            None => {
                self.slots.push(Some(value));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Removes and returns the entry at `index`, putting the slot on the
    /// free list. Returns `None` if the slot is already vacant.
    pub fn release(&mut self, index: u32) -> Option<T> {
        let value = self.slots.get_mut(index as usize)?.take()?;
        self.free.push(index);
        self.live -= 1;
        Some(value)
    }

    /// Returns a reference to the entry at `index`, if occupied.
    pub fn get(&self, index: u32) -> Option<&T> {
        self.slots.get(index as usize)?.as_ref()
    }

    /// Returns a mutable reference to the entry at `index`, if occupied.
    pub fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.slots.get_mut(index as usize)?.as_mut()
    }

    /// Number of outstanding entries (allocated and not yet released).
    pub fn live(&self) -> usize {
        self.live
    }

    /// True when no entries are outstanding.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drops every entry and resets the arena to empty.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Arena<T> {
        Arena::new()
    }
}
