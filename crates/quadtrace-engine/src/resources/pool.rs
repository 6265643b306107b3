use std::any::type_name;
use std::collections::HashMap;

use super::error::ResourceError;

/// Index of a slot inside a [`ResourcePool`].
pub type SlotIndex = usize;

/// Number of slots a pool holds unless created with an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 128;

/// Fixed-capacity slot arena for resources of a single type.
///
/// Slots are addressed by index and looked up by string key. Released slots
/// go on a LIFO free list and are handed out again before the high-water mark
/// advances. The backing storage is allocated once for the full capacity and
/// never grows past it.
///
/// Invariants:
/// - every mapped key points at a slot below the high-water mark
/// - a slot on the free list is never mapped to a key
/// - a mapped slot is never handed to a second key
#[derive(Debug)]
pub struct ResourcePool<T> {
    slots: Vec<Option<T>>,
    capacity: usize,
    index: HashMap<String, SlotIndex>,
    free: Vec<SlotIndex>,
    next: SlotIndex,
}

impl<T> ResourcePool<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            index: HashMap::new(),
            free: Vec::new(),
            next: 0,
        }
    }

    /// Returns the slot mapped to `key`, allocating one if needed.
    ///
    /// Recycled slots are preferred over fresh ones (most recently released
    /// first). The returned slot is always registered under `key`, so a second
    /// call with the same key yields the same index.
    pub fn slot_for(&mut self, key: &str) -> Result<SlotIndex, ResourceError> {
        if let Some(&slot) = self.index.get(key) {
            return Ok(slot);
        }

        let slot = if let Some(slot) = self.free.pop() {
            slot
        } else if self.next < self.capacity {
            let slot = self.next;
            self.next += 1;
            self.slots.push(None);
            slot
        } else {
            return Err(ResourceError::CapacityExceeded {
                type_name: type_name::<T>(),
                capacity: self.capacity,
                key: key.to_owned(),
            });
        };

        self.index.insert(key.to_owned(), slot);
        Ok(slot)
    }

    /// True when `slot_for(key)` would succeed.
    pub fn has_room_for(&self, key: &str) -> bool {
        self.index.contains_key(key) || !self.free.is_empty() || self.next < self.capacity
    }

    /// Stores `value` under `key` and returns its slot.
    ///
    /// A value already living in that slot is dropped.
    pub fn insert(&mut self, key: &str, value: T) -> Result<SlotIndex, ResourceError> {
        let slot = self.slot_for(key)?;
        if self.slots[slot].replace(value).is_some() {
            log::trace!("replaced `{key}` in slot {slot} ({})", type_name::<T>());
        }
        Ok(slot)
    }

    /// Unmaps `key` and returns its value; the slot becomes reusable.
    ///
    /// A key mapped by [`slot_for`](Self::slot_for) but never filled is still
    /// unmapped and its slot freed; the result is `None` then too. An unmapped
    /// key changes nothing.
    pub fn release(&mut self, key: &str) -> Option<T> {
        let slot = self.index.remove(key)?;
        self.free.push(slot);
        self.slots[slot].take()
    }

    /// Contents of slot `index`, if it is allocated and filled.
    pub fn slot(&self, index: SlotIndex) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    pub fn slot_mut(&mut self, index: SlotIndex) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    pub fn index_of(&self, key: &str) -> Option<SlotIndex> {
        self.index.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.slot(self.index_of(key)?)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let slot = self.index_of(key)?;
        self.slot_mut(slot)
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size in bytes of one stored element.
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Number of slots ever handed out (the next fresh slot index).
    pub fn high_water(&self) -> SlotIndex {
        self.next
    }

    /// Released slots awaiting reuse, oldest first.
    pub fn free_slots(&self) -> &[SlotIndex] {
        &self.free
    }

    /// Iterates `(key, slot, value)` for every filled, mapped slot.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SlotIndex, &T)> + '_ {
        self.index.iter().filter_map(|(key, &slot)| {
            self.slots[slot].as_ref().map(|value| (key.as_str(), slot, value))
        })
    }
}

impl<T> Default for ResourcePool<T> {
    fn default() -> Self {
        Self::new()
    }
}
