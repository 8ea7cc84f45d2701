//! registry/slots.rs
//! Fixed-size sparse table addressed by small integer keys.

use crate::constants::SLOT_COUNT;

/// `SLOT_COUNT` optional entries; an empty slot means "not registered".
pub struct SlotTable<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotTable<T> {
    pub fn new() -> Self {
        Self {
            slots: (0..SLOT_COUNT).map(|_| None).collect(),
        }
    }

    /// Store `entry` at `index`, returning what was there.
    pub fn set(&mut self, index: usize, entry: T) -> Option<T> {
        self.slots[index].replace(entry)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Occupied slots in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|entry| (i, entry)))
    }

    pub fn occupied(&self) -> Vec<usize> {
        self.iter().map(|(i, _)| i).collect()
    }
}

impl<T> Default for SlotTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot for a built-in code: -1 -> 0, -2 -> 1, ..., -128 -> 127.
#[inline]
pub const fn builtin_index(type_code: i8) -> usize {
    (-1 - type_code as i16) as usize
}

/// Inverse of `builtin_index`.
#[inline]
pub const fn builtin_type_code(index: usize) -> i8 {
    (-1 - index as i16) as i8
}
