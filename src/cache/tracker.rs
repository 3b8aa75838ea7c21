//! Recency Tracker Module
//!
//! Keeps resident keys in eviction order for victim selection.

use std::collections::BTreeMap;

// == Recency Tracker ==
/// Tracks touch order for eviction.
///
/// Every touch hands out a fresh stamp from a monotonically increasing
/// counter, and keys are stored in a BTreeMap keyed by that stamp:
/// - First = least recently touched (next victim)
/// - Last = most recently touched
///
/// Stamps are unique, so the order is total. The owning cache stores each
/// entry's current stamp and passes it back on touch and remove.
#[derive(Debug, Default)]
pub struct RecencyTracker {
    /// Keys by touch stamp
    order: BTreeMap<u64, Box<[u8]>>,
    /// Next stamp to hand out
    next_stamp: u64,
}

impl RecencyTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
            next_stamp: 0,
        }
    }

    // == Insert ==
    /// Adds a key at the most recent end and returns its stamp.
    pub fn insert(&mut self, key: &[u8]) -> u64 {
        let stamp = self.bump();
        self.order.insert(stamp, key.into());
        stamp
    }

    // == Touch ==
    /// Moves the key holding `stamp` to the most recent end.
    ///
    /// Returns the replacement stamp, or None if `stamp` is not tracked.
    pub fn touch(&mut self, stamp: u64) -> Option<u64> {
        let key = self.order.remove(&stamp)?;
        let fresh = self.bump();
        self.order.insert(fresh, key);
        Some(fresh)
    }

    // == Remove ==
    /// Removes the key holding `stamp` from the tracker.
    pub fn remove(&mut self, stamp: u64) -> Option<Box<[u8]>> {
        self.order.remove(&stamp)
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently touched key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<Box<[u8]>> {
        self.order.pop_first().map(|(_, key)| key)
    }

    // == Peek Oldest ==
    /// Returns the least recently touched key without removing it.
    pub fn peek_oldest(&self) -> Option<&[u8]> {
        self.order.first_key_value().map(|(_, key)| &**key)
    }

    // == Iterate ==
    /// Iterates keys from next victim to most recently touched.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.order.values().map(|key| &**key)
    }

    // == Clear ==
    /// Forgets every key and restarts the stamp counter.
    pub fn clear(&mut self) {
        self.order.clear();
        self.next_stamp = 0;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn bump(&mut self) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        stamp
    }
}
