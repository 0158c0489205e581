//! Victim Cache.
//!
//! A small fully-associative overflow buffer holding lines evicted from the
//! main store. It keeps its own monotonic insertion clock, independent of
//! the global access clock, so eviction from a full victim cache is true
//! insertion-order replacement rather than LRU-by-use.
//!
//! A capacity of zero degenerates every operation to a no-op: lookups miss
//! immediately and inserts vanish (the caller then write-backs dirty
//! evictions directly).

use tracing::trace;

use super::line::CacheLine;

/// Fully-associative buffer of recently evicted lines.
#[derive(Debug)]
pub struct VictimCache {
    entries: Vec<CacheLine>,
    clock: u64,
}

impl VictimCache {
    /// Allocates a victim cache with `capacity` invalid entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![CacheLine::default(); capacity],
            clock: 0,
        }
    }

    /// Victim cache capacity in entries.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Searches for a valid entry matching `(tag, set_index)`.
    ///
    /// The set index participates in the match because the buffer is shared
    /// across all sets: equal tags from different sets are distinct lines.
    /// Returns `None` immediately when the capacity is zero.
    pub fn lookup(&self, tag: u64, set_index: u64) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.valid && entry.tag == tag && entry.set_index == set_index)
    }

    /// Inserts an evicted line, stamping it with the next insertion-clock
    /// value.
    ///
    /// Prefers an invalid slot; when full, the entry with the smallest
    /// insertion stamp is overwritten. Returns `true` if the overwritten
    /// entry was dirty and therefore produced a write-back (the caller
    /// owns the counter). With zero capacity the line is dropped and no
    /// write-back is signaled here.
    pub fn insert(&mut self, line: CacheLine) -> bool {
        if self.entries.is_empty() {
            return false;
        }

        if let Some(slot) = self.entries.iter().position(|entry| !entry.valid) {
            self.entries[slot] = line;
            self.entries[slot].timestamp = self.next_tick();
            return false;
        }

        let mut oldest = 0;
        for slot in 1..self.entries.len() {
            if self.entries[slot].timestamp < self.entries[oldest].timestamp {
                oldest = slot;
            }
        }

        let wrote_back = self.entries[oldest].dirty;
        if wrote_back {
            trace!(
                tag = self.entries[oldest].tag,
                set = self.entries[oldest].set_index,
                "victim cache overwrote dirty entry, writing back"
            );
        }

        self.entries[oldest] = line;
        self.entries[oldest].timestamp = self.next_tick();
        wrote_back
    }

    /// Exclusive access to one entry, for the in-place exchange on a
    /// victim hit.
    pub fn entry_mut(&mut self, slot: usize) -> &mut CacheLine {
        &mut self.entries[slot]
    }

    /// Shared access to one entry.
    pub fn entry(&self, slot: usize) -> &CacheLine {
        &self.entries[slot]
    }

    fn next_tick(&mut self) -> u64 {
        let tick = self.clock;
        self.clock += 1;
        tick
    }
}
