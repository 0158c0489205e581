//! Set-Associative Line Store.
//!
//! The main cache array: `num_sets * ways` line slots in one flat vector,
//! addressed as `set * ways + way`. The store owns lookup and the LRU
//! replacement decision; it never touches statistics, which keeps both
//! operations side-effect free and directly testable.
//!
//! Replacement is least-recently-used over the global access clock, with
//! fill-before-evict: an invalid way is always chosen over evicting a live
//! line, and ties on the timestamp scan resolve to the lowest way index.

use super::line::CacheLine;

/// The set-associative array of cache lines.
#[derive(Debug)]
pub struct LineStore {
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
}

impl LineStore {
    /// Allocates a store of `num_sets * ways` invalid, clean lines.
    pub fn new(num_sets: usize, ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); num_sets * ways],
            num_sets,
            ways,
        }
    }

    /// Number of sets in the store.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Ways per set.
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Searches a set for a valid line with the given tag.
    ///
    /// Scans the ways in ascending order and returns the first match. The
    /// per-set tag-uniqueness invariant means at most one line can match,
    /// so first-match is exact. No side effects.
    pub fn lookup(&self, set: u64, tag: u64) -> Option<usize> {
        let base = set as usize * self.ways;
        (0..self.ways).find(|&way| {
            let line = &self.lines[base + way];
            line.valid && line.tag == tag
        })
    }

    /// Selects the way a new line for this set will replace.
    ///
    /// Fill-before-evict: the first invalid way wins. Otherwise the way
    /// with the globally smallest timestamp is the LRU victim; the scan
    /// keeps the first minimum, so ties favor the lowest way index. Pure
    /// function of the current set state.
    pub fn victim_way(&self, set: u64) -> usize {
        let base = set as usize * self.ways;

        for way in 0..self.ways {
            if !self.lines[base + way].valid {
                return way;
            }
        }

        let mut victim = 0;
        let mut oldest = self.lines[base].timestamp;
        for way in 1..self.ways {
            let ts = self.lines[base + way].timestamp;
            if ts < oldest {
                victim = way;
                oldest = ts;
            }
        }
        victim
    }

    /// Smallest timestamp among the valid lines of a set, if any.
    ///
    /// Speculative installs are stamped one below this floor so they are
    /// the next eviction candidate until a real access touches them.
    pub fn min_valid_timestamp(&self, set: u64) -> Option<u64> {
        let base = set as usize * self.ways;
        self.lines[base..base + self.ways]
            .iter()
            .filter(|line| line.valid)
            .map(|line| line.timestamp)
            .min()
    }

    /// Shared access to one line slot.
    pub fn line(&self, set: u64, way: usize) -> &CacheLine {
        &self.lines[set as usize * self.ways + way]
    }

    /// Exclusive access to one line slot.
    pub fn line_mut(&mut self, set: u64, way: usize) -> &mut CacheLine {
        &mut self.lines[set as usize * self.ways + way]
    }
}
