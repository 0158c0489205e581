//! Stride Prefetcher.
//!
//! Detects repeated constant strides between consecutive demand-miss block
//! addresses and emits speculative fetch targets ahead of the stream. The
//! state is global to the run (one last-miss address, one pending stride),
//! not tracked per instruction or per line.
//!
//! The trigger rule: a prefetch burst fires when the delta between this
//! miss and the previous one equals the pending stride, i.e. the same
//! stride has been observed twice in a row. The burst targets
//! `block + i * stride` for `i = 1..=distance`, using the stride that just
//! repeated. The pending stride is always updated afterwards, fired or not.

use tracing::trace;

/// Stride-detection state and prefetch distance.
#[derive(Debug)]
pub struct StridePrefetcher {
    last_miss_block: u64,
    pending_stride: i64,
    distance: u64,
}

impl StridePrefetcher {
    /// Creates a prefetcher issuing `distance` blocks per trigger.
    ///
    /// A distance of 0 disables prefetching; `observe` then never emits.
    pub fn new(distance: u64) -> Self {
        Self {
            last_miss_block: 0,
            pending_stride: 0,
            distance,
        }
    }

    /// Prefetch distance in blocks.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Whether prefetching is enabled at all.
    pub fn enabled(&self) -> bool {
        self.distance > 0
    }

    /// Observes one demand-miss block address and returns the speculative
    /// targets to fetch, if the stride pattern repeated.
    ///
    /// Deltas wrap: a descending stream produces a negative stride through
    /// two's-complement wrapping and prefetches backwards.
    pub fn observe(&mut self, block_addr: u64) -> Vec<u64> {
        let delta = block_addr.wrapping_sub(self.last_miss_block) as i64;
        self.last_miss_block = block_addr;

        let mut targets = Vec::new();
        if delta == self.pending_stride && self.enabled() {
            for i in 1..=self.distance {
                targets.push(block_addr.wrapping_add((delta.wrapping_mul(i as i64)) as u64));
            }
            trace!(
                block = block_addr,
                stride = delta,
                count = targets.len(),
                "stride repeated, issuing prefetch burst"
            );
        }

        self.pending_stride = delta;
        targets
    }
}
