//! Trace-Driven Cache Simulator Core.
//!
//! This module implements the simulation engine: a single-level
//! set-associative cache with LRU replacement, backed by a small
//! fully-associative victim cache and a stride prefetcher. One [`CacheSim`]
//! owns every piece of run state; the driving shell replays `(kind,
//! address)` events through [`CacheSim::access`] and collects the final
//! statistics from [`CacheSim::finalize`].
//!
//! Processing is fully synchronous and single-threaded: each event runs to
//! completion before the next is accepted. `finalize` consumes the
//! simulator, so no event can be processed afterwards and finalize cannot
//! be called twice.

/// Cache line record (tag, status bits, logical clock stamp).
pub mod line;

/// Stride-pattern prefetcher.
pub mod prefetch;

/// Set-associative line store with LRU victim selection.
pub mod store;

/// Fully-associative victim cache.
pub mod victim;

use std::mem;

use tracing::{debug, trace};

use self::line::CacheLine;
use self::prefetch::StridePrefetcher;
use self::store::LineStore;
use self::victim::VictimCache;
use crate::common::addr::{AddressDecoder, DecodedAddr};
use crate::common::constants::{HIT_TIME_BASE, HIT_TIME_PER_ASSOC_BIT};
use crate::common::{AccessKind, ConfigError};
use crate::config::CacheConfig;
use crate::stats::CacheStats;

/// The cache simulator.
///
/// Owns the main line store, the victim cache, the prefetcher state, the
/// logical access clock, and the statistics counters for one run. All
/// storage is allocated by [`CacheSim::new`] and released when the value is
/// dropped or consumed by [`CacheSim::finalize`].
#[derive(Debug)]
pub struct CacheSim {
    decoder: AddressDecoder,
    store: LineStore,
    victim: VictimCache,
    prefetcher: StridePrefetcher,
    stats: CacheStats,
    clock: u64,
    block_bytes: u64,
    hit_time: f64,
}

impl CacheSim {
    /// Builds a simulator from a validated configuration.
    ///
    /// All line storage is allocated here, initialized invalid and clean.
    /// The hit time is a fixed function of associativity, computed once:
    /// `2.0 + 0.2 * s` cycles.
    ///
    /// # Errors
    ///
    /// Fails fast with a [`ConfigError`] if the geometry is impossible
    /// (see [`CacheConfig::validate`]).
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let decoder =
            AddressDecoder::new(config.capacity_log2, config.block_log2, config.assoc_log2);
        let store = LineStore::new(config.num_sets(), config.ways());
        let victim = VictimCache::new(config.victim_entries);
        let prefetcher = StridePrefetcher::new(config.prefetch_distance);
        let hit_time = HIT_TIME_BASE + HIT_TIME_PER_ASSOC_BIT * config.assoc_log2 as f64;

        debug!(
            sets = store.num_sets(),
            ways = store.ways(),
            block_bytes = config.block_bytes(),
            victim_entries = victim.capacity(),
            prefetch_distance = prefetcher.distance(),
            fully_associative = decoder.fully_associative(),
            "configured cache simulator"
        );

        Ok(Self {
            decoder,
            store,
            victim,
            prefetcher,
            stats: CacheStats::default(),
            clock: 0,
            block_bytes: config.block_bytes(),
            hit_time,
        })
    }

    /// Processes one trace event.
    ///
    /// On a main-cache hit the line's recency is refreshed (and the dirty
    /// bit set on a write). On a miss the victim cache is consulted; a
    /// victim hit swaps the recovered line back into the main set, while a
    /// combined miss evicts the LRU way into the victim cache and installs
    /// a fresh line. Every main-cache miss also feeds the stride
    /// prefetcher, which may issue speculative fetches through the same
    /// machinery.
    pub fn access(&mut self, kind: AccessKind, address: u64) {
        self.stats.accesses += 1;
        match kind {
            AccessKind::Read => self.stats.reads += 1,
            AccessKind::Write => self.stats.writes += 1,
        }

        let at = self.decoder.decode(address);

        if let Some(way) = self.store.lookup(at.index, at.tag) {
            let tick = self.next_tick();
            let line = self.store.line_mut(at.index, way);
            line.timestamp = tick;
            if kind == AccessKind::Write {
                line.dirty = true;
            }
            if line.prefetched {
                line.prefetched = false;
                self.stats.useful_prefetches += 1;
            }
            return;
        }

        match kind {
            AccessKind::Read => self.stats.read_misses += 1,
            AccessKind::Write => self.stats.write_misses += 1,
        }

        self.fill_demand(kind, at);

        if self.prefetcher.enabled() {
            let block = self.decoder.block_base(address);
            let targets = self.prefetcher.observe(block);
            for target in targets {
                self.speculative_fetch(target);
                self.stats.prefetched_blocks += 1;
            }
        }
    }

    /// Completes the run: derives the summary metrics and releases all
    /// storage.
    ///
    /// Consuming `self` makes processing an event after finalize, or
    /// finalizing twice, a compile error.
    pub fn finalize(self) -> CacheStats {
        let Self {
            victim,
            mut stats,
            block_bytes,
            hit_time,
            ..
        } = self;

        stats.derive(block_bytes, hit_time, victim.capacity() > 0);
        stats
    }

    /// Read-only view of the counters accumulated so far.
    ///
    /// The derived fields stay zero until [`CacheSim::finalize`].
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Handles a demand miss at the decoded location.
    fn fill_demand(&mut self, kind: AccessKind, at: DecodedAddr) {
        let way = self.store.victim_way(at.index);

        if let Some(slot) = self.victim.lookup(at.tag, at.index) {
            let tick = self.next_tick();
            self.exchange_with_victim(at.index, way, slot);
            let line = self.store.line_mut(at.index, way);
            line.timestamp = tick;
            if kind == AccessKind::Write {
                line.dirty = true;
            }
            if line.prefetched {
                line.prefetched = false;
                self.stats.useful_prefetches += 1;
            }
            return;
        }

        match kind {
            AccessKind::Read => self.stats.read_misses_combined += 1,
            AccessKind::Write => self.stats.write_misses_combined += 1,
        }
        self.stats.vc_misses += 1;

        self.evict(at.index, way);

        let tick = self.next_tick();
        *self.store.line_mut(at.index, way) = CacheLine {
            tag: at.tag,
            set_index: at.index,
            offset: at.offset,
            timestamp: tick,
            valid: true,
            dirty: kind == AccessKind::Write,
            prefetched: false,
        };
    }

    /// Runs one speculative lookup through the demand machinery.
    ///
    /// Differences from a demand access: no demand counters are touched, a
    /// main-cache hit does nothing at all, and installed lines are flagged
    /// `prefetched` and stamped one below the set's smallest valid
    /// timestamp so they are the next eviction candidate until a real
    /// access touches them.
    fn speculative_fetch(&mut self, address: u64) {
        let at = self.decoder.decode(address);

        if self.store.lookup(at.index, at.tag).is_some() {
            return;
        }

        let way = self.store.victim_way(at.index);

        if let Some(slot) = self.victim.lookup(at.tag, at.index) {
            self.exchange_with_victim(at.index, way, slot);
            let floor = self.store.min_valid_timestamp(at.index).unwrap_or(0);
            let line = self.store.line_mut(at.index, way);
            line.timestamp = floor.saturating_sub(1);
            line.prefetched = true;
            return;
        }

        self.evict(at.index, way);

        let floor = self.store.min_valid_timestamp(at.index).unwrap_or(0);
        *self.store.line_mut(at.index, way) = CacheLine {
            tag: at.tag,
            set_index: at.index,
            offset: 0,
            timestamp: floor.saturating_sub(1),
            valid: true,
            dirty: false,
            prefetched: true,
        };
    }

    /// Swaps the chosen main-cache way with a victim-cache entry in place.
    ///
    /// The victim slot keeps the insertion stamp it already held, so
    /// victim-clock values never mix with the access clock; the caller
    /// stamps the recovered main-cache line afterwards.
    fn exchange_with_victim(&mut self, set: u64, way: usize, slot: usize) {
        let slot_stamp = self.victim.entry(slot).timestamp;
        mem::swap(self.store.line_mut(set, way), self.victim.entry_mut(slot));
        self.victim.entry_mut(slot).timestamp = slot_stamp;
        trace!(
            set,
            way,
            slot,
            tag = self.store.line(set, way).tag,
            "recovered line from victim cache"
        );
    }

    /// Pushes the chosen way out of the main cache ahead of an install.
    ///
    /// A valid line goes to the victim cache (which signals a write-back
    /// when it overwrites a dirty entry). With no victim cache, a dirty
    /// line is written back immediately instead.
    fn evict(&mut self, set: u64, way: usize) {
        let outgoing = *self.store.line(set, way);
        if !outgoing.valid {
            return;
        }

        trace!(set, way, tag = outgoing.tag, dirty = outgoing.dirty, "evicting line");

        if self.victim.capacity() == 0 {
            if outgoing.dirty {
                self.stats.write_backs += 1;
                trace!(set, tag = outgoing.tag, "write back on eviction");
            }
            return;
        }

        if self.victim.insert(outgoing) {
            self.stats.write_backs += 1;
        }
    }

    /// Advances the global access clock and returns the stamp to use.
    ///
    /// The first stamp is 1, so a speculative install's `min_valid - 1`
    /// floor sits strictly below even the coldest demand line.
    fn next_tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}
