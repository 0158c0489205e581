//! Simulation statistics collection and reporting.
//!
//! This module tracks the per-event counters of a run and derives the
//! summary metrics once the event stream ends. It provides:
//! 1. **Demand counters:** Accesses, reads/writes, and their miss counts.
//! 2. **Victim cache:** Combined-miss counts, victim-cache misses, and
//!    write-backs.
//! 3. **Prefetching:** Speculative blocks issued and useful-prefetch hits.
//! 4. **Derived metrics:** Misses, bytes transferred, hit time, miss rate,
//!    and average access time, computed exactly once at finalize.

use serde::Serialize;

use crate::common::constants::MISS_PENALTY;

/// Statistics for one simulation run.
///
/// The counter fields increment monotonically while events are processed;
/// the derived fields (`misses`, `bytes_transferred`, `hit_time`,
/// `miss_penalty`, `miss_rate`, `avg_access_time`) are zero until
/// [`CacheSim::finalize`](crate::CacheSim::finalize) fills them in.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Total trace events processed.
    pub accesses: u64,
    /// Read events processed.
    pub reads: u64,
    /// Write events processed.
    pub writes: u64,
    /// Read events that missed the main cache.
    pub read_misses: u64,
    /// Write events that missed the main cache.
    pub write_misses: u64,
    /// Read misses that also missed the victim cache.
    pub read_misses_combined: u64,
    /// Write misses that also missed the victim cache.
    pub write_misses_combined: u64,
    /// Total main-cache misses (`read_misses + write_misses`); derived.
    pub misses: u64,
    /// Dirty lines written back, from victim-cache overflow or from direct
    /// eviction when no victim cache exists.
    pub write_backs: u64,
    /// Demand misses that also missed the victim cache.
    pub vc_misses: u64,
    /// Speculative blocks issued by the prefetcher.
    pub prefetched_blocks: u64,
    /// Prefetched lines later touched by a demand or victim hit; each line
    /// is credited at most once.
    pub useful_prefetches: u64,
    /// Bytes moved between this cache and the next level; derived.
    pub bytes_transferred: u64,

    /// Hit time in cycles (fixed function of associativity); derived.
    pub hit_time: f64,
    /// Fixed miss penalty in cycles; derived (constant 200).
    pub miss_penalty: u64,
    /// `misses / accesses`, 0.0 for an empty run; derived.
    pub miss_rate: f64,
    /// Average access time in cycles, 0.0 for an empty run; derived.
    pub avg_access_time: f64,
}

impl CacheStats {
    /// Fills in the derived fields from the accumulated counters.
    ///
    /// `bytes_transferred` charges one block for every speculative fetch,
    /// every combined miss, and every write-back. The fixed miss penalty is
    /// charged against all misses when no victim cache exists, otherwise
    /// only against the fraction of misses the victim cache failed to
    /// absorb. An empty run (`accesses == 0`) reports a miss rate and
    /// average access time of 0.0 rather than NaN.
    pub(crate) fn derive(&mut self, block_bytes: u64, hit_time: f64, has_victim_cache: bool) {
        self.misses = self.read_misses + self.write_misses;
        self.bytes_transferred =
            (self.prefetched_blocks + self.vc_misses + self.write_backs) * block_bytes;
        self.hit_time = hit_time;
        self.miss_penalty = MISS_PENALTY;

        if self.accesses == 0 {
            self.miss_rate = 0.0;
            self.avg_access_time = 0.0;
            return;
        }

        self.miss_rate = self.misses as f64 / self.accesses as f64;

        let penalty = self.miss_penalty as f64;
        if has_victim_cache {
            let vc_miss_fraction = if self.misses == 0 {
                0.0
            } else {
                self.vc_misses as f64 / self.misses as f64
            };
            self.avg_access_time = self.hit_time + self.miss_rate * vc_miss_fraction * penalty;
        } else {
            self.avg_access_time = self.hit_time + self.miss_rate * penalty;
        }
    }

    /// Prints all statistics to stdout as an aligned name/value table.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.accesses);
        println!("reads                    {}", self.reads);
        println!("writes                   {}", self.writes);
        println!("----------------------------------------------------------");
        println!("read_misses              {}", self.read_misses);
        println!("write_misses             {}", self.write_misses);
        println!("read_misses_combined     {}", self.read_misses_combined);
        println!("write_misses_combined    {}", self.write_misses_combined);
        println!("misses                   {}", self.misses);
        println!("vc_misses                {}", self.vc_misses);
        println!("write_backs              {}", self.write_backs);
        println!("----------------------------------------------------------");
        println!("prefetched_blocks        {}", self.prefetched_blocks);
        println!("useful_prefetches        {}", self.useful_prefetches);
        println!("bytes_transferred        {}", self.bytes_transferred);
        println!("----------------------------------------------------------");
        println!("hit_time                 {:.2}", self.hit_time);
        println!("miss_penalty             {}", self.miss_penalty);
        println!("miss_rate                {:.4}", self.miss_rate);
        println!("avg_access_time          {:.4}", self.avg_access_time);
        println!("==========================================================");
    }
}
