//! Configuration system for the cache simulator.
//!
//! This module defines the structure that parameterizes a simulation run.
//! It provides:
//! 1. **Defaults:** The baseline geometry (32 KiB cache, 32-byte blocks,
//!    8-way sets, 4 victim entries, prefetch distance 2).
//! 2. **Validation:** Fail-fast rejection of impossible geometries.
//! 3. **Deserialization:** Configuration is supplied as JSON by the trace
//!    driver, or use `CacheConfig::default()` directly.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default total capacity exponent (2^15 = 32 KiB of data storage).
    pub const CAPACITY_LOG2: u64 = 15;

    /// Default block size exponent (2^5 = 32-byte blocks).
    pub const BLOCK_LOG2: u64 = 5;

    /// Default associativity exponent (2^3 = 8 ways per set).
    pub const ASSOC_LOG2: u64 = 3;

    /// Default victim cache capacity in entries (not log-scaled).
    pub const VICTIM_ENTRIES: usize = 4;

    /// Default prefetch distance in blocks (0 disables prefetching).
    pub const PREFETCH_DISTANCE: u64 = 2;
}

/// Cache geometry and feature configuration.
///
/// The `c`/`b`/`s` fields are power-of-two exponents; the victim cache
/// capacity and prefetch distance are plain counts. Fully-associative mode
/// is not a separate switch: it falls out of `c - b == s`, which leaves a
/// single set holding every block.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cachesim_core::config::CacheConfig;
///
/// let config = CacheConfig::default();
/// assert_eq!(config.capacity_log2, 15);
/// assert_eq!(config.block_bytes(), 32);
/// ```
///
/// Deserializing from JSON (typical trace-driver usage):
///
/// ```
/// use cachesim_core::config::CacheConfig;
///
/// let config = CacheConfig::from_json(r#"{
///     "capacity_log2": 10,
///     "block_log2": 6,
///     "assoc_log2": 2,
///     "victim_entries": 8,
///     "prefetch_distance": 0
/// }"#).unwrap();
/// assert_eq!(config.ways(), 4);
/// assert_eq!(config.num_sets(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Total data storage is `2^capacity_log2` bytes (`c`).
    pub capacity_log2: u64,
    /// A single cache block holds `2^block_log2` bytes (`b`).
    pub block_log2: u64,
    /// Each set holds `2^assoc_log2` blocks (`s`).
    pub assoc_log2: u64,
    /// Victim cache capacity in entries (`v`); 0 removes the victim cache.
    pub victim_entries: usize,
    /// Prefetch distance in blocks (`k`); 0 disables the prefetcher.
    pub prefetch_distance: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity_log2: defaults::CAPACITY_LOG2,
            block_log2: defaults::BLOCK_LOG2,
            assoc_log2: defaults::ASSOC_LOG2,
            victim_entries: defaults::VICTIM_ENTRIES,
            prefetch_distance: defaults::PREFETCH_DISTANCE,
        }
    }
}

impl CacheConfig {
    /// Parses a configuration from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the document is malformed or
    /// contains unknown fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks the geometry for caller contract violations.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidGeometry`] when `c - b < s`, i.e. more ways
    ///   are requested per set than the cache has blocks.
    /// * [`ConfigError::AddressOverflow`] when offset and index bits leave
    ///   no tag bits in a 64-bit address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity_log2 < self.block_log2 + self.assoc_log2 {
            return Err(ConfigError::InvalidGeometry {
                capacity_log2: self.capacity_log2,
                block_log2: self.block_log2,
                assoc_log2: self.assoc_log2,
            });
        }

        let index_bits = self.capacity_log2 - self.block_log2 - self.assoc_log2;
        if self.block_log2 + index_bits >= 64 {
            return Err(ConfigError::AddressOverflow {
                block_log2: self.block_log2,
                index_bits,
            });
        }

        Ok(())
    }

    /// Block size in bytes (`2^b`).
    pub fn block_bytes(&self) -> u64 {
        1u64 << self.block_log2
    }

    /// Ways per set (`2^s`).
    pub fn ways(&self) -> usize {
        1usize << self.assoc_log2
    }

    /// Number of sets (`2^(c - b - s)`; 1 when fully associative).
    ///
    /// Only meaningful on a validated configuration.
    pub fn num_sets(&self) -> usize {
        1usize << (self.capacity_log2 - self.block_log2 - self.assoc_log2)
    }
}
