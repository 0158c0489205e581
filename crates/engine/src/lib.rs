//! Trace-driven cache simulator library.
//!
//! This crate implements a single-level set-associative cache simulator
//! with the following:
//! 1. **Core:** Address decomposition, LRU line store, victim cache, and
//!    stride prefetcher, replayed one trace event at a time.
//! 2. **Configuration:** Geometry exponents and feature knobs, validated
//!    fail-fast, deserializable from JSON.
//! 3. **Statistics:** Per-event counters and the closed-form summary
//!    metrics (miss rate, bytes transferred, average access time).
//!
//! The trace-reading and reporting shell is expected to live in the
//! driving application; this crate exposes exactly three entry points:
//! [`CacheSim::new`], [`CacheSim::access`], and [`CacheSim::finalize`].
//!
//! # Examples
//!
//! ```
//! use cachesim_core::{AccessKind, CacheConfig, CacheSim};
//!
//! let config = CacheConfig {
//!     capacity_log2: 10,
//!     block_log2: 5,
//!     assoc_log2: 1,
//!     victim_entries: 2,
//!     prefetch_distance: 0,
//! };
//! let mut sim = CacheSim::new(&config).unwrap();
//!
//! sim.access(AccessKind::Read, 0x1000);  // cold miss
//! sim.access(AccessKind::Read, 0x1000);  // hit
//!
//! let stats = sim.finalize();
//! assert_eq!(stats.accesses, 2);
//! assert_eq!(stats.misses, 1);
//! ```

/// Common types and constants (addresses, access kinds, errors, timing).
pub mod common;
/// Simulator configuration (defaults, validation, JSON deserialization).
pub mod config;
/// Simulation core (line store, victim cache, prefetcher, event flow).
pub mod core;
/// Statistics collection, derivation, and reporting.
pub mod stats;

/// Trace event kind; every access is a `Read` or a `Write`.
pub use crate::common::AccessKind;
/// Configuration error surface; produced only at construction time.
pub use crate::common::ConfigError;
/// Cache geometry and feature configuration; use `CacheConfig::default()`
/// or deserialize from JSON.
pub use crate::config::CacheConfig;
/// The simulator itself; construct with `CacheSim::new`.
pub use crate::core::CacheSim;
/// Final statistics snapshot returned by `CacheSim::finalize`.
pub use crate::stats::CacheStats;
