//! Timing-Model Constants.
//!
//! This module defines the closed-form timing constants used when deriving
//! summary statistics at the end of a run. It includes:
//! 1. **Hit Time:** Base latency plus a per-associativity-bit penalty.
//! 2. **Miss Penalty:** The fixed cost charged for a full (combined) miss.

/// Base hit time in cycles for a direct-mapped cache.
pub const HIT_TIME_BASE: f64 = 2.0;

/// Additional hit time per associativity bit (log2 of the ways per set).
///
/// Wider sets need deeper recency bookkeeping, modeled as a linear cost on
/// the associativity exponent.
pub const HIT_TIME_PER_ASSOC_BIT: f64 = 0.2;

/// Fixed penalty in cycles for a miss that must go to the next level.
///
/// With a victim cache present, this is charged only against the fraction
/// of misses that also miss the victim cache; a victim hit is modeled as
/// cheap.
pub const MISS_PENALTY: u64 = 200;
