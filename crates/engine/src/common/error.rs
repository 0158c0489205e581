//! Configuration Error Definitions.
//!
//! This module defines the error surface of the simulator. It is small by
//! design: trace replay itself has no recoverable failure modes (malformed
//! trace input is the driver's contract to uphold), so the only errors are
//! caller contract violations detected when the cache geometry is built.

use thiserror::Error;

/// Errors produced when validating a cache configuration.
///
/// Construction fails fast on an impossible geometry rather than silently
/// wrapping bit widths during address decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// More ways were requested per set than the cache has blocks.
    ///
    /// The index width is `c - b - s`; it must be non-negative, i.e. the
    /// associativity exponent `s` may not exceed the block-count exponent
    /// `c - b`.
    #[error(
        "invalid cache geometry: 2^{assoc_log2} ways per set exceeds the \
         2^(c-b) blocks of storage \
         (c={capacity_log2}, b={block_log2}, s={assoc_log2})"
    )]
    InvalidGeometry {
        /// Total capacity exponent (`c`).
        capacity_log2: u64,
        /// Block size exponent (`b`).
        block_log2: u64,
        /// Associativity exponent (`s`).
        assoc_log2: u64,
    },

    /// The geometry does not fit a 64-bit address.
    ///
    /// Offset and index bits together must leave at least one tag bit.
    #[error(
        "cache geometry does not fit a 64-bit address: \
         offset ({block_log2}) + index ({index_bits}) bits >= 64"
    )]
    AddressOverflow {
        /// Block size exponent (`b`), i.e. the offset width.
        block_log2: u64,
        /// Derived index width (`c - b - s`).
        index_bits: u64,
    },
}
