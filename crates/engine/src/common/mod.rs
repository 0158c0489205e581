//! Common types and constants shared across the cache simulator.
//!
//! This module provides the building blocks used by every component of the
//! engine. It includes:
//! 1. **Address Decomposition:** Tag/index/offset extraction from raw
//!    64-bit addresses.
//! 2. **Constants:** The closed-form timing-model constants.
//! 3. **Access Kinds:** Classification of trace events (Read/Write).
//! 4. **Error Handling:** Configuration contract violations.

/// Address decomposition (tag/index/offset fields and masks).
pub mod addr;

/// Timing-model constants used at finalize time.
pub mod constants;

/// Trace event kind definitions.
pub mod data;

/// Configuration error types.
pub mod error;

pub use addr::{AddressDecoder, DecodedAddr};
pub use constants::{HIT_TIME_BASE, HIT_TIME_PER_ASSOC_BIT, MISS_PENALTY};
pub use data::AccessKind;
pub use error::ConfigError;
