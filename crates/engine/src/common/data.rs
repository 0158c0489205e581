//! Memory Access Kinds.
//!
//! This module defines the classification of trace events replayed by the
//! simulator. The kind is used for the following:
//! 1. **Dirty Tracking:** A write marks the touched cache line dirty.
//! 2. **Statistics Tracking:** Reads and writes are counted separately, as
//!    are their miss counters.

/// Kind of memory access event in the trace.
///
/// Every trace event is either a load or a store; instruction fetches are
/// not modeled by this engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// Data read access (a load in the driving trace).
    Read,

    /// Data write access (a store in the driving trace).
    ///
    /// Writes mark the target line dirty; the dirty bit is what later
    /// produces write-back accounting on eviction.
    Write,
}
