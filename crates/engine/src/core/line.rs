//! Cache Line Record.
//!
//! A cache line is a plain value record holding address metadata and status
//! bits; no data payload is modeled. Lines live only inside a [`LineStore`]
//! slot or a victim-cache slot and are exchanged by move/assignment, never
//! through aliased pointers.
//!
//! [`LineStore`]: super::store::LineStore

/// One cache line's metadata and status bits.
///
/// `set_index` is carried alongside the tag because the victim cache is
/// fully associative: two different sets can evict lines with equal tags,
/// so a victim-cache match is on the `(tag, set_index)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// High address bits identifying the block within its originating set.
    pub tag: u64,
    /// Index of the set this line was installed for.
    pub set_index: u64,
    /// Byte offset of the demand access that installed the line
    /// (0 for speculative installs).
    pub offset: u64,
    /// Logical clock stamp ordering recency. Main-cache lines are stamped
    /// from the global access clock; victim-cache slots from the victim
    /// cache's own insertion clock.
    pub timestamp: u64,
    /// Whether the slot holds a live line.
    pub valid: bool,
    /// Set by a write hit or write install; cleared by write-back.
    pub dirty: bool,
    /// Set on speculative installs; cleared (with useful-prefetch credit)
    /// by the first demand or victim hit that touches the line.
    pub prefetched: bool,
}
