//! Victim Cache Tests.
//!
//! Verifies (tag, set index) matching, fill-then-insertion-order
//! replacement, dirty write-back signaling on overwrite, and the
//! degenerate zero-capacity behavior.

use cachesim_core::core::line::CacheLine;
use cachesim_core::core::victim::VictimCache;

/// A valid line with the given identity and dirty bit.
fn evicted(tag: u64, set_index: u64, dirty: bool) -> CacheLine {
    CacheLine {
        tag,
        set_index,
        valid: true,
        dirty,
        ..CacheLine::default()
    }
}

// ══════════════════════════════════════════════════════════
// 1. Zero capacity
// ══════════════════════════════════════════════════════════

/// With no entries every operation degenerates: lookups miss immediately
/// and inserts vanish without signaling a write-back.
#[test]
fn zero_capacity_is_a_no_op() {
    let mut vc = VictimCache::new(0);
    assert_eq!(vc.capacity(), 0);
    assert_eq!(vc.lookup(0x1, 0), None);
    assert!(!vc.insert(evicted(0x1, 0, true)));
    assert_eq!(vc.lookup(0x1, 0), None);
}

// ══════════════════════════════════════════════════════════
// 2. Matching
// ══════════════════════════════════════════════════════════

/// A match requires both the tag and the originating set index: two sets
/// can evict lines with equal tags.
#[test]
fn lookup_matches_on_tag_and_set_index() {
    let mut vc = VictimCache::new(4);
    assert!(!vc.insert(evicted(0x7, 1, false)));

    assert_eq!(vc.lookup(0x7, 1), Some(0));
    assert_eq!(vc.lookup(0x7, 2), None, "same tag, wrong set");
    assert_eq!(vc.lookup(0x8, 1), None, "wrong tag, same set");
}

// ══════════════════════════════════════════════════════════
// 3. Insertion and replacement
// ══════════════════════════════════════════════════════════

/// Inserts land in invalid slots first and carry increasing insertion
/// stamps from the victim cache's own clock.
#[test]
fn insert_fills_invalid_slots_in_order() {
    let mut vc = VictimCache::new(2);
    assert!(!vc.insert(evicted(0xA, 0, false)));
    assert!(!vc.insert(evicted(0xB, 0, false)));

    assert_eq!(vc.entry(0).tag, 0xA);
    assert_eq!(vc.entry(1).tag, 0xB);
    assert!(vc.entry(0).timestamp < vc.entry(1).timestamp);
}

/// A full victim cache overwrites the entry with the smallest insertion
/// stamp: true insertion order, not recency of use.
#[test]
fn full_cache_overwrites_oldest_insertion() {
    let mut vc = VictimCache::new(2);
    assert!(!vc.insert(evicted(0xA, 0, false)));
    assert!(!vc.insert(evicted(0xB, 0, false)));

    // 0xA was inserted first, so it is displaced.
    assert!(!vc.insert(evicted(0xC, 0, false)));
    assert_eq!(vc.lookup(0xA, 0), None);
    assert_eq!(vc.lookup(0xB, 0), Some(1));
    assert_eq!(vc.lookup(0xC, 0), Some(0));
}

/// Overwriting a dirty entry signals exactly one write-back to the caller.
#[test]
fn overwriting_dirty_entry_signals_write_back() {
    let mut vc = VictimCache::new(1);
    assert!(!vc.insert(evicted(0xA, 0, true)), "fill is not a write-back");
    assert!(vc.insert(evicted(0xB, 0, false)), "displacing dirty 0xA is");
    assert!(!vc.insert(evicted(0xC, 0, true)), "displacing clean 0xB is not");
}
