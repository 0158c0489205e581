//! Line Store and LRU Replacement Tests.
//!
//! Verifies first-match lookup, fill-before-evict victim selection, the
//! LRU timestamp scan with its lowest-way tie-break, and the minimum
//! valid-timestamp floor used by speculative installs.

use cachesim_core::core::line::CacheLine;
use cachesim_core::core::store::LineStore;

/// Installs a minimal valid line at (set, way) with the given tag and
/// timestamp.
fn install(store: &mut LineStore, set: u64, way: usize, tag: u64, timestamp: u64) {
    *store.line_mut(set, way) = CacheLine {
        tag,
        set_index: set,
        timestamp,
        valid: true,
        ..CacheLine::default()
    };
}

// ══════════════════════════════════════════════════════════
// 1. Lookup
// ══════════════════════════════════════════════════════════

/// An empty store matches nothing.
#[test]
fn lookup_on_empty_store_misses() {
    let store = LineStore::new(4, 2);
    assert_eq!(store.lookup(0, 0x12), None);
}

/// Lookup finds a valid line by tag within the right set only.
#[test]
fn lookup_matches_tag_within_set() {
    let mut store = LineStore::new(4, 2);
    install(&mut store, 1, 1, 0x12, 7);

    assert_eq!(store.lookup(1, 0x12), Some(1));
    assert_eq!(store.lookup(0, 0x12), None, "other sets must not match");
    assert_eq!(store.lookup(1, 0x13), None, "other tags must not match");
}

/// An invalid slot never matches, even with an equal tag.
#[test]
fn lookup_ignores_invalid_lines() {
    let mut store = LineStore::new(1, 2);
    let line = store.line_mut(0, 0);
    line.tag = 0x12;
    line.valid = false;

    assert_eq!(store.lookup(0, 0x12), None);
}

// ══════════════════════════════════════════════════════════
// 2. Victim selection
// ══════════════════════════════════════════════════════════

/// Fill-before-evict: the first invalid way wins over any valid line,
/// regardless of timestamps.
#[test]
fn victim_prefers_first_invalid_way() {
    let mut store = LineStore::new(1, 4);
    install(&mut store, 0, 0, 0xA, 9);
    install(&mut store, 0, 1, 0xB, 1);
    // Ways 2 and 3 are still invalid.

    assert_eq!(store.victim_way(0), 2);
}

/// With a full set, the way holding the smallest timestamp is the victim.
#[test]
fn victim_is_least_recently_stamped() {
    let mut store = LineStore::new(1, 4);
    install(&mut store, 0, 0, 0xA, 5);
    install(&mut store, 0, 1, 0xB, 3);
    install(&mut store, 0, 2, 0xC, 9);
    install(&mut store, 0, 3, 0xD, 7);

    assert_eq!(store.victim_way(0), 1);
}

/// Equal timestamps resolve to the lowest way index (first minimum kept).
#[test]
fn victim_tie_break_favors_lowest_way() {
    let mut store = LineStore::new(1, 4);
    install(&mut store, 0, 0, 0xA, 4);
    install(&mut store, 0, 1, 0xB, 4);
    install(&mut store, 0, 2, 0xC, 7);
    install(&mut store, 0, 3, 0xD, 9);

    assert_eq!(store.victim_way(0), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Timestamp floor
// ══════════════════════════════════════════════════════════

/// The floor ranges over valid lines only, and is None for an empty set.
#[test]
fn min_valid_timestamp_skips_invalid_lines() {
    let mut store = LineStore::new(1, 4);
    assert_eq!(store.min_valid_timestamp(0), None);

    install(&mut store, 0, 2, 0xC, 6);
    install(&mut store, 0, 3, 0xD, 4);
    // Ways 0 and 1 stay invalid with default timestamp 0.

    assert_eq!(store.min_valid_timestamp(0), Some(4));
}
