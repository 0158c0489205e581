//! Stride Prefetcher Tests.
//!
//! Verifies the two-equal-strides trigger rule, the exact burst addresses,
//! unconditional state updates, negative strides, and the disabled state.

use cachesim_core::core::prefetch::StridePrefetcher;

// ══════════════════════════════════════════════════════════
// 1. Cold start
// ══════════════════════════════════════════════════════════

/// The first observed miss has no history and never fires.
#[test]
fn no_burst_on_first_miss() {
    let mut pf = StridePrefetcher::new(2);
    assert!(pf.observe(0x1000).is_empty());
}

/// One observed stride is not enough; it must repeat.
#[test]
fn single_stride_does_not_fire() {
    let mut pf = StridePrefetcher::new(2);
    assert!(pf.observe(0x1000).is_empty());
    assert!(pf.observe(0x1040).is_empty(), "first 0x40 stride only arms");
}

// ══════════════════════════════════════════════════════════
// 2. Trigger rule
// ══════════════════════════════════════════════════════════

/// Two consecutive equal strides fire a burst of exactly `distance`
/// targets at block + d, block + 2d, ...
#[test]
fn repeated_stride_fires_full_burst() {
    let mut pf = StridePrefetcher::new(3);
    assert!(pf.observe(0x1000).is_empty());
    assert!(pf.observe(0x1040).is_empty());

    let targets = pf.observe(0x1080);
    assert_eq!(targets, vec![0x10C0, 0x1100, 0x1140]);
}

/// Once armed, every further miss continuing the stride fires again.
#[test]
fn continuing_stride_keeps_firing() {
    let mut pf = StridePrefetcher::new(1);
    assert!(pf.observe(0x1000).is_empty());
    assert!(pf.observe(0x1040).is_empty());
    assert_eq!(pf.observe(0x1080), vec![0x10C0]);
    assert_eq!(pf.observe(0x10C0), vec![0x1100]);
}

/// A broken stride re-arms: the new delta must repeat before firing.
#[test]
fn changed_stride_rearms_before_firing() {
    let mut pf = StridePrefetcher::new(1);
    assert!(pf.observe(0x1000).is_empty());
    assert!(pf.observe(0x1040).is_empty());
    // Jump: delta 0x80 != pending 0x40, no burst, pending becomes 0x80.
    assert!(pf.observe(0x10C0).is_empty());
    // 0x80 repeats: fire.
    assert_eq!(pf.observe(0x1140), vec![0x11C0]);
}

// ══════════════════════════════════════════════════════════
// 3. Negative strides
// ══════════════════════════════════════════════════════════

/// Descending streams produce a negative stride through wrapping
/// arithmetic and prefetch backwards.
#[test]
fn descending_stream_prefetches_backwards() {
    let mut pf = StridePrefetcher::new(2);
    assert!(pf.observe(0x2000).is_empty());
    assert!(pf.observe(0x1FC0).is_empty());

    let targets = pf.observe(0x1F80);
    assert_eq!(targets, vec![0x1F40, 0x1F00]);
}

// ══════════════════════════════════════════════════════════
// 4. Disabled
// ══════════════════════════════════════════════════════════

/// Distance 0 disables the prefetcher entirely, even on a perfect stride.
#[test]
fn zero_distance_never_fires() {
    let mut pf = StridePrefetcher::new(0);
    assert!(!pf.enabled());
    assert!(pf.observe(0x1000).is_empty());
    assert!(pf.observe(0x1040).is_empty());
    assert!(pf.observe(0x1080).is_empty());
    assert!(pf.observe(0x10C0).is_empty());
}
