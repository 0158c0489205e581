//! Address Decomposition.
//!
//! This module derives the tag/index/offset fields of a raw 64-bit address
//! from the configured cache geometry. It provides the following:
//! 1. **Precomputed Masks:** Built once from the bit widths with direct
//!    shift arithmetic; decoding is O(1) per address.
//! 2. **Fully-Associative Mode:** Selected when the index width is zero
//!    (`c - b == s`); every address then maps to the single set 0.
//! 3. **Block Alignment:** A helper for clearing offset bits, used by the
//!    stride prefetcher which operates on block addresses.

/// The three fields a raw address decomposes into.
///
/// `offset` selects a byte within a block, `index` selects a set, and `tag`
/// identifies the block within its set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddr {
    /// High bits identifying the block within its set.
    pub tag: u64,
    /// Middle bits selecting the set (always 0 when fully associative).
    pub index: u64,
    /// Low bits selecting a byte within the block.
    pub offset: u64,
}

/// Precomputed field widths and masks for one cache geometry.
#[derive(Clone, Copy, Debug)]
pub struct AddressDecoder {
    offset_bits: u64,
    index_bits: u64,
    offset_mask: u64,
    index_mask: u64,
    tag_mask: u64,
}

/// Mask covering the low `n` bits of a 64-bit word.
const fn low_bits(n: u64) -> u64 {
    if n >= 64 { u64::MAX } else { (1u64 << n) - 1 }
}

impl AddressDecoder {
    /// Builds a decoder for the given geometry exponents.
    ///
    /// `offset_bits = b` and `index_bits = c - b - s`; the tag covers the
    /// remaining high bits. Callers must have validated the geometry
    /// (`c >= b + s` and `b + index_bits < 64`) beforehand.
    ///
    /// # Arguments
    ///
    /// * `capacity_log2` - Total capacity exponent (`c`).
    /// * `block_log2` - Block size exponent (`b`).
    /// * `assoc_log2` - Associativity exponent (`s`).
    pub fn new(capacity_log2: u64, block_log2: u64, assoc_log2: u64) -> Self {
        let offset_bits = block_log2;
        let index_bits = capacity_log2 - block_log2 - assoc_log2;

        let offset_mask = low_bits(offset_bits);
        let index_mask = low_bits(index_bits) << offset_bits;
        let tag_mask = !(offset_mask | index_mask);

        Self {
            offset_bits,
            index_bits,
            offset_mask,
            index_mask,
            tag_mask,
        }
    }

    /// Decomposes a raw address into `(tag, index, offset)`.
    pub fn decode(&self, addr: u64) -> DecodedAddr {
        DecodedAddr {
            tag: (addr & self.tag_mask) >> (self.offset_bits + self.index_bits),
            index: (addr & self.index_mask) >> self.offset_bits,
            offset: addr & self.offset_mask,
        }
    }

    /// Returns the address with its offset bits cleared (the block address).
    pub fn block_base(&self, addr: u64) -> u64 {
        addr & !self.offset_mask
    }

    /// Number of bits selecting the set.
    pub fn index_bits(&self) -> u64 {
        self.index_bits
    }

    /// Whether this geometry is fully associative (single set).
    pub fn fully_associative(&self) -> bool {
        self.index_bits == 0
    }
}
