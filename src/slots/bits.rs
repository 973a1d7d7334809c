//! Bit-packed boolean words
//!
//! Wire contract: 32-bit words native byte order, element `i` disimpan di
//! word `i / 32`, bit `i % 32`, LSB first. High bits yang tidak terpakai di
//! word terakhir ditulis 0 dan diabaikan saat read.

use crate::core::buffer::ByteBuffer;

pub type Word = u32;

pub const WORD_BYTES: usize = std::mem::size_of::<Word>();
pub const WORD_BITS: usize = WORD_BYTES * 8;

/// Jumlah word untuk `len` bits
#[inline(always)]
pub const fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Sejumlah bits tetap, disimpan dalam word utuh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitWords {
    words: Vec<Word>,
    len: usize,
}

impl BitWords {
    /// Semua bit 0
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0; word_count(len)],
            len,
        }
    }

    pub fn from_bools(values: &[bool]) -> Self {
        let mut bits = Self::zeroed(values.len());
        for (i, &value) in values.iter().enumerate() {
            bits.set(i, value);
        }
        bits
    }

    /// Baca `len` bits dari packed wire words. `src` harus berisi
    /// `word_count(len) * WORD_BYTES` bytes.
    pub fn from_wire(src: &[u8], len: usize) -> Self {
        let words = src
            .chunks_exact(WORD_BYTES)
            .take(word_count(len))
            .map(|chunk| Word::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Self { words, len }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Bit `index`, atau `None` jika lewat ujung
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let word = self.words[index / WORD_BITS];
        Some(word & (1 << (index % WORD_BITS)) != 0)
    }

    /// Set/clear bit `index`. Return `false` jika out of range.
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: bool) -> bool {
        if index >= self.len {
            return false;
        }
        let mask: Word = 1 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.words[i / WORD_BITS] & (1 << (i % WORD_BITS)) != 0)
    }

    pub fn to_bools(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Append words, tanpa count prefix
    pub fn write_words(&self, out: &mut ByteBuffer) {
        for word in &self.words {
            out.put_bytes(&word.to_ne_bytes());
        }
    }
}
