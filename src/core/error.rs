//! Error parsing untuk input yang rusak atau terpotong
//!
//! Semua decode path return salah satu error ini, bukan panic. Offset setelah
//! failure tidak bisa dipercaya, jadi caller berhenti di error pertama.

use thiserror::Error;

/// Error saat parsing slot dari byte buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Panjang yang dideklarasikan atau di-scan melewati ujung buffer
    #[error("truncated buffer at offset {offset}: need {needed} bytes, {remaining} remaining")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Count hasil decode lebih besar dari capacity container
    #[error("count {count} exceeds capacity {capacity}")]
    CountOverflow { count: u64, capacity: u64 },

    /// Text sampai ujung buffer tanpa zero byte
    #[error("text starting at offset {offset} has no terminator")]
    MissingTerminator { offset: usize },

    /// Runtime type selector yang tidak menunjuk value type konkret
    #[error("invalid value type id {0}")]
    InvalidValueType(u8),
}

/// Result alias untuk semua operasi parse
pub type CodecResult<T> = Result<T, CodecError>;
