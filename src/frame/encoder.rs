//! Frame Encoder/Decoder
//!
//! Frame = gabungan semua slot aktif sesuai urutan deklarasi, tanpa header
//! atau separator. Kedua sisi wajib walk slot list yang sama.

use tracing::{debug, warn};

use crate::core::buffer::ByteBuffer;
use crate::core::error::CodecResult;
use crate::slots::Slot;

use super::config::FrameConfig;

/// Frame encoder yang reusable.
///
/// Buffer di-clear, bukan dialokasi ulang, antar frame.
pub struct FrameEncoder {
    buffer: ByteBuffer,
    config: FrameConfig,
    frames: u64,
}

impl FrameEncoder {
    pub fn new(config: FrameConfig) -> Self {
        Self {
            buffer: ByteBuffer::with_capacity(config.initial_capacity),
            config,
            frames: 0,
        }
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Encoded size persis dari `slots`
    pub fn frame_len(slots: &[&dyn Slot]) -> usize {
        slots.iter().map(|slot| slot.encoded_len()).sum()
    }

    /// Encode satu frame, menggantikan frame sebelumnya.
    ///
    /// Returns frame bytes. Slot yang tidak berubah menghasilkan bytes identik.
    pub fn encode(&mut self, slots: &[&dyn Slot]) -> &[u8] {
        self.buffer.clear();
        if self.config.reserve_exact {
            self.buffer.reserve(Self::frame_len(slots));
        }

        for slot in slots {
            slot.append(&mut self.buffer);
        }

        self.frames += 1;
        debug!(
            frame = self.frames,
            slots = slots.len(),
            bytes = self.buffer.len(),
            "encoded frame"
        );
        self.buffer.as_bytes()
    }

    /// Current frame content
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Jumlah frame yang sudah di-encode
    pub fn frames_encoded(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}

/// Frame decoder berurutan di atas borrowed buffer
pub struct FrameDecoder<'a> {
    buffer: &'a [u8],
    read_pos: usize,
}

impl<'a> FrameDecoder<'a> {
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            read_pos: 0,
        }
    }

    /// Decode slot berikutnya lalu maju.
    ///
    /// Jika gagal, cursor tidak bergerak.
    #[inline(always)]
    pub fn next_into(&mut self, slot: &mut dyn Slot) -> CodecResult<usize> {
        let read = slot.parse_into(self.buffer, self.read_pos)?;
        self.read_pos += read;
        Ok(read)
    }

    /// Decode `slots` berurutan. Berhenti di failure pertama: posisi slot
    /// setelahnya tidak bisa ditentukan.
    ///
    /// Returns total bytes consumed.
    pub fn decode(&mut self, slots: &mut [&mut dyn Slot]) -> CodecResult<usize> {
        let start = self.read_pos;
        for (index, slot) in slots.iter_mut().enumerate() {
            if let Err(e) = self.next_into(&mut **slot) {
                warn!(slot = index, offset = self.read_pos, error = %e, "frame decode aborted");
                return Err(e);
            }
        }

        let consumed = self.read_pos - start;
        debug!(slots = slots.len(), bytes = consumed, "decoded frame");
        Ok(consumed)
    }

    /// Posisi cursor di buffer
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.read_pos
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
