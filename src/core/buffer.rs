//! Append-only byte buffer + read cursor berbasis offset
//!
//! Multi-byte values pakai host native byte order di kedua sisi.

use super::error::{CodecError, CodecResult};

/// Output buffer tempat slot meng-append dirinya.
///
/// Tidak ada overwrite in-place. `clear` mempertahankan alokasi,
/// jadi buffer yang sama dipakai ulang setiap frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Siapkan ruang minimal `additional` bytes lagi
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.bytes.reserve(additional);
    }

    /// Reset untuk reuse, capacity tetap
    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    #[inline(always)]
    pub fn put_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    #[inline(always)]
    pub fn put_bool(&mut self, value: bool) {
        self.bytes.push(u8::from(value));
    }

    #[inline(always)]
    pub fn put_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_ne_bytes());
    }

    #[inline(always)]
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Read cursor dengan bounds check di atas borrowed buffer.
///
/// Cursor boleh mulai di offset mana pun, termasuk lewat ujung buffer.
/// Setiap read cek sisa panjang dulu dan return `TruncatedBuffer`,
/// tidak pernah index out of range.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    read_pos: usize,
}

impl<'a> ByteReader<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8], offset: usize) -> Self {
        Self {
            bytes,
            read_pos: offset,
        }
    }

    /// Posisi absolut cursor di buffer
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.read_pos
    }

    /// Panjang seluruh buffer
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.read_pos)
    }

    /// Sisa buffer yang belum dibaca. Kosong jika cursor di/lewat ujung.
    #[inline(always)]
    pub fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.read_pos..).unwrap_or(&[])
    }

    /// Gagal kecuali masih ada minimal `needed` bytes. Cursor yang sudah
    /// lewat ujung selalu gagal, termasuk untuk `needed == 0`.
    #[inline(always)]
    pub fn ensure(&self, needed: usize) -> CodecResult<()> {
        let remaining = self.remaining();
        if remaining < needed || self.read_pos > self.bytes.len() {
            return Err(CodecError::TruncatedBuffer {
                offset: self.read_pos,
                needed,
                remaining,
            });
        }
        Ok(())
    }

    /// Borrow `len` bytes berikutnya lalu maju
    #[inline(always)]
    pub fn take(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        self.ensure(len)?;
        let start = self.read_pos;
        let src = self
            .bytes
            .get(start..start + len)
            .ok_or_else(|| CodecError::TruncatedBuffer {
                offset: start,
                needed: len,
                remaining: self.remaining(),
            })?;
        self.read_pos += len;
        Ok(src)
    }

    /// Majukan cursor. Caller wajib sudah cek panjang.
    #[inline(always)]
    pub(crate) fn advance(&mut self, len: usize) {
        self.read_pos += len;
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Byte non-zero apa pun = `true`
    #[inline(always)]
    pub fn read_bool(&mut self) -> CodecResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> CodecResult<u32> {
        let src = self.take(4)?;
        Ok(u32::from_ne_bytes([src[0], src[1], src[2], src[3]]))
    }
}
