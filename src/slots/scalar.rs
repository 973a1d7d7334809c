//! Optional single value
//!
//! Layout:
//! ┌──────────────┬─────────────────────────────────────┐
//! │ presence (1) │ value (packed size of T, or text\0) │
//! └──────────────┴─────────────────────────────────────┘
//!
//! Untuk fixed-width `T`, value bytes tetap ditulis walau slot absent,
//! jadi semua `ScalarSlot<T>` punya encoded size yang sama.

use crate::core::buffer::{ByteBuffer, ByteReader};
use crate::core::error::CodecResult;
use crate::core::layout::{Field, Packed};
use crate::core::wire::WireValue;

use super::Slot;

/// Ukuran presence flag di wire
pub const PRESENCE_SIZE: usize = 1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarSlot<T> {
    present: bool,
    value: T,
}

impl<T: Packed> ScalarSlot<T> {
    /// Wire members: presence, lalu packed value
    pub const WIRE_FIELDS: [Field; 2] = [
        Field::new(PRESENCE_SIZE, 0),
        Field::new(T::PACKED_SIZE, PRESENCE_SIZE),
    ];

    pub const PACKED_SIZE: usize = PRESENCE_SIZE + T::PACKED_SIZE;
}

impl<T: WireValue> ScalarSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot yang sudah present
    pub fn with_value(value: T) -> Self {
        Self {
            present: true,
            value,
        }
    }

    /// Simpan `value` dan tandai slot present
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.present = true;
        self.value = value;
    }

    /// Value, jika producer sudah menulis sejak reset terakhir
    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        self.present.then_some(&self.value)
    }

    /// Value yang tersimpan, present atau tidak
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Kembali ke absent dengan default value
    pub fn reset(&mut self) {
        self.present = false;
        self.value = T::default();
    }

    pub fn encoded_len(&self) -> usize {
        PRESENCE_SIZE + self.value.encoded_len()
    }

    pub fn append(&self, out: &mut ByteBuffer) {
        out.reserve(self.encoded_len());
        out.put_bool(self.present);
        self.value.write(out);
    }

    /// Decode slot di `offset`, returns slot + bytes consumed
    pub fn parse(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let mut reader = ByteReader::new(bytes, offset);
        // Fixed-width dicek utuh sebelum membaca apa pun
        reader.ensure(PRESENCE_SIZE + T::FIXED_SIZE.unwrap_or(0))?;

        let present = reader.read_bool()?;
        let value = T::read(&mut reader)?;
        Ok((Self { present, value }, reader.position() - offset))
    }

    /// Decode in-place. Jika gagal, `self` tidak berubah.
    pub fn parse_into(&mut self, bytes: &[u8], offset: usize) -> CodecResult<usize> {
        let (slot, read) = Self::parse(bytes, offset)?;
        *self = slot;
        Ok(read)
    }
}

impl<T: WireValue> From<T> for ScalarSlot<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T: WireValue> Slot for ScalarSlot<T> {
    fn append(&self, out: &mut ByteBuffer) {
        ScalarSlot::append(self, out)
    }

    fn encoded_len(&self) -> usize {
        ScalarSlot::encoded_len(self)
    }

    fn parse_into(&mut self, bytes: &[u8], offset: usize) -> CodecResult<usize> {
        ScalarSlot::parse_into(self, bytes, offset)
    }

    fn reset(&mut self) {
        ScalarSlot::reset(self)
    }
}
