//! Value yang bisa masuk ke scalar atau array slot

use std::fmt;

use super::buffer::{ByteBuffer, ByteReader};
use super::error::CodecResult;
use super::layout::Packed;
use super::text;

/// Slot value: fixed-width `Packed` type atau text
pub trait WireValue: Clone + Default + PartialEq + fmt::Debug {
    /// Encoded width jika tidak tergantung value
    const FIXED_SIZE: Option<usize>;

    fn encoded_len(&self) -> usize;

    fn write(&self, out: &mut ByteBuffer);

    fn read(reader: &mut ByteReader<'_>) -> CodecResult<Self>;
}

impl<T: Packed> WireValue for T {
    const FIXED_SIZE: Option<usize> = Some(T::PACKED_SIZE);

    #[inline(always)]
    fn encoded_len(&self) -> usize {
        T::PACKED_SIZE
    }

    #[inline(always)]
    fn write(&self, out: &mut ByteBuffer) {
        self.pack(out);
    }

    #[inline(always)]
    fn read(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(T::unpack(reader.take(T::PACKED_SIZE)?))
    }
}

impl WireValue for String {
    const FIXED_SIZE: Option<usize> = None;

    fn encoded_len(&self) -> usize {
        text::encoded_len(self)
    }

    fn write(&self, out: &mut ByteBuffer) {
        text::write(self, out);
    }

    fn read(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        text::read(reader)
    }
}
