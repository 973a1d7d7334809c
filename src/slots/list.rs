//! Growable list tanpa presence flag; list kosong = "tidak ada data"
//!
//! Setiap encoding diawali element count 4-byte. Sisanya tergantung jenis
//! element:
//!
//! - fixed-width: `count * PACKED_SIZE` bytes, tiap element di-pack
//!   member per member
//! - text: `count` zero-terminated values berurutan
//! - bool: `ceil(count / 32)` bit-packed words, lihat [`bits`](super::bits)

use std::fmt;

use crate::core::buffer::{ByteBuffer, ByteReader};
use crate::core::error::CodecResult;
use crate::core::layout::Packed;
use crate::core::text;
use crate::core::values::{DPlacement, DVector, Euler, FPlacement, FVector};

use super::bits::{self, BitWords};
use super::Slot;

/// Ukuran count prefix di wire
pub const COUNT_SIZE: usize = 4;

/// List encoding per jenis element
pub trait ListElement: Sized + Clone + PartialEq + fmt::Debug {
    /// Bytes setelah count prefix
    fn body_len(items: &[Self]) -> usize;

    /// Tulis `items` setelah count prefix
    fn write_body(items: &[Self], out: &mut ByteBuffer);

    /// Baca `count` elements setelah count prefix
    fn read_body(reader: &mut ByteReader<'_>, count: u32) -> CodecResult<Vec<Self>>;
}

/// Bytes untuk `count` elements berukuran `size`. Saturating: count yang
/// tidak masuk akal gagal di length check, bukan overflow.
#[inline(always)]
fn body_bytes(count: u32, size: usize) -> usize {
    (count as usize).saturating_mul(size)
}

fn write_raw<T: Packed>(items: &[T], out: &mut ByteBuffer) {
    for item in items {
        item.pack(out);
    }
}

fn read_raw<T: Packed>(reader: &mut ByteReader<'_>, count: u32) -> CodecResult<Vec<T>> {
    let src = reader.take(body_bytes(count, T::PACKED_SIZE))?;
    Ok(src.chunks_exact(T::PACKED_SIZE).map(T::unpack).collect())
}

macro_rules! raw_list_element {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ListElement for $ty {
                #[inline(always)]
                fn body_len(items: &[Self]) -> usize {
                    items.len() * <$ty as Packed>::PACKED_SIZE
                }

                #[inline(always)]
                fn write_body(items: &[Self], out: &mut ByteBuffer) {
                    write_raw(items, out)
                }

                #[inline(always)]
                fn read_body(reader: &mut ByteReader<'_>, count: u32) -> CodecResult<Vec<Self>> {
                    read_raw(reader, count)
                }
            }
        )+
    };
}

raw_list_element!(i32, u32, u64, i64, f32, f64, FVector, DVector, Euler, FPlacement, DPlacement);

impl ListElement for String {
    fn body_len(items: &[Self]) -> usize {
        items.iter().map(|item| text::encoded_len(item)).sum()
    }

    fn write_body(items: &[Self], out: &mut ByteBuffer) {
        for item in items {
            text::write(item, out);
        }
    }

    fn read_body(reader: &mut ByteReader<'_>, count: u32) -> CodecResult<Vec<Self>> {
        // Tiap text minimal 1 byte terminator; alokasi awal dibatasi sisa buffer
        let mut items = Vec::with_capacity((count as usize).min(reader.remaining()));
        for _ in 0..count {
            items.push(text::read(reader)?);
        }
        Ok(items)
    }
}

impl ListElement for bool {
    fn body_len(items: &[Self]) -> usize {
        bits::word_count(items.len()) * bits::WORD_BYTES
    }

    fn write_body(items: &[Self], out: &mut ByteBuffer) {
        BitWords::from_bools(items).write_words(out);
    }

    fn read_body(reader: &mut ByteReader<'_>, count: u32) -> CodecResult<Vec<Self>> {
        let words = bits::word_count(count as usize);
        let src = reader.take(words.saturating_mul(bits::WORD_BYTES))?;
        Ok(BitWords::from_wire(src, count as usize).to_bools())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListSlot<T> {
    items: Vec<T>,
}

impl<T> Default for ListSlot<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ListElement> ListSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.items.extend(items);
    }

    /// Kosongkan list untuk frame berikutnya, alokasi tetap
    #[inline(always)]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Items yang muat di count 32-bit; lewat `u32::MAX` tidak di-encode
    fn encodable(&self) -> &[T] {
        let len = self.items.len().min(u32::MAX as usize);
        &self.items[..len]
    }

    pub fn encoded_len(&self) -> usize {
        COUNT_SIZE + T::body_len(self.encodable())
    }

    pub fn append(&self, out: &mut ByteBuffer) {
        let items = self.encodable();
        out.reserve(COUNT_SIZE + T::body_len(items));
        out.put_u32(items.len() as u32);
        T::write_body(items, out);
    }

    /// Decode list di `offset`, returns list + bytes consumed
    pub fn parse(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let mut reader = ByteReader::new(bytes, offset);
        let count = reader.read_u32()?;
        let items = T::read_body(&mut reader, count)?;
        Ok((Self { items }, reader.position() - offset))
    }

    /// Decode in-place. Jika gagal, `self` tidak berubah.
    pub fn parse_into(&mut self, bytes: &[u8], offset: usize) -> CodecResult<usize> {
        let (list, read) = Self::parse(bytes, offset)?;
        *self = list;
        Ok(read)
    }
}

impl<T> From<Vec<T>> for ListSlot<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: ListElement> FromIterator<T> for ListSlot<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ListSlot<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: ListElement> Slot for ListSlot<T> {
    fn append(&self, out: &mut ByteBuffer) {
        ListSlot::append(self, out)
    }

    fn encoded_len(&self) -> usize {
        ListSlot::encoded_len(self)
    }

    fn parse_into(&mut self, bytes: &[u8], offset: usize) -> CodecResult<usize> {
        ListSlot::parse_into(self, bytes, offset)
    }

    fn reset(&mut self) {
        self.clear()
    }
}
