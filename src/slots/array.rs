//! Optional fixed-capacity array
//!
//! Layout:
//! ┌──────────────┬───────────┬──────────────────────────┐
//! │ presence (1) │ count (4) │ element[0] .. element[N) │
//! └──────────────┴───────────┴──────────────────────────┘
//!
//! Semua `N` elements selalu ditulis. `count` hanya mencatat berapa yang
//! bermakna, tidak pernah memperpendek encoding.

use std::array;

use crate::core::buffer::{ByteBuffer, ByteReader};
use crate::core::error::{CodecError, CodecResult};
use crate::core::layout::{Field, Packed};
use crate::core::wire::WireValue;

use super::scalar::PRESENCE_SIZE;
use super::Slot;

/// Ukuran count field di wire
pub const COUNT_SIZE: usize = 4;

/// Presence flag + count
pub const HEADER_SIZE: usize = PRESENCE_SIZE + COUNT_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub struct ArraySlot<T, const N: usize> {
    present: bool,
    count: u32,
    elements: [T; N],
}

impl<T: Packed, const N: usize> ArraySlot<T, N> {
    /// Wire members: presence, count, lalu semua elements
    pub const WIRE_FIELDS: [Field; 3] = [
        Field::new(PRESENCE_SIZE, 0),
        Field::new(COUNT_SIZE, PRESENCE_SIZE),
        Field::new(N * T::PACKED_SIZE, HEADER_SIZE),
    ];

    pub const PACKED_SIZE: usize = HEADER_SIZE + N * T::PACKED_SIZE;
}

impl<T: WireValue, const N: usize> Default for ArraySlot<T, N> {
    fn default() -> Self {
        Self {
            present: false,
            count: 0,
            elements: array::from_fn(|_| T::default()),
        }
    }
}

#[inline]
fn overflow(count: usize, capacity: usize) -> CodecError {
    CodecError::CountOverflow {
        count: count as u64,
        capacity: capacity as u64,
    }
}

impl<T: WireValue, const N: usize> ArraySlot<T, N> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[inline(always)]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Simpan satu element di repetition index dan tandai slot present.
    ///
    /// Count naik sampai mencakup `index`, tidak pernah turun di sini.
    pub fn set(&mut self, index: usize, value: T) -> CodecResult<()> {
        if index >= N {
            return Err(overflow(index + 1, N));
        }
        self.elements[index] = value;
        self.present = true;
        self.count = self.count.max(index as u32 + 1);
        Ok(())
    }

    /// Ganti isi array dengan `values`; `count` = jumlahnya. Elements
    /// setelahnya di-reset ke default, jadi sisa frame sebelumnya tidak
    /// ikut ke wire.
    pub fn fill(&mut self, values: &[T]) -> CodecResult<()> {
        if values.len() > N {
            return Err(overflow(values.len(), N));
        }
        let (head, tail) = self.elements.split_at_mut(values.len());
        head.clone_from_slice(values);
        tail.fill_with(T::default);
        self.present = true;
        self.count = values.len() as u32;
        Ok(())
    }

    /// Element di `index` dalam capacity, terhitung atau tidak
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// `count` elements pertama
    pub fn values(&self) -> &[T] {
        let len = (self.count as usize).min(N);
        &self.elements[..len]
    }

    pub fn elements(&self) -> &[T; N] {
        &self.elements
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn encoded_len(&self) -> usize {
        match T::FIXED_SIZE {
            Some(size) => HEADER_SIZE + N * size,
            None => HEADER_SIZE + self.elements.iter().map(T::encoded_len).sum::<usize>(),
        }
    }

    pub fn append(&self, out: &mut ByteBuffer) {
        out.reserve(self.encoded_len());
        out.put_bool(self.present);
        out.put_u32(self.count);
        for element in &self.elements {
            element.write(out);
        }
    }

    /// Decode slot di `offset`, returns slot + bytes consumed
    pub fn parse(bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let mut reader = ByteReader::new(bytes, offset);
        let body = T::FIXED_SIZE.map_or(0, |size| N * size);
        reader.ensure(HEADER_SIZE + body)?;

        let present = reader.read_bool()?;
        let count = reader.read_u32()?;
        if count as usize > N {
            return Err(overflow(count as usize, N));
        }

        let mut elements: [T; N] = array::from_fn(|_| T::default());
        for element in elements.iter_mut() {
            *element = T::read(&mut reader)?;
        }

        let slot = Self {
            present,
            count,
            elements,
        };
        Ok((slot, reader.position() - offset))
    }

    /// Decode in-place. Jika gagal, `self` tidak berubah.
    pub fn parse_into(&mut self, bytes: &[u8], offset: usize) -> CodecResult<usize> {
        let (slot, read) = Self::parse(bytes, offset)?;
        *self = slot;
        Ok(read)
    }
}

impl<T: WireValue, const N: usize> Slot for ArraySlot<T, N> {
    fn append(&self, out: &mut ByteBuffer) {
        ArraySlot::append(self, out)
    }

    fn encoded_len(&self) -> usize {
        ArraySlot::encoded_len(self)
    }

    fn parse_into(&mut self, bytes: &[u8], offset: usize) -> CodecResult<usize> {
        ArraySlot::parse_into(self, bytes, offset)
    }

    fn reset(&mut self) {
        ArraySlot::reset(self)
    }
}
