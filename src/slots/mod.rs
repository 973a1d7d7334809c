//! Slot containers: yang diisi producer selama satu frame
//!
//! Prinsip desain:
//! - Satu writer per slot, satu encode per frame
//! - Fixed-width slot selalu encode ke ukuran yang sama
//! - Setiap parse bounds-checked dan return bytes consumed

mod array;
pub mod bits;
mod list;
mod scalar;

pub use array::{ArraySlot, COUNT_SIZE as ARRAY_COUNT_SIZE, HEADER_SIZE as ARRAY_HEADER_SIZE};
pub use bits::BitWords;
pub use list::{ListElement, ListSlot, COUNT_SIZE as LIST_COUNT_SIZE};
pub use scalar::{ScalarSlot, PRESENCE_SIZE};

use crate::core::buffer::ByteBuffer;
use crate::core::error::CodecResult;

/// Object-safe view untuk semua slot, dipakai untuk walk satu frame
pub trait Slot {
    /// Append encoded slot
    fn append(&self, out: &mut ByteBuffer);

    /// Jumlah byte persis yang ditulis `append`
    fn encoded_len(&self) -> usize;

    /// Decode di `offset` dan return bytes consumed. Jika gagal, slot
    /// tetap berisi nilai sebelumnya.
    fn parse_into(&mut self, bytes: &[u8], offset: usize) -> CodecResult<usize>;

    /// Kembali ke state awal frame
    fn reset(&mut self);
}

/// Reset semua slot untuk frame baru
pub fn reset_all(slots: &mut [&mut dyn Slot]) {
    for slot in slots.iter_mut() {
        slot.reset();
    }
}
