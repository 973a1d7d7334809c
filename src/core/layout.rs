//! Field layout descriptors
//!
//! Value tidak pernah di-copy ke wire sebagai satu raw block. Setiap type
//! mendeklarasikan table `(size, offset)` per member (associated constant,
//! dibangun sekali), dan codec meng-copy member satu per satu. Packed size =
//! jumlah ukuran member, tidak tergantung alignment. Byte yang tidak
//! terdaftar sebagai member tidak pernah ke wire:
//!
//! ```text
//! in memory   [ wide: 8 ][ narrow: 4 ][ alignment pad: 4 ]
//! on the wire [ wide: 8 ][ narrow: 4 ]
//! ```

use std::fmt;

use bytemuck::Pod;

use super::buffer::ByteBuffer;

/// Satu member yang di-serialize: ukuran byte dan offset-nya di value
/// in-memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub size: usize,
    pub offset: usize,
}

impl Field {
    pub const fn new(size: usize, offset: usize) -> Self {
        Self { size, offset }
    }
}

/// Member table berurutan untuk satu type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    fields: &'static [Field],
}

impl FieldLayout {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub const fn member_count(&self) -> usize {
        self.fields.len()
    }

    /// Jumlah ukuran semua member
    pub const fn packed_size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].size;
            i += 1;
        }
        total
    }

    /// Posisi wire member `index` = jumlah ukuran member sebelumnya
    pub const fn wire_offset(&self, index: usize) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < index && i < self.fields.len() {
            total += self.fields[i].size;
            i += 1;
        }
        total
    }

    /// Append semua member dari `memory` sesuai urutan deklarasi
    pub fn gather(&self, memory: &[u8], out: &mut ByteBuffer) {
        for field in self.fields {
            out.put_bytes(&memory[field.offset..field.offset + field.size]);
        }
    }

    /// Copy member wire berurutan dari `src` ke offset masing-masing di
    /// `memory`. `src` minimal `packed_size()` bytes.
    pub fn scatter(&self, src: &[u8], memory: &mut [u8]) {
        let mut pos = 0;
        for field in self.fields {
            memory[field.offset..field.offset + field.size]
                .copy_from_slice(&src[pos..pos + field.size]);
            pos += field.size;
        }
    }
}

/// Fixed-width value dengan member table yang dideklarasikan
pub trait Packed: Copy + Default + PartialEq + fmt::Debug {
    /// Member sesuai urutan deklarasi
    const FIELDS: &'static [Field];

    const LAYOUT: FieldLayout = FieldLayout::new(Self::FIELDS);

    const PACKED_SIZE: usize = Self::LAYOUT.packed_size();

    /// Append packed members
    fn pack(&self, out: &mut ByteBuffer);

    /// Bangun ulang value dari `src[..PACKED_SIZE]`
    fn unpack(src: &[u8]) -> Self;
}

/// Packing untuk semua `Pod` type: member dibaca dari dan ditulis ke
/// byte view value.
#[inline]
pub fn pack_pod<T: Pod + Packed>(value: &T, out: &mut ByteBuffer) {
    T::LAYOUT.gather(bytemuck::bytes_of(value), out);
}

#[inline]
pub fn unpack_pod<T: Pod + Packed>(src: &[u8]) -> T {
    let mut value = T::zeroed();
    T::LAYOUT.scatter(src, bytemuck::bytes_of_mut(&mut value));
    value
}

/// Deklarasi member table untuk `#[repr(C)]` `Pod` struct.
///
/// Hanya member yang didaftarkan yang ke wire. Padding yang ditambahkan
/// hanya untuk memenuhi `Pod` cukup tidak didaftarkan; padding yang
/// merupakan bagian dari layout SDK didaftarkan seperti member lain.
#[macro_export]
macro_rules! packed_struct {
    ($ty:ty { $($field:ident : $field_ty:ty),+ $(,)? }) => {
        impl $crate::core::layout::Packed for $ty {
            const FIELDS: &'static [$crate::core::layout::Field] = &[
                $($crate::core::layout::Field {
                    size: ::std::mem::size_of::<$field_ty>(),
                    offset: ::std::mem::offset_of!($ty, $field),
                },)+
            ];

            #[inline]
            fn pack(&self, out: &mut $crate::core::buffer::ByteBuffer) {
                $crate::core::layout::pack_pod(self, out)
            }

            #[inline]
            fn unpack(src: &[u8]) -> Self {
                $crate::core::layout::unpack_pod(src)
            }
        }
    };
}

macro_rules! packed_primitive {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Packed for $ty {
                const FIELDS: &'static [Field] = &[Field {
                    size: std::mem::size_of::<$ty>(),
                    offset: 0,
                }];

                #[inline(always)]
                fn pack(&self, out: &mut ByteBuffer) {
                    out.put_bytes(&self.to_ne_bytes());
                }

                #[inline(always)]
                fn unpack(src: &[u8]) -> Self {
                    unpack_pod(src)
                }
            }
        )+
    };
}

packed_primitive!(i32, u32, u64, i64, f32, f64);

// bool bukan Pod: byte non-zero apa pun = true
impl Packed for bool {
    const FIELDS: &'static [Field] = &[Field { size: 1, offset: 0 }];

    #[inline(always)]
    fn pack(&self, out: &mut ByteBuffer) {
        out.put_bool(*self);
    }

    #[inline(always)]
    fn unpack(src: &[u8]) -> Self {
        src[0] != 0
    }
}
