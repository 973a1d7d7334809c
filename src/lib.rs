//! Telemetry Slots - flat binary encoding yang deterministik untuk telemetry values
//!
//! Arsitektur:
//! - Slots: optional scalar, fixed-capacity array, dan growable list
//! - Layout: table `(size, offset)` per member, hanya member yang dideklarasikan ke wire
//! - Frames: slot di-append sesuai urutan deklarasi ke satu buffer reusable
//! - Native byte order, single producer, encode/decode synchronous
//!
//! ```
//! use telemetry_slots::{ByteBuffer, ScalarSlot};
//!
//! let mut rpm = ScalarSlot::<u32>::new();
//! rpm.set(42);
//!
//! let mut out = ByteBuffer::new();
//! rpm.append(&mut out);
//!
//! let (decoded, read) = ScalarSlot::<u32>::parse(out.as_bytes(), 0).unwrap();
//! assert_eq!(decoded.get(), Some(&42));
//! assert_eq!(read, 5);
//! ```

pub mod core;
pub mod frame;
pub mod slots;

pub use crate::core::{
    ByteBuffer, ByteReader, CodecError, CodecResult, DPlacement, DVector, DynamicScalar, Euler,
    FPlacement, FVector, Field, FieldLayout, Packed, Value, ValueType, WireValue,
};
pub use crate::frame::{FrameConfig, FrameDecoder, FrameEncoder};
pub use crate::slots::{reset_all, ArraySlot, BitWords, ListElement, ListSlot, ScalarSlot, Slot};
