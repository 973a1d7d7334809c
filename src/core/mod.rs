//! Core module: byte buffer, text codec, layout descriptor dan value types
//!
//! Prinsip desain:
//! - Native byte order di kedua sisi
//! - Member di-copy satu per satu, tidak pernah sebagai raw struct image
//! - Input rusak jadi error value, tidak pernah panic

pub mod buffer;
pub mod error;
pub mod layout;
pub mod text;
pub mod values;
pub mod wire;

pub use buffer::{ByteBuffer, ByteReader};
pub use error::{CodecError, CodecResult};
pub use layout::{Field, FieldLayout, Packed};
pub use values::{
    DPlacement, DVector, DynamicScalar, Euler, FPlacement, FVector, Value, ValueType,
};
pub use wire::WireValue;
