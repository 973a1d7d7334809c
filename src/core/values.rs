//! Value types telemetry dan runtime type selector
//!
//! Compound values `#[repr(C)]` + `Pod`, member table dari
//! [`packed_struct!`](crate::packed_struct). `_padding` milik `DPlacement`
//! adalah member SDK yang dideklarasikan, jadi ikut ke wire (40 bytes).

use bytemuck::{Pod, Zeroable};

use super::buffer::{ByteBuffer, ByteReader};
use super::error::{CodecError, CodecResult};
use super::layout::Packed;
use super::wire::WireValue;

/// Vector single precision
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Vector double precision
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Orientasi heading, pitch, roll dalam rotations (0.0 - 1.0)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Euler {
    pub heading: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// Posisi + orientasi, single precision
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FPlacement {
    pub position: FVector,
    pub orientation: Euler,
}

/// Posisi double precision + orientasi.
///
/// `_padding` adalah bagian dari layout SDK: selalu ditulis dan dibaca.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DPlacement {
    pub position: DVector,
    pub orientation: Euler,
    pub _padding: u32,
}

impl FVector {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl DVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Euler {
    pub const fn new(heading: f32, pitch: f32, roll: f32) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }
}

impl FPlacement {
    pub const fn new(position: FVector, orientation: Euler) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl DPlacement {
    pub const fn new(position: DVector, orientation: Euler) -> Self {
        Self {
            position,
            orientation,
            _padding: 0,
        }
    }
}

crate::packed_struct!(FVector { x: f32, y: f32, z: f32 });
crate::packed_struct!(DVector { x: f64, y: f64, z: f64 });
crate::packed_struct!(Euler { heading: f32, pitch: f32, roll: f32 });
crate::packed_struct!(FPlacement { position: FVector, orientation: Euler });
crate::packed_struct!(DPlacement { position: DVector, orientation: Euler, _padding: u32 });

/// Runtime type selector. Discriminant = type id di wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Invalid = 0,
    Bool = 1,
    S32 = 2,
    U32 = 3,
    U64 = 4,
    Float = 5,
    Double = 6,
    FVector = 7,
    DVector = 8,
    Euler = 9,
    FPlacement = 10,
    DPlacement = 11,
    String = 12,
    S64 = 13,
}

impl ValueType {
    pub const ALL: [ValueType; 14] = [
        Self::Invalid,
        Self::Bool,
        Self::S32,
        Self::U32,
        Self::U64,
        Self::Float,
        Self::Double,
        Self::FVector,
        Self::DVector,
        Self::Euler,
        Self::FPlacement,
        Self::DPlacement,
        Self::String,
        Self::S64,
    ];

    #[inline(always)]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline(always)]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Packed width satu value. `None` untuk text dan `Invalid`.
    pub const fn packed_size(self) -> Option<usize> {
        match self {
            Self::Invalid | Self::String => None,
            Self::Bool => Some(bool::PACKED_SIZE),
            Self::S32 => Some(i32::PACKED_SIZE),
            Self::U32 => Some(u32::PACKED_SIZE),
            Self::U64 => Some(u64::PACKED_SIZE),
            Self::Float => Some(f32::PACKED_SIZE),
            Self::Double => Some(f64::PACKED_SIZE),
            Self::FVector => Some(FVector::PACKED_SIZE),
            Self::DVector => Some(DVector::PACKED_SIZE),
            Self::Euler => Some(Euler::PACKED_SIZE),
            Self::FPlacement => Some(FPlacement::PACKED_SIZE),
            Self::DPlacement => Some(DPlacement::PACKED_SIZE),
            Self::S64 => Some(i64::PACKED_SIZE),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Bool => "bool",
            Self::S32 => "s32",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Float => "float",
            Self::Double => "double",
            Self::FVector => "fvector",
            Self::DVector => "dvector",
            Self::Euler => "euler",
            Self::FPlacement => "fplacement",
            Self::DPlacement => "dplacement",
            Self::String => "string",
            Self::S64 => "s64",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.name() == name)
    }
}

/// Value yang type-nya baru diketahui saat runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    S32(i32),
    U32(u32),
    U64(u64),
    Float(f32),
    Double(f64),
    FVector(FVector),
    DVector(DVector),
    Euler(Euler),
    FPlacement(FPlacement),
    DPlacement(DPlacement),
    String(String),
    S64(i64),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::S32(_) => ValueType::S32,
            Self::U32(_) => ValueType::U32,
            Self::U64(_) => ValueType::U64,
            Self::Float(_) => ValueType::Float,
            Self::Double(_) => ValueType::Double,
            Self::FVector(_) => ValueType::FVector,
            Self::DVector(_) => ValueType::DVector,
            Self::Euler(_) => ValueType::Euler,
            Self::FPlacement(_) => ValueType::FPlacement,
            Self::DPlacement(_) => ValueType::DPlacement,
            Self::String(_) => ValueType::String,
            Self::S64(_) => ValueType::S64,
        }
    }

    /// Zero value dari `ty`
    pub fn default_of(ty: ValueType) -> CodecResult<Self> {
        Ok(match ty {
            ValueType::Invalid => return Err(CodecError::InvalidValueType(ty.id())),
            ValueType::Bool => Self::Bool(false),
            ValueType::S32 => Self::S32(0),
            ValueType::U32 => Self::U32(0),
            ValueType::U64 => Self::U64(0),
            ValueType::Float => Self::Float(0.0),
            ValueType::Double => Self::Double(0.0),
            ValueType::FVector => Self::FVector(FVector::default()),
            ValueType::DVector => Self::DVector(DVector::default()),
            ValueType::Euler => Self::Euler(Euler::default()),
            ValueType::FPlacement => Self::FPlacement(FPlacement::default()),
            ValueType::DPlacement => Self::DPlacement(DPlacement::default()),
            ValueType::String => Self::String(String::new()),
            ValueType::S64 => Self::S64(0),
        })
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Self::String(text) => text.encoded_len(),
            other => other.value_type().packed_size().unwrap_or(0),
        }
    }

    pub fn append(&self, out: &mut ByteBuffer) {
        match self {
            Self::Bool(v) => v.write(out),
            Self::S32(v) => v.write(out),
            Self::U32(v) => v.write(out),
            Self::U64(v) => v.write(out),
            Self::Float(v) => v.write(out),
            Self::Double(v) => v.write(out),
            Self::FVector(v) => v.write(out),
            Self::DVector(v) => v.write(out),
            Self::Euler(v) => v.write(out),
            Self::FPlacement(v) => v.write(out),
            Self::DPlacement(v) => v.write(out),
            Self::String(v) => v.write(out),
            Self::S64(v) => v.write(out),
        }
    }

    /// Baca satu value bertipe `ty` di posisi cursor
    pub fn read(ty: ValueType, reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(match ty {
            ValueType::Invalid => return Err(CodecError::InvalidValueType(ty.id())),
            ValueType::Bool => Self::Bool(WireValue::read(reader)?),
            ValueType::S32 => Self::S32(WireValue::read(reader)?),
            ValueType::U32 => Self::U32(WireValue::read(reader)?),
            ValueType::U64 => Self::U64(WireValue::read(reader)?),
            ValueType::Float => Self::Float(WireValue::read(reader)?),
            ValueType::Double => Self::Double(WireValue::read(reader)?),
            ValueType::FVector => Self::FVector(WireValue::read(reader)?),
            ValueType::DVector => Self::DVector(WireValue::read(reader)?),
            ValueType::Euler => Self::Euler(WireValue::read(reader)?),
            ValueType::FPlacement => Self::FPlacement(WireValue::read(reader)?),
            ValueType::DPlacement => Self::DPlacement(WireValue::read(reader)?),
            ValueType::String => Self::String(WireValue::read(reader)?),
            ValueType::S64 => Self::S64(WireValue::read(reader)?),
        })
    }
}

/// Scalar slot yang di-decode lewat runtime type id.
///
/// Byte-identical dengan `ScalarSlot<T>` untuk `T` yang sesuai.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicScalar {
    pub present: bool,
    pub value: Value,
}

impl DynamicScalar {
    pub fn append(&self, out: &mut ByteBuffer) {
        out.put_bool(self.present);
        self.value.append(out);
    }

    pub fn encoded_len(&self) -> usize {
        1 + self.value.encoded_len()
    }

    pub fn parse(ty: ValueType, bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        if ty == ValueType::Invalid {
            return Err(CodecError::InvalidValueType(ty.id()));
        }

        let mut reader = ByteReader::new(bytes, offset);
        reader.ensure(1 + ty.packed_size().unwrap_or(0))?;

        let present = reader.read_bool()?;
        let value = Value::read(ty, &mut reader)?;
        Ok((Self { present, value }, reader.position() - offset))
    }

    /// Sama dengan [`parse`](Self::parse), type diberikan sebagai wire id.
    pub fn parse_with_id(type_id: u8, bytes: &[u8], offset: usize) -> CodecResult<(Self, usize)> {
        let ty = ValueType::from_id(type_id).ok_or(CodecError::InvalidValueType(type_id))?;
        Self::parse(ty, bytes, offset)
    }
}
