// Layout conformance for the compound value types.
// Memory offsets are checked against the C declarations the producer uses;
// wire offsets must be the running sum of member sizes. Declared SDK members
// such as DPlacement::_padding are members like any other.
use memoffset::offset_of;
use std::mem::{align_of, size_of};
use telemetry_slots::{
    ArraySlot, DPlacement, DVector, Euler, FPlacement, FVector, Field, Packed, ScalarSlot,
    ValueType,
};

fn wire_offsets<T: Packed>() -> Vec<usize> {
    (0..T::LAYOUT.member_count())
        .map(|i| T::LAYOUT.wire_offset(i))
        .collect()
}

#[test]
fn test_dplacement_layout() {
    let size = size_of::<DPlacement>();
    let align = align_of::<DPlacement>();
    let off_position = offset_of!(DPlacement, position);
    let off_orientation = offset_of!(DPlacement, orientation);
    let off_padding = offset_of!(DPlacement, _padding);

    println!(
        "DPlacement => size: {size}, align: {align}, offsets: [position:{off_position}, orientation:{off_orientation}, _padding:{off_padding}], packed: {}",
        DPlacement::PACKED_SIZE
    );

    assert_eq!(size, 40);
    assert_eq!(align, align_of::<f64>());
    assert_eq!(off_position, 0);
    assert_eq!(off_orientation, 24);
    assert_eq!(off_padding, 36);

    assert_eq!(
        DPlacement::FIELDS,
        &[
            Field::new(24, off_position),
            Field::new(12, off_orientation),
            Field::new(4, off_padding),
        ]
    );
    assert_eq!(DPlacement::PACKED_SIZE, 40);
    assert_eq!(DPlacement::PACKED_SIZE, size);
    assert_eq!(wire_offsets::<DPlacement>(), vec![0, 24, 36]);
}

#[test]
fn test_fplacement_layout() {
    assert_eq!(size_of::<FPlacement>(), 24);
    assert_eq!(offset_of!(FPlacement, position), 0);
    assert_eq!(offset_of!(FPlacement, orientation), 12);
    assert_eq!(FPlacement::PACKED_SIZE, 24);
    assert_eq!(wire_offsets::<FPlacement>(), vec![0, 12]);
}

#[test]
fn test_vector_layouts() {
    assert_eq!(offset_of!(FVector, x), 0);
    assert_eq!(offset_of!(FVector, y), 4);
    assert_eq!(offset_of!(FVector, z), 8);
    assert_eq!(wire_offsets::<FVector>(), vec![0, 4, 8]);

    assert_eq!(offset_of!(DVector, x), 0);
    assert_eq!(offset_of!(DVector, y), 8);
    assert_eq!(offset_of!(DVector, z), 16);
    assert_eq!(wire_offsets::<DVector>(), vec![0, 8, 16]);

    assert_eq!(offset_of!(Euler, heading), 0);
    assert_eq!(offset_of!(Euler, pitch), 4);
    assert_eq!(offset_of!(Euler, roll), 8);
    assert_eq!(Euler::PACKED_SIZE, 12);
}

#[test]
fn test_type_table_matches_packed_sizes() {
    // (type, packed size) as listed by the producer's type table
    let table = [
        (ValueType::Bool, 1),
        (ValueType::S32, 4),
        (ValueType::U32, 4),
        (ValueType::U64, 8),
        (ValueType::Float, 4),
        (ValueType::Double, 8),
        (ValueType::FVector, 12),
        (ValueType::DVector, 24),
        (ValueType::Euler, 12),
        (ValueType::FPlacement, 24),
        (ValueType::DPlacement, 40),
        (ValueType::S64, 8),
    ];
    for (ty, size) in table {
        assert_eq!(ty.packed_size(), Some(size), "{}", ty.name());
    }
    assert_eq!(ValueType::String.packed_size(), None);
}

#[test]
fn test_slot_wire_fields() {
    assert_eq!(
        ScalarSlot::<u32>::WIRE_FIELDS,
        [Field::new(1, 0), Field::new(4, 1)]
    );
    assert_eq!(
        ArraySlot::<DPlacement, 2>::WIRE_FIELDS,
        [Field::new(1, 0), Field::new(4, 1), Field::new(80, 5)]
    );
    assert_eq!(ArraySlot::<DPlacement, 2>::PACKED_SIZE, 85);
    assert_eq!(ScalarSlot::<DPlacement>::PACKED_SIZE, 41);
}
