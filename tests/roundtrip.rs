// Seeded randomized round trips for every slot kind.
// A failing seed is printed so the case can be replayed.
use fastrand::Rng;
use telemetry_slots::{
    ArraySlot, ByteBuffer, DPlacement, DVector, DynamicScalar, Euler, FPlacement, FVector,
    ListSlot, ScalarSlot, Slot, Value, ValueType,
};

const SEEDS: u64 = 64;

fn text(rng: &mut Rng) -> String {
    let len = rng.usize(0..24);
    (0..len).map(|_| rng.alphanumeric()).collect()
}

fn fvector(rng: &mut Rng) -> FVector {
    FVector::new(rng.f32(), -rng.f32(), rng.f32() * 1000.0)
}

fn dvector(rng: &mut Rng) -> DVector {
    DVector::new(rng.f64() * 1e6, -rng.f64(), rng.f64())
}

fn euler(rng: &mut Rng) -> Euler {
    Euler::new(rng.f32(), rng.f32(), rng.f32())
}

fn encode(slot: &dyn Slot) -> Vec<u8> {
    let mut out = ByteBuffer::new();
    slot.append(&mut out);
    assert_eq!(out.len(), slot.encoded_len());
    out.into_vec()
}

/// Encode `slot` after a random prefix and decode it back in place.
fn roundtrip<S: Slot + Default + PartialEq + std::fmt::Debug>(rng: &mut Rng, slot: &S) {
    let prefix: Vec<u8> = (0..rng.usize(0..8)).map(|_| rng.u8(..)).collect();
    let mut bytes = prefix.clone();
    bytes.extend_from_slice(&encode(slot));

    let mut decoded = S::default();
    let read = decoded.parse_into(&bytes, prefix.len()).unwrap();
    assert_eq!(read, bytes.len() - prefix.len());
    assert_eq!(&decoded, slot);
    assert_eq!(encode(&decoded), bytes[prefix.len()..]);
}

#[test]
fn scalar_slots_roundtrip() {
    for seed in 0..SEEDS {
        println!("seed {seed}");
        let mut rng = Rng::with_seed(seed);

        let mut flag = ScalarSlot::<bool>::new();
        let mut s32 = ScalarSlot::<i32>::new();
        let mut u64_slot = ScalarSlot::<u64>::new();
        let mut s64 = ScalarSlot::<i64>::new();
        let mut double = ScalarSlot::<f64>::new();
        let mut placement = ScalarSlot::<DPlacement>::new();
        let mut cabin = ScalarSlot::<FPlacement>::new();
        let mut name = ScalarSlot::<String>::new();

        if rng.bool() {
            flag.set(rng.bool());
        }
        if rng.bool() {
            s32.set(rng.i32(..));
        }
        if rng.bool() {
            u64_slot.set(rng.u64(..));
        }
        if rng.bool() {
            s64.set(rng.i64(..));
        }
        if rng.bool() {
            double.set(rng.f64());
        }
        if rng.bool() {
            placement.set(DPlacement::new(dvector(&mut rng), euler(&mut rng)));
        }
        if rng.bool() {
            cabin.set(FPlacement::new(fvector(&mut rng), euler(&mut rng)));
        }
        if rng.bool() {
            name.set(text(&mut rng));
        }

        roundtrip(&mut rng, &flag);
        roundtrip(&mut rng, &s32);
        roundtrip(&mut rng, &u64_slot);
        roundtrip(&mut rng, &s64);
        roundtrip(&mut rng, &double);
        roundtrip(&mut rng, &placement);
        roundtrip(&mut rng, &cabin);
        roundtrip(&mut rng, &name);
    }
}

#[test]
fn array_slots_roundtrip() {
    for seed in 0..SEEDS {
        println!("seed {seed}");
        let mut rng = Rng::with_seed(seed);

        let mut deflection = ArraySlot::<f32, 16>::new();
        let mut on_ground = ArraySlot::<bool, 16>::new();
        let mut hooks = ArraySlot::<DVector, 4>::new();
        let mut names = ArraySlot::<String, 5>::new();

        for index in 0..rng.usize(0..=16) {
            deflection.set(index, rng.f32()).unwrap();
            on_ground.set(index, rng.bool()).unwrap();
        }
        for index in 0..rng.usize(0..=4) {
            hooks.set(index, dvector(&mut rng)).unwrap();
        }
        let labels: Vec<String> = (0..rng.usize(0..=5)).map(|_| text(&mut rng)).collect();
        names.fill(&labels).unwrap();

        roundtrip(&mut rng, &deflection);
        roundtrip(&mut rng, &on_ground);
        roundtrip(&mut rng, &hooks);
        roundtrip(&mut rng, &names);

        assert_eq!(encode(&deflection).len(), ArraySlot::<f32, 16>::PACKED_SIZE);
        assert_eq!(names.values(), labels.as_slice());
    }
}

#[test]
fn list_slots_roundtrip() {
    for seed in 0..SEEDS {
        println!("seed {seed}");
        let mut rng = Rng::with_seed(seed);

        let bools: ListSlot<bool> = (0..rng.usize(0..200)).map(|_| rng.bool()).collect();
        let ids: ListSlot<u32> = (0..rng.usize(0..50)).map(|_| rng.u32(..)).collect();
        let cargo: ListSlot<String> = (0..rng.usize(0..20)).map(|_| text(&mut rng)).collect();
        let placements: ListSlot<FPlacement> = (0..rng.usize(0..10))
            .map(|_| FPlacement::new(fvector(&mut rng), euler(&mut rng)))
            .collect();

        assert_eq!(encode(&bools).len(), 4 + bools.len().div_ceil(32) * 4);
        assert_eq!(encode(&placements).len(), 4 + placements.len() * 24);

        roundtrip(&mut rng, &bools);
        roundtrip(&mut rng, &ids);
        roundtrip(&mut rng, &cargo);
        roundtrip(&mut rng, &placements);
    }
}

#[test]
fn dynamic_scalar_matches_typed_slot() {
    for seed in 0..SEEDS {
        let mut rng = Rng::with_seed(seed);
        let value = euler(&mut rng);

        let typed = ScalarSlot::with_value(value);
        let dynamic = DynamicScalar {
            present: true,
            value: Value::Euler(value),
        };

        let mut out = ByteBuffer::new();
        dynamic.append(&mut out);
        assert_eq!(out.as_bytes(), encode(&typed).as_slice());

        let (back, read) =
            DynamicScalar::parse_with_id(ValueType::Euler.id(), out.as_bytes(), 0).unwrap();
        assert_eq!(back, dynamic);
        assert_eq!(read, 13);
    }
}

#[test]
fn truncated_inputs_never_panic() {
    for seed in 0..SEEDS {
        let mut rng = Rng::with_seed(seed);
        let mut bytes = vec![0u8; rng.usize(0..64)];
        rng.fill(&mut bytes);

        // Garbage may or may not decode, but must never panic.
        let _ = ScalarSlot::<DPlacement>::parse(&bytes, 0);
        let _ = ScalarSlot::<String>::parse(&bytes, 0);
        let _ = ArraySlot::<u64, 3>::parse(&bytes, 0);
        let _ = ArraySlot::<String, 3>::parse(&bytes, 0);
        let _ = ListSlot::<bool>::parse(&bytes, 0);
        let _ = ListSlot::<String>::parse(&bytes, 0);
        let _ = ListSlot::<DVector>::parse(&bytes, 0);
        for id in 0..16 {
            let _ = DynamicScalar::parse_with_id(id, &bytes, 0);
        }
    }
}
