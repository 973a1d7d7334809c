//! Criterion benchmark untuk slot encode/decode
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use telemetry_slots::{
    ArraySlot, ByteBuffer, DPlacement, DVector, Euler, FrameDecoder, FrameEncoder, ListSlot,
    ScalarSlot, Slot,
};

fn placement(i: u64) -> DPlacement {
    let f = i as f64;
    DPlacement::new(DVector::new(f, -f, f * 0.5), Euler::new(0.25, 0.0, 0.125))
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    group.throughput(Throughput::Elements(1));

    group.bench_function("append_u32", |b| {
        let slot = ScalarSlot::with_value(42u32);
        let mut out = ByteBuffer::with_capacity(64);
        b.iter(|| {
            out.clear();
            black_box(&slot).append(&mut out);
        });
    });

    group.bench_function("append_dplacement", |b| {
        let slot = ScalarSlot::with_value(placement(7));
        let mut out = ByteBuffer::with_capacity(64);
        b.iter(|| {
            out.clear();
            black_box(&slot).append(&mut out);
        });
    });

    group.bench_function("parse_dplacement", |b| {
        let mut out = ByteBuffer::new();
        ScalarSlot::with_value(placement(7)).append(&mut out);
        let bytes = out.into_vec();
        b.iter(|| black_box(ScalarSlot::<DPlacement>::parse(black_box(&bytes), 0)));
    });

    group.bench_function("parse_text", |b| {
        let mut out = ByteBuffer::new();
        ScalarSlot::with_value("Renault Trucks T".to_string()).append(&mut out);
        let bytes = out.into_vec();
        b.iter(|| black_box(ScalarSlot::<String>::parse(black_box(&bytes), 0)));
    });

    group.finish();
}

fn bench_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("array");

    let mut wheels = ArraySlot::<f32, 14>::new();
    for i in 0..14 {
        let _ = wheels.set(i, i as f32 * 0.01);
    }
    group.throughput(Throughput::Elements(14));

    group.bench_function("append_f32x14", |b| {
        let mut out = ByteBuffer::with_capacity(128);
        b.iter(|| {
            out.clear();
            black_box(&wheels).append(&mut out);
        });
    });

    group.bench_function("parse_f32x14", |b| {
        let mut out = ByteBuffer::new();
        wheels.append(&mut out);
        let bytes = out.into_vec();
        b.iter(|| black_box(ArraySlot::<f32, 14>::parse(black_box(&bytes), 0)));
    });

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for len in [32usize, 1024, 16384].iter() {
        group.throughput(Throughput::Elements(*len as u64));

        let bools: ListSlot<bool> = (0..*len).map(|i| i % 3 == 0).collect();
        group.bench_function(format!("bool_roundtrip_{}", len), |b| {
            let mut out = ByteBuffer::with_capacity(*len);
            b.iter(|| {
                out.clear();
                bools.append(&mut out);
                black_box(ListSlot::<bool>::parse(out.as_bytes(), 0))
            });
        });

        let placements: ListSlot<DPlacement> = (0..*len as u64).map(placement).collect();
        group.bench_function(format!("dplacement_roundtrip_{}", len), |b| {
            let mut out = ByteBuffer::with_capacity(*len * 40 + 4);
            b.iter(|| {
                out.clear();
                placements.append(&mut out);
                black_box(ListSlot::<DPlacement>::parse(out.as_bytes(), 0))
            });
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let rpm = ScalarSlot::with_value(1450.0f32);
    let world = ScalarSlot::with_value(placement(3));
    let brand = ScalarSlot::with_value("Scania".to_string());
    let mut wheels = ArraySlot::<bool, 14>::new();
    let _ = wheels.fill(&[true; 10]);
    let cargo: ListSlot<String> = ["steel", "apples", "glass"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let slots: [&dyn Slot; 5] = [&rpm, &world, &brand, &wheels, &cargo];
    group.throughput(Throughput::Bytes(FrameEncoder::frame_len(&slots) as u64));

    group.bench_function("encode", |b| {
        let mut encoder = FrameEncoder::default();
        b.iter(|| {
            black_box(encoder.encode(black_box(&slots)));
        });
    });

    group.bench_function("decode", |b| {
        let mut encoder = FrameEncoder::default();
        let bytes = encoder.encode(&slots).to_vec();
        let mut rpm_out = ScalarSlot::<f32>::new();
        let mut world_out = ScalarSlot::<DPlacement>::new();
        let mut brand_out = ScalarSlot::<String>::new();
        let mut wheels_out = ArraySlot::<bool, 14>::new();
        let mut cargo_out = ListSlot::<String>::new();
        b.iter(|| {
            let mut decoder = FrameDecoder::new(black_box(&bytes));
            let _ = decoder.decode(&mut [
                &mut rpm_out,
                &mut world_out,
                &mut brand_out,
                &mut wheels_out,
                &mut cargo_out,
            ]);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_array, bench_list, bench_frame);
criterion_main!(benches);
