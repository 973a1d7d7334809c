//! Frame Roundtrip - encode satu telemetry frame lalu baca kembali
//!
//! Usage:
//!   cargo run --example frame_roundtrip
//!
//! Environment:
//!   RUST_LOG                        log filter (default: info)
//!   TELEMETRY_FRAME_CAPACITY        ukuran awal buffer encoder (bytes)
//!   TELEMETRY_FRAME_RESERVE_EXACT   hitung ukuran frame sebelum menulis (1/0)

use telemetry_slots::{
    ArraySlot, CodecResult, DPlacement, DVector, Euler, FVector, FrameConfig, FrameDecoder,
    FrameEncoder, ListSlot, ScalarSlot, Slot,
};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

const WHEELS: usize = 6;

fn main() -> CodecResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let config = FrameConfig::from_env();
    info!(?config, "frame config");

    // Sisi producer
    let mut speed = ScalarSlot::<f32>::new();
    let mut placement = ScalarSlot::<DPlacement>::new();
    let mut acceleration = ScalarSlot::<FVector>::new();
    let mut brand = ScalarSlot::<String>::new();
    let mut suspension = ArraySlot::<f32, WHEELS>::new();
    let mut on_ground = ListSlot::<bool>::new();

    speed.set(23.6);
    placement.set(DPlacement::new(
        DVector::new(-31_410.2, 48.9, -14_002.7),
        Euler::new(0.74, 0.001, -0.003),
    ));
    brand.set("Volvo".to_string());
    for wheel in 0..WHEELS {
        suspension.set(wheel, 0.02 * wheel as f32)?;
    }
    on_ground.extend([true, true, true, true, false, true]);

    let mut encoder = FrameEncoder::new(config);
    let frame = encoder
        .encode(&[
            &speed,
            &placement,
            &acceleration,
            &brand,
            &suspension,
            &on_ground,
        ])
        .to_vec();
    info!(bytes = frame.len(), "frame encoded");

    // Sisi consumer, urutan slot sama
    let mut speed_in = ScalarSlot::<f32>::new();
    let mut placement_in = ScalarSlot::<DPlacement>::new();
    let mut acceleration_in = ScalarSlot::<FVector>::new();
    let mut brand_in = ScalarSlot::<String>::new();
    let mut suspension_in = ArraySlot::<f32, WHEELS>::new();
    let mut on_ground_in = ListSlot::<bool>::new();

    let mut decoder = FrameDecoder::new(&frame);
    let read = decoder.decode(&mut [
        &mut speed_in,
        &mut placement_in,
        &mut acceleration_in,
        &mut brand_in,
        &mut suspension_in,
        &mut on_ground_in,
    ])?;

    info!(
        read,
        speed = ?speed_in.get(),
        brand = ?brand_in.get(),
        acceleration_present = acceleration_in.is_present(),
        "frame decoded"
    );
    if let Some(p) = placement_in.get() {
        info!(
            x = p.position.x,
            y = p.position.y,
            z = p.position.z,
            heading = p.orientation.heading,
            "placement"
        );
    }
    info!(suspension = ?suspension_in.values(), wheels_on_ground = ?on_ground_in.as_slice(), "wheels");

    // Batas frame: semua slot kembali absent/kosong
    let mut slots: [&mut dyn Slot; 6] = [
        &mut speed,
        &mut placement,
        &mut acceleration,
        &mut brand,
        &mut suspension,
        &mut on_ground,
    ];
    telemetry_slots::reset_all(&mut slots);
    let empty_len = encoder
        .encode(&[&speed, &placement, &acceleration, &brand, &suspension, &on_ground])
        .len();
    info!(bytes = empty_len, frames = encoder.frames_encoded(), "empty frame encoded");

    Ok(())
}
