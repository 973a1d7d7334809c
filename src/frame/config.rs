//! Konfigurasi frame encoder

use std::env;

use tracing::warn;

/// Env var untuk override [`FrameConfig::initial_capacity`]
pub const ENV_CAPACITY: &str = "TELEMETRY_FRAME_CAPACITY";
/// Env var untuk override [`FrameConfig::reserve_exact`]
pub const ENV_RESERVE_EXACT: &str = "TELEMETRY_FRAME_RESERVE_EXACT";

/// Buffer sizing untuk [`FrameEncoder`](super::FrameEncoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Bytes yang dialokasikan saat encoder dibuat
    pub initial_capacity: usize,
    /// Hitung ukuran frame dulu, lalu reserve sekaligus
    pub reserve_exact: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4096,
            reserve_exact: true,
        }
    }
}

impl FrameConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_reserve_exact(mut self, reserve_exact: bool) -> Self {
        self.reserve_exact = reserve_exact;
        self
    }

    /// Default, di-override oleh `TELEMETRY_FRAME_CAPACITY` dan
    /// `TELEMETRY_FRAME_RESERVE_EXACT`. Value yang tidak valid di-log lalu
    /// diabaikan.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config.initial_capacity = capacity,
                Err(e) => warn!(key = ENV_CAPACITY, value = %raw, error = %e, "ignoring frame config override"),
            }
        }

        if let Some(raw) = lookup(ENV_RESERVE_EXACT) {
            match parse_flag(&raw) {
                Some(flag) => config.reserve_exact = flag,
                None => warn!(key = ENV_RESERVE_EXACT, value = %raw, "ignoring frame config override"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
