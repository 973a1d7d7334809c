//! Frame layer: satu buffer per reporting cycle
//!
//! - Encode: walk slot aktif sesuai urutan deklarasi ke satu buffer
//! - Decode: walk dengan urutan sama, abort di slot rusak pertama

mod config;
mod encoder;

pub use config::{FrameConfig, ENV_CAPACITY, ENV_RESERVE_EXACT};
pub use encoder::{FrameDecoder, FrameEncoder};
