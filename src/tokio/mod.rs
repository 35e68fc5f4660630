//! Support for async speech rendering running on Tokio.

mod tts;

pub use tts::{AsyncSynthesizer, Playback};
