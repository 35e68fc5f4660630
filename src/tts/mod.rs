//! Rendering speech with an external speech synthesis engine.
//!
//! The engine is run once per speech with the configured voice and rate. Text is always handed to
//! the engine as a single argument after `--` and never goes through a shell.

mod speech;
mod synthesizer;
mod voice;

pub use self::speech::{Rate, Speech};
pub use self::synthesizer::{Completion, Synthesizer, SyncSynthesizer, DEFAULT_PROGRAM};
pub use self::voice::Voice;
