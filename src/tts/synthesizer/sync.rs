use std::ops::{Deref, DerefMut};

use crate::tts::Speech;
use crate::Result;

use super::{Completion, Synthesizer};

/// A speech synthesizer that blocks the current thread while rendering speech.
#[derive(Debug, Clone, Default)]
pub struct SyncSynthesizer {
    base: Synthesizer,
}

impl SyncSynthesizer {
    /// Creates a new synthesizer, configured to run the default engine.
    pub fn new() -> Self {
        Self {
            base: Synthesizer::new(),
        }
    }

    /// Renders the given speech, blocking the thread until the engine exits.
    ///
    /// Fails only if the engine can't be started. An engine that exits with a failure status is
    /// reported through the returned [`Completion`].
    pub fn speak<'s, S: Into<Speech<'s>>>(&self, speech: S) -> Result<Completion> {
        let status = self
            .base
            .command(speech)
            .status()
            .map_err(|err| self.base.engine_error(err))?;
        Ok(Completion::from(status).log(self.base.program()))
    }
}

impl Deref for SyncSynthesizer {
    type Target = Synthesizer;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for SyncSynthesizer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
