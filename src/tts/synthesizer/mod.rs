use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use super::{Rate, Speech, Voice};

mod sync;

pub use sync::SyncSynthesizer;

/// The engine program run when no other is configured.
pub const DEFAULT_PROGRAM: &str = "say";

const VOICE_FLAG: &str = "-v";
const RATE_FLAG: &str = "-r";
const ECHO_FLAG: &str = "-i";
const END_OF_OPTIONS: &str = "--";

/// The outcome of rendering a speech.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Completion {
    /// The engine exited successfully.
    Succeeded,
    /// The engine exited with a failure status, or its status couldn't be determined. The exit code
    /// is `None` if the engine was killed by a signal or if waiting for it failed.
    Failed(Option<i32>),
}

impl Completion {
    /// Returns `true` if the engine exited successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub(crate) fn from_wait(result: std::io::Result<ExitStatus>) -> Self {
        match result {
            Ok(status) => Self::from(status),
            Err(err) => {
                tracing::warn!(error = %err, "failed to wait for speech engine");
                Self::Failed(None)
            }
        }
    }

    pub(crate) fn log(self, program: &str) -> Self {
        match self {
            Self::Succeeded => tracing::debug!(program, "speech finished"),
            Self::Failed(Some(code)) => {
                tracing::warn!(program, code, "speech engine exited with failure status")
            }
            Self::Failed(None) => tracing::warn!(program, "speech engine terminated abnormally"),
        }
        self
    }
}

impl From<ExitStatus> for Completion {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            Self::Succeeded
        } else {
            Self::Failed(status.code())
        }
    }
}

/// Provides the common speech synthesis API shared across different kinds of synthesizers.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    program: String,
    voice: Option<Voice>,
    rate: Rate,
}

impl Synthesizer {
    pub(crate) fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            voice: None,
            rate: Rate::default(),
        }
    }

    /// Returns the engine program this synthesizer runs.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the rate of speech for this synthesizer.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns the voice this synthesizer will use to render speech, or `None` if the engine's
    /// default voice is used.
    pub fn voice(&self) -> Option<&Voice> {
        self.voice.as_ref()
    }

    /// Sets the engine program this synthesizer runs. The program is looked up on `PATH` unless
    /// it's given as a path.
    pub fn set_program<S: Into<String>>(&mut self, program: S) {
        self.program = program.into();
    }

    /// Sets the rate of speech for this synthesizer.
    pub fn set_rate<R: Into<Rate>>(&mut self, rate: R) {
        self.rate = rate.into();
    }

    /// Sets the voice this synthesizer will use to render speech.
    pub fn set_voice<V: Into<Voice>>(&mut self, voice: Option<V>) {
        self.voice = voice.map(Into::into);
    }

    /// Returns the arguments the engine is run with to render the given speech.
    pub fn args<'s, S: Into<Speech<'s>>>(&self, speech: S) -> Vec<OsString> {
        let speech = speech.into();
        let mut args = Vec::with_capacity(7);
        if let Some(voice) = &self.voice {
            args.push(VOICE_FLAG.into());
            args.push(voice.name().into());
        }
        args.push(RATE_FLAG.into());
        args.push(self.rate.to_string().into());
        if speech.echo() {
            args.push(ECHO_FLAG.into());
        }
        args.push(END_OF_OPTIONS.into());
        args.push(speech.escaped().into_owned().into());
        args
    }

    pub(crate) fn command<'s, S: Into<Speech<'s>>>(&self, speech: S) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args(speech));
        command
    }

    pub(crate) fn engine_error(&self, source: std::io::Error) -> crate::Error {
        crate::Error::Engine {
            program: self.program.clone(),
            source,
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
