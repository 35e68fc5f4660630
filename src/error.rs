use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The error type returned by functions and methods of this crate.
///
/// Every variant is fatal for the program. Each one carries a distinct negative code that is
/// embedded in the message shown to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// The command line has the wrong shape for the selected mode.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The script path does not exist or is not a regular file.
    #[error("script file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The requested phrase has no backing entry in the script.
    #[error("phrase {index} is out of range, the script has {count} phrase(s)")]
    PhraseIndexOutOfRange {
        /// The requested 1-based index.
        index: usize,
        /// The number of phrases in the script.
        count: usize,
    },

    /// The script contains no phrases.
    #[error("script file contains no phrases: {}", .0.display())]
    EmptyScript(PathBuf),

    /// Reading the script or talking to the terminal failed.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    /// The speech engine could not be started.
    #[error("failed to start speech engine `{program}`: {source}")]
    Engine {
        /// The engine program that was run.
        program: String,
        /// The error returned when spawning it.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns the code embedded in the message shown to the user.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidArguments(_) => -1,
            Self::FileNotFound(_) => -2,
            Self::PhraseIndexOutOfRange { .. } => -3,
            Self::EmptyScript(_) => -4,
            Self::Io(_) => -5,
            Self::Engine { .. } => -6,
        }
    }

    /// Returns a short sentence suitable for announcing the error aloud.
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::InvalidArguments(_) => "Error. Invalid arguments.",
            Self::FileNotFound(_) => "Error. Script file not found.",
            Self::PhraseIndexOutOfRange { .. } => "Error. Phrase number out of range.",
            Self::EmptyScript(_) => "Error. The script is empty.",
            Self::Io(_) => "Error. Could not read the script.",
            Self::Engine { .. } => "Error. Speech engine failed.",
        }
    }
}
