#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Plays back the phrases of a script through an external speech synthesis engine.
//!
//! # Features
//!
//! A script is a plain text file whose phrases are separated by blank lines. The [phrase] module
//! loads a script into a [`PhraseStore`](phrase::PhraseStore), which hands out the phrases by their
//! 1-based position.
//!
//! ## Text-to-speech
//!
//! The [tts] module renders a phrase by running a speech engine (by default the `say` command) as
//! a child process. Which synthesizer you choose will depend on whether you want to block the
//! execution while the speech is rendered or not. The [`SyncSynthesizer`](tts::SyncSynthesizer)
//! blocks until the engine exits, while the [`AsyncSynthesizer`](tokio::AsyncSynthesizer) returns a
//! [`Playback`](tokio::Playback) that completes when the engine exits.
//!
//! You can configure the synthesizer's engine program, its default voice and its rate of speech.
//!
//! ## Interactive sessions
//!
//! The [session] module implements the interactive mode: the user moves between phrases with the
//! arrow keys and confirms a phrase to have it spoken. The session guarantees that at most one
//! phrase is being spoken at any time and that the position cannot change while it is. The
//! [display] module renders the session to the terminal.
//!
//! # Processes and Lifetime of Playbacks
//!
//! Every rendered speech is a separate engine process. Dropping a [`Playback`](tokio::Playback)
//! before it completes kills the process it is waiting for, so quitting a session never leaves a
//! phrase playing in the background.

pub mod display;
mod error;
pub mod phrase;
pub mod session;
pub mod tokio;
pub mod tts;

pub use error::Error;

/// The type returned by functions and methods of this crate.
pub type Result<T> = std::result::Result<T, Error>;
