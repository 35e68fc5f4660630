//! The interactive mode: moving between phrases and speaking them one at a time.
//!
//! A session is a small state machine with two states. While *idle*, the arrow keys move between
//! phrases and the confirm key starts speaking the current one. While *speaking*, every key except
//! quit is dropped, so the position cannot change under the phrase being spoken and a second
//! phrase cannot start. When the speech completes the session becomes idle again.
//!
//! All events (key presses, the completion of the current speech and the quit signal) are handled
//! one at a time by [`Session::run`]. Pending key presses are handled before a pending completion.

use std::future::{pending, Future};
use std::io::{self, Write};
use std::pin::Pin;

use crossterm::event::Event;
use futures::{Stream, StreamExt};

use crate::display::Display;
use crate::phrase::PhraseStore;
use crate::tokio::{AsyncSynthesizer, Playback};
use crate::tts::Completion;
use crate::Result;

mod input;
mod navigation;

pub use input::Input;
pub use navigation::{advance, NavigationCommand};

/// Starts speaking phrases for a session.
pub trait Speaker {
    /// Starts speaking the given text and returns a playback that completes when it's done.
    fn speak(&self, text: &str) -> Result<Playback>;
}

impl Speaker for AsyncSynthesizer {
    fn speak(&self, text: &str) -> Result<Playback> {
        AsyncSynthesizer::speak(self, text)
    }
}

impl<F: Fn(&str) -> Result<Playback>> Speaker for F {
    fn speak(&self, text: &str) -> Result<Playback> {
        self(text)
    }
}

/// The mutable state of a session.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SessionState {
    position: usize,
    playing: bool,
}

/// What a session has to do after its state changed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    /// The position may have changed; render it.
    Moved,
    /// The current phrase has to be spoken; render the playing indicator and start it.
    Started,
    /// The speech has completed; render the current phrase again.
    Finished,
    /// Nothing changed and nothing has to be rendered.
    Unchanged,
    /// The event arrived while a phrase was being spoken and was dropped.
    Dropped,
}

impl SessionState {
    /// Creates the state of a new session: idle, at the first phrase.
    pub fn new() -> Self {
        Self {
            position: 1,
            playing: false,
        }
    }

    /// Returns the current 1-based position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` while a phrase is being spoken.
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Applies a command in a script with `count` phrases.
    pub fn apply(&mut self, command: NavigationCommand, count: usize) -> Transition {
        if self.playing {
            return Transition::Dropped;
        }
        match command {
            NavigationCommand::Next | NavigationCommand::Previous => {
                self.position = advance(self.position, command, count);
                Transition::Moved
            }
            NavigationCommand::Commit => {
                self.playing = true;
                Transition::Started
            }
            NavigationCommand::Ignored => Transition::Unchanged,
        }
    }

    /// Records the completion of the phrase being spoken.
    pub fn finish(&mut self) -> Transition {
        if !self.playing {
            return Transition::Unchanged;
        }
        self.playing = false;
        Transition::Finished
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// An interactive session over the phrases of a script.
pub struct Session<'a, S, W: Write> {
    store: &'a PhraseStore,
    speaker: S,
    display: Display<W>,
    state: SessionState,
    playback: Option<Playback>,
}

impl<'a, S: Speaker, W: Write> Session<'a, S, W> {
    /// Creates a session at the first phrase of the given script.
    pub fn new(store: &'a PhraseStore, speaker: S, display: Display<W>) -> Self {
        Self {
            store,
            speaker,
            display,
            state: SessionState::new(),
            playback: None,
        }
    }

    /// Returns the current state of the session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the display the session renders to.
    pub fn display(&self) -> &Display<W> {
        &self.display
    }

    /// Renders the current state.
    pub fn render(&mut self) -> io::Result<()> {
        self.display.render(self.store, self.state.position, self.state.playing)
    }

    /// Handles a command. Starts speaking the current phrase if the command is a commit.
    ///
    /// Fails if rendering fails or if the speech can't be started.
    pub fn handle_command(&mut self, command: NavigationCommand) -> Result<Transition> {
        let transition = self.state.apply(command, self.store.count());
        tracing::debug!(
            command = <&str>::from(command),
            ?transition,
            position = self.state.position,
            "handled command"
        );
        match transition {
            Transition::Moved => self.render()?,
            Transition::Started => {
                self.render()?;
                let phrase = self.store.try_get(self.state.position)?;
                self.playback = Some(self.speaker.speak(phrase.text())?);
            }
            _ => {}
        }
        Ok(transition)
    }

    /// Handles the completion of the phrase being spoken.
    pub fn handle_completion(&mut self, completion: Completion) -> Result<Transition> {
        self.playback = None;
        let transition = self.state.finish();
        tracing::debug!(?completion, position = self.state.position, "speech completed");
        if transition == Transition::Finished {
            self.render()?;
        }
        Ok(transition)
    }

    /// Runs the session until `quit` completes, a quit key is pressed or `events` ends.
    ///
    /// The session renders itself first. A phrase still being spoken when the session ends is cut
    /// short.
    pub async fn run<E, Q>(&mut self, mut events: E, quit: Q) -> Result<()>
    where
        E: Stream<Item = io::Result<Event>> + Unpin,
        Q: Future<Output = ()>,
    {
        tokio::pin!(quit);
        let result = self.event_loop(&mut events, quit).await;
        if self.playback.take().is_some() {
            tracing::debug!(position = self.state.position, "speech cut short");
        }
        result
    }

    async fn event_loop<E, Q>(&mut self, events: &mut E, mut quit: Pin<&mut Q>) -> Result<()>
    where
        E: Stream<Item = io::Result<Event>> + Unpin,
        Q: Future<Output = ()>,
    {
        self.render()?;
        loop {
            tokio::select! {
                biased;

                _ = &mut quit => {
                    tracing::info!("quit signal received");
                    return Ok(());
                }
                event = events.next() => match event {
                    Some(Ok(event)) => match Input::from_event(&event) {
                        Some(Input::Command(command)) => {
                            self.handle_command(command)?;
                        }
                        Some(Input::Quit) => {
                            tracing::info!("quit key pressed");
                            return Ok(());
                        }
                        None => {}
                    },
                    Some(Err(err)) => return Err(err.into()),
                    None => {
                        tracing::debug!("input closed");
                        return Ok(());
                    }
                },
                // Keys already queued are drained first, so the ones pressed while speaking are
                // dropped before the completion is seen.
                completion = wait_for(&mut self.playback) => {
                    self.handle_completion(completion)?;
                }
            }
        }
    }
}

async fn wait_for(playback: &mut Option<Playback>) -> Completion {
    match playback {
        Some(playback) => playback.await,
        None => pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::{NavigationCommand, SessionState, Transition};
    use NavigationCommand::*;

    #[test]
    fn new_session_is_idle_at_first_phrase() {
        let state = SessionState::new();
        assert_eq!(1, state.position());
        assert!(!state.playing());
    }

    #[test]
    fn next_clamps_at_the_last_phrase() {
        let mut state = SessionState::new();
        for _ in 0..3 {
            assert_eq!(Transition::Moved, state.apply(Next, 3));
        }
        assert_eq!(3, state.position());
    }

    #[test]
    fn speaking_drops_every_command() {
        let mut state = SessionState::new();
        state.apply(Next, 3);
        assert_eq!(Transition::Started, state.apply(Commit, 3));

        for command in [Next, Previous, Commit, Ignored, Next, Next] {
            assert_eq!(Transition::Dropped, state.apply(command, 3));
            assert_eq!(2, state.position());
            assert!(state.playing());
        }

        assert_eq!(Transition::Finished, state.finish());
        assert!(!state.playing());
        assert_eq!(Transition::Moved, state.apply(Previous, 3));
        assert_eq!(1, state.position());
    }

    #[test]
    fn ignored_keys_change_nothing() {
        let mut state = SessionState::new();
        assert_eq!(Transition::Unchanged, state.apply(Ignored, 3));
        assert_eq!(SessionState::new(), state);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut state = SessionState::new();
        assert_eq!(Transition::Unchanged, state.finish());
        assert_eq!(SessionState::new(), state);
    }
}
