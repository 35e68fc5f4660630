use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;
use std::process::Stdio;
use std::task::{Context, Poll};

use tokio::process::Command;
use tokio::sync::oneshot::{channel, Receiver};
use tokio::task::AbortHandle;

use crate::tts::{Completion, Speech, Synthesizer};
use crate::Result;

/// A speech synthesizer that returns a future for every speech it renders.
#[derive(Debug, Clone, Default)]
pub struct AsyncSynthesizer {
    base: Synthesizer,
}

impl AsyncSynthesizer {
    /// Creates a new synthesizer, configured to run the default engine.
    pub fn new() -> Self {
        Self {
            base: Synthesizer::new(),
        }
    }

    /// Starts rendering the given speech and returns a [`Playback`] that completes when the
    /// engine exits.
    ///
    /// Must be called from within a Tokio runtime. The engine's output is discarded, since the
    /// terminal belongs to the caller while the speech is rendered.
    pub fn speak<'s, S: Into<Speech<'s>>>(&self, speech: S) -> Result<Playback> {
        let mut command = Command::from(self.base.command(speech));
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        let mut child = command.spawn().map_err(|err| self.base.engine_error(err))?;
        tracing::debug!(program = self.base.program(), pid = child.id(), "speech started");

        let (tx, rx) = channel();
        let program = self.base.program().to_string();
        let task = tokio::spawn(async move {
            let completion = Completion::from_wait(child.wait().await).log(&program);
            let _ = tx.send(completion);
        });
        Ok(Playback {
            rx,
            abort: Some(task.abort_handle()),
        })
    }
}

impl Deref for AsyncSynthesizer {
    type Target = Synthesizer;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for AsyncSynthesizer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

/// A speech being rendered. Completes exactly once, when the rendering ends.
///
/// Dropping an unfinished playback kills the engine process rendering it.
#[derive(Debug)]
pub struct Playback {
    rx: Receiver<Completion>,
    abort: Option<AbortHandle>,
}

impl Playback {
    /// Creates a playback that completes when the given receiver does.
    ///
    /// This is useful for rendering speech by other means than an engine process. If the sender is
    /// dropped without sending, the playback completes with [`Completion::Failed`].
    pub fn from_receiver(rx: Receiver<Completion>) -> Self {
        Self {
            rx,
            abort: None,
        }
    }
}

impl Future for Playback {
    type Output = Completion;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.unwrap_or(Completion::Failed(None)))
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}
