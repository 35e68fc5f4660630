//! Rendering a session to the terminal.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::phrase::PhraseStore;

const LABEL: &str = "Phrase ";
const PLAYING: &str = "Playing...";
const KEYS_HINT: &str = "Left/Right: move   Enter: speak   q: quit";

/// Renders the position in a script and the phrase at that position.
///
/// A display holds no session state: every render is given everything it shows.
pub struct Display<W: Write> {
    out: W,
}

impl<W: Write> Display<W> {
    /// Creates a display that writes to the given terminal output.
    pub fn new(out: W) -> Self {
        Self {
            out,
        }
    }

    /// Clears the screen and renders the given position.
    ///
    /// The phrase text is shown only while `playing` is false. While a phrase is being spoken the
    /// text is replaced with an indicator.
    pub fn render(&mut self, store: &PhraseStore, position: usize, playing: bool) -> io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(LABEL),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Cyan),
            Print(position),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print(format!("/{}\r\n\r\n", store.count())),
        )?;

        if playing {
            queue!(self.out, SetForegroundColor(Color::DarkGrey), Print(PLAYING), ResetColor)?;
        } else if let Some(phrase) = store.get(position) {
            // Raw mode doesn't return the carriage on a line feed.
            for (index, line) in phrase.text().lines().enumerate() {
                if index > 0 {
                    queue!(self.out, Print("\r\n"))?;
                }
                queue!(self.out, Print(line))?;
            }
        }

        queue!(
            self.out,
            Print("\r\n\r\n"),
            SetForegroundColor(Color::DarkGrey),
            Print(KEYS_HINT),
            ResetColor,
        )?;
        self.out.flush()
    }

    /// Returns a reference to the underlying output.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwraps this display, returning the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Puts the terminal in raw mode on an alternate screen for as long as it's alive.
pub struct Terminal {
    _private: (),
}

impl Terminal {
    /// Enters raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self {
            _private: (),
        })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
