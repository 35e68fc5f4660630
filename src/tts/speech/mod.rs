use std::borrow::{Borrow, Cow};

use crate::phrase::Phrase;

mod types;

pub use types::Rate;

/// A speech to be rendered by a synthesizer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Speech<'s> {
    /// Text the engine echoes on the terminal while speaking it
    Text(Cow<'s, str>),
    /// Text the engine speaks without echoing it, used for announcements
    Quiet(Cow<'s, str>),
}

impl<'s> Speech<'s> {
    /// Constructs a speech that is rendered without visual echo.
    pub fn quiet<S: Into<Cow<'s, str>>>(text: S) -> Self {
        Self::Quiet(text.into())
    }

    pub(crate) fn echo(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub(crate) fn contents(&self) -> &str {
        match self {
            Self::Text(cow) => cow.borrow(),
            Self::Quiet(cow) => cow.borrow(),
        }
    }

    /// Returns the contents in the form handed to the engine.
    ///
    /// The result is always a single argument: line breaks, tabs and other control characters
    /// become spaces, so script formatting can't reach the engine as anything but words.
    pub fn escaped(&self) -> Cow<'_, str> {
        escape(self.contents())
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.chars() {
        let ch = if ch.is_control() { ' ' } else { ch };
        if ch == ' ' && last_was_space {
            continue;
        }
        last_was_space = ch == ' ';
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

impl<'s> From<&'s str> for Speech<'s> {
    fn from(s: &'s str) -> Self {
        Self::Text(s.into())
    }
}

impl<'s> From<String> for Speech<'s> {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl<'s> From<&'s Phrase> for Speech<'s> {
    fn from(phrase: &'s Phrase) -> Self {
        Self::Text(phrase.text().into())
    }
}
