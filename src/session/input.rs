use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::NavigationCommand;

/// A terminal event translated for a session.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Input {
    /// A key that drives the session's state machine.
    Command(NavigationCommand),
    /// A request to end the session, honored whether or not a phrase is being spoken.
    Quit,
}

impl Input {
    /// Translates a terminal event. Returns `None` for events that aren't key presses.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Self::from_key(key)),
            _ => None,
        }
    }

    /// Translates a key press.
    ///
    /// Right, Down, `l` and `j` move forward; Left, Up, `h` and `k` move back; Enter and Space
    /// speak the current phrase; Ctrl-C, Esc and `q` quit. Every other key is ignored.
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Self::Quit,
                _ => Self::Command(NavigationCommand::Ignored),
            };
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Self::Quit,
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                Self::Command(NavigationCommand::Next)
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                Self::Command(NavigationCommand::Previous)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Self::Command(NavigationCommand::Commit),
            _ => Self::Command(NavigationCommand::Ignored),
        }
    }
}
