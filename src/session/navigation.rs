use strum_macros::{EnumString, IntoStaticStr};

/// What a key press means to a session, independent of the key that was pressed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum NavigationCommand {
    /// Move to the next phrase.
    Next,
    /// Move to the previous phrase.
    Previous,
    /// Speak the current phrase.
    Commit,
    /// Do nothing.
    Ignored,
}

/// Returns the position that results from applying the command at the given position, in a script
/// with `count` phrases.
///
/// Positions saturate at `1` and `count`: moving past either end leaves the position where it is.
pub fn advance(position: usize, command: NavigationCommand, count: usize) -> usize {
    match command {
        NavigationCommand::Next => position.saturating_add(1).min(count),
        NavigationCommand::Previous => position.saturating_sub(1).max(1),
        NavigationCommand::Commit | NavigationCommand::Ignored => position,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{advance, NavigationCommand};
    use NavigationCommand::*;

    #[test]
    fn positions_stay_in_bounds() {
        for count in 1..=8 {
            for position in 1..=count {
                assert!(advance(position, Next, count) <= count);
                assert!(advance(position, Previous, count) >= 1);
            }
        }
    }

    #[test]
    fn moving_past_the_ends_is_a_no_op() {
        assert_eq!(1, advance(1, Previous, 5));
        assert_eq!(5, advance(5, Next, 5));
        assert_eq!(1, advance(1, Next, 1));
        assert_eq!(1, advance(1, Previous, 1));
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        let count = 6;
        for position in 1..count {
            assert_eq!(position, advance(advance(position, Next, count), Previous, count));
        }
    }

    #[test]
    fn commit_and_ignored_keep_the_position() {
        assert_eq!(3, advance(3, Commit, 5));
        assert_eq!(3, advance(3, Ignored, 5));
    }

    #[test]
    fn commands_have_names() {
        assert_eq!("Commit", <&str>::from(Commit));
        assert_eq!(Previous, NavigationCommand::from_str("previous").unwrap());
    }
}
