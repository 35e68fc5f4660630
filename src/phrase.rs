//! Loading a script and looking up its phrases.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

const PHRASE_SEPARATOR: &str = "\n\n";

/// A trimmed, blank-line delimited block of text from a script.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Phrase {
    text: String,
}

impl Phrase {
    /// Returns the text of the phrase.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The ordered phrases of a script, addressed by 1-based position.
///
/// A store is never empty: both [`parse`](PhraseStore::parse) and [`load`](PhraseStore::load)
/// refuse to build one without phrases.
#[derive(Debug, Clone)]
pub struct PhraseStore {
    phrases: Vec<Phrase>,
}

impl PhraseStore {
    /// Splits the given script contents into phrases. Returns `None` if there are none.
    ///
    /// Phrases are separated by a blank line. Whitespace around each phrase is trimmed and the
    /// empty fragments left by runs of blank lines are dropped.
    pub fn parse(contents: &str) -> Option<Self> {
        let contents = contents.replace("\r\n", "\n");
        let phrases: Vec<Phrase> = contents
            .split(PHRASE_SEPARATOR)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| Phrase {
                text: text.to_string(),
            })
            .collect();
        if phrases.is_empty() {
            None
        } else {
            Some(Self {
                phrases,
            })
        }
    }

    /// Reads and parses the script at the given path.
    ///
    /// Fails with [`Error::FileNotFound`] if the path doesn't name a regular file, and with
    /// [`Error::EmptyScript`] if the script has no phrases.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let store = Self::parse(&contents).ok_or_else(|| Error::EmptyScript(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), count = store.count(), "loaded script");
        Ok(store)
    }

    /// Returns the number of phrases, which is at least 1.
    pub fn count(&self) -> usize {
        self.phrases.len()
    }

    /// Returns the phrase at the given 1-based position, if there is one.
    pub fn get(&self, position: usize) -> Option<&Phrase> {
        position.checked_sub(1).and_then(|index| self.phrases.get(index))
    }

    /// Returns the phrase at the given 1-based position, or
    /// [`Error::PhraseIndexOutOfRange`] if there is none.
    pub fn try_get(&self, position: usize) -> Result<&Phrase> {
        self.get(position).ok_or(Error::PhraseIndexOutOfRange {
            index: position,
            count: self.count(),
        })
    }

    /// Iterates over the phrases in script order.
    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::PhraseStore;
    use crate::Error;

    fn texts(store: &PhraseStore) -> Vec<&str> {
        store.iter().map(|phrase| phrase.text()).collect()
    }

    #[test]
    fn one_blank_line_yields_two_phrases() {
        let store = PhraseStore::parse("  Hello there.\n\n\tGeneral Kenobi.  \n").unwrap();
        assert_eq!(vec!["Hello there.", "General Kenobi."], texts(&store));
    }

    #[test]
    fn no_blank_line_yields_one_phrase() {
        let store = PhraseStore::parse("first line\nsecond line\n").unwrap();
        assert_eq!(1, store.count());
        assert_eq!("first line\nsecond line", store.get(1).unwrap().text());
    }

    #[test]
    fn runs_of_blank_lines_and_crlf_are_tolerated() {
        let store = PhraseStore::parse("One.\r\n\r\n\r\n\r\nTwo.\n\n\n\n\nThree.").unwrap();
        assert_eq!(vec!["One.", "Two.", "Three."], texts(&store));
    }

    #[test]
    fn whitespace_only_script_has_no_phrases() {
        assert!(PhraseStore::parse("").is_none());
        assert!(PhraseStore::parse(" \n\n \t\n").is_none());
    }

    #[test]
    fn lookup_is_one_based() {
        let store = PhraseStore::parse("Hello.\n\nWorld.").unwrap();
        assert!(store.get(0).is_none());
        assert_eq!("Hello.", store.get(1).unwrap().text());
        assert_eq!("World.", store.get(2).unwrap().text());
        assert!(store.get(3).is_none());

        match store.try_get(5) {
            Err(Error::PhraseIndexOutOfRange {
                index: 5,
                count: 2,
            }) => {}
            other => panic!("unexpected lookup result: {:?}", other),
        }
    }

    #[test]
    fn load_reports_missing_and_empty_scripts() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(PhraseStore::load(&missing), Err(Error::FileNotFound(_))));
        assert!(matches!(PhraseStore::load(dir.path()), Err(Error::FileNotFound(_))));

        let empty = dir.path().join("empty.txt");
        std::fs::File::create(&empty).unwrap().write_all(b"\n\n\n").unwrap();
        assert!(matches!(PhraseStore::load(&empty), Err(Error::EmptyScript(_))));

        let script = dir.path().join("script.txt");
        std::fs::write(&script, "Hello.\n\nWorld.").unwrap();
        assert_eq!(2, PhraseStore::load(&script).unwrap().count());
    }
}
