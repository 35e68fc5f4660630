/// A voice installed on the system, identified by the name the engine knows it by.
///
/// The name is passed to the engine as is; the engine decides what to do with names it doesn't
/// recognize.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct Voice {
    name: String,
}

impl Voice {
    /// Constructs a voice with the given engine name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
        }
    }

    /// Returns the name of the voice.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Voice {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Voice {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
