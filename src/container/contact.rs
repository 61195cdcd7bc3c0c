use std::fmt;

/// A stored contact: the payload kept per key.
///
/// Contacts are replaced wholesale on update, never edited field by field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
