use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Opaque reference to a direct-message recipient, as typed into the compose header.
///
/// In practice this is the recipient's email address; the core never interprets it and only
/// hands it to a directory for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RecipientRef(String);

impl RecipientRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipientRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Numeric user identifier, used to look up presence/status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
