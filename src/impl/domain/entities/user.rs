use std::fmt;

use serde_derive::Serialize;

/// Owner of a set of records. Passed explicitly into every load and report
/// call; nothing in the crate holds a "current user".
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
#[serde(transparent)]
pub struct UserId(pub(crate) String);

pub fn user(id: impl Into<String>) -> UserId {
    UserId(id.into())
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
