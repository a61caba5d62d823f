use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A server-assigned identifier.
///
/// The services hand out numeric ids, but nothing on this side depends on
/// that: strings are shown as-is, and any other JSON value (a float, a
/// number beyond `i64`) is kept and shown in its JSON spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
    Other(Value),
}

impl Identifier {
    /// Whether this id refers to an actual record.
    ///
    /// The user service answers with a department of id `0` when the
    /// department service is down, so zero and blank ids are placeholders.
    pub fn is_assigned(&self) -> bool {
        match self {
            Identifier::Number(n) => *n != 0,
            Identifier::Text(s) => !s.trim().is_empty(),
            Identifier::Other(v) => !v.is_null(),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{n}"),
            Identifier::Text(s) => f.write_str(s),
            Identifier::Other(v) => write!(f, "{v}"),
        }
    }
}
