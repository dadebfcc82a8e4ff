use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::{ContextV7, Timestamp, Uuid};

/// Shared clock context so ids stay ordered even within one timestamp tick.
static CLOCK: OnceLock<Mutex<ContextV7>> = OnceLock::new();

/// Store-assigned key for a record.
///
/// Rendered in the canonical hyphenated lowercase form everywhere, so two ids
/// that name the same record always compare equal as strings. Parsing checks
/// lexical validity only; whether a record with the id exists is a separate
/// question answered by the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Mint a fresh time-ordered id.
    pub fn generate() -> Self {
        let context = CLOCK.get_or_init(|| Mutex::new(ContextV7::new()));
        Self(Uuid::new_v7(Timestamp::now(context)))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

/// Lexically malformed record identifier.
#[derive(Debug, Error)]
#[error("'{input}' is not a valid record id")]
pub struct ParseIdError {
    pub input: String,
}

impl FromStr for RecordId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|_| ParseIdError {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_roundtrips_through_parse() {
        let id = RecordId::generate();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_canonicalizes_case() {
        let id = RecordId::generate();
        let upper = id.to_string().to_uppercase();
        let parsed: RecordId = upper.parse().unwrap();
        assert_eq!(parsed.to_string(), id.to_string());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("not-an-id".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn generated_ids_are_time_ordered() {
        let first = RecordId::generate();
        let second = RecordId::generate();
        assert!(first <= second);
    }
}
