// Queue Code - short human-shareable queue identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Symbols allowed in a queue code. 32 characters; visually ambiguous
/// ones (0/O, 1/I) are excluded so codes survive being read aloud or
/// scribbled on a napkin.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a queue code.
pub const CODE_LEN: usize = 6;

/// Short shareable code identifying one queue (e.g. "K7QPW2").
///
/// Codes are generated independently per queue with no collision check;
/// with 32^6 possible codes that is a known, accepted limitation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueCode(String);

impl QueueCode {
    /// Wrap an already-valid code. Callers outside the id provider should
    /// go through `FromStr` instead.
    pub(crate) fn new_unchecked(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QueueCode {
    type Err = DomainError;

    /// Parse user input into a code. Input is uppercased first (guests
    /// type codes by hand); anything that is not exactly `CODE_LEN`
    /// alphabet symbols is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let valid = normalized.len() == CODE_LEN
            && normalized.bytes().all(|b| CODE_ALPHABET.contains(&b));
        if !valid {
            return Err(DomainError::InvalidQueueCode(s.to_string()));
        }
        Ok(Self(normalized))
    }
}
