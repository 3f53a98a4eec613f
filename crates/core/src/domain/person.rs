// Person Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque unique person identifier, assigned at join time (UUID v4 in
/// production, injected via `IdProvider`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A guest's membership record within one queue.
///
/// Within a queue the display name doubles as the identity key: join is
/// rejected on duplicate names, and the caller's own membership is
/// re-derived by name lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub joined_at: DateTime<Utc>,
    pub contact_info: Option<String>,
}

impl Person {
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        joined_at: DateTime<Utc>,
        contact_info: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            joined_at,
            contact_info,
        }
    }
}
