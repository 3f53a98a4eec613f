// Queue Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::code::QueueCode;
use crate::domain::person::{Person, PersonId};

/// Default minutes of service per person when the host does not say.
pub const DEFAULT_TIME_PER_PERSON: u32 = 5;

/// Name given to queues created without one.
pub const UNNAMED_QUEUE: &str = "Unnamed Queue";

/// An ordered waitlist with metadata, created by a host and identified by
/// a short shareable code.
///
/// The ordering of `people` is the sole source of truth for position:
/// position = index + 1, so index 0 is position 1 (next to be served).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Queue {
    pub id: QueueCode,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Estimated minutes of service per person (positive).
    pub time_per_person: u32,
    /// One-way flag: an ended queue never becomes active again.
    pub is_active: bool,
    pub people: Vec<Person>,
    pub created_at: DateTime<Utc>,
}

impl Queue {
    pub fn new(
        id: QueueCode,
        name: impl Into<String>,
        description: Option<String>,
        location: Option<String>,
        time_per_person: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            location,
            time_per_person,
            is_active: true,
            people: Vec::new(),
            created_at,
        }
    }

    /// The person at position 1, without dequeuing them.
    pub fn next_in_line(&self) -> Option<&Person> {
        self.people.first()
    }

    /// 1-based position of a person, or None if they are not in line.
    pub fn position_of(&self, person_id: &PersonId) -> Option<usize> {
        self.people
            .iter()
            .position(|p| &p.id == person_id)
            .map(|idx| idx + 1)
    }

    /// Look up a member by display name (the queue's identity key).
    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }

    /// Append a person to the end of the line.
    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Remove a person if present. Returns whether anyone was removed.
    pub fn remove_person(&mut self, person_id: &PersonId) -> bool {
        let before = self.people.len();
        self.people.retain(|p| &p.id != person_id);
        self.people.len() < before
    }

    /// Stable partial reorder by an externally supplied priority list:
    /// people whose id appears in `ordered_ids` come first, in list order;
    /// everyone else keeps their original relative order at the end.
    pub fn reorder(&mut self, ordered_ids: &[PersonId]) {
        self.people.sort_by_key(|p| {
            ordered_ids
                .iter()
                .position(|id| id == &p.id)
                .unwrap_or(usize::MAX)
        });
    }

    /// Transition to Ended. Terminal: there is no way back to Active.
    pub fn end(&mut self) {
        self.is_active = false;
    }
}
