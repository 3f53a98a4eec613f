// Deterministic providers for store tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::code::{QueueCode, CODE_ALPHABET};
use crate::domain::person::PersonId;
use crate::port::{IdProvider, TimeProvider};

use super::QueueStore;

/// Counter-based ids: codes AAAAA{A,B,C,...}, person ids person-1,
/// person-2, ...
pub struct SequentialIdProvider {
    counter: AtomicUsize,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }
}

impl IdProvider for SequentialIdProvider {
    fn queue_code(&self) -> QueueCode {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let symbol = CODE_ALPHABET[n % CODE_ALPHABET.len()] as char;
        QueueCode::new_unchecked(format!("AAAAA{}", symbol))
    }

    fn person_id(&self) -> PersonId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        PersonId::new(format!("person-{}", n))
    }
}

/// Clock pinned to one instant.
pub struct FixedTimeProvider(pub DateTime<Utc>);

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub fn test_store() -> QueueStore {
    QueueStore::new(
        Arc::new(SequentialIdProvider::new()),
        Arc::new(FixedTimeProvider(fixed_instant())),
    )
}
