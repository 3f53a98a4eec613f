// ID Provider Port (for deterministic testing)

use rand::Rng;

use crate::domain::code::{QueueCode, CODE_ALPHABET, CODE_LEN};
use crate::domain::person::PersonId;

/// Identifier generation interface (allows deterministic ids in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a fresh queue code. Independent per call, no collision
    /// check against existing queues.
    fn queue_code(&self) -> QueueCode;

    /// Generate a fresh person id.
    fn person_id(&self) -> PersonId;
}

/// Production provider: random alphabet sampling for queue codes,
/// UUID v4 for person ids.
pub struct RandomIdProvider;

impl IdProvider for RandomIdProvider {
    fn queue_code(&self) -> QueueCode {
        let mut rng = rand::thread_rng();
        let code: String = (0..CODE_LEN)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        QueueCode::new_unchecked(code)
    }

    fn person_id(&self) -> PersonId {
        PersonId::new(uuid::Uuid::new_v4().to_string())
    }
}
