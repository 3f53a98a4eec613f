// Queue Store - the single authoritative in-memory queue collection plus
// the caller's session pointers (hosted queue, joined queue, display name).
//
// All mutation goes through the operations below; each runs synchronously
// to completion, so operations are atomic with respect to each other.
// Every failure is terminal for that call: either the operation completes
// or it is a no-op.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::queue::{DEFAULT_TIME_PER_PERSON, UNNAMED_QUEUE};
use crate::domain::{Person, PersonId, Queue, QueueCode};
use crate::port::{IdProvider, TimeProvider};

#[cfg(test)]
mod session_test;
#[cfg(test)]
mod testing;

/// Host input for creating a queue. Everything is optional; missing or
/// empty fields get the defaults from the domain (`Unnamed Queue`, 5
/// minutes per person).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateQueueRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub time_per_person: Option<u32>,
}

/// In-memory queue store, owned by the composition root and passed by
/// reference to whoever needs it. Lives only as long as the process.
pub struct QueueStore {
    queues: Vec<Queue>,
    active_host_queue: Option<QueueCode>,
    current_queue: Option<QueueCode>,
    user_name: Option<String>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueStore {
    pub fn new(id_provider: Arc<dyn IdProvider>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            queues: Vec::new(),
            active_host_queue: None,
            current_queue: None,
            user_name: None,
            id_provider,
            time_provider,
        }
    }

    // ---- Host operations ----

    /// Create a queue with a freshly generated code and make it the
    /// caller's hosted queue. Never fails.
    pub fn create_queue(&mut self, req: CreateQueueRequest) -> QueueCode {
        let code = self.id_provider.queue_code();
        let name = req
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNNAMED_QUEUE.to_string());
        let queue = Queue::new(
            code.clone(),
            name,
            req.description.filter(|s| !s.is_empty()),
            req.location.filter(|s| !s.is_empty()),
            req.time_per_person
                .filter(|&t| t > 0)
                .unwrap_or(DEFAULT_TIME_PER_PERSON),
            self.time_provider.now(),
        );
        info!(code = %code, name = %queue.name, "queue created");
        self.queues.push(queue);
        self.active_host_queue = Some(code.clone());
        code
    }

    /// The person at position 1 of the queue, or None if the queue is
    /// unknown or empty. A read, not a dequeue: the person stays in line
    /// until removed explicitly.
    pub fn call_next(&self, code: &QueueCode) -> Option<Person> {
        let next = self.queue(code)?.next_in_line().cloned();
        if let Some(person) = &next {
            debug!(code = %code, person = %person.id, name = %person.name, "next in line called");
        }
        next
    }

    /// Remove a person from the queue, wherever they stand. No-op if the
    /// queue or person is unknown.
    pub fn remove_person(&mut self, code: &QueueCode, person_id: &PersonId) {
        let removed = self
            .queue_mut(code)
            .map_or(false, |q| q.remove_person(person_id));
        if removed {
            debug!(code = %code, person = %person_id, "person removed");
        }
    }

    /// End the queue permanently. Ended queues stay enumerable but never
    /// accept another join. Clears whichever session pointers referred to
    /// this queue.
    pub fn end_queue(&mut self, code: &QueueCode) {
        if let Some(queue) = self.queue_mut(code) {
            queue.end();
            info!(code = %code, "queue ended");
        }
        if self.active_host_queue.as_ref() == Some(code) {
            self.active_host_queue = None;
        }
        if self.current_queue.as_ref() == Some(code) {
            self.current_queue = None;
            self.user_name = None;
        }
    }

    /// Stable partial reorder of the queue's people by a supplied
    /// priority list; unlisted people keep their relative order at the
    /// end. No-op if the queue is unknown.
    pub fn reorder_queue(&mut self, code: &QueueCode, ordered_ids: &[PersonId]) {
        if let Some(queue) = self.queue_mut(code) {
            queue.reorder(ordered_ids);
            debug!(code = %code, listed = ordered_ids.len(), "queue reordered");
        }
    }

    // ---- Guest operations ----

    /// Join a queue under a display name. Fails (false, no mutation) when
    /// the queue is unknown or ended, or when the name is already taken
    /// in that queue. On success the caller's session points at this
    /// membership.
    pub fn join_queue(&mut self, code: &QueueCode, name: &str, contact_info: Option<String>) -> bool {
        let person_id = self.id_provider.person_id();
        let now = self.time_provider.now();

        let Some(queue) = self.queue_mut(code) else {
            debug!(code = %code, "join rejected: unknown queue");
            return false;
        };
        if !queue.is_active {
            debug!(code = %code, "join rejected: queue ended");
            return false;
        }
        if queue.person_by_name(name).is_some() {
            debug!(code = %code, name = %name, "join rejected: name already in queue");
            return false;
        }

        queue.add_person(Person::new(person_id.clone(), name, now, contact_info));
        let position = queue.people.len();
        info!(code = %code, person = %person_id, name = %name, position, "joined queue");

        self.current_queue = Some(code.clone());
        self.user_name = Some(name.to_string());
        true
    }

    /// Leave a queue. No-op if the queue or person is unknown. When the
    /// removed person was the caller's own membership (matched by display
    /// name, the queue's identity key), the session pointers are cleared.
    pub fn leave_queue(&mut self, code: &QueueCode, person_id: &PersonId) {
        let own_membership = self.current_queue.as_ref() == Some(code)
            && self
                .user_name
                .as_deref()
                .and_then(|name| self.queue(code)?.person_by_name(name))
                .map_or(false, |p| &p.id == person_id);

        let removed = self
            .queue_mut(code)
            .map_or(false, |q| q.remove_person(person_id));
        if removed {
            debug!(code = %code, person = %person_id, own = own_membership, "left queue");
        }
        if removed && own_membership {
            self.current_queue = None;
            self.user_name = None;
        }
    }

    /// 1-based position of the caller in their joined queue, re-derived
    /// by display-name lookup on every read. None while not in a queue.
    pub fn user_position(&self) -> Option<usize> {
        let queue = self.current_queue()?;
        let person = queue.person_by_name(self.user_name.as_deref()?)?;
        queue.position_of(&person.id)
    }

    // ---- Session pointers ----

    /// Point the caller's guest session at a queue. An unresolvable code
    /// degrades to "no selection", never an error.
    pub fn set_current_queue(&mut self, code: Option<&QueueCode>) {
        self.current_queue = code.and_then(|c| self.queue(c)).map(|q| q.id.clone());
    }

    /// Point the caller's host session at a queue. Same degrade-to-None
    /// behavior as `set_current_queue`.
    pub fn set_active_host_queue(&mut self, code: Option<&QueueCode>) {
        self.active_host_queue = code.and_then(|c| self.queue(c)).map(|q| q.id.clone());
    }

    pub fn set_user_name(&mut self, name: Option<String>) {
        self.user_name = name;
    }

    // ---- Lookups ----

    /// Pure lookup by code.
    pub fn queue(&self, code: &QueueCode) -> Option<&Queue> {
        self.queues.iter().find(|q| &q.id == code)
    }

    /// All queues known to this process, ended ones included.
    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    /// The queue the caller is hosting, if any. Resolved against the live
    /// collection, so it is never stale.
    pub fn active_host_queue(&self) -> Option<&Queue> {
        self.queue(self.active_host_queue.as_ref()?)
    }

    /// The queue the caller has joined as a guest, if any. Resolved
    /// against the live collection, so it is never stale.
    pub fn current_queue(&self) -> Option<&Queue> {
        self.queue(self.current_queue.as_ref()?)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    fn queue_mut(&mut self, code: &QueueCode) -> Option<&mut Queue> {
        self.queues.iter_mut().find(|q| &q.id == code)
    }
}
