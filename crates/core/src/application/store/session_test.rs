//! Unit tests for session pointers (hosted queue, joined queue, user name)

use super::testing::test_store;
use super::*;

fn create(store: &mut QueueStore, name: &str) -> QueueCode {
    store.create_queue(CreateQueueRequest {
        name: Some(name.to_string()),
        ..Default::default()
    })
}

#[test]
fn test_join_points_session_at_membership() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");

    assert!(store.join_queue(&code, "Alice", None));
    assert_eq!(store.current_queue().unwrap().id, code);
    assert_eq!(store.user_name(), Some("Alice"));
    assert_eq!(store.user_position(), Some(1));
}

#[test]
fn test_current_queue_reflects_later_mutations() {
    // The joined-queue pointer resolves against the live collection, so
    // a join that lands after ours is visible through it immediately.
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");

    store.join_queue(&code, "Alice", None);
    store.join_queue(&code, "Bob", None);

    // Session now belongs to Bob (last join wins), and the view shows
    // both members
    assert_eq!(store.user_name(), Some("Bob"));
    assert_eq!(store.current_queue().unwrap().people.len(), 2);
    assert_eq!(store.user_position(), Some(2));
}

#[test]
fn test_user_position_tracks_removals_ahead() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");
    store.join_queue(&code, "Alice", None);
    store.join_queue(&code, "Bob", None);

    let alice_id = store.queue(&code).unwrap().people[0].id.clone();
    store.remove_person(&code, &alice_id);

    assert_eq!(store.user_position(), Some(1));
}

#[test]
fn test_leave_own_membership_clears_session() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");
    store.join_queue(&code, "Alice", None);

    let alice_id = store.queue(&code).unwrap().people[0].id.clone();
    store.leave_queue(&code, &alice_id);

    assert!(store.queue(&code).unwrap().people.is_empty());
    assert!(store.current_queue().is_none());
    assert!(store.user_name().is_none());
    assert!(store.user_position().is_none());
}

#[test]
fn test_leave_someone_else_keeps_session() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");
    store.join_queue(&code, "Alice", None);
    store.join_queue(&code, "Bob", None);

    // Session belongs to Bob; Alice leaving does not touch it
    let alice_id = store.queue(&code).unwrap().people[0].id.clone();
    store.leave_queue(&code, &alice_id);

    assert_eq!(store.user_name(), Some("Bob"));
    assert_eq!(store.current_queue().unwrap().id, code);
}

#[test]
fn test_leave_unknown_person_is_noop() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");
    store.join_queue(&code, "Alice", None);

    store.leave_queue(&code, &PersonId::new("ghost"));

    assert_eq!(store.queue(&code).unwrap().people.len(), 1);
    assert_eq!(store.user_name(), Some("Alice"));
}

#[test]
fn test_end_queue_clears_both_roles() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");
    store.join_queue(&code, "Alice", None);

    assert!(store.active_host_queue().is_some());
    store.end_queue(&code);

    assert!(store.active_host_queue().is_none());
    assert!(store.current_queue().is_none());
    assert!(store.user_name().is_none());
}

#[test]
fn test_end_queue_leaves_unrelated_session_alone() {
    let mut store = test_store();
    let mine = create(&mut store, "Mine");
    let joined = create(&mut store, "Joined");
    store.join_queue(&joined, "Alice", None);
    // Hosting pointer moved to the second queue on creation; point it
    // back at the first
    store.set_active_host_queue(Some(&mine));

    store.end_queue(&joined);

    assert_eq!(store.active_host_queue().unwrap().id, mine);
    assert!(store.current_queue().is_none());
}

#[test]
fn test_setters_resolve_against_collection() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");

    store.set_current_queue(Some(&code));
    assert_eq!(store.current_queue().unwrap().id, code);

    // Unresolvable code degrades to no selection, not an error
    let ghost: QueueCode = "ZZZZZZ".parse().unwrap();
    store.set_current_queue(Some(&ghost));
    assert!(store.current_queue().is_none());

    store.set_active_host_queue(Some(&ghost));
    assert!(store.active_host_queue().is_none());
}

#[test]
fn test_setters_clear_on_none() {
    let mut store = test_store();
    let code = create(&mut store, "Coffee Bar");
    store.join_queue(&code, "Alice", None);

    store.set_current_queue(None);
    assert!(store.current_queue().is_none());
    // Clearing the queue pointer leaves the display name alone
    assert_eq!(store.user_name(), Some("Alice"));

    store.set_user_name(None);
    assert!(store.user_name().is_none());

    store.set_active_host_queue(None);
    assert!(store.active_host_queue().is_none());
}
