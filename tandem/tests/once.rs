//! Single-shot registration tests.

use tandem::{
    Listener,
    testing::{CountingListener, FailingListener, RecordingListener},
};

mod common;
use common::{Msg, msg};

#[test]
fn test_once_invoked_exactly_once() {
    let ee = tandem::emitter::<Msg>();
    let recorder = RecordingListener::<Msg>::new();
    ee.after().once("e2", recorder.clone());

    ee.after().emit("e2", &msg("e2 ok")).unwrap();
    ee.after().emit("e2", &msg("e2 not ok")).unwrap();

    assert_eq!(recorder.payloads(), vec![msg("e2 ok")]);
    assert_eq!(ee.after().count("e2"), 0);
    assert!(!ee.after().contains("e2"));
}

#[test]
fn test_once_removed_by_original_before_emit() {
    let ee = tandem::emitter::<()>();
    let counter = CountingListener::new();
    let original: Listener<()> = Listener::from_callback(counter.clone());
    ee.before().once("e", original.clone());

    assert!(ee.before().remove("e", &original));
    assert_eq!(ee.before().count("e"), 0);

    ee.before().emit("e", &()).unwrap();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_once_removed_by_returned_id() {
    let ee = tandem::emitter::<()>();
    let counter = CountingListener::new();
    let id = ee.after().once("e", counter.clone());

    assert!(ee.after().remove_id("e", id));
    ee.after().emit("e", &()).unwrap();
    assert_eq!(counter.count(), 0);
    assert!(ee.after().names().is_empty());
}

#[test]
fn test_same_original_twice_gets_two_wrappers() {
    let ee = tandem::emitter::<()>();
    let counter = CountingListener::new();
    let original: Listener<()> = Listener::from_callback(counter.clone());
    ee.before().once("e", original.clone());
    ee.before().once("e", original.clone());
    assert_eq!(ee.before().count("e"), 2);

    let stored = ee.before().listeners("e").unwrap();
    assert_ne!(stored[0], stored[1]);
    assert!(!stored.contains(&original));

    // Only the most recent wrapper is reachable through the original.
    assert!(ee.before().remove("e", &original));
    assert!(!ee.before().remove("e", &original));
    assert_eq!(ee.before().count("e"), 1);

    ee.before().emit("e", &()).unwrap();
    assert_eq!(counter.count(), 1);
    assert_eq!(ee.before().count("e"), 0);
}

#[test]
fn test_direct_registration_wins_over_wrapper() {
    let ee = tandem::emitter::<()>();
    let counter = CountingListener::new();
    let original: Listener<()> = Listener::from_callback(counter.clone());
    ee.after().on("e", original.clone());
    ee.after().once("e", original.clone());

    // The plain registration is matched first.
    assert!(ee.after().remove("e", &original));
    let stored = ee.after().listeners("e").unwrap();
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0], original);

    ee.after().emit("e", &()).unwrap();
    ee.after().emit("e", &()).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_remove_after_fire_is_noop() {
    let ee = tandem::emitter::<()>();
    let counter = CountingListener::new();
    let original: Listener<()> = Listener::from_callback(counter.clone());
    ee.before().once("e", original.clone());
    ee.before().on("e", |_: &()| {});

    ee.before().emit("e", &()).unwrap();
    assert_eq!(counter.count(), 1);
    assert!(!ee.before().remove("e", &original));
    assert_eq!(ee.before().count("e"), 1);
}

#[test]
fn test_once_in_one_phase_leaves_other_alone() {
    let ee = tandem::emitter::<()>();
    let counter = CountingListener::new();
    let original: Listener<()> = Listener::from_callback(counter.clone());
    ee.before().once("e", original.clone());
    ee.after().on("e", original.clone());

    // The wrapper map is per phase: "after" holds the original itself.
    ee.after().emit("e", &()).unwrap();
    ee.after().emit("e", &()).unwrap();
    assert_eq!(counter.count(), 2);
    assert_eq!(ee.after().count("e"), 1);

    assert!(ee.before().remove("e", &original));
    assert_eq!(ee.after().count("e"), 1);
}

#[test]
fn test_failing_once_listener_is_still_removed() {
    let ee = tandem::emitter::<()>();
    let counter = CountingListener::new();
    ee.after().once("e", FailingListener::new("once failed"));
    ee.after().on("e", counter.clone());

    let err = ee.after().emit("e", &()).unwrap_err();
    assert_eq!(err.to_string(), "once failed");
    assert_eq!(ee.after().count("e"), 1);
    assert_eq!(counter.count(), 0);

    // The wrapper removed itself before the failure, so the next pass is clean.
    ee.after().emit("e", &()).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_failing_once_alone_leaves_no_listeners() {
    let ee = tandem::emitter::<()>();
    ee.before().once("e", FailingListener::new("once failed"));

    assert!(ee.before().emit("e", &()).is_err());
    assert_eq!(ee.before().count("e"), 0);
    assert!(ee.before().emit("e", &()).is_ok());
}
