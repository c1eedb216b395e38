#![cfg(feature = "cascade")]
//! Integration tests for the cascade module.
//!
//! These tests cover fallback chains as callers write them: configuration
//! lookups, fallible sources, side-effecting steps and panicking producers.

use lambdo::cascade;
use lambdo::cascade::{Candidate, Cascade, CascadeError, CascadeExhausted, CascadeState};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::num::ParseIntError;
use std::panic::{AssertUnwindSafe, catch_unwind};

// =============================================================================
// Resolution Order
// =============================================================================

#[rstest]
fn lazy_first_candidate_wins() {
    let resolved = Cascade::of_lazy(|| Some(1))
        .or_value(2)
        .or_lazy(|| Some(3))
        .resolve();
    assert_eq!(resolved, Some(1));
}

#[rstest]
fn or_else_appends_then_resolves() {
    let resolved = Cascade::of_lazy(|| None).or_else(Candidate::lazy(|| Some(1)));
    assert_eq!(resolved, Some(1));
}

#[rstest]
fn multiple_absent_attempts_before_success() {
    let resolved = Cascade::of_optional(None)
        .or_optional(None)
        .or_lazy(|| Some(1))
        .or_lazy(|| Some(2))
        .resolve();
    assert_eq!(resolved, Some(1));
}

#[rstest]
fn fixed_first_value_ignores_producers() {
    let resolved = Cascade::of_value(1)
        .or_lazy(|| None)
        .or_lazy(|| Some(3))
        .or_default(Candidate::lazy(|| Some(4)));
    assert_eq!(resolved, Ok(1));
}

#[rstest]
fn practical_absent_then_present() {
    let some_value: Option<i32> = None;
    let other_value = Some(1);
    let resolved = Cascade::of_optional(some_value)
        .or_optional(other_value)
        .or_else(Candidate::value(2));
    assert_eq!(resolved, Some(1));
}

// =============================================================================
// Configuration Lookup
// =============================================================================

#[rstest]
#[case(Some("9000"), Some("8000"), 9000)]
#[case(None, Some("8000"), 8000)]
#[case(None, None, 80)]
fn layered_configuration_lookup(
    #[case] command_line: Option<&str>,
    #[case] config_file: Option<&str>,
    #[case] expected: u16,
) {
    let file: HashMap<&str, &str> = config_file.map(|port| ("port", port)).into_iter().collect();

    let port = Cascade::of_lazy(|| command_line?.parse().ok())
        .or_lazy(|| file.get("port")?.parse().ok())
        .or_default(Candidate::value(80_u16));

    assert_eq!(port, Ok(expected));
}

#[rstest]
fn absent_default_is_exhausted() {
    let missing = Cascade::of_optional(None::<i32>).or_default(Candidate::lazy(|| None));
    assert_eq!(missing, Err(CascadeExhausted { candidates: 2 }));
    assert_eq!(
        missing.unwrap_err().to_string(),
        "cascade exhausted: none of 2 candidates produced a value"
    );
}

// =============================================================================
// Side Effects and Re-resolution
// =============================================================================

#[rstest]
fn actions_run_in_order_between_candidates() {
    let log = RefCell::new(Vec::new());
    let resolved = Cascade::of_lazy(|| {
        log.borrow_mut().push("primary");
        None
    })
    .or_action(|| log.borrow_mut().push("warn: primary missing"))
    .or_lazy(|| {
        log.borrow_mut().push("secondary");
        Some("replica")
    })
    .or_action(|| log.borrow_mut().push("never"))
    .resolve();

    assert_eq!(resolved, Some("replica"));
    assert_eq!(
        *log.borrow(),
        vec!["primary", "warn: primary missing", "secondary"]
    );
}

#[rstest]
fn appending_after_resolution_reruns_from_start() {
    let primary_calls = Cell::new(0);
    let mut cascade = Cascade::of_lazy(|| {
        primary_calls.set(primary_calls.get() + 1);
        None
    });

    assert_eq!(cascade.state(), CascadeState::Building);
    assert_eq!(cascade.resolve(), None);
    assert_eq!(cascade.state(), CascadeState::Resolved);

    cascade.or_value(5);
    assert_eq!(cascade.resolve(), Some(5));
    assert_eq!(primary_calls.get(), 2);
}

#[rstest]
fn macro_builds_equivalent_cascade() {
    let calls = Cell::new(0);
    let mut built = cascade![
        optional None,
        action || calls.set(calls.get() + 1),
        lazy || Some(3),
        value 4,
    ];

    assert_eq!(built.len(), 4);
    assert_eq!(built.resolve(), Some(3));
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Producer Failures
// =============================================================================

#[rstest]
fn fallible_error_propagates_unmodified() {
    let later = Cell::new(false);
    let mut cascade: Cascade<'_, u8, ParseIntError> = Cascade::starting_with(Candidate::optional(None));
    cascade
        .or_fallible(|| "300".parse().map(Some))
        .or_lazy(|| {
            later.set(true);
            Some(1)
        });

    let error = cascade.try_resolve().unwrap_err();
    assert_eq!(error, "300".parse::<u8>().unwrap_err());
    assert!(!later.get());
}

#[rstest]
fn fallible_success_resolves() {
    let mut cascade = Cascade::of_fallible(|| "42".parse::<u8>().map(Some));
    assert_eq!(cascade.try_or_default(Candidate::value(0)), Ok(42));
}

#[rstest]
fn try_or_default_wraps_producer_error() {
    let mut cascade = Cascade::of_fallible(|| "x".parse::<u8>().map(Some));
    let result = cascade.try_or_default(Candidate::value(0));
    assert!(matches!(result, Err(CascadeError::Producer(_))));
}

#[rstest]
fn panicking_producer_aborts_resolution() {
    let later = Cell::new(false);
    let mut cascade = Cascade::of_lazy(|| -> Option<i32> { panic!("producer failed") });
    cascade.or_lazy(|| {
        later.set(true);
        Some(1)
    });

    let outcome = catch_unwind(AssertUnwindSafe(|| cascade.resolve()));

    assert!(outcome.is_err());
    assert!(!later.get());
}

// =============================================================================
// Logging
// =============================================================================

#[rstest]
fn resolution_emits_events_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    let resolved = tracing::subscriber::with_default(subscriber, || {
        Cascade::of_optional(None).or_value("logged").resolve()
    });

    assert_eq!(resolved, Some("logged"));
}
