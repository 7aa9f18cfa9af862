//! Tests for the `Optional` container surface.

use opt_caps::{Absent, Optional, Present};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn empty_is_absent() {
    let slot: Optional<i32> = Optional::empty();
    assert!(slot.is_absent());
    assert!(!slot.is_present());
}

#[test]
fn with_value_is_present() {
    let slot = Optional::with_value(42);
    assert!(slot.is_present());
    assert_eq!(slot.unwrap(), 42);
}

#[test]
fn wrap_respects_the_flag() {
    assert_eq!(Optional::wrap(1, true), Present(1));
    assert_eq!(Optional::wrap(1, false), Absent);
}

#[test]
fn try_wrap_defers_to_the_closure() {
    let hit = Optional::try_wrap(|| (10, true));
    let miss = Optional::try_wrap(|| (10, false));
    assert_eq!(hit, Present(10));
    assert_eq!(miss, Absent);
}

#[test]
fn default_is_absent() {
    assert_eq!(Optional::<String>::default(), Absent);
}

// =============================================================================
// Inspection and unwrapping
// =============================================================================

#[test]
fn is_present_and_applies_the_predicate() {
    assert!(Optional::with_value(4).is_present_and(|v| v % 2 == 0));
    assert!(!Optional::with_value(3).is_present_and(|v| v % 2 == 0));
    assert!(!Optional::<i32>::empty().is_present_and(|_| true));
}

#[test]
#[should_panic(expected = "absent value")]
fn unwrap_panics_when_absent() {
    Optional::<u8>::empty().unwrap();
}

#[test]
#[should_panic(expected = "missing configuration")]
fn expect_uses_the_caller_message() {
    Optional::<u8>::empty().expect("missing configuration");
}

#[test]
fn unwrap_fallbacks() {
    assert_eq!(Optional::with_value(5).unwrap_or(9), 5);
    assert_eq!(Optional::<i32>::empty().unwrap_or(9), 9);
    assert_eq!(Optional::<i32>::empty().unwrap_or_else(|| 7), 7);
    assert_eq!(Optional::<String>::empty().unwrap_or_default(), "");
}

#[test]
fn unsafe_unwrap_on_a_present_value() {
    let slot = Optional::with_value(String::from("checked"));
    assert!(slot.is_present());
    // SAFETY: presence checked above.
    let value = unsafe { slot.unsafe_unwrap() };
    assert_eq!(value, "checked");
}

#[test]
fn as_ref_and_as_mut_borrow_in_place() {
    let mut slot = Optional::with_value(String::from("a"));
    assert_eq!(slot.as_ref().unwrap(), "a");

    slot.as_mut().unwrap().push('b');
    assert_eq!(slot.unwrap(), "ab");
}

// =============================================================================
// Combinators
// =============================================================================

#[test]
fn map_preserves_absence() {
    assert_eq!(Optional::with_value(2).map(|v| v * 3), Present(6));
    assert_eq!(Optional::<i32>::empty().map(|v| v * 3), Absent);
}

#[test]
fn map_or_falls_back_when_absent() {
    assert_eq!(Optional::with_value(2).map_or(0, |v| v * 3), 6);
    assert_eq!(Optional::<i32>::empty().map_or(0, |v| v * 3), 0);

    assert_eq!(Optional::with_value(2).map_or_else(|| -1, |v| v * 3), 6);
    assert_eq!(Optional::<i32>::empty().map_or_else(|| -1, |v| v * 3), -1);
}

#[test]
fn inspect_observes_without_consuming() {
    let mut seen = Vec::new();
    let slot = Optional::with_value(5).inspect(|v| seen.push(*v));
    assert_eq!(slot, Present(5));
    assert_eq!(seen, [5]);

    Optional::<i32>::empty().inspect(|v| seen.push(*v));
    assert_eq!(seen, [5]);
}

#[test]
fn and_requires_both_present() {
    assert_eq!(Optional::with_value(1).and(Present("b")), Present("b"));
    assert_eq!(Optional::<i32>::empty().and(Present("b")), Absent);
    assert_eq!(Optional::with_value(1).and(Optional::<&str>::empty()), Absent);
}

#[test]
fn and_then_chains() {
    let halve = |v: i32| {
        if v % 2 == 0 {
            Present(v / 2)
        } else {
            Absent
        }
    };
    assert_eq!(Optional::with_value(8).and_then(halve), Present(4));
    assert_eq!(Optional::with_value(7).and_then(halve), Absent);
}

#[test]
fn filter_drops_rejected_values() {
    assert_eq!(Optional::with_value(2).filter(|v| *v > 1), Present(2));
    assert_eq!(Optional::with_value(0).filter(|v| *v > 1), Absent);
}

#[test]
fn or_prefers_the_first_present() {
    assert_eq!(Present(1).or(Present(2)), Present(1));
    assert_eq!(Absent.or(Present(2)), Present(2));
    assert_eq!(Absent.or_else(|| Present(3)), Present(3));
}

// =============================================================================
// In-place mutation
// =============================================================================

#[test]
fn insert_overwrites() {
    let mut slot = Optional::with_value(1);
    *slot.insert(2) += 10;
    assert_eq!(slot, Present(12));
}

#[test]
fn get_or_insert_fills_only_when_absent() {
    let mut slot = Optional::empty();
    assert_eq!(*slot.get_or_insert(5), 5);
    assert_eq!(*slot.get_or_insert(9), 5);

    let mut lazy: Optional<i32> = Optional::empty();
    assert_eq!(*lazy.get_or_insert_with(|| 11), 11);
}

#[test]
fn replace_returns_the_old_container() {
    let mut slot = Optional::with_value("old");
    let old = slot.replace("new");
    assert_eq!(old, Present("old"));
    assert_eq!(slot, Present("new"));
}

#[test]
fn take_leaves_absent() {
    let mut slot = Optional::with_value(String::from("gone"));
    let taken = slot.take();
    assert_eq!(taken.unwrap(), "gone");
    assert!(slot.is_absent());

    let mut empty: Optional<String> = Optional::empty();
    assert_eq!(empty.take(), Absent);
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn deconstruct_inverts_wrap() {
    let (value, present) = Optional::with_value(String::from("held")).deconstruct();
    assert_eq!(value, "held");
    assert!(present);

    let (value, present) = Optional::<String>::empty().deconstruct();
    assert_eq!(value, "");
    assert!(!present);

    // Round trip through the flag-based constructor.
    let (value, present) = Optional::wrap(9, true).deconstruct();
    assert_eq!(Optional::wrap(value, present), Present(9));
}

#[test]
fn option_round_trip() {
    let from_some: Optional<i32> = Some(3).into();
    let from_none: Optional<i32> = None.into();
    assert_eq!(from_some, Present(3));
    assert_eq!(from_none, Absent);

    assert_eq!(Present(3).into_option(), Some(3));
    assert_eq!(Optional::<i32>::empty().into_option(), None);
}
