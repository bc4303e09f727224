//! Effect-level combination: carry-forward of one-sided identities,
//! all-or-nothing failure, sequencing, and the ordering properties.

use netch::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    id: &'static str,
    revision: u32,
}

impl Identified for Record {
    type Id = &'static str;

    fn identity(&self) -> &'static str {
        self.id
    }
}

fn rec(id: &'static str, revision: u32) -> Record {
    Record { id, revision }
}

#[test]
fn test_one_sided_identities_carry_forward() {
    let left = Effect::of_values_with_state(
        1u32,
        [
            StateTransition::New(rec("only-left", 1)),
            StateTransition::Mutated(rec("shared", 1)),
        ],
    );
    let right = Effect::of_values_with_state(
        2u32,
        [
            StateTransition::Mutated(rec("shared", 2)),
            StateTransition::Dead(rec("only-right", 1)),
        ],
    );

    let combined = (left & right).unwrap();

    assert_eq!(combined.just(), &2);
    assert!(combined.new_values().contains(&rec("only-left", 1)));
    assert!(combined.mutated_values().contains(&rec("shared", 2)));
    assert!(combined.dead_values().contains(&rec("only-right", 1)));
    assert_eq!(combined.values().count(), 3);
}

#[test]
fn test_combination_is_all_or_nothing() {
    let left = Effect::of_values_with_state(
        (),
        [
            StateTransition::Mutated(rec("fine", 1)),
            StateTransition::Dead(rec("contradicted", 1)),
        ],
    );
    let right = Effect::of_values_with_state(
        (),
        [
            StateTransition::Mutated(rec("fine", 2)),
            // Dead followed by Mutated contradicts history.
            StateTransition::Mutated(rec("contradicted", 2)),
        ],
    );

    let err = (left & right).unwrap_err();
    assert_eq!(err.left, TransitionKind::Dead);
    assert_eq!(err.right, TransitionKind::Mutated);
}

#[test]
fn test_just_is_always_the_right_operands() {
    let left = existing(rec("a", 1)).map(|_| "left");
    let right = existing(rec("b", 1)).map(|_| "right");
    assert_eq!((left & right).unwrap().just(), &"right");
}

#[test]
fn test_associative_when_no_step_is_invalid() {
    let a = new(rec("x", 1));
    let b = mutated(rec("x", 2));
    let c = dead(rec("x", 3));

    let left_assoc = ((a.clone() & b.clone()).unwrap() & c.clone()).unwrap();
    let right_assoc = (a & (b & c).unwrap()).unwrap();

    assert_eq!(left_assoc, right_assoc);
    // Created, mutated, then deleted: over the whole chain the identity
    // never persisted.
    assert!(left_assoc.new_values().is_empty());
    assert!(left_assoc.dead_values().is_empty());
}

#[test]
fn test_associative_across_distinct_identities() {
    let a = Effect::of_values_with_state(
        1u32,
        [
            StateTransition::New(rec("p", 1)),
            StateTransition::Mutated(rec("q", 1)),
        ],
    );
    let b = Effect::of_values_with_state(2u32, [StateTransition::Mutated(rec("p", 2))]);
    let c = Effect::of_values_with_state(3u32, [StateTransition::Dead(rec("q", 2))]);

    let left_assoc = ((a.clone() & b.clone()).unwrap() & c.clone()).unwrap();
    let right_assoc = (a & (b & c).unwrap()).unwrap();

    assert_eq!(left_assoc, right_assoc);
    assert!(left_assoc.new_values().contains(&rec("p", 2)));
    assert!(left_assoc.dead_values().contains(&rec("q", 2)));
}

#[test]
fn test_order_sensitive() {
    let a = new(rec("x", 1));
    let b = mutated(rec("x", 2));

    // New then mutated nets to new; mutated then new contradicts history.
    assert!((a.clone() & b.clone()).is_ok());
    let err = (b & a).unwrap_err();
    assert_eq!(err.left, TransitionKind::Mutated);
    assert_eq!(err.right, TransitionKind::New);
}

#[test]
fn test_and_then_chains_steps() {
    let chained = new(rec("order", 1))
        .and_then(|order| mutated(Record { revision: order.revision + 1, ..order }))
        .unwrap();

    // First appearance still wins the classification.
    assert!(chained.new_values().contains(&rec("order", 2)));
    assert!(chained.mutated_values().is_empty());
    assert_eq!(chained.just(), &rec("order", 2));
}

#[test]
fn test_and_then_propagates_invalid_transitions() {
    let result = dead(rec("gone", 1)).and_then(|value| mutated(value));
    assert!(result.is_err());
}

#[test]
fn test_map_only_touches_just() {
    let effect = (new(rec("a", 1)) & mutated(rec("b", 1)).map(|_| 10u32))
        .unwrap()
        .map(|n| n + 1);

    assert_eq!(effect.just(), &11);
    assert!(effect.new_values().contains(&rec("a", 1)));
    assert!(effect.mutated_values().contains(&rec("b", 1)));
}
