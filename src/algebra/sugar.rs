//! Ergonomic single-value constructors. Client code tags values with these
//! and folds the results together with `&`.

use super::effect::Effect;
use super::transition::StateTransition;
use crate::core::Identified;

/// The value did not exist before and now does.
pub fn new<V>(value: V) -> Effect<V, V>
where
    V: Identified + Clone,
{
    Effect::of_values_with_state(value.clone(), [StateTransition::New(value)])
}

/// The value is a freshly-produced internal representation of something
/// external.
pub fn translated<V>(value: V) -> Effect<V, V>
where
    V: Identified + Clone,
{
    Effect::of_values_with_state(value.clone(), [StateTransition::Translated(value)])
}

/// The value existed before and has changed.
pub fn mutated<V>(value: V) -> Effect<V, V>
where
    V: Identified + Clone,
{
    Effect::of_values_with_state(value.clone(), [StateTransition::Mutated(value)])
}

/// The value existed before and no longer does.
pub fn dead<V>(value: V) -> Effect<V, V>
where
    V: Identified + Clone,
{
    Effect::of_values_with_state(value.clone(), [StateTransition::Dead(value)])
}

/// The value is unchanged: no claim of change, the neutral effect.
pub fn existing<V: Identified>(value: V) -> Effect<V, V> {
    Effect::pure(value)
}
