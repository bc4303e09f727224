//! Effect: one primary result plus four buckets of lifecycle-classified
//! values, and the all-or-nothing combinator that merges two of them.

use std::collections::HashMap;
use std::fmt;
use std::ops::BitAnd;

use super::transition::{InvalidStateTransition, StateTransition};
use crate::core::{Identified, IdentifiedValueSet};

/// What one computation asserts about the world.
///
/// `just` is the computation's primary result and is not lifecycle-tracked.
/// Every secondary value the computation touched sits in exactly one of the
/// four buckets, keyed by identity. The classifying constructor partitions by
/// tag, not by identity, so handing it two differently-tagged values sharing
/// an identity is a caller bug; the algebra itself never produces one.
///
/// Effects are immutable. Combination, `map` and `and_then` always build a
/// fresh Effect.
#[derive(Clone, PartialEq, Eq)]
pub struct Effect<J, V: Identified> {
    just: J,
    new_values: IdentifiedValueSet<V>,
    translated_values: IdentifiedValueSet<V>,
    mutated_values: IdentifiedValueSet<V>,
    dead_values: IdentifiedValueSet<V>,
}

impl<J, V: Identified> Effect<J, V> {
    /// An effect claiming nothing happened: all four buckets empty.
    pub fn pure(just: J) -> Self {
        Self {
            just,
            new_values: IdentifiedValueSet::new(),
            translated_values: IdentifiedValueSet::new(),
            mutated_values: IdentifiedValueSet::new(),
            dead_values: IdentifiedValueSet::new(),
        }
    }

    /// Classifies tagged values into the four buckets.
    ///
    /// `NoValue` entries are informational only and land in no bucket.
    pub fn of_values_with_state<I>(just: J, values: I) -> Self
    where
        I: IntoIterator<Item = StateTransition<V>>,
    {
        let mut new_values = Vec::new();
        let mut translated_values = Vec::new();
        let mut mutated_values = Vec::new();
        let mut dead_values = Vec::new();

        for value in values {
            match value {
                StateTransition::New(v) => new_values.push(v),
                StateTransition::Translated(v) => translated_values.push(v),
                StateTransition::Mutated(v) => mutated_values.push(v),
                StateTransition::Dead(v) => dead_values.push(v),
                StateTransition::NoValue(_) => {}
            }
        }

        Self {
            just,
            new_values: new_values.into_iter().collect(),
            translated_values: translated_values.into_iter().collect(),
            mutated_values: mutated_values.into_iter().collect(),
            dead_values: dead_values.into_iter().collect(),
        }
    }

    #[inline(always)]
    pub fn just(&self) -> &J {
        &self.just
    }

    #[inline]
    pub fn into_just(self) -> J {
        self.just
    }

    #[inline(always)]
    pub fn new_values(&self) -> &IdentifiedValueSet<V> {
        &self.new_values
    }

    #[inline(always)]
    pub fn translated_values(&self) -> &IdentifiedValueSet<V> {
        &self.translated_values
    }

    #[inline(always)]
    pub fn mutated_values(&self) -> &IdentifiedValueSet<V> {
        &self.mutated_values
    }

    #[inline(always)]
    pub fn dead_values(&self) -> &IdentifiedValueSet<V> {
        &self.dead_values
    }

    /// Every tagged value across all four buckets, in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.transitions().map(StateTransition::into_just)
    }

    /// Every bucket entry rewrapped in its tag, in arbitrary order.
    pub fn transitions(&self) -> impl Iterator<Item = StateTransition<&V>> {
        self.new_values
            .iter()
            .map(StateTransition::New)
            .chain(self.translated_values.iter().map(StateTransition::Translated))
            .chain(self.mutated_values.iter().map(StateTransition::Mutated))
            .chain(self.dead_values.iter().map(StateTransition::Dead))
    }

    /// Which bucket holds `value`, by full equality. `NoValue` when none does.
    pub fn value_with_state_by_value<'a>(&self, value: &'a V) -> StateTransition<&'a V>
    where
        V: PartialEq,
    {
        if self.new_values.contains(value) {
            StateTransition::New(value)
        } else if self.translated_values.contains(value) {
            StateTransition::Translated(value)
        } else if self.mutated_values.contains(value) {
            StateTransition::Mutated(value)
        } else if self.dead_values.contains(value) {
            StateTransition::Dead(value)
        } else {
            StateTransition::NoValue(value)
        }
    }

    /// Which bucket holds `id`, by identity alone, wrapping the stored
    /// representative. `None` means this effect makes no claim about `id`.
    pub fn value_with_state_by_identity(&self, id: &V::Id) -> Option<StateTransition<&V>> {
        if let Some(v) = self.new_values.get(id) {
            Some(StateTransition::New(v))
        } else if let Some(v) = self.translated_values.get(id) {
            Some(StateTransition::Translated(v))
        } else if let Some(v) = self.mutated_values.get(id) {
            Some(StateTransition::Mutated(v))
        } else {
            self.dead_values.get(id).map(StateTransition::Dead)
        }
    }

    /// Merges two effects, `self` observed first, `right` second.
    ///
    /// Identities unique to one side carry their tag and value forward
    /// unchanged. Identities present on both sides merge their tags through
    /// [`StateTransition::combine`]; the first invalid pairing fails the
    /// whole combination and no partial effect is returned. The result's
    /// `just` is always the right operand's.
    pub fn combine<K>(self, right: Effect<K, V>) -> Result<Effect<K, V>, InvalidStateTransition>
    where
        V: PartialEq,
    {
        let (_, left_transitions) = self.into_transitions();
        let (right_just, mut right_transitions) = right.into_transitions();

        let mut merged = Vec::with_capacity(left_transitions.len() + right_transitions.len());
        for (id, left) in left_transitions {
            match right_transitions.remove(&id) {
                Some(right) => merged.push(left.combine(right)?),
                None => merged.push(left),
            }
        }
        merged.extend(right_transitions.into_values());

        Ok(Effect::of_values_with_state(right_just, merged))
    }

    /// Transforms only `just`. All four buckets pass through untouched.
    pub fn map<K>(self, f: impl FnOnce(J) -> K) -> Effect<K, V> {
        Effect {
            just: f(self.just),
            new_values: self.new_values,
            translated_values: self.translated_values,
            mutated_values: self.mutated_values,
            dead_values: self.dead_values,
        }
    }

    /// Sequences a computation off the current `just`: `self & f(just)`.
    pub fn and_then<K>(
        self,
        f: impl FnOnce(J) -> Effect<K, V>,
    ) -> Result<Effect<K, V>, InvalidStateTransition>
    where
        V: PartialEq,
    {
        let (just, buckets) = self.into_transitions();
        let left = Effect::of_values_with_state((), buckets.into_values());
        left.combine(f(just))
    }

    fn into_transitions(self) -> (J, HashMap<V::Id, StateTransition<V>>) {
        let mut transitions = HashMap::with_capacity(
            self.new_values.len()
                + self.translated_values.len()
                + self.mutated_values.len()
                + self.dead_values.len(),
        );

        for v in self.new_values {
            transitions.insert(v.identity(), StateTransition::New(v));
        }
        for v in self.translated_values {
            transitions.insert(v.identity(), StateTransition::Translated(v));
        }
        for v in self.mutated_values {
            transitions.insert(v.identity(), StateTransition::Mutated(v));
        }
        for v in self.dead_values {
            transitions.insert(v.identity(), StateTransition::Dead(v));
        }

        (self.just, transitions)
    }
}

impl<J, K, V> BitAnd<Effect<K, V>> for Effect<J, V>
where
    V: Identified + PartialEq,
{
    type Output = Result<Effect<K, V>, InvalidStateTransition>;

    #[inline]
    fn bitand(self, rhs: Effect<K, V>) -> Self::Output {
        self.combine(rhs)
    }
}

impl<J, V> fmt::Debug for Effect<J, V>
where
    J: fmt::Debug,
    V: Identified + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("just", &self.just)
            .field("new_values", &self.new_values)
            .field("translated_values", &self.translated_values)
            .field("mutated_values", &self.mutated_values)
            .field("dead_values", &self.dead_values)
            .finish()
    }
}
