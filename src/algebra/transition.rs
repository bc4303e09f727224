//! Lifecycle tags and the pairwise combination rule. One tag per value, one
//! table for what two sequential tags on the same identity net out to.

use std::fmt;
use std::ops::BitAnd;

use thiserror::Error;

/// Fieldless discriminant of a [`StateTransition`]. Used for reporting which
/// bucket holds a value and for error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    New,
    Translated,
    Mutated,
    Dead,
    NoValue,
}

impl TransitionKind {
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransitionKind::New => "new",
            TransitionKind::Translated => "translated",
            TransitionKind::Mutated => "mutated",
            TransitionKind::Dead => "dead",
            TransitionKind::NoValue => "existing",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The calling logic asserted a self-contradictory history for one identity.
///
/// Not retryable and not recoverable locally. Fix the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid state transition: `{left} & {right}` has no defined result")]
pub struct InvalidStateTransition {
    pub left: TransitionKind,
    pub right: TransitionKind,
}

/// A value wrapped in its lifecycle tag.
///
/// - `New`: did not exist before, does now.
/// - `Translated`: freshly produced internal representation of something
///   external. An alternate first-appearance tag, distinct from `New`.
/// - `Mutated`: existed before, has changed.
/// - `Dead`: existed before, no longer does.
/// - `NoValue`: unchanged. The neutral element of combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition<V> {
    New(V),
    Translated(V),
    Mutated(V),
    Dead(V),
    NoValue(V),
}

impl<V> StateTransition<V> {
    #[inline(always)]
    pub const fn kind(&self) -> TransitionKind {
        match self {
            StateTransition::New(_) => TransitionKind::New,
            StateTransition::Translated(_) => TransitionKind::Translated,
            StateTransition::Mutated(_) => TransitionKind::Mutated,
            StateTransition::Dead(_) => TransitionKind::Dead,
            StateTransition::NoValue(_) => TransitionKind::NoValue,
        }
    }

    /// The wrapped value, tag stripped.
    #[inline(always)]
    pub const fn just(&self) -> &V {
        match self {
            StateTransition::New(v)
            | StateTransition::Translated(v)
            | StateTransition::Mutated(v)
            | StateTransition::Dead(v)
            | StateTransition::NoValue(v) => v,
        }
    }

    #[inline]
    pub fn into_just(self) -> V {
        match self {
            StateTransition::New(v)
            | StateTransition::Translated(v)
            | StateTransition::Mutated(v)
            | StateTransition::Dead(v)
            | StateTransition::NoValue(v) => v,
        }
    }

    /// Net tag for two sequential observations of the same identity, `self`
    /// first, `right` second.
    ///
    /// The full table (`E` = `NoValue`, result shows whose value survives):
    ///
    /// | left \ right | N        | T        | M        | D        | E       |
    /// |--------------|----------|----------|----------|----------|---------|
    /// | N            | N(right) | error    | N(right) | E(right) | N(left) |
    /// | T            | error    | T(right) | T(right) | E(right) | T(left) |
    /// | M            | error    | error    | M(right) | D(right) | M(left) |
    /// | D            | error    | error    | error    | D(right) | D(left) |
    /// | E            | N(right) | T(right) | M(right) | D(right) | E(right), values must be equal |
    ///
    /// `New` and `Translated` mark a first appearance; once an identity is
    /// already known to be new, translated, mutated or dead, a second first
    /// appearance contradicts history and errors. Create-then-delete nets to
    /// `NoValue`: over the whole computation the identity never persisted,
    /// though its last-known value is kept.
    pub fn combine(self, right: Self) -> Result<Self, InvalidStateTransition>
    where
        V: PartialEq,
    {
        use StateTransition::{Dead, Mutated, New, NoValue, Translated};

        let (left_kind, right_kind) = (self.kind(), right.kind());

        match (self, right) {
            (New(_), New(v)) => Ok(New(v)),
            (New(_), Mutated(v)) => Ok(New(v)),
            (New(_), Dead(v)) => Ok(NoValue(v)),
            (New(left), NoValue(_)) => Ok(New(left)),

            (Translated(_), Translated(v)) => Ok(Translated(v)),
            (Translated(_), Mutated(v)) => Ok(Translated(v)),
            (Translated(_), Dead(v)) => Ok(NoValue(v)),
            (Translated(left), NoValue(_)) => Ok(Translated(left)),

            (Mutated(_), Mutated(v)) => Ok(Mutated(v)),
            (Mutated(_), Dead(v)) => Ok(Dead(v)),
            (Mutated(left), NoValue(_)) => Ok(Mutated(left)),

            (Dead(_), Dead(v)) => Ok(Dead(v)),
            (Dead(left), NoValue(_)) => Ok(Dead(left)),

            (NoValue(_), New(v)) => Ok(New(v)),
            (NoValue(_), Translated(v)) => Ok(Translated(v)),
            (NoValue(_), Mutated(v)) => Ok(Mutated(v)),
            (NoValue(_), Dead(v)) => Ok(Dead(v)),
            // Two "nothing happened" claims must agree on what nothing
            // happened to.
            (NoValue(left), NoValue(right)) if left == right => Ok(NoValue(right)),

            _ => Err(InvalidStateTransition {
                left: left_kind,
                right: right_kind,
            }),
        }
    }
}

impl<'a, V: Clone> StateTransition<&'a V> {
    /// Same tag around a clone of the borrowed value.
    #[inline]
    pub fn cloned(self) -> StateTransition<V> {
        match self {
            StateTransition::New(v) => StateTransition::New(v.clone()),
            StateTransition::Translated(v) => StateTransition::Translated(v.clone()),
            StateTransition::Mutated(v) => StateTransition::Mutated(v.clone()),
            StateTransition::Dead(v) => StateTransition::Dead(v.clone()),
            StateTransition::NoValue(v) => StateTransition::NoValue(v.clone()),
        }
    }
}

impl<V: PartialEq> BitAnd for StateTransition<V> {
    type Output = Result<Self, InvalidStateTransition>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}
