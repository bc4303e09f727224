//! Identity extraction. Two values are the same thing iff their keys match.

use std::hash::Hash;

/// The core abstraction. Implement this for your domain values.
///
/// Rules:
/// - `identity` is a pure, total function of the value's identity field(s)
///   only. Same value = same key. Always.
/// - Other fields never participate. Two values with equal keys are "the
///   same thing" across time, however much the rest of them differs.
/// - The key is plain data. No behavior lives on it.
pub trait Identified {
    type Id: Clone + Eq + Hash;

    fn identity(&self) -> Self::Id;
}
