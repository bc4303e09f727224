//! The effect algebra. Lifecycle tags, the pairwise combination table, and
//! the effect-level combinator built on it.

pub mod effect;
pub mod sugar;
pub mod transition;

pub use effect::Effect;
pub use transition::{InvalidStateTransition, StateTransition, TransitionKind};
