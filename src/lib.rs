//! Net-change effect algebra. Each step declares only the values it touched;
//! `&` folds the steps into one consistent changeset or fails loudly on a
//! contradictory history.

pub mod algebra;
pub mod core;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::algebra::sugar::{dead, existing, mutated, new, translated};
    pub use crate::algebra::{Effect, InvalidStateTransition, StateTransition, TransitionKind};
    pub use crate::core::{Identified, IdentifiedValueSet};
}

// Re-export primary types at crate root for convenience.
pub use crate::algebra::sugar::{dead, existing, mutated, new, translated};
pub use crate::algebra::{Effect, InvalidStateTransition, StateTransition, TransitionKind};
pub use crate::core::{Identified, IdentifiedValueSet};
