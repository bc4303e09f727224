//! The data structures. Identity keys and identity-keyed value sets.

pub mod identity;
pub mod set;

pub use identity::Identified;
pub use set::IdentifiedValueSet;
