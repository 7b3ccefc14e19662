//! Attribute vectors and the arithmetic performed on them.
//!
//! Characters, item requirements and bonuses, skill costs, damage amounts and
//! ranges all share the same named stat vector ([`Attributes`]). The helpers
//! in [`evaluate`] score one vector against another.
pub mod attributes;
pub mod evaluate;

pub use attributes::{AttributeKind, Attributes};
pub use evaluate::{can_afford, compute_damage, requirements_satisfied};
