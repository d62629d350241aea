//! ECS components for entities.
//!
//! Submodules overview:
//! - [`countdown`] – countdown clock with per-value label overrides
//! - [`dynamictext`] – text target for rendering variable strings

pub mod countdown;
pub mod dynamictext;
