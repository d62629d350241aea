//! Countdown systems.
//!
//! Submodules overview
//! - [`countdown`] – advance countdowns, update their label and emit events
//! - [`time`] – update simulation time and delta

pub mod countdown;
pub mod time;
