//! Event types and observers.
//!
//! Events provide a decoupled way for systems to notify listeners (audio
//! cues, visual effects, game flow) without direct dependencies.
//!
//! Submodules:
//! - [`countdown`] – value-changed, complete and begin requests for countdowns
//! - [`switchpause`] – toggle the pause flag on/off
pub mod countdown;
pub mod switchpause;
