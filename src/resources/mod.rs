//! ECS resources made available to systems.
//!
//! Overview
//! - `countdownconfig` – countdown settings loaded from an INI file
//! - `pause` – pause flag polled by time-driven systems
//! - `worldtime` – simulation time and delta
pub mod countdownconfig;
pub mod pause;
pub mod worldtime;
