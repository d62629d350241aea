//! Event and observer to pause or resume the simulation.
//!
//! Emitting a [`SwitchPauseEvent`] flips the [`GamePause`] flag. Systems that
//! advance game time poll the resource each frame.
use crate::resources::pause::GamePause;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event used to toggle the [`GamePause`] resource.
///
/// This carries no data; the observer simply flips the flag.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchPauseEvent {}

/// Observer that toggles the [`GamePause`] resource.
///
/// If the resource is missing it is inserted in the paused state.
pub fn switch_pause_observer(
    _trigger: On<SwitchPauseEvent>,
    mut commands: Commands,
    pause: Option<ResMut<GamePause>>,
) {
    match pause {
        Some(mut pause) => {
            if pause.toggle() {
                info!("Game paused");
            } else {
                info!("Game resumed");
            }
        }
        None => {
            info!("GamePause resource not found, creating it paused");
            commands.insert_resource(GamePause::new(true));
        }
    }
}
