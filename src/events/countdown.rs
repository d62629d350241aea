//! Countdown notifications.
//!
//! The [`countdown_system`](crate::systems::countdown::countdown_system)
//! triggers these events while it advances
//! [`Countdown`](crate::components::countdown::Countdown) components.
//! Observers can subscribe to them for audio cues, visual effects or to
//! drive the game flow once the countdown is over.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<CountdownCompleteEvent>, mut commands: Commands| {
//!     // start the round
//! });
//! world.trigger(BeginCountdownEvent { entity });
//! ```
//!
//! # Related
//!
//! - [`crate::components::countdown::Countdown`] – the countdown component
//! - [`crate::systems::countdown::countdown_system`] – the system that emits these events

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::countdown::Countdown;

/// Event emitted when the whole-second value shown by a countdown changes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownValueChangedEvent {
    /// The entity with the countdown.
    pub entity: Entity,
    /// Whole seconds left, rounded up.
    pub value: i32,
}

/// Event emitted once per run, on the tick the countdown reaches zero.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownCompleteEvent {
    /// The entity with the countdown.
    pub entity: Entity,
}

/// Request to (re)start the countdown on `entity`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeginCountdownEvent {
    pub entity: Entity,
}

/// Observer that starts the countdown targeted by a [`BeginCountdownEvent`].
///
/// Unknown entities or entities without a countdown are logged and ignored.
pub fn begin_countdown_observer(
    trigger: On<BeginCountdownEvent>,
    mut query: Query<&mut Countdown>,
) {
    let entity = trigger.event().entity;
    match query.get_mut(entity) {
        Ok(mut countdown) => {
            countdown.begin();
            info!(
                "Countdown {:?} started ({}s)",
                entity,
                countdown.settings().duration
            );
        }
        Err(_) => warn!("BeginCountdownEvent: entity {:?} has no Countdown", entity),
    }
}
