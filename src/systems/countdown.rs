//! Countdown system.
//!
//! This module provides the [`countdown_system`] that advances
//! [`Countdown`](crate::components::countdown::Countdown) components, writes
//! their label to the entity's
//! [`DynamicText`](crate::components::dynamictext::DynamicText) and emits the
//! countdown events.
//!
//! # System Flow
//!
//! Each frame, for every countdown:
//!
//! 1. Nothing happens while [`GamePause`] is set or the countdown is idle
//! 2. Remaining time is decremented by `WorldTime::delta`
//! 3. The label and font size are written to the `DynamicText`, if any
//! 4. [`CountdownCompleteEvent`] is triggered on the tick that reaches zero
//! 5. [`CountdownValueChangedEvent`] is triggered when the label changed
//!
//! Events are triggered through `Commands`, so observers run when the
//! schedule applies its deferred commands, in the order listed above.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::countdown::Countdown;
use crate::components::dynamictext::DynamicText;
use crate::events::countdown::{CountdownCompleteEvent, CountdownValueChangedEvent};
use crate::resources::pause::GamePause;
use crate::resources::worldtime::WorldTime;

/// Advances all countdowns by the frame delta.
///
/// Entities without a `DynamicText` still count down and emit events; only
/// the label write is skipped.
pub fn countdown_system(
    world_time: Res<WorldTime>,
    pause: Option<Res<GamePause>>,
    mut query: Query<(Entity, &mut Countdown, Option<&mut DynamicText>)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    let paused = pause.is_some_and(|p| p.is_paused());

    for (entity, mut countdown, mut text) in query.iter_mut() {
        let current_size = text.as_ref().map(|t| t.font_size);
        let Some(step) = countdown.tick(dt, paused, current_size) else {
            continue;
        };

        if let Some(text) = text.as_mut() {
            if text.text != step.text {
                text.set_text(step.text.as_str());
            }
            text.font_size = step.font_size;
        }

        if step.completed {
            info!("Countdown {:?} complete", entity);
            commands.trigger(CountdownCompleteEvent { entity });
        }
        if step.value_changed {
            debug!("Countdown {:?} shows '{}'", entity, step.text);
            commands.trigger(CountdownValueChangedEvent {
                entity,
                value: step.value,
            });
        }
    }
}
