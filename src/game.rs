//! World and schedule setup.
//!
//! Shared by the binary and the integration tests: inserts the resources the
//! countdown systems read, registers the observers and builds the per-frame
//! schedule.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::dynamictext::DynamicText;
use crate::events::countdown::begin_countdown_observer;
use crate::events::switchpause::switch_pause_observer;
use crate::resources::countdownconfig::CountdownConfig;
use crate::resources::pause::GamePause;
use crate::resources::worldtime::WorldTime;
use crate::systems::countdown::countdown_system;
use crate::systems::time::update_world_time;

/// Create a world with the countdown resources and observers registered.
pub fn setup_world(config: CountdownConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(GamePause::default());
    world.insert_resource(config);

    world.spawn(Observer::new(begin_countdown_observer));
    world.spawn(Observer::new(switch_pause_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
    world
}

/// Build the per-frame update schedule.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(countdown_system);
    update
}

/// Spawn an idle countdown with a text label, configured from the
/// [`CountdownConfig`] resource.
pub fn spawn_countdown(world: &mut World) -> Entity {
    let (settings, font_size) = {
        let config = world.resource::<CountdownConfig>();
        (config.settings.clone(), config.font_size)
    };
    world
        .spawn((
            Countdown::new(settings).with_font_size(font_size),
            DynamicText::new("", font_size),
        ))
        .id()
}

/// Advance the clock by `dt` and run one frame of `schedule`.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers(); // Clear changed components for next frame
}
