//! Game countdown main entry point.
//!
//! Drives a single on-screen countdown headlessly using:
//! - **bevy_ecs** for the entity-component-system architecture
//! - **configparser** for the INI configuration
//!
//! Each label change and the completion are printed to the terminal.
//!
//! # Main Loop
//!
//! 1. Load `countdown.ini` (or the file given with `--config`)
//! 2. Create the ECS world, register observers, spawn the countdown
//! 3. Trigger `BeginCountdownEvent`
//! 4. Run frames until the countdown completes:
//!    - Advance `WorldTime` by a fixed step (or the measured real delta)
//!    - Toggle pause when the optional pause window opens or closes
//!    - Run the update schedule
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --duration 5 --realtime
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use gamecountdown::components::countdown::Countdown;
use gamecountdown::components::dynamictext::DynamicText;
use gamecountdown::events::countdown::{
    BeginCountdownEvent, CountdownCompleteEvent, CountdownValueChangedEvent,
};
use gamecountdown::events::switchpause::SwitchPauseEvent;
use gamecountdown::game;
use gamecountdown::resources::countdownconfig::CountdownConfig;
use gamecountdown::resources::worldtime::WorldTime;

/// Game countdown
#[derive(Parser)]
#[command(version, about = "Headless on-screen countdown driven by an ECS frame loop")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Countdown duration in seconds (overrides the config file).
    #[arg(long, value_name = "SECS")]
    duration: Option<f32>,

    /// Frames per second of the loop (overrides the config file).
    #[arg(long, value_name = "N")]
    fps: Option<u32>,

    /// Sleep between frames and use the measured frame time.
    #[arg(long)]
    realtime: bool,

    /// Pause the countdown once this many seconds have elapsed.
    #[arg(long, value_name = "SECS", requires = "pause_for")]
    pause_at: Option<f32>,

    /// How long the pause lasts, in seconds.
    #[arg(long, value_name = "SECS", requires = "pause_at")]
    pause_for: Option<f32>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => CountdownConfig::with_path(path),
        None => CountdownConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }
    if let Some(duration) = cli.duration {
        if duration > 0.0 {
            config.settings.duration = duration;
        } else {
            warn!("Ignoring non-positive duration {}", duration);
        }
    }
    if let Some(fps) = cli.fps {
        config.target_fps = fps;
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let frame_time = config.frame_time();
    let mut world = game::setup_world(config);

    world.add_observer(
        |trigger: On<CountdownValueChangedEvent>, texts: Query<&DynamicText>| {
            let event = trigger.event();
            match texts.get(event.entity) {
                Ok(text) => println!("{:>6} (size {:.0})", text.text, text.font_size),
                Err(_) => println!("{:>6}", event.value),
            }
        },
    );
    world.add_observer(|_trigger: On<CountdownCompleteEvent>| {
        println!("Countdown complete");
    });
    world.flush();

    let countdown = game::spawn_countdown(&mut world);
    world.trigger(BeginCountdownEvent { entity: countdown });

    let mut update = game::build_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    let pause_window = cli.pause_at.zip(cli.pause_for);
    let mut paused_at: Option<f32> = None;
    let mut pause_done = false;

    // --------------- Main loop ---------------
    let mut last_frame = Instant::now();
    while world
        .get::<Countdown>(countdown)
        .is_some_and(|c| c.is_active())
    {
        let dt = if cli.realtime {
            std::thread::sleep(Duration::from_secs_f32(frame_time));
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            dt
        } else {
            frame_time
        };

        if let Some((pause_at, pause_for)) = pause_window {
            let elapsed = world.resource::<WorldTime>().elapsed;
            match paused_at {
                None if !pause_done && elapsed >= pause_at => {
                    world.trigger(SwitchPauseEvent {});
                    paused_at = Some(elapsed);
                }
                Some(start) if elapsed - start >= pause_for => {
                    world.trigger(SwitchPauseEvent {});
                    paused_at = None;
                    pause_done = true;
                }
                _ => {}
            }
        }

        game::run_frame(&mut world, &mut update, dt);
    }

    let frames = world.resource::<WorldTime>().frame_count;
    info!("Finished after {} frames", frames);
}
