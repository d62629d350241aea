//! On-screen countdown component.
//!
//! The [`Countdown`] component counts a number of seconds down to zero and
//! derives a label from the whole seconds left. Each label can be replaced
//! by an entry of the override table (for example `0 -> "GO!"`), and the
//! font size can pulse between two bounds within every second.
//!
//! # How It Works
//!
//! 1. Entity is spawned with a `Countdown` (and usually a
//!    [`DynamicText`](crate::components::dynamictext::DynamicText))
//! 2. [`Countdown::begin`] arms it with the full duration
//! 3. The [`countdown_system`](crate::systems::countdown::countdown_system)
//!    calls [`Countdown::tick`] each frame and applies the resulting
//!    [`CountdownStep`] to the text
//! 4. On the tick that reaches zero the countdown completes and goes idle
//!    until the next `begin`
//!
//! # Related
//!
//! - [`crate::systems::countdown::countdown_system`] – per-frame update
//! - [`crate::events::countdown`] – value-changed and complete events

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

const DEFAULT_DURATION: f32 = 3.0;
const DEFAULT_MIN_SIZE: f32 = 150.0;
const DEFAULT_MAX_SIZE: f32 = 300.0;

/// A label that replaces the plain number shown for one countdown value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownValue {
    pub text: String,
    /// Font size forced while this value is shown. `<= 0` keeps the
    /// computed size.
    #[serde(default)]
    pub font_size: f32,
}

impl CountdownValue {
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        CountdownValue {
            text: text.into(),
            font_size,
        }
    }

    /// Text-only override.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, 0.0)
    }

    fn overrides_size(&self) -> bool {
        self.font_size > 0.0
    }
}

/// Immutable configuration of a countdown run.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownSettings {
    /// Starting value in seconds.
    pub duration: f32,
    /// Override table indexed by whole seconds remaining (0 = last).
    pub values: Vec<CountdownValue>,
    pub animate_text_size: bool,
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        CountdownSettings {
            duration: DEFAULT_DURATION,
            values: Vec::new(),
            animate_text_size: true,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl CountdownSettings {
    pub fn new(duration: f32) -> Self {
        CountdownSettings {
            duration,
            ..Default::default()
        }
    }

    pub fn with_values(mut self, values: Vec<CountdownValue>) -> Self {
        self.values = values;
        self
    }

    pub fn with_size_animation(mut self, min_size: f32, max_size: f32) -> Self {
        self.animate_text_size = true;
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn without_size_animation(mut self) -> Self {
        self.animate_text_size = false;
        self
    }

    /// Override entry for `value`, if the table has one.
    ///
    /// Negative values are never looked up.
    pub fn value_override(&self, value: i32) -> Option<&CountdownValue> {
        usize::try_from(value)
            .ok()
            .and_then(|index| self.values.get(index))
    }
}

/// Outcome of a countdown tick that advanced time.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownStep {
    /// Whole seconds left, rounded up and never below zero.
    pub value: i32,
    pub text: String,
    pub font_size: f32,
    /// True only on the tick where the countdown reached zero.
    pub completed: bool,
    /// True when `text` differs from the label of the previous tick.
    pub value_changed: bool,
}

/// Countdown clock with per-value text and size overrides.
#[derive(Component, Debug, Clone)]
pub struct Countdown {
    settings: CountdownSettings,
    remaining: f32,
    label: Option<String>,
    font_size: f32,
}

impl Countdown {
    /// Create an idle countdown. Call [`Countdown::begin`] to start it.
    ///
    /// The no-target baseline font size starts at `settings.min_size`; use
    /// [`Countdown::with_font_size`] to pick another one.
    pub fn new(settings: CountdownSettings) -> Self {
        let font_size = settings.min_size;
        Countdown {
            settings,
            remaining: 0.0,
            label: None,
            font_size,
        }
    }

    /// Create a countdown that is already running.
    pub fn started(settings: CountdownSettings) -> Self {
        let mut countdown = Self::new(settings);
        countdown.begin();
        countdown
    }

    /// Baseline font size used when the entity has no text target.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// (Re)start the countdown from the full duration.
    ///
    /// The label on screen is kept, so the first tick of the new run only
    /// reports a change when its label differs from it.
    pub fn begin(&mut self) {
        self.remaining = self.settings.duration;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn settings(&self) -> &CountdownSettings {
        &self.settings
    }

    /// Label produced by the last tick, kept across restarts.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Advance the countdown by `delta` seconds.
    ///
    /// `current_font_size` is the size the text target shows right now; it
    /// is kept when neither the animation nor an override changes it. Pass
    /// `None` when there is no target.
    ///
    /// Returns `None` when paused, idle, or when `delta` is not a positive
    /// finite number.
    pub fn tick(
        &mut self,
        delta: f32,
        paused: bool,
        current_font_size: Option<f32>,
    ) -> Option<CountdownStep> {
        if paused || !self.is_active() || !delta.is_finite() || delta <= 0.0 {
            return None;
        }

        self.remaining -= delta;
        let completed = self.remaining <= 0.0;

        let value = (self.remaining.ceil() as i32).max(0);

        let mut font_size = current_font_size.unwrap_or(self.font_size);
        if self.settings.animate_text_size {
            let fraction = 1.0 - (value as f32 - self.remaining);
            font_size = lerp(self.settings.min_size, self.settings.max_size, fraction);
        }

        let text = match self.settings.value_override(value) {
            Some(value_override) => {
                if value_override.overrides_size() {
                    font_size = value_override.font_size;
                }
                value_override.text.clone()
            }
            None => value.to_string(),
        };

        let value_changed = self.label.as_deref() != Some(text.as_str());
        self.label = Some(text.clone());
        self.font_size = font_size;

        Some(CountdownStep {
            value,
            text,
            font_size,
            completed,
            value_changed,
        })
    }
}

/// Unclamped linear interpolation.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
