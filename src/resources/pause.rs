//! Pause resource.
//!
//! Polled once per frame by systems that must stop advancing while the game
//! is paused. A world without this resource is never paused.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamePause {
    paused: bool,
}

impl GamePause {
    pub fn new(paused: bool) -> Self {
        GamePause { paused }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_running() {
        assert!(!GamePause::default().is_paused());
    }

    #[test]
    fn toggle_flips_state() {
        let mut pause = GamePause::default();
        assert!(pause.toggle());
        assert!(pause.is_paused());
        assert!(!pause.toggle());
        pause.pause();
        assert!(pause.is_paused());
        pause.resume();
        assert!(!pause.is_paused());
    }
}
