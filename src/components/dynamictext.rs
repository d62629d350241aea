use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, PartialEq)]
/// Text target for variable strings such as the countdown label.
pub struct DynamicText {
    /// The text content to display.
    pub text: String,
    /// Font size in points.
    pub font_size: f32,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
        }
    }
    /// Updates the text content.
    pub fn set_text(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
    }
}
