//! Small drawing helpers shared by the UI scenes

use glam::Vec2;

use crate::renderer::{Align, Color, Font, Rect, Surface};

/// Corner radius for buttons
pub(crate) const BUTTON_RADIUS: f32 = 4.0;

/// Filled button with a centered label
pub(crate) fn button(surface: &mut dyn Surface, rect: Rect, fill: Color, label: &str, label_color: Color) {
    surface.fill_rect(rect, fill, BUTTON_RADIUS);
    surface.text(label, rect.center(), Font::Body, label_color, Align::Center);
}

/// Text horizontally centered on the screen, with `y` as its vertical center
pub(crate) fn centered_text(surface: &mut dyn Surface, text: &str, y: f32, font: Font, color: Color) {
    surface.text(
        text,
        Vec2::new(crate::consts::WIDTH / 2.0, y),
        font,
        color,
        Align::Center,
    );
}
