//! Recording surface
//!
//! Captures draw calls as data. Used by the headless runner and by tests that
//! check what a scene put on screen. Only the latest frame is kept.

use glam::Vec2;

use super::{Align, Color, Font, Rect, Surface};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color, radius: f32 },
    StrokeRect { rect: Rect, color: Color, width: f32 },
    Circle { center: Vec2, radius: f32, color: Color },
    Ring { center: Vec2, radius: f32, width: f32, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
    PolygonOutline { points: Vec<Vec2>, color: Color, width: f32 },
    Text { text: String, pos: Vec2, font: Font, color: Color, align: Align },
    Image { id: String, rect: Rect },
    Overlay(Color),
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Was any text containing `needle` drawn?
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    /// Alpha of every overlay drawn, in order
    pub fn overlay_alphas(&self) -> Vec<f32> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Overlay(color) => Some(color[3]),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    /// Starts a new frame: earlier commands are discarded
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.commands.push(DrawCommand::FillRect { rect, color, radius });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::Ring {
            center,
            radius,
            width,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn polygon_outline(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.commands.push(DrawCommand::PolygonOutline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, font: Font, color: Color, align: Align) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font,
            color,
            align,
        });
    }

    fn image(&mut self, id: &str, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            id: id.to_string(),
            rect,
        });
    }

    fn overlay(&mut self, color: Color) {
        self.commands.push(DrawCommand::Overlay(color));
    }
}
