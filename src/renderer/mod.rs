//! Rendering contract
//!
//! Scenes draw through the `Surface` trait using primitive shapes and text.
//! The host implements it on top of whatever graphics backend it owns;
//! `DrawList` records the calls for headless runs and tests.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

/// RGBA, each channel 0.0 - 1.0
pub type Color = [f32; 4];

/// Font roles; the host maps them to loaded faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Main titles
    Title,
    /// Section headings
    Heading,
    /// Mission countdown
    Timer,
    /// Body and UI text
    Body,
    /// Hints and captions
    Small,
}

/// How a text position is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// Position is the top-left corner
    TopLeft,
    /// Position is the center of the text box
    Center,
    /// Position is the left edge, vertically centered
    MidLeft,
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of size `w` x `h` centered on `center`
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Primitive drawing calls consumed by scenes
pub trait Surface {
    fn clear(&mut self, color: Color);
    /// Filled rectangle with rounded corners (`radius` 0 for square)
    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Circle outline
    fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn polygon(&mut self, points: &[Vec2], color: Color);
    fn polygon_outline(&mut self, points: &[Vec2], color: Color, width: f32);
    fn text(&mut self, text: &str, pos: Vec2, font: Font, color: Color, align: Align);
    /// Blit a host-loaded image, scaled into `rect`
    fn image(&mut self, id: &str, rect: Rect);
    /// Full-screen fill; the color's alpha controls opacity
    fn overlay(&mut self, color: Color);
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: Color = rgb(0, 0, 0);
    pub const WHITE: Color = rgb(255, 255, 255);
    pub const GRAY: Color = rgb(160, 160, 160);
    pub const DARK_GRAY: Color = rgb(60, 60, 60);
    pub const CYAN: Color = rgb(0, 220, 255);
    pub const YELLOW: Color = rgb(255, 220, 50);
    pub const RED: Color = rgb(220, 60, 60);
    pub const GREEN: Color = rgb(60, 220, 60);
    pub const ORANGE: Color = rgb(255, 160, 40);
    pub const ASTEROID: Color = rgb(130, 130, 130);
    pub const ORBIT_RING: Color = rgb(30, 30, 40);
    pub const BANNER: Color = rgb(15, 15, 25);

    /// Fragment palette, indexed by `Fragment::color`
    pub const FRAGMENTS: [Color; 4] = [ORANGE, YELLOW, GREEN, CYAN];

    /// Same color with a new alpha (0.0 - 1.0)
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 19.9)));
        assert!(!r.contains(Vec2::new(30.0, 15.0)));
        assert!(!r.contains(Vec2::new(15.0, 20.0)));
    }

    #[test]
    fn test_centered_rect() {
        let r = Rect::centered(Vec2::new(100.0, 50.0), 40.0, 20.0);
        assert_eq!(r, Rect::new(80.0, 40.0, 40.0, 20.0));
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
    }
}
