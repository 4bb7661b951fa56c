//! Fade-through-black transition between two scenes

use super::{Scene, SceneCommand};
use crate::consts::FADE_DURATION;
use crate::game::GameContext;
use crate::renderer::{Surface, colors};

#[derive(Debug)]
pub struct FadeTransition {
    old: Box<Scene>,
    new: Box<Scene>,
    duration: f32,
    timer: f32,
}

impl FadeTransition {
    pub fn new(old: Scene, new: Scene) -> Self {
        Self::with_duration(old, new, FADE_DURATION)
    }

    pub fn with_duration(old: Scene, new: Scene, duration: f32) -> Self {
        log::debug!("Fade {:?} -> {:?}", old.kind(), new.kind());
        Self {
            old: Box::new(old),
            new: Box::new(new),
            duration: duration.max(f32::EPSILON),
            timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) -> SceneCommand {
        self.timer += dt;
        if self.timer >= self.duration {
            SceneCommand::FinishTransition
        } else {
            SceneCommand::None
        }
    }

    /// Black overlay opacity: rises to 1 at the midpoint, then falls back to 0
    pub fn overlay_alpha(&self) -> f32 {
        let half = self.duration / 2.0;
        let alpha = if self.timer < half {
            self.timer / half
        } else {
            1.0 - (self.timer - half) / half
        };
        alpha.clamp(0.0, 1.0)
    }

    /// Scene being faded into
    pub fn target(&self) -> &Scene {
        &self.new
    }

    pub fn into_target(self) -> Scene {
        *self.new
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        if self.timer < self.duration / 2.0 {
            self.old.draw(ctx, surface);
        } else {
            self.new.draw(ctx, surface);
        }
        surface.overlay(colors::with_alpha(colors::BACKGROUND, self.overlay_alpha()));
    }
}
