//! Aborted-mission summary
//!
//! Entering this scene pays out the reduced reward; leaving goes back to the
//! menu.

use super::widgets::{button, centered_text};
use super::{Scene, SceneCommand};
use crate::consts::{ABORT_PENALTY, HEIGHT, WIDTH};
use crate::format_clock;
use crate::game::GameContext;
use crate::input::{InputEvent, Key};
use crate::renderer::{Font, Rect, Surface, colors};

const CONTINUE_BTN: Rect = Rect::new(WIDTH / 2.0 - 80.0, HEIGHT / 2.0 + 120.0, 160.0, 40.0);

/// Fragments kept when a mission is abandoned
pub fn abort_reward(collected: u32) -> u32 {
    (collected as f32 * ABORT_PENALTY).floor() as u32
}

#[derive(Debug, Clone)]
pub struct AbortScene {
    task_name: String,
    collected: u32,
    earned: u32,
    remaining: f32,
    elapsed: f32,
}

impl AbortScene {
    /// Build the summary and credit the kept fragments
    pub fn new(ctx: &mut GameContext, task_name: String, collected: u32, remaining: f32, elapsed: f32) -> Self {
        let earned = abort_reward(collected);
        ctx.talents.add_fragments(earned);
        log::info!("Abort kept {} of {} fragments", earned, collected);
        Self {
            task_name,
            collected,
            earned,
            remaining,
            elapsed,
        }
    }

    pub fn earned(&self) -> u32 {
        self.earned
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut GameContext) -> SceneCommand {
        match event {
            InputEvent::PointerDown { pos, .. } if CONTINUE_BTN.contains(*pos) => {
                ctx.click();
                SceneCommand::FadeTo(Scene::Menu)
            }
            InputEvent::KeyDown { key: Key::Enter, .. } => SceneCommand::FadeTo(Scene::Menu),
            _ => SceneCommand::None,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let mid = HEIGHT / 2.0;
        surface.overlay(colors::with_alpha(colors::BACKGROUND, 180.0 / 255.0));

        centered_text(surface, "MISSION ABORTED", mid - 125.0, Font::Heading, colors::RED);
        centered_text(
            surface,
            &format!("Task: {}", self.task_name),
            mid - 70.0,
            Font::Body,
            colors::GRAY,
        );
        centered_text(
            surface,
            &format!(
                "Time: {} elapsed  /  {} remaining",
                format_clock(self.elapsed),
                format_clock(self.remaining)
            ),
            mid - 35.0,
            Font::Body,
            colors::WHITE,
        );
        centered_text(
            surface,
            &format!("Fragments mined: {}", self.collected),
            mid,
            Font::Body,
            colors::YELLOW,
        );
        centered_text(
            surface,
            &format!("Abort penalty: only {:.0}% kept", ABORT_PENALTY * 100.0),
            mid + 35.0,
            Font::Body,
            colors::ORANGE,
        );
        centered_text(
            surface,
            &format!("+{} fragments", self.earned),
            mid + 80.0,
            Font::Heading,
            colors::YELLOW,
        );

        button(surface, CONTINUE_BTN, colors::GRAY, "Continue", colors::BACKGROUND);
    }
}
