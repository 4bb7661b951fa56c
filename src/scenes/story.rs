//! Story page shown before a mission

use super::widgets::centered_text;
use super::{MissionScene, Scene, SceneCommand};
use crate::consts::{HEIGHT, WIDTH};
use crate::game::GameContext;
use crate::input::{InputEvent, Key};
use crate::renderer::{Font, Rect, Surface, colors};

#[derive(Debug, Clone)]
pub struct StoryScene {
    task_index: usize,
    /// Image asset id for the host to draw
    page: String,
}

impl StoryScene {
    pub fn new(task_index: usize, page: impl Into<String>) -> Self {
        Self {
            task_index,
            page: page.into(),
        }
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut GameContext) -> SceneCommand {
        let proceed = match event {
            InputEvent::PointerDown { .. } => true,
            InputEvent::KeyDown { key, .. } => matches!(key, Key::Enter | Key::Space),
            _ => false,
        };
        if !proceed {
            return SceneCommand::None;
        }
        match MissionScene::new(ctx, self.task_index) {
            Some(mission) => SceneCommand::FadeTo(Scene::Mission(mission)),
            None => {
                log::warn!("Task #{} vanished before its mission", self.task_index);
                SceneCommand::FadeTo(Scene::Menu)
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.image(&self.page, Rect::new(0.0, 0.0, WIDTH, HEIGHT));
        centered_text(
            surface,
            "Click or press SPACE to start mission",
            HEIGHT - 24.0,
            Font::Small,
            colors::GRAY,
        );
    }
}
