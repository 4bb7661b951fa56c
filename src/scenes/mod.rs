//! Scene state machine
//!
//! Exactly one scene is active at a time, held in a single slot owned by
//! `Game`. Scenes react to input, advance, and draw; they never replace
//! themselves. Instead they hand a `SceneCommand` back to the game, which
//! performs the replacement.

mod abort;
mod banner;
mod fade;
mod intro;
mod menu;
mod mission;
mod settings;
mod story;
mod talent;
mod widgets;

pub use abort::{AbortScene, abort_reward};
pub use banner::draw_break_banner;
pub use fade::FadeTransition;
pub use intro::{IntroPhase, IntroScene};
pub use menu::MenuState;
pub use mission::MissionScene;
pub use settings::{SettingsScene, Slider};
pub use story::StoryScene;
pub use talent::{TalentScene, UpgradeState};

use crate::game::GameContext;
use crate::input::InputEvent;
use crate::renderer::Surface;

/// The active scene
#[derive(Debug)]
pub enum Scene {
    Intro(IntroScene),
    /// Menu state persists across visits and lives in `GameContext::menu`
    Menu,
    Talent(TalentScene),
    Settings(SettingsScene),
    Mission(MissionScene),
    Abort(AbortScene),
    Story(StoryScene),
    Fade(FadeTransition),
}

/// Scene discriminant, for gating audio and overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Intro,
    Menu,
    Talent,
    Settings,
    Mission,
    Abort,
    Story,
    Fade,
}

impl SceneKind {
    /// Menu ambience plays in these scenes and is stopped everywhere else
    pub fn plays_ambient(self) -> bool {
        matches!(
            self,
            SceneKind::Intro | SceneKind::Menu | SceneKind::Talent | SceneKind::Settings
        )
    }

    /// Scenes the break banner is drawn over
    pub fn shows_break_banner(self) -> bool {
        matches!(self, SceneKind::Menu | SceneKind::Talent | SceneKind::Settings)
    }
}

/// Transition requested by a scene
#[derive(Debug)]
pub enum SceneCommand {
    None,
    /// Replace the active scene immediately
    Switch(Scene),
    /// Cross-fade from the active scene into a new one
    FadeTo(Scene),
    /// A fade finished; its target becomes the active scene
    FinishTransition,
    /// Start a mission for the task at this index
    StartMission(usize),
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Intro(_) => SceneKind::Intro,
            Scene::Menu => SceneKind::Menu,
            Scene::Talent(_) => SceneKind::Talent,
            Scene::Settings(_) => SceneKind::Settings,
            Scene::Mission(_) => SceneKind::Mission,
            Scene::Abort(_) => SceneKind::Abort,
            Scene::Story(_) => SceneKind::Story,
            Scene::Fade(_) => SceneKind::Fade,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut GameContext) -> SceneCommand {
        match self {
            Scene::Intro(s) => s.handle_event(event),
            Scene::Menu => menu::handle_event(event, ctx),
            Scene::Talent(s) => s.handle_event(event, ctx),
            Scene::Settings(s) => s.handle_event(event, ctx),
            Scene::Mission(s) => s.handle_event(event, ctx),
            Scene::Abort(s) => s.handle_event(event, ctx),
            Scene::Story(s) => s.handle_event(event, ctx),
            // Input is swallowed mid-transition
            Scene::Fade(_) => SceneCommand::None,
        }
    }

    pub fn update(&mut self, dt: f32, ctx: &mut GameContext) -> SceneCommand {
        match self {
            Scene::Intro(s) => s.update(dt),
            Scene::Mission(s) => s.update(dt, ctx),
            Scene::Fade(s) => s.update(dt),
            Scene::Menu | Scene::Talent(_) | Scene::Settings(_) | Scene::Abort(_) | Scene::Story(_) => {
                SceneCommand::None
            }
        }
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        match self {
            Scene::Intro(s) => s.draw(surface),
            Scene::Menu => menu::draw(ctx, surface),
            Scene::Talent(s) => s.draw(ctx, surface),
            Scene::Settings(s) => s.draw(ctx, surface),
            Scene::Mission(s) => s.draw(surface),
            Scene::Abort(s) => s.draw(surface),
            Scene::Story(s) => s.draw(surface),
            Scene::Fade(s) => s.draw(ctx, surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_and_banner_gating() {
        assert!(SceneKind::Intro.plays_ambient());
        assert!(SceneKind::Settings.plays_ambient());
        assert!(!SceneKind::Mission.plays_ambient());
        assert!(!SceneKind::Fade.plays_ambient());

        assert!(!SceneKind::Intro.shows_break_banner());
        assert!(SceneKind::Talent.shows_break_banner());
        assert!(!SceneKind::Story.shows_break_banner());
    }

    #[test]
    fn test_fade_swallows_input() {
        let mut ctx = GameContext::new(Default::default(), Default::default(), 1);
        let mut scene = Scene::Fade(FadeTransition::new(Scene::Menu, Scene::Menu));
        let cmd = scene.handle_event(&InputEvent::click(10.0, 10.0), &mut ctx);
        assert!(matches!(cmd, SceneCommand::None));
    }
}
