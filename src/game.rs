//! Top-level game orchestrator
//!
//! `GameContext` holds everything that outlives a single scene. `Game` owns
//! the context plus the one active scene, and runs the per-frame sequence:
//! timers, events, break timer, scene update, ambient audio, draw.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioManager, clips};
use crate::break_timer::{BreakTimer, MissionReport};
use crate::input::InputEvent;
use crate::renderer::{Surface, colors};
use crate::scenes::{
    FadeTransition, IntroScene, MenuState, MissionScene, Scene, SceneCommand, SceneKind, StoryScene,
    draw_break_banner,
};
use crate::settings::Settings;
use crate::talents::TalentTree;
use crate::task::TaskList;
use crate::timers::{TimerQueue, TimerTag};

/// State shared by every scene
pub struct GameContext {
    pub settings: Settings,
    pub tasks: TaskList,
    pub talents: TalentTree,
    pub audio: AudioManager,
    pub break_timer: BreakTimer,
    pub timers: TimerQueue,
    pub total_pomodoros: u32,
    /// Result of the most recently completed mission
    pub last_mission: MissionReport,
    /// Story image ids in reading order
    pub story_pages: Vec<String>,
    pub menu: MenuState,
    pub rng: Pcg32,
}

impl GameContext {
    pub fn new(settings: Settings, audio: AudioManager, seed: u64) -> Self {
        Self {
            settings,
            tasks: TaskList::new(),
            talents: TalentTree::new(),
            audio,
            break_timer: BreakTimer::new(),
            timers: TimerQueue::new(),
            total_pomodoros: 0,
            last_mission: MissionReport::default(),
            story_pages: Vec::new(),
            menu: MenuState::default(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// UI click at the current sfx volume
    pub fn click(&mut self) {
        self.audio.play(clips::UI_CLICK, Some(self.settings.sfx_volume));
    }
}

pub struct Game {
    pub ctx: GameContext,
    scene: Scene,
    running: bool,
}

impl Game {
    pub fn new(settings: Settings, audio: AudioManager) -> Self {
        Self::with_seed(settings, audio, rand::random())
    }

    pub fn with_seed(settings: Settings, audio: AudioManager, seed: u64) -> Self {
        log::info!("Game starting (seed {})", seed);
        Self {
            ctx: GameContext::new(settings, audio, seed),
            scene: Scene::Intro(IntroScene::new()),
            running: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame: `dt` seconds have passed and `events` arrived since the last one
    pub fn frame(&mut self, dt: f32, events: Vec<InputEvent>, surface: &mut dyn Surface) {
        let due = self.ctx.timers.advance(dt);
        for event in events.into_iter().chain(due.into_iter().map(InputEvent::Timer)) {
            self.handle_event(event);
        }

        self.ctx.break_timer.update(dt);

        let cmd = self.scene.update(dt, &mut self.ctx);
        self.apply(cmd);

        self.gate_ambient();
        self.draw(surface);
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested");
                self.running = false;
                self.ctx.timers.clear();
                self.ctx.audio.stop_ambient();
            }
            InputEvent::Timer(TimerTag::MissionCompleteBreak) => self.start_break(),
            event => {
                let cmd = self.scene.handle_event(&event, &mut self.ctx);
                self.apply(cmd);
            }
        }
    }

    /// Carry out a scene's request
    pub fn apply(&mut self, cmd: SceneCommand) {
        match cmd {
            SceneCommand::None => {}
            SceneCommand::Switch(scene) => {
                log::debug!("Scene {:?} -> {:?}", self.scene.kind(), scene.kind());
                self.scene = scene;
            }
            SceneCommand::FadeTo(scene) => {
                let old = std::mem::replace(&mut self.scene, Scene::Menu);
                self.scene = Scene::Fade(FadeTransition::new(old, scene));
            }
            SceneCommand::FinishTransition => {
                self.scene = match std::mem::replace(&mut self.scene, Scene::Menu) {
                    Scene::Fade(fade) => fade.into_target(),
                    other => other,
                };
            }
            SceneCommand::StartMission(index) => self.start_mission(index),
        }
    }

    /// Leave the current scene for a mission on the task at `index`,
    /// through its story page if any pages are loaded
    pub fn start_mission(&mut self, index: usize) {
        self.ctx.break_timer.dismiss();
        if self.ctx.tasks.get(index).is_none() {
            log::warn!("Ignoring start of stale task index {}", index);
            return;
        }

        let next = if self.ctx.story_pages.is_empty() {
            match MissionScene::new(&mut self.ctx, index) {
                Some(mission) => Scene::Mission(mission),
                None => return,
            }
        } else {
            let page = (self.ctx.total_pomodoros as usize).min(self.ctx.story_pages.len() - 1);
            Scene::Story(StoryScene::new(index, self.ctx.story_pages[page].clone()))
        };
        self.apply(SceneCommand::FadeTo(next));
    }

    fn start_break(&mut self) {
        let report = self.ctx.last_mission.clone();
        self.ctx
            .break_timer
            .start(self.ctx.settings.break_seconds(), report);
        self.apply(SceneCommand::FadeTo(Scene::Menu));
    }

    fn gate_ambient(&mut self) {
        if self.scene.kind().plays_ambient() {
            let volume = self.ctx.settings.ambient_volume;
            self.ctx.audio.play_ambient(clips::AMBIENT_MENU, volume);
        } else {
            self.ctx.audio.stop_ambient();
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(colors::BACKGROUND);
        self.scene.draw(&self.ctx, surface);
        if self.scene.kind().shows_break_banner() {
            draw_break_banner(&self.ctx.break_timer, surface);
        }
    }
}
