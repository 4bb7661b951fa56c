//! Mission scene
//!
//! Runs one `MissionState` against a task, turns tick reports into sounds,
//! and hands out the rewards when the countdown ends.

use glam::Vec2;
use rand::Rng;

use super::widgets::{button, centered_text};
use super::{AbortScene, Scene, SceneCommand};
use crate::audio::clips;
use crate::break_timer::MissionReport;
use crate::consts::*;
use crate::format_clock;
use crate::game::GameContext;
use crate::input::{InputEvent, Key};
use crate::renderer::{Align, Font, Rect, Surface, colors};
use crate::sim::{Loadout, MissionState, tick};
use crate::timers::TimerTag;

const ABORT_BTN: Rect = Rect::new(WIDTH / 2.0 - 70.0, HEIGHT - 50.0, 140.0, 36.0);

/// Asteroid position on screen
pub fn mission_center() -> Vec2 {
    Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 + 30.0)
}

#[derive(Debug, Clone)]
pub struct MissionScene {
    task_index: usize,
    task_name: String,
    state: MissionState,
}

impl MissionScene {
    /// Set up a mission for the task at `task_index`, or `None` if it no longer exists
    pub fn new(ctx: &mut GameContext, task_index: usize) -> Option<Self> {
        let task_name = ctx.tasks.get(task_index)?.name.clone();
        let duration = ctx.settings.pomodoro_seconds();
        let loadout = Loadout::from_talents(&ctx.talents);
        let seed = ctx.rng.random::<u64>();
        log::info!(
            "Mission started: '{}' ({:.0}s, {} bullets/burst)",
            task_name,
            duration,
            loadout.bullet_count
        );
        Some(Self {
            task_index,
            task_name,
            state: MissionState::new(mission_center(), duration, loadout, seed),
        })
    }

    pub fn state(&self) -> &MissionState {
        &self.state
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut GameContext) -> SceneCommand {
        if self.state.is_complete() {
            return SceneCommand::None;
        }
        match event {
            InputEvent::PointerDown { pos, .. } if ABORT_BTN.contains(*pos) => {
                ctx.click();
                self.abort(ctx)
            }
            InputEvent::KeyDown { key: Key::Escape, .. } => self.abort(ctx),
            _ => SceneCommand::None,
        }
    }

    fn abort(&self, ctx: &mut GameContext) -> SceneCommand {
        log::info!(
            "Mission aborted: '{}' with {:.0}s left",
            self.task_name,
            self.state.remaining
        );
        SceneCommand::Switch(Scene::Abort(AbortScene::new(
            ctx,
            self.task_name.clone(),
            self.state.collected,
            self.state.remaining,
            self.state.elapsed(),
        )))
    }

    pub fn update(&mut self, dt: f32, ctx: &mut GameContext) -> SceneCommand {
        let report = tick(&mut self.state, dt);

        let sfx = Some(ctx.settings.sfx_volume);
        for _ in 0..report.shots {
            ctx.audio.play(clips::SHOOT, sfx);
        }
        for _ in 0..report.hits {
            ctx.audio.play(clips::HIT, sfx);
        }
        for _ in 0..report.fragments_collected {
            ctx.audio.play(clips::COLLECT, sfx);
        }

        if report.completed {
            ctx.audio.play(clips::MISSION_COMPLETE, sfx);
            self.reward(ctx);
        }
        SceneCommand::None
    }

    /// Credit the finished pomodoro and queue the break
    fn reward(&self, ctx: &mut GameContext) {
        let collected = self.state.collected;
        if !ctx.tasks.complete_pomodoro(self.task_index) {
            log::warn!("Finished mission for missing task #{}", self.task_index);
        }
        ctx.total_pomodoros += 1;
        ctx.talents.add_fragments(collected);
        ctx.last_mission = MissionReport {
            task_name: self.task_name.clone(),
            fragments: collected,
        };
        ctx.timers
            .schedule(TimerTag::MissionCompleteBreak, COMPLETE_TO_BREAK_DELAY);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let state = &self.state;

        centered_text(surface, &format_clock(state.remaining), 32.0, Font::Timer, colors::WHITE);
        centered_text(surface, &self.task_name, 65.0, Font::Body, colors::GRAY);
        surface.text(
            &format!("Fragments: {}", state.collected),
            Vec2::new(20.0, 20.0),
            Font::Body,
            colors::YELLOW,
            Align::TopLeft,
        );

        surface.polygon(&state.asteroid, colors::ASTEROID);
        surface.polygon_outline(&state.asteroid, colors::GRAY, 2.0);

        surface.polygon(&state.ship.hull_points(), colors::CYAN);

        for p in &state.projectiles {
            surface.circle(p.pos, PROJECTILE_RADIUS, colors::YELLOW);
        }
        for f in &state.fragments {
            let size = f.size as f32;
            let color = colors::FRAGMENTS[f.color as usize % colors::FRAGMENTS.len()];
            surface.fill_rect(Rect::centered(f.pos, size, size), color, 0.0);
        }

        surface.ring(state.center, ORBIT_RADIUS, 1.0, colors::ORBIT_RING);

        button(surface, ABORT_BTN, colors::RED, "Abort Mission", colors::WHITE);

        if state.is_complete() {
            surface.overlay(colors::with_alpha(colors::BACKGROUND, 120.0 / 255.0));
            centered_text(surface, "MISSION COMPLETE!", HEIGHT / 2.0 - 20.0, Font::Heading, colors::GREEN);
            centered_text(
                surface,
                &format!("+{} fragments earned!", state.collected),
                HEIGHT / 2.0 + 25.0,
                Font::Body,
                colors::YELLOW,
            );
        }
    }
}
