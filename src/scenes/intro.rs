//! Welcome screen with a typewriter reveal

use glam::Vec2;

use super::widgets::centered_text;
use super::{Scene, SceneCommand};
use crate::consts::{HEIGHT, WIDTH};
use crate::input::{InputEvent, Key};
use crate::renderer::{Align, Font, Surface, colors};

const TITLE: &str = "POMI Corp.";

/// Lines revealed by the typewriter, top to bottom
pub const INTRO_LINES: [&str; 4] = [
    "Welcome to POMI Corp.",
    "",
    "Load your tasks to begin the mission.",
    "Put the resources to work upgrading your ship.",
];

const TITLE_FADE: f32 = 1.0;
const TITLE_HOLD: f32 = 0.6;
/// Seconds per revealed character
const CHAR_DELAY: f32 = 0.035;
/// Extra delay when the reveal reaches a new line
const LINE_PAUSE: f32 = 0.4;
/// Hold after the last character before moving on
const END_HOLD: f32 = 1.5;
const LINE_SPACING: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    TitleFade,
    TitleHold,
    Typing,
    Done,
}

#[derive(Debug, Clone)]
pub struct IntroScene {
    lines: Vec<String>,
    phase: IntroPhase,
    /// Time in the current phase
    timer: f32,
    /// Characters revealed across all lines
    revealed: usize,
    type_timer: f32,
    total_chars: usize,
    /// Global character index where each line begins
    line_starts: Vec<usize>,
}

impl Default for IntroScene {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroScene {
    pub fn new() -> Self {
        Self::with_lines(&INTRO_LINES)
    }

    pub fn with_lines(lines: &[&str]) -> Self {
        let mut line_starts = Vec::with_capacity(lines.len());
        let mut acc = 0;
        for line in lines {
            line_starts.push(acc);
            acc += line.chars().count();
        }
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            phase: IntroPhase::TitleFade,
            timer: 0.0,
            revealed: 0,
            type_timer: 0.0,
            total_chars: acc,
            line_starts,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Title opacity, 0.0 - 1.0
    pub fn title_alpha(&self) -> f32 {
        match self.phase {
            IntroPhase::TitleFade => (self.timer / TITLE_FADE).clamp(0.0, 1.0),
            _ => 1.0,
        }
    }

    /// Visible prefix of each line that has started revealing
    pub fn visible_lines(&self) -> Vec<String> {
        let mut remaining = self.revealed;
        let mut out = Vec::new();
        for line in &self.lines {
            if remaining == 0 {
                break;
            }
            let len = line.chars().count();
            out.push(line.chars().take(remaining).collect());
            remaining = remaining.saturating_sub(len);
        }
        out
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> SceneCommand {
        match event {
            InputEvent::PointerDown { .. } => skip(),
            InputEvent::KeyDown { key, .. } if *key != Key::Escape => skip(),
            _ => SceneCommand::None,
        }
    }

    pub fn update(&mut self, dt: f32) -> SceneCommand {
        self.timer += dt;
        match self.phase {
            IntroPhase::TitleFade => {
                if self.timer >= TITLE_FADE {
                    self.phase = IntroPhase::TitleHold;
                    self.timer = 0.0;
                }
            }
            IntroPhase::TitleHold => {
                if self.timer >= TITLE_HOLD {
                    self.phase = IntroPhase::Typing;
                    self.timer = 0.0;
                    self.type_timer = 0.0;
                }
            }
            IntroPhase::Typing => {
                self.type_timer += dt;
                while self.type_timer >= CHAR_DELAY && self.revealed < self.total_chars {
                    self.type_timer -= CHAR_DELAY;
                    self.revealed += 1;
                    if self.line_starts.iter().skip(1).any(|&s| s == self.revealed) {
                        self.type_timer -= LINE_PAUSE;
                    }
                }
                if self.revealed >= self.total_chars {
                    self.phase = IntroPhase::Done;
                    self.timer = 0.0;
                }
            }
            IntroPhase::Done => {
                if self.timer >= END_HOLD {
                    return skip();
                }
            }
        }
        SceneCommand::None
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        centered_text(
            surface,
            TITLE,
            HEIGHT / 3.0,
            Font::Title,
            colors::with_alpha(colors::CYAN, self.title_alpha()),
        );

        if matches!(self.phase, IntroPhase::Typing | IntroPhase::Done) {
            let mut y = HEIGHT / 3.0 + 50.0;
            for line in self.visible_lines() {
                if !line.is_empty() {
                    surface.text(&line, Vec2::new(WIDTH / 2.0, y), Font::Body, colors::GRAY, Align::Center);
                }
                y += LINE_SPACING;
            }
        }

        if self.phase != IntroPhase::TitleFade {
            centered_text(
                surface,
                "Click or press a key to continue",
                HEIGHT - 32.0,
                Font::Small,
                colors::DARK_GRAY,
            );
        }
    }
}

fn skip() -> SceneCommand {
    SceneCommand::FadeTo(Scene::Menu)
}
