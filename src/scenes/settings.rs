//! Settings screen: volume sliders and duration selectors

use glam::Vec2;

use super::widgets::{BUTTON_RADIUS, button, centered_text};
use super::{Scene, SceneCommand};
use crate::consts::{HEIGHT, WIDTH};
use crate::game::GameContext;
use crate::input::InputEvent;
use crate::renderer::{Align, Font, Rect, Surface, colors};

const SLIDER_W: f32 = 260.0;
const SLIDER_H: f32 = 8.0;
const KNOB_R: f32 = 10.0;
const LABEL_X: f32 = WIDTH / 2.0 - 220.0;
const SLIDER_X: f32 = WIDTH / 2.0 - 40.0;
/// Row centers: sfx, ambient, pomodoro, break
const ROW_Y: [f32; 4] = [150.0, 220.0, 300.0, 370.0];
const ARROW_W: f32 = 36.0;
const ARROW_H: f32 = 32.0;
const SELECTOR_CX: f32 = SLIDER_X + SLIDER_W / 2.0;
const BACK_BTN: Rect = Rect::new(WIDTH / 2.0 - 60.0, HEIGHT - 55.0, 120.0, 36.0);

/// A draggable volume slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Sfx,
    Ambient,
}

impl Slider {
    fn row(self) -> f32 {
        match self {
            Slider::Sfx => ROW_Y[0],
            Slider::Ambient => ROW_Y[1],
        }
    }

    /// Hit area: the track, as tall as the knob
    pub fn rect(self) -> Rect {
        Rect::new(SLIDER_X, self.row() - KNOB_R, SLIDER_W, KNOB_R * 2.0)
    }
}

/// Slider value for a pointer at `x`
pub fn slider_value(x: f32) -> f32 {
    ((x - SLIDER_X) / SLIDER_W).clamp(0.0, 1.0)
}

fn arrow_left(row_y: f32) -> Rect {
    Rect::new(SELECTOR_CX - 100.0, row_y - ARROW_H / 2.0, ARROW_W, ARROW_H)
}

fn arrow_right(row_y: f32) -> Rect {
    Rect::new(SELECTOR_CX + 100.0 - ARROW_W, row_y - ARROW_H / 2.0, ARROW_W, ARROW_H)
}

#[derive(Debug, Clone, Default)]
pub struct SettingsScene {
    dragging: Option<Slider>,
}

impl SettingsScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<Slider> {
        self.dragging
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut GameContext) -> SceneCommand {
        match event {
            InputEvent::PointerDown { pos, .. } => {
                let pos = *pos;
                if BACK_BTN.contains(pos) {
                    ctx.click();
                    return SceneCommand::Switch(Scene::Menu);
                }
                if let Some(slider) = [Slider::Sfx, Slider::Ambient]
                    .into_iter()
                    .find(|s| s.rect().contains(pos))
                {
                    self.dragging = Some(slider);
                    set_volume(ctx, slider, slider_value(pos.x));
                } else if arrow_left(ROW_Y[2]).contains(pos) {
                    ctx.click();
                    ctx.settings.cycle_pomodoro(-1);
                } else if arrow_right(ROW_Y[2]).contains(pos) {
                    ctx.click();
                    ctx.settings.cycle_pomodoro(1);
                } else if arrow_left(ROW_Y[3]).contains(pos) {
                    ctx.click();
                    ctx.settings.cycle_break(-1);
                } else if arrow_right(ROW_Y[3]).contains(pos) {
                    ctx.click();
                    ctx.settings.cycle_break(1);
                }
            }
            InputEvent::PointerUp { .. } => self.dragging = None,
            InputEvent::PointerMove { pos } => {
                if let Some(slider) = self.dragging {
                    set_volume(ctx, slider, slider_value(pos.x));
                }
            }
            _ => {}
        }
        SceneCommand::None
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        let settings = &ctx.settings;

        centered_text(surface, "SETTINGS", 70.0, Font::Title, colors::WHITE);

        draw_slider(surface, Slider::Sfx, settings.sfx_volume, "SFX Volume");
        draw_slider(surface, Slider::Ambient, settings.ambient_volume, "Ambience");
        draw_selector(
            surface,
            ROW_Y[2],
            &format!("{} min", settings.pomodoro_minutes),
            "Pomodoro",
        );
        draw_selector(surface, ROW_Y[3], &format!("{} min", settings.break_minutes), "Break");

        button(surface, BACK_BTN, colors::RED, "Back", colors::WHITE);
    }
}

fn set_volume(ctx: &mut GameContext, slider: Slider, value: f32) {
    match slider {
        Slider::Sfx => {
            ctx.settings.set_sfx_volume(value);
            ctx.audio.set_sfx_volume(ctx.settings.sfx_volume);
        }
        Slider::Ambient => {
            ctx.settings.set_ambient_volume(value);
            ctx.audio.set_ambient_volume(ctx.settings.ambient_volume);
        }
    }
}

fn draw_slider(surface: &mut dyn Surface, slider: Slider, value: f32, label: &str) {
    let y = slider.row();
    surface.text(label, Vec2::new(LABEL_X, y), Font::Body, colors::WHITE, Align::MidLeft);

    let track = Rect::new(SLIDER_X, y - SLIDER_H / 2.0, SLIDER_W, SLIDER_H);
    surface.fill_rect(track, colors::DARK_GRAY, BUTTON_RADIUS);
    let fill_w = (SLIDER_W * value).floor();
    if fill_w > 0.0 {
        surface.fill_rect(Rect { w: fill_w, ..track }, colors::CYAN, BUTTON_RADIUS);
    }
    surface.circle(Vec2::new(SLIDER_X + fill_w, y), KNOB_R, colors::WHITE);

    surface.text(
        &format!("{}%", (value * 100.0) as u32),
        Vec2::new(SLIDER_X + SLIDER_W + 16.0, y),
        Font::Body,
        colors::GRAY,
        Align::MidLeft,
    );
}

fn draw_selector(surface: &mut dyn Surface, y: f32, value: &str, label: &str) {
    surface.text(label, Vec2::new(LABEL_X, y), Font::Body, colors::WHITE, Align::MidLeft);
    let left = arrow_left(y);
    let right = arrow_right(y);
    button(surface, left, colors::DARK_GRAY, "<", colors::WHITE);
    surface.text(
        value,
        Vec2::new((left.right() + right.x) / 2.0, y),
        Font::Body,
        colors::CYAN,
        Align::Center,
    );
    button(surface, right, colors::DARK_GRAY, ">", colors::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::{AudioCall, recording_manager};
    use crate::renderer::DrawList;
    use crate::settings::Settings;

    fn click_at(p: Vec2) -> InputEvent {
        InputEvent::click(p.x, p.y)
    }

    fn ctx() -> GameContext {
        GameContext::new(Settings::default(), Default::default(), 9)
    }

    #[test]
    fn test_slider_value_clamps() {
        assert_eq!(slider_value(SLIDER_X - 50.0), 0.0);
        assert_eq!(slider_value(SLIDER_X + SLIDER_W / 2.0), 0.5);
        assert_eq!(slider_value(SLIDER_X + SLIDER_W + 50.0), 1.0);
    }

    #[test]
    fn test_click_sets_sfx_volume() {
        let mut ctx = ctx();
        let mut scene = SettingsScene::new();
        let y = Slider::Sfx.rect().center().y;
        scene.handle_event(&click_at(Vec2::new(SLIDER_X + SLIDER_W * 0.25, y)), &mut ctx);
        assert!((ctx.settings.sfx_volume - 0.25).abs() < 1e-6);
        assert_eq!(scene.dragging(), Some(Slider::Sfx));
    }

    #[test]
    fn test_drag_ambient_updates_audio() {
        let (audio, calls) = recording_manager();
        let mut ctx = GameContext::new(Settings::default(), audio, 9);
        ctx.audio.play_ambient(crate::audio::clips::AMBIENT_MENU, 0.5);
        calls.borrow_mut().clear();

        let mut scene = SettingsScene::new();
        let y = Slider::Ambient.rect().center().y;
        scene.handle_event(&click_at(Vec2::new(SLIDER_X, y)), &mut ctx);
        scene.handle_event(
            &InputEvent::PointerMove {
                pos: Vec2::new(SLIDER_X + SLIDER_W, y + 200.0),
            },
            &mut ctx,
        );
        assert_eq!(ctx.settings.ambient_volume, 1.0);
        assert!(
            calls
                .borrow()
                .iter()
                .any(|c| matches!(c, AudioCall::LoopVolume(_, v) if *v == 1.0))
        );

        // Moves after release are ignored
        scene.handle_event(&InputEvent::PointerUp { pos: Vec2::ZERO }, &mut ctx);
        scene.handle_event(&InputEvent::PointerMove { pos: Vec2::new(SLIDER_X, y) }, &mut ctx);
        assert_eq!(ctx.settings.ambient_volume, 1.0);
        assert_eq!(scene.dragging(), None);
    }

    #[test]
    fn test_cyclers_wrap() {
        let mut ctx = ctx();
        let mut scene = SettingsScene::new();
        scene.handle_event(&click_at(arrow_right(ROW_Y[2]).center()), &mut ctx);
        assert_eq!(ctx.settings.pomodoro_minutes, 30);

        scene.handle_event(&click_at(arrow_left(ROW_Y[3]).center()), &mut ctx);
        assert_eq!(ctx.settings.break_minutes, 3);

        ctx.settings.break_minutes = 10;
        scene.handle_event(&click_at(arrow_right(ROW_Y[3]).center()), &mut ctx);
        assert_eq!(ctx.settings.break_minutes, 1);
    }

    #[test]
    fn test_back_returns_to_menu() {
        let mut ctx = ctx();
        let cmd = SettingsScene::new().handle_event(&click_at(BACK_BTN.center()), &mut ctx);
        assert!(matches!(cmd, SceneCommand::Switch(Scene::Menu)));
    }

    #[test]
    fn test_draw_readouts() {
        let ctx = ctx();
        let mut list = DrawList::new();
        SettingsScene::new().draw(&ctx, &mut list);
        assert!(list.has_text("70%"));
        assert!(list.has_text("50%"));
        assert!(list.has_text("25 min"));
        assert!(list.has_text("5 min"));
    }
}
