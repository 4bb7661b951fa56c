//! Task menu
//!
//! Text entry for new tasks, the task list with per-row Start/Delete buttons,
//! and buttons into the talent and settings screens. The menu's own state
//! (input text, focus, scroll) is kept in `GameContext` so it survives trips
//! through other scenes.

use glam::Vec2;

use super::widgets::{BUTTON_RADIUS, button, centered_text};
use super::{Scene, SceneCommand, SettingsScene, TalentScene};
use crate::consts::{HEIGHT, WIDTH};
use crate::game::GameContext;
use crate::input::{InputEvent, Key, buttons};
use crate::renderer::{Align, Font, Rect, Surface, colors};
use crate::task::MAX_TASK_NAME_LEN;

const INPUT_RECT: Rect = Rect::new(50.0, 90.0, 500.0, 36.0);
const ADD_BTN: Rect = Rect::new(560.0, 90.0, 80.0, 36.0);
const TALENT_BTN: Rect = Rect::new(WIDTH - 160.0, 20.0, 140.0, 36.0);
const SETTINGS_BTN: Rect = Rect::new(WIDTH - 310.0, 20.0, 140.0, 36.0);
const LIST_TOP: f32 = 150.0;
const ROW_H: f32 = 44.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub input_text: String,
    pub input_active: bool,
    /// Index of the first visible task row
    pub scroll_offset: usize,
}

/// Task rows that fit on screen
pub fn visible_rows() -> usize {
    (((HEIGHT - LIST_TOP - 20.0) / ROW_H) as usize).max(1)
}

fn row_top(row: usize) -> f32 {
    LIST_TOP + row as f32 * ROW_H
}

pub(crate) fn start_button(row: usize) -> Rect {
    Rect::new(WIDTH - 220.0, row_top(row) + 4.0, 80.0, 32.0)
}

pub(crate) fn delete_button(row: usize) -> Rect {
    Rect::new(WIDTH - 130.0, row_top(row) + 4.0, 80.0, 32.0)
}

fn max_scroll(ctx: &GameContext) -> usize {
    ctx.tasks.len().saturating_sub(visible_rows())
}

pub(super) fn handle_event(event: &InputEvent, ctx: &mut GameContext) -> SceneCommand {
    match event {
        InputEvent::PointerDown { button, .. } if *button == buttons::WHEEL_UP => {
            ctx.menu.scroll_offset = ctx.menu.scroll_offset.saturating_sub(1);
        }
        InputEvent::PointerDown { button, .. } if *button == buttons::WHEEL_DOWN => {
            ctx.menu.scroll_offset = (ctx.menu.scroll_offset + 1).min(max_scroll(ctx));
        }
        InputEvent::PointerDown { pos, .. } => {
            let pos = *pos;
            ctx.menu.input_active = INPUT_RECT.contains(pos);
            if ADD_BTN.contains(pos) {
                ctx.click();
                add_task(ctx);
            } else if TALENT_BTN.contains(pos) {
                ctx.click();
                return SceneCommand::Switch(Scene::Talent(TalentScene::new()));
            } else if SETTINGS_BTN.contains(pos) {
                ctx.click();
                return SceneCommand::Switch(Scene::Settings(SettingsScene::new()));
            } else {
                return list_click(pos, ctx);
            }
        }
        InputEvent::KeyDown { key, ch } if ctx.menu.input_active => match key {
            Key::Enter => add_task(ctx),
            Key::Backspace => {
                ctx.menu.input_text.pop();
            }
            _ => match ch {
                Some(c) if !c.is_control() && ctx.menu.input_text.chars().count() < MAX_TASK_NAME_LEN => {
                    ctx.menu.input_text.push(*c);
                }
                _ => {}
            },
        },
        _ => {}
    }
    SceneCommand::None
}

fn add_task(ctx: &mut GameContext) {
    if let Some(idx) = ctx.tasks.add(&ctx.menu.input_text) {
        log::debug!("Added task #{}: {}", idx, ctx.menu.input_text.trim());
        ctx.menu.input_text.clear();
    }
}

fn list_click(pos: Vec2, ctx: &mut GameContext) -> SceneCommand {
    let vis = visible_rows();
    for row in 0..vis {
        let idx = row + ctx.menu.scroll_offset;
        if idx >= ctx.tasks.len() {
            break;
        }
        if start_button(row).contains(pos) {
            ctx.click();
            return SceneCommand::StartMission(idx);
        }
        if delete_button(row).contains(pos) {
            ctx.click();
            if let Some(task) = ctx.tasks.remove(idx) {
                log::debug!("Deleted task '{}'", task.name);
            }
            ctx.menu.scroll_offset = ctx.menu.scroll_offset.min(max_scroll(ctx));
            return SceneCommand::None;
        }
    }
    SceneCommand::None
}

pub(super) fn draw(ctx: &GameContext, surface: &mut dyn Surface) {
    let menu = &ctx.menu;

    centered_text(surface, "POMODORO MINER", 36.0, Font::Title, colors::CYAN);
    surface.text(
        &format!("Fragments: {}", ctx.talents.fragments()),
        Vec2::new(20.0, 20.0),
        Font::Body,
        colors::YELLOW,
        Align::TopLeft,
    );

    button(surface, SETTINGS_BTN, colors::GRAY, "Settings", colors::BACKGROUND);
    button(surface, TALENT_BTN, colors::ORANGE, "Talents", colors::BACKGROUND);

    let border = if menu.input_active { colors::WHITE } else { colors::GRAY };
    surface.stroke_rect(INPUT_RECT, border, 2.0);
    surface.text(
        &menu.input_text,
        Vec2::new(INPUT_RECT.x + 8.0, INPUT_RECT.center().y),
        Font::Body,
        colors::WHITE,
        Align::MidLeft,
    );
    button(surface, ADD_BTN, colors::GREEN, "Add", colors::BACKGROUND);

    let header_y = LIST_TOP - 24.0;
    surface.text("Task", Vec2::new(60.0, header_y), Font::Body, colors::GRAY, Align::TopLeft);
    surface.text(
        "Pomodoros",
        Vec2::new(WIDTH - 380.0, header_y),
        Font::Body,
        colors::GRAY,
        Align::TopLeft,
    );

    let vis = visible_rows();
    for (row, task) in ctx.tasks.iter().skip(menu.scroll_offset).take(vis).enumerate() {
        let top = row_top(row);
        surface.line(Vec2::new(50.0, top), Vec2::new(WIDTH - 50.0, top), colors::DARK_GRAY);
        surface.text(&task.name, Vec2::new(60.0, top + 10.0), Font::Body, colors::WHITE, Align::TopLeft);
        surface.text(
            &task.pomodoros_completed.to_string(),
            Vec2::new(WIDTH - 360.0, top + 10.0),
            Font::Body,
            colors::YELLOW,
            Align::TopLeft,
        );
        surface.fill_rect(start_button(row), colors::GREEN, BUTTON_RADIUS);
        surface.text("Start", start_button(row).center(), Font::Body, colors::BACKGROUND, Align::Center);
        surface.fill_rect(delete_button(row), colors::RED, BUTTON_RADIUS);
        surface.text("Delete", delete_button(row).center(), Font::Body, colors::BACKGROUND, Align::Center);
    }

    let total = ctx.tasks.len();
    if total > vis {
        let last = (menu.scroll_offset + vis).min(total);
        centered_text(
            surface,
            &format!("(scroll: {}-{} / {})", menu.scroll_offset + 1, last, total),
            HEIGHT - 24.0,
            Font::Small,
            colors::DARK_GRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    fn ctx_with_tasks(n: usize) -> GameContext {
        let mut ctx = GameContext::new(Default::default(), Default::default(), 3);
        for i in 0..n {
            ctx.tasks.add(&format!("task {}", i));
        }
        ctx
    }

    fn click(rect: Rect) -> InputEvent {
        let c = rect.center();
        InputEvent::click(c.x, c.y)
    }

    fn type_text(ctx: &mut GameContext, text: &str) {
        for ch in text.chars() {
            handle_event(&InputEvent::typed(ch), ctx);
        }
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(visible_rows(), 9);
    }

    #[test]
    fn test_typing_requires_focus() {
        let mut ctx = ctx_with_tasks(0);
        type_text(&mut ctx, "ignored");
        assert!(ctx.menu.input_text.is_empty());

        handle_event(&click(INPUT_RECT), &mut ctx);
        assert!(ctx.menu.input_active);
        type_text(&mut ctx, "Write docs");
        assert_eq!(ctx.menu.input_text, "Write docs");

        handle_event(&InputEvent::key(Key::Backspace), &mut ctx);
        assert_eq!(ctx.menu.input_text, "Write doc");
    }

    #[test]
    fn test_enter_adds_trimmed_task() {
        let mut ctx = ctx_with_tasks(0);
        handle_event(&click(INPUT_RECT), &mut ctx);
        type_text(&mut ctx, "  Review PR  ");
        handle_event(&InputEvent::key(Key::Enter), &mut ctx);
        assert_eq!(ctx.tasks.len(), 1);
        assert_eq!(ctx.tasks.get(0).map(|t| t.name.as_str()), Some("Review PR"));
        assert!(ctx.menu.input_text.is_empty());
    }

    #[test]
    fn test_blank_input_is_not_added() {
        let mut ctx = ctx_with_tasks(0);
        handle_event(&click(INPUT_RECT), &mut ctx);
        type_text(&mut ctx, "   ");
        handle_event(&click(ADD_BTN), &mut ctx);
        assert!(ctx.tasks.is_empty());
        assert_eq!(ctx.menu.input_text, "   ");
    }

    #[test]
    fn test_input_capped_at_max_len() {
        let mut ctx = ctx_with_tasks(0);
        handle_event(&click(INPUT_RECT), &mut ctx);
        type_text(&mut ctx, &"x".repeat(60));
        assert_eq!(ctx.menu.input_text.chars().count(), MAX_TASK_NAME_LEN);
    }

    #[test]
    fn test_start_and_delete_rows() {
        let mut ctx = ctx_with_tasks(3);
        let cmd = handle_event(&click(start_button(1)), &mut ctx);
        assert!(matches!(cmd, SceneCommand::StartMission(1)));

        handle_event(&click(delete_button(0)), &mut ctx);
        assert_eq!(ctx.tasks.len(), 2);
        assert_eq!(ctx.tasks.get(0).map(|t| t.name.as_str()), Some("task 1"));

        // Row 2 no longer holds a task
        let cmd = handle_event(&click(start_button(2)), &mut ctx);
        assert!(matches!(cmd, SceneCommand::None));
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut ctx = ctx_with_tasks(12);
        let down = InputEvent::PointerDown {
            pos: Vec2::ZERO,
            button: buttons::WHEEL_DOWN,
        };
        let up = InputEvent::PointerDown {
            pos: Vec2::ZERO,
            button: buttons::WHEEL_UP,
        };
        for _ in 0..10 {
            handle_event(&down, &mut ctx);
        }
        assert_eq!(ctx.menu.scroll_offset, 3);

        // Start on the first visible row targets the scrolled index
        let cmd = handle_event(&click(start_button(0)), &mut ctx);
        assert!(matches!(cmd, SceneCommand::StartMission(3)));

        for _ in 0..10 {
            handle_event(&up, &mut ctx);
        }
        assert_eq!(ctx.menu.scroll_offset, 0);
    }

    #[test]
    fn test_delete_clamps_scroll() {
        let mut ctx = ctx_with_tasks(10);
        ctx.menu.scroll_offset = 1;
        handle_event(&click(delete_button(0)), &mut ctx);
        assert_eq!(ctx.tasks.len(), 9);
        assert_eq!(ctx.menu.scroll_offset, 0);
    }

    #[test]
    fn test_nav_buttons_switch_scene() {
        let mut ctx = ctx_with_tasks(0);
        assert!(matches!(
            handle_event(&click(TALENT_BTN), &mut ctx),
            SceneCommand::Switch(Scene::Talent(_))
        ));
        assert!(matches!(
            handle_event(&click(SETTINGS_BTN), &mut ctx),
            SceneCommand::Switch(Scene::Settings(_))
        ));
    }

    #[test]
    fn test_draw_lists_tasks_and_scroll_hint() {
        let mut ctx = ctx_with_tasks(11);
        ctx.menu.scroll_offset = 2;
        let mut list = DrawList::new();
        draw(&ctx, &mut list);
        assert!(list.has_text("task 2"));
        assert!(list.has_text("task 10"));
        assert!(!list.has_text("task 0"));
        assert!(list.has_text("(scroll: 3-11 / 11)"));
        assert!(list.has_text("Fragments: 0"));
    }
}
