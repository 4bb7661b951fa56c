//! Talent upgrade screen

use glam::Vec2;

use super::widgets::{button, centered_text};
use super::{Scene, SceneCommand};
use crate::consts::{HEIGHT, WIDTH};
use crate::game::GameContext;
use crate::input::InputEvent;
use crate::renderer::{Align, Font, Rect, Surface, colors};
use crate::talents::{TalentId, TalentTree};

const ROWS_TOP: f32 = 100.0;
const ROW_H: f32 = 72.0;
const PIP_X: f32 = 350.0;
const PIP_SIZE: f32 = 12.0;
const PIP_STEP: f32 = 18.0;
const BACK_BTN: Rect = Rect::new(WIDTH / 2.0 - 60.0, HEIGHT - 55.0, 120.0, 36.0);

/// How an upgrade button is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeState {
    Maxed,
    Affordable,
    Unaffordable,
}

impl UpgradeState {
    pub fn of(talents: &TalentTree, id: TalentId) -> Self {
        if talents.is_maxed(id) {
            UpgradeState::Maxed
        } else if talents.can_upgrade(id) {
            UpgradeState::Affordable
        } else {
            UpgradeState::Unaffordable
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TalentScene;

impl TalentScene {
    pub fn new() -> Self {
        Self
    }

    fn row_top(row: usize) -> f32 {
        ROWS_TOP + row as f32 * ROW_H
    }

    /// Upgrade button for the talent in catalog row `row`
    pub fn upgrade_button(row: usize) -> Rect {
        Rect::new(WIDTH - 180.0, Self::row_top(row) + 20.0, 100.0, 32.0)
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut GameContext) -> SceneCommand {
        let InputEvent::PointerDown { pos, .. } = event else {
            return SceneCommand::None;
        };
        if BACK_BTN.contains(*pos) {
            ctx.click();
            return SceneCommand::Switch(Scene::Menu);
        }
        for (row, id) in TalentId::ALL.iter().enumerate() {
            if Self::upgrade_button(row).contains(*pos) {
                ctx.click();
                ctx.talents.upgrade(*id);
                break;
            }
        }
        SceneCommand::None
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut dyn Surface) {
        let talents = &ctx.talents;

        centered_text(surface, "TALENTS", 32.0, Font::Title, colors::ORANGE);
        centered_text(
            surface,
            &format!("Fragments: {}", talents.fragments()),
            70.0,
            Font::Body,
            colors::YELLOW,
        );

        for (row, id) in TalentId::ALL.iter().copied().enumerate() {
            let def = id.def();
            let level = talents.level(id);
            let y = Self::row_top(row);

            surface.line(Vec2::new(40.0, y), Vec2::new(WIDTH - 40.0, y), colors::DARK_GRAY);
            surface.text(
                &format!("{}  Lv {}/{}", def.name, level, def.max_level),
                Vec2::new(60.0, y + 8.0),
                Font::Body,
                colors::WHITE,
                Align::TopLeft,
            );
            surface.text(
                def.description,
                Vec2::new(60.0, y + 32.0),
                Font::Body,
                colors::GRAY,
                Align::TopLeft,
            );

            for pip in 0..def.max_level {
                let color = if pip < level { colors::CYAN } else { colors::DARK_GRAY };
                let rect = Rect::new(PIP_X + pip as f32 * PIP_STEP, y + 10.0, PIP_SIZE, PIP_SIZE);
                surface.fill_rect(rect, color, 0.0);
            }

            let rect = Self::upgrade_button(row);
            let cost = format!("{} frags", talents.cost(id));
            match UpgradeState::of(talents, id) {
                UpgradeState::Maxed => button(surface, rect, colors::DARK_GRAY, "MAXED", colors::GRAY),
                UpgradeState::Affordable => button(surface, rect, colors::GREEN, &cost, colors::BACKGROUND),
                UpgradeState::Unaffordable => button(surface, rect, colors::DARK_GRAY, &cost, colors::GRAY),
            }
        }

        button(surface, BACK_BTN, colors::RED, "Back", colors::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};

    fn click(rect: Rect) -> InputEvent {
        let c = rect.center();
        InputEvent::click(c.x, c.y)
    }

    #[test]
    fn test_rows_do_not_overlap_back_button() {
        let last = TalentScene::upgrade_button(TalentId::ALL.len() - 1);
        assert!(last.bottom() < BACK_BTN.y);
    }

    #[test]
    fn test_click_upgrades_affordable_talent() {
        let mut ctx = GameContext::new(Default::default(), Default::default(), 1);
        ctx.talents.add_fragments(5);
        let mut scene = TalentScene::new();

        scene.handle_event(&click(TalentScene::upgrade_button(2)), &mut ctx);
        assert_eq!(ctx.talents.level(TalentId::MagnetRange), 1);
        assert_eq!(ctx.talents.fragments(), 0);

        // Next level costs 10; nothing changes
        scene.handle_event(&click(TalentScene::upgrade_button(2)), &mut ctx);
        assert_eq!(ctx.talents.level(TalentId::MagnetRange), 1);
    }

    #[test]
    fn test_back_returns_to_menu() {
        let mut ctx = GameContext::new(Default::default(), Default::default(), 1);
        let cmd = TalentScene::new().handle_event(&click(BACK_BTN), &mut ctx);
        assert!(matches!(cmd, SceneCommand::Switch(Scene::Menu)));
    }

    #[test]
    fn test_upgrade_state() {
        let mut tree = TalentTree::new();
        assert_eq!(UpgradeState::of(&tree, TalentId::FireRate), UpgradeState::Unaffordable);
        tree.add_fragments(200);
        assert_eq!(UpgradeState::of(&tree, TalentId::FireRate), UpgradeState::Affordable);
        while tree.upgrade(TalentId::FragMagnetStr) {}
        assert_eq!(UpgradeState::of(&tree, TalentId::FragMagnetStr), UpgradeState::Maxed);
    }

    #[test]
    fn test_draw_pips_and_labels() {
        let mut ctx = GameContext::new(Default::default(), Default::default(), 1);
        ctx.talents.add_fragments(5);
        ctx.talents.upgrade(TalentId::FireRate);

        let mut list = DrawList::new();
        TalentScene::new().draw(&ctx, &mut list);
        assert!(list.has_text("Rapid Fire  Lv 1/5"));
        assert!(list.has_text("Tractor Beam  Lv 0/3"));
        assert!(list.has_text("10 frags"));

        let lit = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == colors::CYAN))
            .count();
        assert_eq!(lit, 1);
    }
}
