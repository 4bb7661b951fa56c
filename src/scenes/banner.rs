//! Break status bar drawn along the bottom of the menu scenes

use glam::Vec2;

use crate::break_timer::BreakTimer;
use crate::consts::{HEIGHT, WIDTH};
use crate::format_clock;
use crate::renderer::{Align, Font, Rect, Surface, colors};

const BANNER_H: f32 = 36.0;

/// Draw the banner if a break is active; does nothing otherwise
pub fn draw_break_banner(timer: &BreakTimer, surface: &mut dyn Surface) {
    if !timer.is_active() {
        return;
    }

    let top = HEIGHT - BANNER_H;
    let mid = top + BANNER_H / 2.0;
    surface.fill_rect(Rect::new(0.0, top, WIDTH, BANNER_H), colors::BANNER, 0.0);
    surface.line(Vec2::new(0.0, top), Vec2::new(WIDTH, top), colors::DARK_GRAY);

    if timer.is_ready() {
        let alpha = timer.pulse_alpha() as f32 / 255.0;
        surface.text(
            "Ready for mission",
            Vec2::new(WIDTH / 2.0, mid),
            Font::Body,
            colors::with_alpha(colors::GREEN, alpha),
            Align::Center,
        );
    } else {
        surface.text(
            &format!("Break  {}", format_clock(timer.remaining())),
            Vec2::new(WIDTH / 2.0, mid),
            Font::Small,
            colors::GRAY,
            Align::Center,
        );
        let report = timer.report();
        surface.text(
            &format!("{}  ·  +{} frags", report.task_name, report.fragments),
            Vec2::new(12.0, mid),
            Font::Small,
            colors::DARK_GRAY,
            Align::MidLeft,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::break_timer::MissionReport;
    use crate::renderer::DrawList;

    fn report() -> MissionReport {
        MissionReport {
            task_name: "Write report".into(),
            fragments: 12,
        }
    }

    #[test]
    fn test_inactive_draws_nothing() {
        let mut list = DrawList::new();
        draw_break_banner(&BreakTimer::new(), &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_countdown_content() {
        let mut timer = BreakTimer::new();
        timer.start(300.0, report());
        timer.update(30.5);
        let mut list = DrawList::new();
        draw_break_banner(&timer, &mut list);
        assert!(list.has_text("Break  04:29"));
        assert!(list.has_text("Write report"));
        assert!(list.has_text("+12 frags"));
        assert!(!list.has_text("Ready"));
    }

    #[test]
    fn test_ready_content() {
        let mut timer = BreakTimer::new();
        timer.start(60.0, report());
        timer.update(61.0);
        let mut list = DrawList::new();
        draw_break_banner(&timer, &mut list);
        assert!(list.has_text("Ready for mission"));
        assert!(!list.has_text("Break"));
    }
}
