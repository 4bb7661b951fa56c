//! Platform abstraction layer
//!
//! Handles the host-facing pieces of the main loop:
//! - Frame timing (`FrameClock` paced to 60 FPS, `FixedClock` for replays)
//! - Input delivery (`EventSource`, with `ScriptedEvents` for headless runs)
//! - Asset discovery (`story_pages`)
//! - The loop itself (`run_headless`)

use std::collections::VecDeque;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::consts::FPS;
use crate::game::Game;
use crate::input::InputEvent;
use crate::renderer::Surface;

/// Source of per-frame delta times
pub trait Clock {
    /// Seconds since the previous call. Not capped: countdowns run on wall time.
    fn tick(&mut self) -> f32;
}

/// Wall clock that sleeps to hold the target frame rate
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    frame: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FPS)
    }
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            last: Instant::now(),
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Constant step, for deterministic runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self { dt: 1.0 / FPS as f32 }
    }
}

impl Clock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.dt.max(0.0)
    }
}

/// Where input comes from
pub trait EventSource {
    /// Events that arrived since the last poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Pre-recorded input, one batch per frame. Sends `Quit` once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame delivering `events`
    pub fn then(mut self, events: Vec<InputEvent>) -> Self {
        self.frames.push_back(events);
        self
    }

    /// Queue `frames` frames with no input
    pub fn idle(mut self, frames: usize) -> Self {
        self.frames.extend(std::iter::repeat_with(Vec::new).take(frames));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Story image ids (`story_*.png` file stems) found in `dir`, sorted by name.
/// A missing or unreadable directory yields no pages.
pub fn story_pages(dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("No story pages in {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    let mut pages: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with("story_") && name.ends_with(".png"))
        .map(|name| name.trim_end_matches(".png").to_string())
        .collect();
    pages.sort();
    log::info!("Found {} story pages in {}", pages.len(), dir.display());
    pages
}

/// Drive `game` until it quits or `max_frames` frames have run.
/// Returns the number of frames run.
pub fn run_headless(
    game: &mut Game,
    events: &mut dyn EventSource,
    clock: &mut dyn Clock,
    surface: &mut dyn Surface,
    max_frames: u64,
) -> u64 {
    let mut frames = 0;
    while game.is_running() && frames < max_frames {
        let batch = events.poll();
        let dt = clock.tick();
        game.frame(dt, batch, surface);
        frames += 1;
    }
    log::info!("Main loop finished after {} frames", frames);
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;
    use crate::input::Key;
    use crate::renderer::DrawList;
    use crate::scenes::SceneKind;
    use crate::settings::Settings;

    #[test]
    fn test_fixed_clock_reports_full_step() {
        assert_eq!(FixedClock { dt: 0.5 }.tick(), 0.5);
        assert_eq!(FixedClock { dt: -1.0 }.tick(), 0.0);
        assert!((FixedClock::default().tick() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_clock_reports_stalls() {
        let mut clock = FrameClock::new(200);
        assert!(clock.tick() > 0.0);
        std::thread::sleep(Duration::from_millis(250));
        assert!(clock.tick() >= 0.25);
    }

    #[test]
    fn test_slow_frames_finish_break_on_time() {
        let settings = Settings {
            break_minutes: 1,
            ..Settings::default()
        };
        let mut game = Game::with_seed(settings, AudioManager::default(), 3);
        game.ctx.break_timer.start(60.0, Default::default());
        let mut script = ScriptedEvents::new().idle(120);
        let mut clock = FixedClock { dt: 0.5 };
        let mut surface = DrawList::new();
        let frames = run_headless(&mut game, &mut script, &mut clock, &mut surface, 120);
        assert_eq!(frames, 120);
        assert!(game.ctx.break_timer.is_ready());
    }

    #[test]
    fn test_script_quits_when_exhausted() {
        let mut script = ScriptedEvents::new().then(vec![InputEvent::key(Key::Enter)]).idle(2);
        assert_eq!(script.remaining(), 3);
        assert_eq!(script.poll(), vec![InputEvent::key(Key::Enter)]);
        assert!(script.poll().is_empty());
        assert!(script.poll().is_empty());
        assert_eq!(script.poll(), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_story_pages_sorted_and_filtered() {
        let dir = std::env::temp_dir().join(format!("pomodoro-miner-pages-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        for name in ["story_02.png", "story_01.png", "cover.png", "story_03.txt"] {
            std::fs::write(dir.join(name), b"").unwrap();
        }
        let pages = story_pages(&dir);
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(pages, vec!["story_01".to_string(), "story_02".to_string()]);
    }

    #[test]
    fn test_missing_story_dir_is_empty() {
        assert!(story_pages(Path::new("/definitely/not/here")).is_empty());
    }

    #[test]
    fn test_headless_run_reaches_menu_and_quits() {
        let mut game = Game::with_seed(Settings::default(), AudioManager::default(), 8);
        let mut script = ScriptedEvents::new()
            .then(vec![InputEvent::click(10.0, 10.0)])
            .idle(40);
        let mut surface = DrawList::new();
        let frames = run_headless(
            &mut game,
            &mut script,
            &mut FixedClock::default(),
            &mut surface,
            1_000,
        );
        assert_eq!(frames, 42);
        assert!(!game.is_running());
        assert_eq!(game.scene_kind(), SceneKind::Menu);
        assert!(surface.has_text("POMODORO MINER"));
    }

    #[test]
    fn test_headless_run_respects_frame_limit() {
        let mut game = Game::with_seed(Settings::default(), AudioManager::default(), 8);
        let mut script = ScriptedEvents::new().idle(100);
        let mut surface = DrawList::new();
        let frames = run_headless(&mut game, &mut script, &mut FixedClock::default(), &mut surface, 10);
        assert_eq!(frames, 10);
        assert!(game.is_running());
    }
}
