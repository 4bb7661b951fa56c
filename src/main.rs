//! Pomodoro Miner - headless demo
//!
//! Usage: `pomodoro-miner [settings.json] [--realtime]`
//!
//! Plays one scripted session: skip the intro, add a task, run its mission to
//! completion and sit through the break. Set `RUST_LOG=info` to follow along
//! and `POMODORO_MINER_SEED` for a reproducible run.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::{Path, PathBuf};

    use pomodoro_miner::audio::{AudioManager, NullBackend};
    use pomodoro_miner::consts::FPS;
    use pomodoro_miner::input::{InputEvent, Key};
    use pomodoro_miner::platform::{Clock, FixedClock, FrameClock, ScriptedEvents, run_headless, story_pages};
    use pomodoro_miner::renderer::DrawList;
    use pomodoro_miner::{Game, Settings};

    const SEED_VAR: &str = "POMODORO_MINER_SEED";
    const STORY_DIR: &str = "assets/images";
    const TASK_NAME: &str = "Write the quarterly report";

    /// Where the demo clicks; matches the menu layout
    const INPUT_BOX: (f32, f32) = (300.0, 108.0);
    const FIRST_START_BUTTON: (f32, f32) = (720.0, 170.0);

    fn seed() -> u64 {
        match std::env::var(SEED_VAR) {
            Ok(raw) => match raw.trim().parse() {
                Ok(seed) => seed,
                Err(e) => {
                    log::warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, e);
                    rand::random()
                }
            },
            Err(_) => rand::random(),
        }
    }

    fn script(settings: &Settings) -> ScriptedEvents {
        let fps = FPS as usize;
        let mut typing = vec![InputEvent::click(INPUT_BOX.0, INPUT_BOX.1)];
        typing.extend(TASK_NAME.chars().map(InputEvent::typed));
        typing.push(InputEvent::key(Key::Enter));

        // Mission, completion delay, fades, then the whole break
        let session = settings.pomodoro_seconds() + settings.break_seconds() + 5.0;

        ScriptedEvents::new()
            .then(vec![InputEvent::key(Key::Enter)])
            .idle(fps)
            .then(typing)
            .then(vec![InputEvent::click(FIRST_START_BUTTON.0, FIRST_START_BUTTON.1)])
            // Fade into the story page, if there is one
            .idle(fps)
            .then(vec![InputEvent::key(Key::Space)])
            .idle(session as usize * fps)
    }

    pub fn run() {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let realtime = args.iter().any(|a| a == "--realtime");
        let config: Option<PathBuf> = args.iter().find(|a| !a.starts_with("--")).map(PathBuf::from);

        let settings = Settings::load_or_default(config.as_deref());
        let seed = seed();
        log::info!(
            "Pomodoro Miner demo: {} min mission, {} min break, seed {}",
            settings.pomodoro_minutes,
            settings.break_minutes,
            seed
        );

        let audio = AudioManager::with_builtin_clips(Box::new(NullBackend::default()), seed);
        let mut script = script(&settings);
        let mut game = Game::with_seed(settings, audio, seed);
        game.ctx.story_pages = story_pages(Path::new(STORY_DIR));

        let mut clock: Box<dyn Clock> = if realtime {
            Box::new(FrameClock::default())
        } else {
            Box::new(FixedClock::default())
        };
        let mut surface = DrawList::new();
        let frames = run_headless(&mut game, &mut script, clock.as_mut(), &mut surface, u64::MAX);

        let ctx = &game.ctx;
        log::info!(
            "Demo finished after {} frames: {} pomodoros, {} fragments banked",
            frames,
            ctx.total_pomodoros,
            ctx.talents.fragments()
        );
        for task in ctx.tasks.iter() {
            println!("{:<40} {} pomodoro(s)", task.name, task.pomodoros_completed);
        }
        println!("Fragments: {}", ctx.talents.fragments());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the embedding host on the web
}
