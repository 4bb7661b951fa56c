//! Procedurally generated clips - no external files needed!
//!
//! Mono float samples in [-1, 1] at `SAMPLE_RATE`.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::clips;

pub const SAMPLE_RATE: u32 = 44_100;

/// A decoded mono clip
#[derive(Debug, Clone)]
pub struct Clip {
    pub name: String,
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl Clip {
    fn from_fn(name: &str, duration: f32, mut f: impl FnMut(usize, f32) -> f32) -> Self {
        let n = (SAMPLE_RATE as f32 * duration) as usize;
        let samples = (0..n)
            .map(|i| f(i, i as f32 / SAMPLE_RATE as f32).clamp(-1.0, 1.0))
            .collect();
        Self {
            name: name.to_string(),
            sample_rate: SAMPLE_RATE,
            samples,
        }
    }

    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Every clip the game references
pub fn builtin_clips(seed: u64) -> Vec<Clip> {
    let mut rng = Pcg32::seed_from_u64(seed);
    vec![
        ui_click(),
        ambient_menu(&mut rng),
        shoot(),
        hit(&mut rng),
        collect(),
        mission_complete(),
    ]
}

/// Soft tonal click - short sine burst with fast decay
pub fn ui_click() -> Clip {
    Clip::from_fn(clips::UI_CLICK, 0.08, |_, t| {
        (TAU * 800.0 * t).sin() * (-t * 60.0).exp() * 0.4
    })
}

/// Spacey ambient drone - layered low sines with slow modulation, ~10s loop
pub fn ambient_menu(rng: &mut Pcg32) -> Clip {
    // A1, E2, A2, E3
    const VOICES: [f32; 4] = [55.0, 82.5, 110.0, 165.0];
    let duration = 10.0;
    let n = (SAMPLE_RATE as f32 * duration) as usize;
    let fade_len = (SAMPLE_RATE as f32 * 0.5) as usize;

    Clip::from_fn(clips::AMBIENT_MENU, duration, |i, t| {
        let mut s = 0.0f32;
        for (j, freq) in VOICES.iter().enumerate() {
            let m = 0.5 + 0.5 * (TAU * (0.05 + j as f32 * 0.03) * t).sin();
            s += (TAU * freq * t).sin() * m * 0.12;
        }
        if i > 0 {
            s += rng.random_range(-1.0f32..1.0) * 0.015;
        }
        // Fade both ends so the loop seam is silent
        if i < fade_len {
            s *= i as f32 / fade_len as f32;
        } else if i > n - fade_len {
            s *= (n - i) as f32 / fade_len as f32;
        }
        s
    })
}

/// Laser zap - falling square-ish tone
pub fn shoot() -> Clip {
    let mut phase = 0.0f32;
    Clip::from_fn(clips::SHOOT, 0.1, |_, t| {
        let freq = 1200.0 - 7000.0 * t;
        phase += freq / SAMPLE_RATE as f32;
        let square = if phase.fract() < 0.5 { 1.0 } else { -1.0 };
        square * (-t * 35.0).exp() * 0.15
    })
}

/// Rock impact - noise burst over a low thump
pub fn hit(rng: &mut Pcg32) -> Clip {
    Clip::from_fn(clips::HIT, 0.15, |_, t| {
        let noise = rng.random_range(-1.0f32..1.0) * (-t * 40.0).exp() * 0.3;
        let thump = (TAU * 70.0 * t).sin() * (-t * 25.0).exp() * 0.4;
        noise + thump
    })
}

/// Pickup blip - rising sine
pub fn collect() -> Clip {
    let mut phase = 0.0f32;
    Clip::from_fn(clips::COLLECT, 0.09, |_, t| {
        let freq = 900.0 + 6000.0 * t;
        phase += freq / SAMPLE_RATE as f32;
        (TAU * phase).sin() * (-t * 30.0).exp() * 0.3
    })
}

/// Short major arpeggio
pub fn mission_complete() -> Clip {
    const NOTES: [f32; 4] = [523.25, 659.25, 783.99, 1046.5];
    let note_len = 0.12;
    Clip::from_fn(clips::MISSION_COMPLETE, note_len * NOTES.len() as f32 + 0.3, |_, t| {
        let idx = ((t / note_len) as usize).min(NOTES.len() - 1);
        let local = t - idx as f32 * note_len;
        (TAU * NOTES[idx] * t).sin() * (-local * 6.0).exp() * 0.3
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_click_shape() {
        let clip = ui_click();
        assert_eq!(clip.samples.len(), (SAMPLE_RATE as f32 * 0.08) as usize);
        assert!(clip.samples.iter().all(|s| s.abs() <= 0.4 + 1e-6));
    }

    #[test]
    fn test_ambient_loop_fades_at_both_ends() {
        let mut rng = Pcg32::seed_from_u64(3);
        let clip = ambient_menu(&mut rng);
        assert!((clip.duration() - 10.0).abs() < 0.01);
        assert_eq!(clip.samples[0], 0.0);
        let tail = clip.samples[clip.samples.len() - 1];
        assert!(tail.abs() < 0.01);
    }

    #[test]
    fn test_builtin_clips_have_unique_names() {
        let clips = builtin_clips(42);
        let mut names: Vec<_> = clips.iter().map(|c| c.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), clips.len());
        assert!(clips.iter().all(|c| !c.samples.is_empty()));
    }
}
