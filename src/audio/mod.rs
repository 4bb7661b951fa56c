//! Audio system
//!
//! `AudioManager` owns one-shot and ambient playback on top of a pluggable
//! `AudioBackend` (the mixer lives with the host). Clips that fail to load are
//! skipped; playing an unknown clip does nothing.

pub mod synth;

use std::collections::HashMap;

pub use synth::Clip;

/// Clip names used by the game
pub mod clips {
    pub const UI_CLICK: &str = "ui_click";
    pub const AMBIENT_MENU: &str = "ambient_menu";
    pub const SHOOT: &str = "shoot";
    pub const HIT: &str = "hit";
    pub const COLLECT: &str = "collect";
    pub const MISSION_COMPLETE: &str = "mission_complete";
}

/// Handle to a looping voice started by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopHandle(pub u32);

/// Host mixer contract
pub trait AudioBackend {
    /// Upload a clip. Returns false if the backend could not accept it.
    fn load_clip(&mut self, clip: &Clip) -> bool;
    /// Fire-and-forget playback
    fn play(&mut self, name: &str, volume: f32);
    /// Start a looping voice; None if no voice was available
    fn play_looping(&mut self, name: &str, volume: f32) -> Option<LoopHandle>;
    fn set_loop_volume(&mut self, handle: LoopHandle, volume: f32);
    fn stop_loop(&mut self, handle: LoopHandle);
}

/// Backend that accepts everything and produces no sound
#[derive(Debug, Default)]
pub struct NullBackend {
    next_handle: u32,
}

impl AudioBackend for NullBackend {
    fn load_clip(&mut self, _clip: &Clip) -> bool {
        true
    }

    fn play(&mut self, _name: &str, _volume: f32) {}

    fn play_looping(&mut self, _name: &str, _volume: f32) -> Option<LoopHandle> {
        self.next_handle += 1;
        Some(LoopHandle(self.next_handle))
    }

    fn set_loop_volume(&mut self, _handle: LoopHandle, _volume: f32) {}

    fn stop_loop(&mut self, _handle: LoopHandle) {}
}

#[derive(Debug)]
struct AmbientTrack {
    name: String,
    handle: LoopHandle,
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    /// Loaded clips and their current one-shot volume
    clip_volumes: HashMap<String, f32>,
    ambient: Option<AmbientTrack>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(NullBackend::default()))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            clip_volumes: HashMap::new(),
            ambient: None,
        }
    }

    /// Manager preloaded with the procedurally generated clip set
    pub fn with_builtin_clips(backend: Box<dyn AudioBackend>, seed: u64) -> Self {
        let mut audio = Self::new(backend);
        for clip in synth::builtin_clips(seed) {
            audio.register(&clip);
        }
        audio
    }

    /// Hand a clip to the backend; failures are logged and skipped
    pub fn register(&mut self, clip: &Clip) {
        if clip.samples.is_empty() {
            log::warn!("Skipping empty clip '{}'", clip.name);
            return;
        }
        if self.backend.load_clip(clip) {
            self.clip_volumes.insert(clip.name.clone(), 1.0);
        } else {
            log::warn!("Failed to load clip '{}' - skipping", clip.name);
        }
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.clip_volumes.contains_key(name)
    }

    /// Play a one-shot clip, optionally setting its volume first
    pub fn play(&mut self, name: &str, volume: Option<f32>) {
        let Some(clip_volume) = self.clip_volumes.get_mut(name) else {
            return;
        };
        if let Some(vol) = volume {
            *clip_volume = vol.clamp(0.0, 1.0);
        }
        let vol = *clip_volume;
        self.backend.play(name, vol);
    }

    /// Loop an ambient clip. Re-requesting the current clip only updates its volume.
    pub fn play_ambient(&mut self, name: &str, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if let Some(track) = &self.ambient {
            if track.name == name {
                self.backend.set_loop_volume(track.handle, volume);
                return;
            }
        }
        self.stop_ambient();
        if !self.is_loaded(name) {
            return;
        }
        match self.backend.play_looping(name, volume) {
            Some(handle) => {
                log::debug!("Ambient '{}' started", name);
                self.ambient = Some(AmbientTrack {
                    name: name.to_string(),
                    handle,
                });
            }
            None => log::warn!("No voice available for ambient '{}'", name),
        }
    }

    pub fn stop_ambient(&mut self) {
        if let Some(track) = self.ambient.take() {
            self.backend.stop_loop(track.handle);
            log::debug!("Ambient '{}' stopped", track.name);
        }
    }

    /// Name of the ambient clip currently looping
    pub fn current_ambient(&self) -> Option<&str> {
        self.ambient.as_ref().map(|t| t.name.as_str())
    }

    /// Update the volume of every clip except the looping ambient one
    pub fn set_sfx_volume(&mut self, vol: f32) {
        let vol = vol.clamp(0.0, 1.0);
        let ambient = self.ambient.as_ref().map(|t| t.name.as_str());
        for (name, clip_volume) in self.clip_volumes.iter_mut() {
            if Some(name.as_str()) != ambient {
                *clip_volume = vol;
            }
        }
    }

    pub fn set_ambient_volume(&mut self, vol: f32) {
        if let Some(track) = &self.ambient {
            self.backend.set_loop_volume(track.handle, vol.clamp(0.0, 1.0));
        }
    }
}
