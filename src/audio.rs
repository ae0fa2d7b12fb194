//! Process-wide background audio session.
//!
//! A single shared playback resource: only one entity's entry audio plays at
//! a time, and starting a new track replaces the previous one. An active
//! external event (video playback in a lightbox) holds background audio
//! paused until it clears. Threaded through `AppState`, never a module-level
//! singleton.

use std::sync::Mutex;

use serde::Serialize;

#[derive(Debug, Default)]
struct AudioState {
    current_track: Option<String>,
    volume: f32,
    looped: bool,
    external_event_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioStatus {
    pub track: Option<String>,
    pub volume: f32,
    pub looped: bool,
    /// True when a track is loaded and no external event holds it paused.
    pub playing: bool,
    pub external_event_active: bool,
}

pub struct AudioSession {
    state: Mutex<AudioState>,
}

impl Default for AudioSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(AudioState {
                volume: 0.5,
                looped: true,
                ..AudioState::default()
            }),
        }
    }

    /// Start (or retune) a track. Requesting the already-current track only
    /// updates volume and loop; a different track replaces it.
    pub fn play(&self, track: &str, volume: f32, looped: bool) -> AudioStatus {
        let mut state = self.state.lock().expect("audio lock poisoned");
        if state.current_track.as_deref() != Some(track) {
            state.current_track = Some(track.to_string());
        }
        state.volume = volume.clamp(0.0, 1.0);
        state.looped = looped;
        Self::status_of(&state)
    }

    /// Stop and unload the current track.
    pub fn stop(&self) -> AudioStatus {
        let mut state = self.state.lock().expect("audio lock poisoned");
        state.current_track = None;
        Self::status_of(&state)
    }

    /// Mark an external event (video playback) active or cleared. While
    /// active, background audio reports not-playing; clearing it resumes the
    /// current track if one is loaded.
    pub fn set_external_event_active(&self, active: bool) -> AudioStatus {
        let mut state = self.state.lock().expect("audio lock poisoned");
        state.external_event_active = active;
        Self::status_of(&state)
    }

    pub fn status(&self) -> AudioStatus {
        let state = self.state.lock().expect("audio lock poisoned");
        Self::status_of(&state)
    }

    fn status_of(state: &AudioState) -> AudioStatus {
        AudioStatus {
            track: state.current_track.clone(),
            volume: state.volume,
            looped: state.looped,
            playing: state.current_track.is_some() && !state.external_event_active,
            external_event_active: state.external_event_active,
        }
    }
}
