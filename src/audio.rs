//! Collision sound playback
//!
//! Headless voice pool: the game has one sound, the ball-on-ball click, and
//! may overlap a few copies of it. Each play restarts the next voice in
//! round-robin order, so any number of triggers per tick is fine and the
//! oldest click is cut off first. A platform layer polls the voices to
//! drive its actual audio clips.

use crate::sim::{EventSink, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Two balls knocked together
    BallCollision,
}

/// One playback slot for a clip
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Voice {
    /// Times this voice has been (re)started
    pub plays: u64,
    /// Volume it was last started at
    pub volume: f32,
    /// Effect currently loaded
    pub effect: Option<SoundEffect>,
}

/// Audio manager for the simulation
#[derive(Debug, Clone)]
pub struct AudioManager {
    voices: Vec<Voice>,
    next_voice: usize,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(crate::consts::MAX_COLLISION_VOICES)
    }
}

impl AudioManager {
    /// A manager that can overlap up to `max_voices` clips (at least one)
    pub fn new(max_voices: usize) -> Self {
        let max_voices = max_voices.max(1);
        Self {
            voices: vec![Voice::default(); max_voices],
            next_voice: 0,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect, returning the voice it was started on
    pub fn play(&mut self, effect: SoundEffect) -> Option<usize> {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return None;
        }

        let index = self.next_voice;
        let voice = &mut self.voices[index];
        voice.plays += 1;
        voice.volume = vol;
        voice.effect = Some(effect);
        self.next_voice = (index + 1) % self.voices.len();
        Some(index)
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Total clip starts across all voices
    pub fn total_plays(&self) -> u64 {
        self.voices.iter().map(|v| v.plays).sum()
    }
}

impl EventSink for AudioManager {
    fn on_event(&mut self, event: GameEvent) {
        if let GameEvent::CollisionSound { .. } = event {
            self.play(SoundEffect::BallCollision);
        }
    }
}
