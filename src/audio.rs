//! Audio collaborator seam.
//!
//! The core only emits cues; an implementation decides what to play.

use crate::events::AudioCue;

pub trait AudioSink {
    /// Trigger a cue. Must return quickly and never wait for playback.
    fn play(&mut self, cue: AudioCue);
}

/// Sink for front-ends without a sound device: writes cues to the log.
#[derive(Debug, Default)]
pub struct LogAudio;

impl LogAudio {
    pub fn new() -> Self {
        LogAudio
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::BackgroundLoop => log::info!("Background music started"),
            AudioCue::Explosion => log::debug!("Explosion sound"),
        }
    }
}
