//! Messages crossing the core boundary: player intents in, audio cues out.

use crate::settings::Difficulty;

/// Discrete input fed to the simulation, one queue per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Start or stop moving left.
    MoveLeft(bool),
    /// Start or stop moving right.
    MoveRight(bool),
    Fire,
    Quit,
    StartGame(Difficulty),
}

/// Fire-and-forget sound triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Explosion,
    BackgroundLoop,
}
