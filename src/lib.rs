//! Alien Invasion: fixed-tick simulation core for a fleet-shooter arcade game.
//!
//! Everything here is free of terminal I/O. The binary feeds `Intent`s into a
//! `Game` once per frame and draws the `Snapshot` it hands back.

pub mod audio;
pub mod collision;
pub mod compute;
pub mod entities;
pub mod error;
pub mod events;
pub mod fleet;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod stats;

pub use compute::{Flow, Game};
pub use error::GameError;
pub use events::{AudioCue, Intent};
pub use session::{Session, SessionState};
pub use settings::{Difficulty, DifficultyProfile, Settings};
pub use snapshot::Snapshot;
