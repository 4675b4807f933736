//! Game settings and difficulty presets.
//!
//! Read once at launch from an optional JSON file; any field left out keeps
//! its default.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "alien_invasion.json";

/// Difficulty selected on the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Starting speeds and invader value for this difficulty.
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                ship_speed: 2.0,
                bullet_speed: 4.0,
                alien_speed: 1.0,
                alien_points: 50,
            },
            Difficulty::Medium => DifficultyProfile {
                ship_speed: 3.0,
                bullet_speed: 5.0,
                alien_speed: 1.5,
                alien_points: 100,
            },
            Difficulty::Hard => DifficultyProfile {
                ship_speed: 4.0,
                bullet_speed: 6.0,
                alien_speed: 2.0,
                alien_points: 150,
            },
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Per-session speeds and scoring. Starts from a difficulty preset and grows
/// on every level-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
}

impl DifficultyProfile {
    /// Level-up growth: speeds scale by `speedup`, points by `score_scale`
    /// (rounded down).
    pub fn scaled(&self, speedup: f32, score_scale: f32) -> Self {
        Self {
            ship_speed: self.ship_speed * speedup,
            bullet_speed: self.bullet_speed * speedup,
            alien_speed: self.alien_speed * speedup,
            alien_points: (self.alien_points as f32 * score_scale).floor() as u32,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Entity sizes ===
    pub ship_width: f32,
    pub ship_height: f32,
    pub invader_width: f32,
    pub invader_height: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,

    // === Rules ===
    /// Live projectile cap.
    pub bullets_allowed: usize,
    /// Ships per session.
    pub ship_limit: u32,
    /// Pixels the whole fleet drops on reaching an edge.
    pub fleet_drop_speed: f32,
    /// Speed multiplier applied on every level-up.
    pub speedup_scale: f32,
    /// Point multiplier applied on every level-up.
    pub score_scale: f32,

    // === Timing ===
    pub tick_rate_hz: u32,
    /// Pause after losing a ship.
    pub respawn_pause_ms: u64,
    pub explosion_frames: u32,
    pub explosion_frame_ms: f32,

    // === Front-end ===
    pub high_score_path: PathBuf,
    /// Difficulty played from the menu's quick-start key.
    pub default_difficulty: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,

            ship_width: 60.0,
            ship_height: 48.0,
            invader_width: 60.0,
            invader_height: 58.0,
            bullet_width: 3.0,
            bullet_height: 15.0,

            bullets_allowed: 5,
            ship_limit: 3,
            fleet_drop_speed: 10.0,
            speedup_scale: 1.1,
            score_scale: 1.5,

            tick_rate_hz: 60,
            respawn_pause_ms: 500,
            explosion_frames: 5,
            explosion_frame_ms: 20.0,

            high_score_path: PathBuf::from("high_score.txt"),
            default_difficulty: "medium".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Fail fast on a misconfigured quick-start difficulty.
    pub fn default_difficulty(&self) -> Result<Difficulty, GameError> {
        self.default_difficulty.parse()
    }

    /// Length of one simulation tick in milliseconds.
    pub fn tick_ms(&self) -> f32 {
        1000.0 / self.tick_rate_hz.max(1) as f32
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.tick_rate_hz.max(1) as u64)
    }

    /// Number of ticks the session stays paused after a ship is lost.
    pub fn respawn_pause_ticks(&self) -> u32 {
        (self.respawn_pause_ms * self.tick_rate_hz as u64 / 1000) as u32
    }
}
