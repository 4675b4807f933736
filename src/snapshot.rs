//! Read-only view of one tick, handed to whatever draws the game.

use crate::entities::{Explosion, Rect};
use crate::session::{Session, SessionState};
use crate::settings::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplosionView {
    pub center: (f32, f32),
    pub frame: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub state: SessionState,
    pub screen: (f32, f32),
    pub player: Rect,
    pub player_alive: bool,
    pub projectiles: Vec<Rect>,
    pub invaders: Vec<Rect>,
    pub explosions: Vec<ExplosionView>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub difficulty: Difficulty,
}

impl Snapshot {
    pub fn capture(session: &Session, explosions: &[Explosion]) -> Self {
        let stats = session.stats();
        let settings = session.settings();
        Snapshot {
            state: session.state(),
            screen: (settings.screen_width, settings.screen_height),
            player: session.player.rect(),
            player_alive: session.player.alive,
            projectiles: session.projectiles.iter().map(|p| p.rect()).collect(),
            invaders: session.fleet.invaders.iter().map(|i| i.rect()).collect(),
            explosions: explosions
                .iter()
                .map(|e| ExplosionView {
                    center: e.center,
                    frame: e.frame,
                })
                .collect(),
            score: stats.score,
            high_score: stats.high_score,
            level: stats.level,
            ships_left: stats.ships_left,
            difficulty: session.difficulty(),
        }
    }
}
