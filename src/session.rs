//! One playthrough: the state machine that owns the craft, the projectiles
//! and the fleet, and the counters they drive.

use rand::Rng;

use crate::entities::{PlayerCraft, Projectile};
use crate::fleet::Fleet;
use crate::settings::{Difficulty, DifficultyProfile, Settings};
use crate::stats::SessionStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// On the menu, waiting for a start.
    Inactive,
    Active,
    /// A ship was just lost; play resumes when the countdown runs out.
    Destroyed { ticks_left: u32 },
    GameOver,
}

/// What losing a ship led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    Respawning,
    GameOver,
}

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    stats: SessionStats,
    state: SessionState,
    difficulty: Difficulty,
    params: DifficultyProfile,
    pub player: PlayerCraft,
    pub projectiles: Vec<Projectile>,
    pub fleet: Fleet,
    /// The last layout produced no invaders.
    empty_layout: bool,
}

impl Session {
    pub fn new(settings: Settings, high_score: u32) -> Self {
        let difficulty = Difficulty::Medium;
        let player = PlayerCraft::new(
            settings.ship_width,
            settings.ship_height,
            settings.screen_width,
            settings.screen_height,
        );
        Session {
            stats: SessionStats::new(settings.ship_limit, high_score),
            state: SessionState::Inactive,
            difficulty,
            params: difficulty.profile(),
            player,
            projectiles: Vec::new(),
            fleet: Fleet::empty(settings.fleet_drop_speed),
            empty_layout: false,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Speeds and points in force for the current level.
    pub fn params(&self) -> &DifficultyProfile {
        &self.params
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    /// Begin a fresh playthrough. Ignored (returns false) while one is
    /// already running.
    pub fn start(&mut self, difficulty: Difficulty, rng: &mut impl Rng) -> bool {
        if !matches!(self.state, SessionState::Inactive | SessionState::GameOver) {
            return false;
        }
        self.stats.reset(self.settings.ship_limit);
        self.difficulty = difficulty;
        self.params = difficulty.profile();
        self.projectiles.clear();
        self.fleet = self.new_fleet(rng);
        self.player.center(self.settings.screen_width, self.settings.screen_height);
        self.player.alive = true;
        self.state = SessionState::Active;
        log::info!(
            "Session started on {} with {} invaders",
            difficulty.as_str(),
            self.fleet.len()
        );
        true
    }

    /// The last invader is gone: next level, faster and worth more. A fleet
    /// that was laid out empty is only laid out again; nothing was cleared.
    pub fn on_fleet_cleared(&mut self, rng: &mut impl Rng) {
        let cleared = !self.empty_layout;
        self.projectiles.clear();
        self.fleet = self.new_fleet(rng);
        if !cleared {
            return;
        }
        self.stats.level_up();
        self.params = self
            .params
            .scaled(self.settings.speedup_scale, self.settings.score_scale);
        log::info!(
            "Level {} reached, invaders now worth {}",
            self.stats.level,
            self.params.alien_points
        );
    }

    /// The craft was rammed or the fleet landed.
    pub fn on_player_hit(&mut self, rng: &mut impl Rng) -> HitOutcome {
        let ships_left = self.stats.lose_ship();
        self.player.alive = false;
        if ships_left == 0 {
            self.state = SessionState::GameOver;
            log::info!(
                "Game over with {} points (best {})",
                self.stats.score,
                self.stats.high_score
            );
            return HitOutcome::GameOver;
        }

        self.projectiles.clear();
        self.fleet = self.new_fleet(rng);
        self.player.center(self.settings.screen_width, self.settings.screen_height);

        let pause = self.settings.respawn_pause_ticks();
        if pause == 0 {
            self.resume();
        } else {
            self.state = SessionState::Destroyed { ticks_left: pause };
        }
        log::debug!("Ship lost, {} left", ships_left);
        HitOutcome::Respawning
    }

    pub fn on_score_increase(&mut self, points: u32) {
        self.stats.add_score(points);
    }

    /// Count down the post-hit pause. Returns true on the tick play resumes.
    pub fn advance_pause(&mut self) -> bool {
        let SessionState::Destroyed { ticks_left } = self.state else {
            return false;
        };
        if ticks_left <= 1 {
            self.resume();
            true
        } else {
            self.state = SessionState::Destroyed {
                ticks_left: ticks_left - 1,
            };
            false
        }
    }

    fn resume(&mut self) {
        self.player.alive = true;
        self.state = SessionState::Active;
    }

    fn new_fleet(&mut self, rng: &mut impl Rng) -> Fleet {
        let s = &self.settings;
        let fleet = Fleet::layout(
            s.screen_width,
            s.screen_height,
            (s.invader_width, s.invader_height),
            s.fleet_drop_speed,
            rng,
        );
        let was_empty = std::mem::replace(&mut self.empty_layout, fleet.is_empty());
        if fleet.is_empty() && !was_empty {
            log::warn!(
                "Screen {}x{} leaves no room for invaders",
                s.screen_width,
                s.screen_height
            );
        }
        fleet
    }

    // ── Player commands ──────────────────────────────────────────────────────

    /// Launch a projectile unless the live cap is reached.
    pub fn fire(&mut self) -> bool {
        if !self.is_active() || self.projectiles.len() >= self.settings.bullets_allowed {
            return false;
        }
        let projectile = Projectile::fired_from(
            &self.player,
            self.settings.bullet_width,
            self.settings.bullet_height,
            self.params.bullet_speed,
        );
        self.projectiles.push(projectile);
        true
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        self.player.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.player.moving_right = moving;
    }

    // ── Per-tick motion ──────────────────────────────────────────────────────

    pub fn advance_player(&mut self) {
        self.player
            .update(self.params.ship_speed, self.settings.screen_width);
    }

    /// Move projectiles up and drop the ones that left the screen.
    pub fn advance_projectiles(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles.retain(|p| !p.is_off_screen());
    }

    /// Returns whether the fleet turned around this tick.
    pub fn advance_fleet(&mut self) -> bool {
        self.fleet
            .advance(self.params.alien_speed, self.settings.screen_width)
    }
}
