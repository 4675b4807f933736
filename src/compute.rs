//! The simulation loop.
//!
//! `Game::tick` advances everything by exactly one fixed step, in one fixed
//! order, and never looks at the wall clock. All randomness comes through the
//! injected RNG so callers control determinism (tests use a seeded one).

use rand::Rng;

use crate::audio::AudioSink;
use crate::collision::{check_fleet_reached_floor, check_player_hit, resolve_projectile_hits};
use crate::entities::Explosion;
use crate::events::{AudioCue, Intent};
use crate::persistence::HighScoreStore;
use crate::session::{HitOutcome, Session, SessionState};
use crate::settings::Settings;
use crate::snapshot::Snapshot;

/// Whether the caller should keep ticking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game<R: Rng> {
    session: Session,
    explosions: Vec<Explosion>,
    rng: R,
    audio: Box<dyn AudioSink>,
    store: Box<dyn HighScoreStore>,
    /// Last value on disk or already offered to the store.
    saved_high_score: u32,
    frame: u64,
}

impl<R: Rng> Game<R> {
    pub fn new(
        settings: Settings,
        rng: R,
        mut audio: Box<dyn AudioSink>,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        let high_score = store.read();
        log::info!("High score on record: {}", high_score);
        audio.play(AudioCue::BackgroundLoop);
        Game {
            session: Session::new(settings, high_score),
            explosions: Vec::new(),
            rng,
            audio,
            store,
            saved_high_score: high_score,
            frame: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Direct access for front-ends and tests that stage a situation.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// Ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, &self.explosions)
    }

    // ── Per-tick sequence ────────────────────────────────────────────────────

    /// Run one tick with the intents gathered since the previous one.
    pub fn tick<I>(&mut self, intents: I) -> Flow
    where
        I: IntoIterator<Item = Intent>,
    {
        for intent in intents {
            if self.apply(intent) == Flow::Quit {
                self.shutdown();
                return Flow::Quit;
            }
        }

        match self.session.state() {
            SessionState::Active => self.step(),
            SessionState::Destroyed { .. } => {
                if self.session.advance_pause() {
                    log::debug!("Respawned at frame {}", self.frame);
                }
            }
            SessionState::Inactive | SessionState::GameOver => {}
        }

        self.advance_explosions();
        self.frame += 1;
        Flow::Continue
    }

    fn apply(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::MoveLeft(held) => self.session.set_moving_left(held),
            Intent::MoveRight(held) => self.session.set_moving_right(held),
            Intent::Fire => {
                self.session.fire();
            }
            Intent::StartGame(difficulty) => {
                if self.session.start(difficulty, &mut self.rng) {
                    self.explosions.clear();
                } else {
                    log::debug!("Start ignored, a session is already running");
                }
            }
            Intent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Motion, collisions, then session bookkeeping.
    fn step(&mut self) {
        // ── 1. Move everything ───────────────────────────────────────────────
        self.session.advance_player();
        self.session.advance_projectiles();
        self.session.advance_fleet();

        // ── 2. Collisions ────────────────────────────────────────────────────
        let points = self.session.params().alien_points;
        let floor_y = self.session.settings().screen_height;
        let session = &mut self.session;
        let hits = resolve_projectile_hits(
            &mut session.projectiles,
            &mut session.fleet.invaders,
            points,
        );
        let rammed = check_player_hit(&session.player, &session.fleet.invaders);
        let landed = check_fleet_reached_floor(&session.fleet.invaders, floor_y);

        // ── 3. Scoring, level-up, ship loss (in that order) ─────────────────
        for hit in &hits {
            self.session.on_score_increase(hit.points);
            self.explosions.push(Explosion::new(hit.position));
            self.audio.play(AudioCue::Explosion);
        }

        if self.session.fleet.is_empty() {
            self.session.on_fleet_cleared(&mut self.rng);
        } else if rammed || landed {
            log::debug!("Ship hit (rammed: {}, landed: {})", rammed, landed);
            if self.session.on_player_hit(&mut self.rng) == HitOutcome::GameOver {
                self.persist_high_score();
            }
        }
    }

    fn advance_explosions(&mut self) {
        let settings = self.session.settings();
        let dt = settings.tick_ms();
        let frame_ms = settings.explosion_frame_ms;
        let frames = settings.explosion_frames;
        self.explosions
            .retain_mut(|explosion| explosion.advance(dt, frame_ms, frames));
    }

    // ── Persistence boundary ─────────────────────────────────────────────────

    /// Best-effort save before the process goes away. Safe to call again:
    /// a value is offered to the store at most once.
    pub fn shutdown(&mut self) {
        self.persist_high_score();
    }

    fn persist_high_score(&mut self) {
        let high_score = self.session.stats().high_score;
        if high_score <= self.saved_high_score {
            return;
        }
        self.saved_high_score = high_score;
        if let Err(err) = self.store.write(high_score) {
            log::warn!("Could not save high score {}: {}", high_score, err);
        }
    }
}
