use alien_invasion::entities::{Invader, Projectile};
use alien_invasion::session::*;
use alien_invasion::settings::{Difficulty, Settings};
use alien_invasion::stats::SessionStats;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn started(difficulty: Difficulty) -> (Session, StdRng) {
    let mut rng = seeded_rng();
    let mut s = Session::new(Settings::default(), 0);
    assert!(s.start(difficulty, &mut rng));
    (s, rng)
}

// ── new / start ───────────────────────────────────────────────────────────────

#[test]
fn new_session_is_inactive_and_empty() {
    let s = Session::new(Settings::default(), 250);
    assert_eq!(s.state(), SessionState::Inactive);
    assert!(s.fleet.is_empty());
    assert!(s.projectiles.is_empty());
    assert_eq!(s.stats().high_score, 250);
}

#[test]
fn start_medium_on_default_screen() {
    let (s, _) = started(Difficulty::Medium);
    assert_eq!(s.state(), SessionState::Active);
    assert_eq!(s.stats().ships_left, 3);
    assert_eq!(s.stats().score, 0);
    assert_eq!(s.stats().level, 1);
    assert_eq!(s.params().alien_speed, 1.5);
    assert_eq!(s.params().alien_points, 100);
    assert!(!s.fleet.is_empty());
    assert_eq!(s.player.x, 570.0);
    assert!(s.player.alive);
}

#[test]
fn start_applies_difficulty_profile() {
    let (s, _) = started(Difficulty::Hard);
    assert_eq!(s.difficulty(), Difficulty::Hard);
    assert_eq!(*s.params(), Difficulty::Hard.profile());
}

#[test]
fn start_ignored_while_running() {
    let (mut s, mut rng) = started(Difficulty::Easy);
    s.on_score_increase(50);
    assert!(!s.start(Difficulty::Hard, &mut rng));
    assert_eq!(s.difficulty(), Difficulty::Easy);
    assert_eq!(s.stats().score, 50);
}

#[test]
fn restart_after_game_over_resets_counters_but_keeps_high_score() {
    let (mut s, mut rng) = started(Difficulty::Medium);
    s.on_score_increase(700);
    for _ in 0..3 {
        s.on_player_hit(&mut rng);
    }
    assert_eq!(s.state(), SessionState::GameOver);
    assert!(s.start(Difficulty::Medium, &mut rng));
    assert_eq!(s.stats().ships_left, 3);
    assert_eq!(s.stats().score, 0);
    assert_eq!(s.stats().level, 1);
    assert_eq!(s.stats().high_score, 700);
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_spawns_projectile_with_bullet_speed() {
    let (mut s, _) = started(Difficulty::Medium);
    assert!(s.fire());
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.projectiles[0].speed, 5.0);
}

#[test]
fn fire_blocked_at_cap() {
    let (mut s, _) = started(Difficulty::Medium);
    for _ in 0..5 {
        assert!(s.fire());
    }
    assert!(!s.fire());
    assert_eq!(s.projectiles.len(), 5);
}

#[test]
fn fire_ignored_when_not_active() {
    let mut s = Session::new(Settings::default(), 0);
    assert!(!s.fire());
    assert!(s.projectiles.is_empty());
}

// ── motion ────────────────────────────────────────────────────────────────────

#[test]
fn advance_projectiles_culls_off_screen() {
    let (mut s, _) = started(Difficulty::Medium);
    s.projectiles.push(Projectile { x: 10, y: -10.0, width: 3.0, height: 15.0, speed: 5.0 });
    s.projectiles.push(Projectile { x: 20, y: 300.0, width: 3.0, height: 15.0, speed: 5.0 });
    s.advance_projectiles();
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.projectiles[0].y, 295.0);
}

#[test]
fn advance_player_uses_ship_speed() {
    let (mut s, _) = started(Difficulty::Medium);
    s.set_moving_left(true);
    s.advance_player();
    assert_eq!(s.player.x, 567.0);
    s.set_moving_left(false);
    s.advance_player();
    assert_eq!(s.player.x, 567.0);
}

#[test]
fn advance_fleet_uses_alien_speed() {
    let (mut s, _) = started(Difficulty::Medium);
    s.fleet.invaders = vec![Invader::new(100.0, 100.0, 60.0, 58.0)];
    s.advance_fleet();
    assert_eq!(s.fleet.invaders[0].x, 101.5);
}

// ── on_fleet_cleared ──────────────────────────────────────────────────────────

#[test]
fn fleet_cleared_levels_up_and_speeds_up() {
    let (mut s, mut rng) = started(Difficulty::Medium);
    s.fleet.invaders.clear();
    s.fire();
    s.on_fleet_cleared(&mut rng);

    assert_eq!(s.state(), SessionState::Active);
    assert_eq!(s.stats().level, 2);
    assert_eq!(s.stats().ships_left, 3);
    assert!((s.params().alien_speed - 1.5 * 1.1).abs() < 1e-5);
    assert!((s.params().bullet_speed - 5.0 * 1.1).abs() < 1e-5);
    assert!((s.params().ship_speed - 3.0 * 1.1).abs() < 1e-5);
    assert_eq!(s.params().alien_points, 150);
    assert!(!s.fleet.is_empty());
    assert!(s.projectiles.is_empty());
}

#[test]
fn points_round_down_on_level_up() {
    let (mut s, mut rng) = started(Difficulty::Easy); // 50
    s.on_fleet_cleared(&mut rng); // 75
    s.on_fleet_cleared(&mut rng); // 112.5 -> 112
    assert_eq!(s.params().alien_points, 112);
}

#[test]
fn fleet_cleared_on_degenerate_screen_does_not_panic() {
    let settings = Settings {
        screen_width: 100.0,
        screen_height: 100.0,
        ..Settings::default()
    };
    let mut rng = seeded_rng();
    let mut s = Session::new(settings, 0);
    s.start(Difficulty::Medium, &mut rng);
    assert!(s.fleet.is_empty());
    s.on_fleet_cleared(&mut rng);
    assert!(s.fleet.is_empty());
    assert_eq!(s.stats().level, 2);
}

// ── on_player_hit ─────────────────────────────────────────────────────────────

#[test]
fn player_hit_with_ships_left_pauses_then_respawns() {
    let (mut s, mut rng) = started(Difficulty::Medium);
    s.fire();
    s.player.x = 10.0;
    let outcome = s.on_player_hit(&mut rng);

    assert_eq!(outcome, HitOutcome::Respawning);
    assert_eq!(s.stats().ships_left, 2);
    assert_eq!(s.state(), SessionState::Destroyed { ticks_left: 30 });
    assert!(!s.player.alive);
    assert_eq!(s.player.x, 570.0);
    assert!(s.projectiles.is_empty());
    assert!(!s.fleet.is_empty());

    for _ in 0..29 {
        assert!(!s.advance_pause());
    }
    assert!(s.advance_pause());
    assert_eq!(s.state(), SessionState::Active);
    assert!(s.player.alive);
}

#[test]
fn player_hit_on_last_ship_is_game_over_without_respawn() {
    let (mut s, mut rng) = started(Difficulty::Medium);
    s.on_player_hit(&mut rng);
    s.on_player_hit(&mut rng);
    assert_eq!(s.stats().ships_left, 1);
    s.on_score_increase(300);
    let fleet_before: Vec<f32> = s.fleet.invaders.iter().map(|i| i.x).collect();

    let outcome = s.on_player_hit(&mut rng);
    assert_eq!(outcome, HitOutcome::GameOver);
    assert_eq!(s.stats().ships_left, 0);
    assert_eq!(s.state(), SessionState::GameOver);
    assert_eq!(s.stats().high_score, 300);
    let fleet_after: Vec<f32> = s.fleet.invaders.iter().map(|i| i.x).collect();
    assert_eq!(fleet_before, fleet_after);
}

#[test]
fn ships_never_go_negative() {
    let (mut s, mut rng) = started(Difficulty::Medium);
    for _ in 0..10 {
        s.on_player_hit(&mut rng);
        assert!(s.stats().ships_left <= 3);
    }
    assert_eq!(s.stats().ships_left, 0);
}

#[test]
fn zero_pause_resumes_immediately() {
    let settings = Settings {
        respawn_pause_ms: 0,
        ..Settings::default()
    };
    let mut rng = seeded_rng();
    let mut s = Session::new(settings, 0);
    s.start(Difficulty::Medium, &mut rng);
    s.on_player_hit(&mut rng);
    assert_eq!(s.state(), SessionState::Active);
    assert!(s.player.alive);
}

#[test]
fn advance_pause_is_noop_when_active() {
    let (mut s, _) = started(Difficulty::Medium);
    assert!(!s.advance_pause());
    assert_eq!(s.state(), SessionState::Active);
}

#[test]
fn empty_layout_relays_out_without_levelling_up() {
    let mut rng = seeded_rng();
    let settings = Settings {
        screen_width: 50.0,
        screen_height: 50.0,
        ..Settings::default()
    };
    let mut s = Session::new(settings, 0);
    assert!(s.start(Difficulty::Medium, &mut rng));
    assert!(s.fleet.is_empty());

    for _ in 0..1000 {
        s.on_fleet_cleared(&mut rng);
    }
    assert!(s.fleet.is_empty());
    assert_eq!(s.stats().level, 1);
    assert_eq!(*s.params(), Difficulty::Medium.profile());
    assert_eq!(s.state(), SessionState::Active);
}

// ── scoring ───────────────────────────────────────────────────────────────────

#[test]
fn high_score_tracks_score_live() {
    let mut rng = seeded_rng();
    let mut s = Session::new(Settings::default(), 250);
    s.start(Difficulty::Medium, &mut rng);
    s.on_score_increase(100);
    assert_eq!(s.stats().high_score, 250);
    s.on_score_increase(200);
    assert_eq!(s.stats().score, 300);
    assert_eq!(s.stats().high_score, 300);
}

#[test]
fn stats_saturate_instead_of_overflowing() {
    let mut stats = SessionStats::new(3, 0);
    stats.add_score(u32::MAX);
    stats.add_score(10);
    assert_eq!(stats.score, u32::MAX);
    assert_eq!(stats.high_score, u32::MAX);
    stats.ships_left = 0;
    assert_eq!(stats.lose_ship(), 0);
}
