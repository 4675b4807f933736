use alien_invasion::entities::*;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 60.0, 40.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.right(), 70.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.center(), (40.0, 40.0));
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn rect_touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&right));
    assert!(!a.overlaps(&below));
}

#[test]
fn rect_contained_box_overlaps() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 3.0, 15.0);
    assert!(outer.overlaps(&inner));
}

// ── PlayerCraft ───────────────────────────────────────────────────────────────

#[test]
fn craft_starts_centered_at_bottom() {
    let c = PlayerCraft::new(60.0, 48.0, 1200.0, 800.0);
    assert_eq!(c.x, 570.0);
    assert_eq!(c.y, 752.0);
    assert!(c.alive);
    assert!(!c.moving_left && !c.moving_right);
}

#[test]
fn craft_moves_right_by_speed() {
    let mut c = PlayerCraft::new(60.0, 48.0, 1200.0, 800.0);
    c.moving_right = true;
    c.update(3.0, 1200.0);
    assert_eq!(c.x, 573.0);
}

#[test]
fn craft_opposite_keys_cancel() {
    let mut c = PlayerCraft::new(60.0, 48.0, 1200.0, 800.0);
    c.moving_left = true;
    c.moving_right = true;
    c.update(3.0, 1200.0);
    assert_eq!(c.x, 570.0);
}

#[test]
fn craft_clamps_at_left_edge() {
    let mut c = PlayerCraft::new(60.0, 48.0, 1200.0, 800.0);
    c.x = 1.0;
    c.moving_left = true;
    c.update(3.0, 1200.0);
    assert_eq!(c.x, 0.0);
}

#[test]
fn craft_clamps_at_right_edge() {
    let mut c = PlayerCraft::new(60.0, 48.0, 1200.0, 800.0);
    c.x = 1139.0;
    c.moving_right = true;
    c.update(3.0, 1200.0);
    assert_eq!(c.x, 1140.0); // width - ship width
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_spawns_at_craft_midtop() {
    let c = PlayerCraft::new(60.0, 48.0, 1200.0, 800.0);
    let p = Projectile::fired_from(&c, 3.0, 15.0, 5.0);
    // craft center x = 600, projectile left = round(600 - 1.5)
    assert_eq!(p.x, 599);
    assert_eq!(p.y, c.y);
    assert_eq!(p.speed, 5.0);
}

#[test]
fn projectile_moves_up_and_keeps_column() {
    let c = PlayerCraft::new(60.0, 48.0, 1200.0, 800.0);
    let mut p = Projectile::fired_from(&c, 3.0, 15.0, 5.0);
    let x = p.x;
    p.update();
    assert_eq!(p.y, 747.0);
    assert_eq!(p.x, x);
}

#[test]
fn projectile_off_screen_once_bottom_reaches_top() {
    let mut p = Projectile { x: 10, y: -14.0, width: 3.0, height: 15.0, speed: 5.0 };
    assert!(!p.is_off_screen()); // bottom = 1
    p.y = -15.0;
    assert!(p.is_off_screen()); // bottom = 0
}

// ── Invader ───────────────────────────────────────────────────────────────────

#[test]
fn invader_edge_detection() {
    let inside = Invader::new(0.0, 0.0, 60.0, 58.0);
    let left = Invader::new(-0.5, 0.0, 60.0, 58.0);
    let right = Invader::new(1140.5, 0.0, 60.0, 58.0);
    let flush = Invader::new(1140.0, 0.0, 60.0, 58.0);
    assert!(!inside.is_past_edge(1200.0));
    assert!(left.is_past_edge(1200.0));
    assert!(right.is_past_edge(1200.0));
    assert!(!flush.is_past_edge(1200.0));
}

// ── Explosion ─────────────────────────────────────────────────────────────────

#[test]
fn explosion_plays_every_frame_then_expires() {
    let mut e = Explosion::new((100.0, 100.0));
    let tick = 1000.0 / 60.0;
    let mut ticks = 0;
    while e.advance(tick, 20.0, 5) {
        ticks += 1;
        assert!(ticks < 100, "explosion never finished");
    }
    // 20 ms frames at ~16.7 ms ticks: each frame lasts two ticks
    assert_eq!(e.frame, 5);
    assert_eq!(ticks, 9);
}

#[test]
fn explosion_holds_frame_within_delay() {
    let mut e = Explosion::new((0.0, 0.0));
    assert!(e.advance(10.0, 20.0, 5));
    assert_eq!(e.frame, 0);
    assert!(e.advance(15.0, 20.0, 5));
    assert_eq!(e.frame, 1);
}
