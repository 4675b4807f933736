//! Stateless collision checks between projectiles, invaders and the craft.

use crate::entities::{Invader, PlayerCraft, Projectile};

/// One destroyed invader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub points: u32,
    /// Center of the destroyed invader, where its explosion goes.
    pub position: (f32, f32),
}

/// Remove every projectile that touches an invader together with all the
/// invaders it touches. Each destroyed invader produces its own `Hit`.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    invaders: &mut Vec<Invader>,
    points: u32,
) -> Vec<Hit> {
    let mut killed = vec![false; invaders.len()];
    let mut hits = Vec::new();

    projectiles.retain(|projectile| {
        let shot = projectile.rect();
        let mut spent = false;
        for (i, invader) in invaders.iter().enumerate() {
            if !killed[i] && shot.overlaps(&invader.rect()) {
                killed[i] = true;
                spent = true;
                hits.push(Hit {
                    points,
                    position: invader.rect().center(),
                });
            }
        }
        !spent
    });

    if !hits.is_empty() {
        let mut flags = killed.into_iter();
        invaders.retain(|_| !flags.next().unwrap_or(false));
    }
    hits
}

/// True if any invader overlaps the craft.
pub fn check_player_hit(player: &PlayerCraft, invaders: &[Invader]) -> bool {
    let craft = player.rect();
    invaders.iter().any(|invader| craft.overlaps(&invader.rect()))
}

/// True if any invader's bottom edge has reached `floor_y`.
pub fn check_fleet_reached_floor(invaders: &[Invader], floor_y: f32) -> bool {
    invaders
        .iter()
        .any(|invader| invader.rect().bottom() >= floor_y)
}
