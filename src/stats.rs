//! Session counters.

/// Counters for one playthrough plus the all-time best score.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
}

impl SessionStats {
    pub fn new(ship_limit: u32, high_score: u32) -> Self {
        SessionStats {
            ships_left: ship_limit,
            score: 0,
            level: 1,
            high_score,
        }
    }

    /// Back to the opening counters. The high score is kept.
    pub fn reset(&mut self, ship_limit: u32) {
        self.ships_left = ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Add points; the high score follows as soon as it is beaten.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Take one ship. Returns the number left.
    pub fn lose_ship(&mut self) -> u32 {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left
    }

    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
    }
}
