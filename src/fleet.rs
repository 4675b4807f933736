//! The invader fleet: layout, edge detection and drop-and-reverse movement.

use rand::Rng;

use crate::entities::Invader;

/// Horizontal heading shared by every invader in a fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Fleet {
    pub invaders: Vec<Invader>,
    pub direction: Direction,
    pub drop_speed: f32,
}

impl Fleet {
    pub fn empty(drop_speed: f32) -> Self {
        Fleet {
            invaders: Vec::new(),
            direction: Direction::Right,
            drop_speed,
        }
    }

    /// Scatter a new fleet over the upper part of the screen.
    ///
    /// Rows start one invader in from the top-left corner. Horizontal and
    /// vertical gaps are drawn from `[1.0, 1.9]` invader widths, so no two
    /// fleets look alike. A row stops before `screen_width - 2 * w` and rows
    /// stop once `y` reaches `screen_height - 8 * h`. A screen too small for
    /// a single invader gives an empty fleet.
    pub fn layout(
        screen_width: f32,
        screen_height: f32,
        invader_size: (f32, f32),
        drop_speed: f32,
        rng: &mut impl Rng,
    ) -> Fleet {
        let (w, h) = invader_size;
        let mut fleet = Fleet::empty(drop_speed);
        if w <= 0.0 || h <= 0.0 {
            return fleet;
        }

        let (mut x, mut y) = (w, h);
        while y < screen_height - 8.0 * h {
            while x < screen_width - 2.0 * w {
                fleet.invaders.push(Invader::new(x, y, w, h));
                x += rng.gen_range(1.0f32..=1.9) * w;
            }
            x = w + rng.gen_range(0.0f32..=8.0);
            y += rng.gen_range(1.0f32..=1.9) * w;
        }

        log::debug!("Laid out fleet of {} invaders", fleet.invaders.len());
        fleet
    }

    pub fn is_empty(&self) -> bool {
        self.invaders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.invaders.len()
    }

    /// One tick of fleet motion.
    ///
    /// The edge check runs first and stops at the first invader past a side;
    /// if one is found the whole fleet drops and turns around. Then every
    /// invader steps sideways by `speed`. Returns whether the fleet turned.
    pub fn advance(&mut self, speed: f32, screen_width: f32) -> bool {
        let at_edge = self
            .invaders
            .iter()
            .any(|invader| invader.is_past_edge(screen_width));
        if at_edge {
            for invader in &mut self.invaders {
                invader.y += self.drop_speed;
            }
            self.direction = self.direction.reversed();
            log::debug!("Fleet dropped and now heads {:?}", self.direction);
        }

        let dx = speed * self.direction.sign();
        for invader in &mut self.invaders {
            invader.x += dx;
        }
        at_edge
    }
}
