//! Game entity types: plain data plus the per-tick update rule of each kind.

// ── Bounding box ──────────────────────────────────────────────────────────────

/// Axis-aligned box in world pixels; y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Player craft ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PlayerCraft {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    /// False while the session pauses after a hit.
    pub alive: bool,
}

impl PlayerCraft {
    /// A craft centered at the bottom of the screen.
    pub fn new(width: f32, height: f32, screen_width: f32, screen_height: f32) -> Self {
        let mut craft = PlayerCraft {
            x: 0.0,
            y: 0.0,
            width,
            height,
            moving_left: false,
            moving_right: false,
            alive: true,
        };
        craft.center(screen_width, screen_height);
        craft
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&mut self, screen_width: f32, screen_height: f32) {
        self.x = (screen_width - self.width) / 2.0;
        self.y = screen_height - self.height;
    }

    /// Apply held movement and keep the craft on screen.
    pub fn update(&mut self, speed: f32, screen_width: f32) {
        if self.moving_right {
            self.x += speed;
        }
        if self.moving_left {
            self.x -= speed;
        }
        self.x = self.x.clamp(0.0, (screen_width - self.width).max(0.0));
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Projectile {
    /// Column fixed at spawn.
    pub x: i32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels travelled upward per tick.
    pub speed: f32,
}

impl Projectile {
    /// Spawn with the projectile's top-center on the craft's top-center.
    pub fn fired_from(craft: &PlayerCraft, width: f32, height: f32, speed: f32) -> Self {
        let (cx, _) = craft.rect().center();
        Projectile {
            x: (cx - width / 2.0).round() as i32,
            y: craft.y,
            width,
            height,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x as f32, self.y, self.width, self.height)
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    /// True once the trailing edge has left the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect().bottom() <= 0.0
    }
}

// ── Invaders ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Invader {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Invader {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Invader { x, y, width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True when the invader pokes past either side of the screen.
    pub fn is_past_edge(&self, screen_width: f32) -> bool {
        self.x < 0.0 || self.x + self.width > screen_width
    }
}

// ── Explosions ────────────────────────────────────────────────────────────────

/// Presentation-only blast left where an invader died.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub center: (f32, f32),
    pub frame: u32,
    /// Milliseconds spent on the current frame.
    pub elapsed_ms: f32,
}

impl Explosion {
    pub fn new(center: (f32, f32)) -> Self {
        Explosion {
            center,
            frame: 0,
            elapsed_ms: 0.0,
        }
    }

    /// Advance the animation clock. Returns false once the last frame has
    /// been shown and the explosion should be dropped.
    pub fn advance(&mut self, dt_ms: f32, frame_ms: f32, frame_count: u32) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms > frame_ms {
            self.elapsed_ms = 0.0;
            self.frame += 1;
        }
        self.frame < frame_count
    }
}
