use glam::Vec2;
use rand::Rng;

use crate::physics::friction_factor;
use crate::{Aabb, Config, Field, GameRng};

/// Side of the field a team defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Left,
    Right,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Left, Team::Right];

    pub fn index(self) -> usize {
        match self {
            Team::Left => 0,
            Team::Right => 1,
        }
    }
}

/// Who drives an actor this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Moved by the team's intent snapshot
    Human,
    /// Moved by the built-in lane-keeping AI
    Autonomous,
    /// Stands still but still blocks the ball
    #[default]
    Idle,
}

/// Movement/kick intent for an actor, held until the next input update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub kick: bool,
}

impl ActorIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit (or zero) direction; diagonals move at axial speed
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Ball component - position is the centre of the ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32, // degrees, [0, 360)
    pub spin: f32,  // degrees per second
    size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            angle: 0.0,
            spin: 0.0,
            size,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }

    /// Advance position, apply friction and update the cosmetic spin
    pub fn integrate(&mut self, dt: f32, config: &Config) {
        self.pos += self.vel * dt;

        let factor = friction_factor(dt, config.ball_friction, config.friction_reference_rate);
        self.vel *= factor;

        // Snap tiny components so the ball actually stops
        if self.vel.x.abs() < config.ball_min_stop_speed {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < config.ball_min_stop_speed {
            self.vel.y = 0.0;
        }

        let dir = if self.vel.x >= 0.0 { 1.0 } else { -1.0 };
        let target_spin = dir * self.vel.length() * config.ball_spin_coeff;
        let smoothing = config.ball_spin_smoothing;
        self.spin = self.spin * smoothing + target_spin * (1.0 - smoothing);
        self.spin *= factor;

        self.angle = (self.angle + self.spin * dt).rem_euclid(360.0);
        if self.angle >= 360.0 {
            // rem_euclid can round tiny negatives up to exactly 360
            self.angle = 0.0;
        }
    }

    /// Push the ball away from `origin` with the given force.
    ///
    /// Returns false (and leaves the ball untouched) when the origin sits on
    /// the ball's centre and no direction can be derived.
    pub fn apply_kick(&mut self, origin: Vec2, force: f32, config: &Config) -> bool {
        let delta = self.pos - origin;
        let dist = delta.length();
        if dist <= config.kick_epsilon {
            return false;
        }

        let dir = delta / dist;
        self.vel += dir * force;

        let side = if dir.x >= 0.0 { 1.0 } else { -1.0 };
        self.spin += side * config.ball_kick_spin;
        true
    }

    /// Re-centre the ball for a kick-off after a goal
    pub fn reset_to_center(
        &mut self,
        field: &Field,
        toward_left: bool,
        config: &Config,
        rng: &mut GameRng,
    ) {
        self.pos = field.center();

        let vx = if toward_left { -1.0 } else { 1.0 } * config.ball_reset_speed;
        let vy = if config.ball_reset_jitter > 0.0 {
            config.ball_reset_jitter * (rng.0.gen_range(0.0..1.0f32) - 0.5)
        } else {
            0.0
        };
        self.vel = Vec2::new(vx, vy);
        self.spin = 0.0;
        self.angle = 0.0;
    }
}

/// Actor component - a footballer with an axis-aligned hitbox
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub slot: usize, // position in the match roster
    pub team: Team,
    pub pos: Vec2, // top-left corner of the hitbox
    pub speed: f32,
    pub kick_range: f32,
    pub control: Control,
    pub moving_time: f32,
    pub heading: Vec2,
    size: Vec2,
}

impl Actor {
    pub fn new(slot: usize, team: Team, pos: Vec2, config: &Config) -> Self {
        Self {
            slot,
            team,
            pos,
            speed: config.actor_speed,
            kick_range: config.actor_kick_range,
            control: Control::Idle,
            moving_time: 0.0,
            heading: Vec2::ZERO,
            size: config.actor_size(),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_min_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn is_human(&self) -> bool {
        self.control == Control::Human
    }

    pub fn is_ai(&self) -> bool {
        self.control == Control::Autonomous
    }

    /// Move from the human intent; ignored unless human controlled
    pub fn apply_human_intent(&mut self, intent: &ActorIntent, dt: f32, field: &Field) {
        if !self.is_human() {
            return;
        }

        let dir = intent.direction();
        self.pos += dir * self.speed * dt;
        self.pos = field.clamp_box(self.pos, self.size);
        self.track_motion(dir, dt);
    }

    /// Lane-keeping AI: follow the ball vertically, never horizontally
    pub fn apply_ai_intent(&mut self, ball: &Ball, dt: f32, field: &Field, config: &Config) {
        if !self.is_ai() {
            return;
        }

        let target_y = ball.pos.y - self.size.y / 2.0;
        let dy = target_y - self.pos.y;
        let mut dir = Vec2::ZERO;
        if dy.abs() > config.ai_dead_zone {
            dir.y = dy.signum();
            self.pos.y += dir.y * self.speed * config.ai_speed_factor * dt;
        }
        self.pos = field.clamp_box(self.pos, self.size);
        self.track_motion(dir, dt);
    }

    pub fn can_kick(&self, ball: &Ball) -> bool {
        self.center().distance_squared(ball.pos) <= self.kick_range * self.kick_range
    }

    /// Kick the ball from the actor's centre if it is within range
    pub fn kick(&self, ball: &mut Ball, config: &Config) -> bool {
        if !self.can_kick(ball) {
            return false;
        }
        ball.apply_kick(self.center(), config.kick_force, config)
    }

    fn track_motion(&mut self, dir: Vec2, dt: f32) {
        self.heading = dir;
        if dir == Vec2::ZERO {
            self.moving_time = 0.0;
        } else {
            self.moving_time += dt;
        }
    }
}

/// Smoothed on-screen position, lagging behind the actor's hitbox
#[derive(Debug, Clone, Copy)]
pub struct Visual {
    pub pos: Vec2,
}

impl Visual {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn follow(&mut self, target: Vec2, rate: f32, dt: f32) {
        self.pos += (target - self.pos) * (rate * dt).clamp(0.0, 1.0);
    }
}
