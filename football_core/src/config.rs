use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Params, Team};

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub goal_band_height: f32,
    pub goal_depth: f32,

    pub ball_size: f32,
    pub ball_friction: f32,
    pub friction_reference_rate: f32,
    pub ball_min_stop_speed: f32,
    pub ball_spin_coeff: f32,
    pub ball_spin_smoothing: f32,
    pub ball_kick_spin: f32,
    pub ball_reset_speed: f32,
    pub ball_reset_jitter: f32,
    pub ball_speed_max: f32,

    pub actor_width: f32,
    pub actor_height: f32,
    pub actor_speed: f32,
    pub actor_kick_range: f32,
    pub kick_force: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
    pub visual_smoothing: f32,

    pub collision_margin: f32,
    pub collision_epsilon: f32,
    pub kick_epsilon: f32,
    pub max_deflection_deg: f32,
    pub bounce_boost: f32,

    pub fixed_dt: f32,
    pub max_dt: f32,

    /// Top-left corners of the left team's actors, in roster order
    pub left_formation: Vec<[f32; 2]>,
    /// Top-left corners of the right team's actors, in roster order
    pub right_formation: Vec<[f32; 2]>,
}

impl Default for Config {
    fn default() -> Self {
        let mid = Params::FIELD_HEIGHT / 2.0;
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            goal_band_height: Params::GOAL_BAND_HEIGHT,
            goal_depth: Params::GOAL_DEPTH,
            ball_size: Params::BALL_SIZE,
            ball_friction: Params::BALL_FRICTION,
            friction_reference_rate: Params::FRICTION_REFERENCE_RATE,
            ball_min_stop_speed: Params::BALL_MIN_STOP_SPEED,
            ball_spin_coeff: Params::BALL_SPIN_COEFF,
            ball_spin_smoothing: Params::BALL_SPIN_SMOOTHING,
            ball_kick_spin: Params::BALL_KICK_SPIN,
            ball_reset_speed: Params::BALL_RESET_SPEED,
            ball_reset_jitter: Params::BALL_RESET_JITTER,
            ball_speed_max: Params::BALL_SPEED_MAX,
            actor_width: Params::ACTOR_WIDTH,
            actor_height: Params::ACTOR_HEIGHT,
            actor_speed: Params::ACTOR_SPEED,
            actor_kick_range: Params::ACTOR_KICK_RANGE,
            kick_force: Params::KICK_FORCE,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            visual_smoothing: Params::VISUAL_SMOOTHING,
            collision_margin: Params::COLLISION_MARGIN,
            collision_epsilon: Params::COLLISION_EPSILON,
            kick_epsilon: Params::KICK_EPSILON,
            max_deflection_deg: Params::MAX_DEFLECTION_DEG,
            bounce_boost: Params::BOUNCE_BOOST,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
            left_formation: vec![[60.0, mid - 120.0], [60.0, mid - 20.0], [60.0, mid + 80.0]],
            right_formation: vec![[829.0, 171.0], [829.0, 581.0], [1159.0, 370.0]],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("goal_depth", self.goal_depth),
            ("ball_size", self.ball_size),
            ("friction_reference_rate", self.friction_reference_rate),
            ("ball_speed_max", self.ball_speed_max),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("actor_speed", self.actor_speed),
            ("actor_kick_range", self.actor_kick_range),
            ("bounce_boost", self.bounce_boost),
            ("fixed_dt", self.fixed_dt),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        if !(self.ball_friction > 0.0 && self.ball_friction <= 1.0) {
            return Err(invalid(
                "ball_friction",
                format!("must be in (0, 1], got {}", self.ball_friction),
            ));
        }
        if !(0.0..1.0).contains(&self.ball_spin_smoothing) {
            return Err(invalid(
                "ball_spin_smoothing",
                format!("must be in [0, 1), got {}", self.ball_spin_smoothing),
            ));
        }
        if self.goal_band_height < 0.0 || self.goal_band_height > self.field_height {
            return Err(invalid(
                "goal_band_height",
                format!("must fit inside the field, got {}", self.goal_band_height),
            ));
        }
        if self.fixed_dt > self.max_dt {
            return Err(invalid(
                "fixed_dt",
                format!("must not exceed max_dt ({})", self.max_dt),
            ));
        }
        if self.max_dt / self.fixed_dt > Params::MAX_SUBSTEPS as f32 {
            return Err(invalid(
                "fixed_dt",
                format!(
                    "max_dt / fixed_dt must not exceed {} sub-steps, got {}",
                    Params::MAX_SUBSTEPS,
                    self.max_dt / self.fixed_dt
                ),
            ));
        }
        if self.left_formation.is_empty() {
            return Err(invalid("left_formation", "needs at least one actor".into()));
        }
        if self.right_formation.is_empty() {
            return Err(invalid("right_formation", "needs at least one actor".into()));
        }
        Ok(())
    }

    pub fn actor_size(&self) -> Vec2 {
        Vec2::new(self.actor_width, self.actor_height)
    }

    /// Starting top-left corners for a team, in roster order
    pub fn formation(&self, team: Team) -> impl Iterator<Item = Vec2> + '_ {
        let spots = match team {
            Team::Left => &self.left_formation,
            Team::Right => &self.right_formation,
        };
        spots.iter().map(|&[x, y]| Vec2::new(x, y))
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
