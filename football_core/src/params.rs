/// Game tuning parameters for the football match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 1300.0;
    pub const FIELD_HEIGHT: f32 = 800.0;
    pub const GOAL_BAND_HEIGHT: f32 = 96.0; // 15% of the field height, scaled by 0.8
    pub const GOAL_DEPTH: f32 = 80.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_FRICTION: f32 = 0.98; // velocity kept per reference frame
    pub const BALL_MIN_STOP_SPEED: f32 = 10.0; // px/s, below this a component snaps to zero
    pub const BALL_SPIN_COEFF: f32 = 5.0; // px/s -> deg/s
    pub const BALL_SPIN_SMOOTHING: f32 = 0.85;
    pub const BALL_KICK_SPIN: f32 = 250.0; // deg/s
    pub const BALL_RESET_SPEED: f32 = 280.0;
    pub const BALL_RESET_JITTER: f32 = 80.0; // total width of the vertical jitter range
    pub const BALL_SPEED_MAX: f32 = 900.0;

    // Actor
    pub const ACTOR_WIDTH: f32 = 21.0;
    pub const ACTOR_HEIGHT: f32 = 31.0;
    pub const ACTOR_SPEED: f32 = 260.0;
    pub const ACTOR_KICK_RANGE: f32 = 50.0;
    pub const KICK_FORCE: f32 = 450.0;
    pub const AI_SPEED_FACTOR: f32 = 0.8;
    pub const AI_DEAD_ZONE: f32 = 6.0;
    pub const VISUAL_SMOOTHING: f32 = 12.0; // per second

    // Collision
    pub const COLLISION_MARGIN: f32 = 2.0;
    pub const COLLISION_EPSILON: f32 = 0.1;
    pub const KICK_EPSILON: f32 = 0.0001;
    pub const MAX_DEFLECTION_DEG: f32 = 75.0;
    pub const BOUNCE_BOOST: f32 = 1.05;

    // Physics
    pub const FRICTION_REFERENCE_RATE: f32 = 60.0;
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent tunnelling on stalls
    pub const MAX_SUBSTEPS: u32 = 64; // Upper bound on micro-steps per frame
}
