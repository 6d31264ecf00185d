//! Duck Hop - charge a hop, land on eggs, stay away from the cubes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aim, flight, targets, enemies, game state)
//! - `renderer`: Draw-list construction against injected mesh handles
//! - `settings`: Data-driven game balance loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Board dimensions (board units)
    pub const BOARD_WIDTH: u32 = 5;
    pub const BOARD_HEIGHT: u32 = 4;

    /// Aim angle bounds (degrees)
    pub const ANGLE_MIN: i32 = -90;
    pub const ANGLE_MAX: i32 = 90;
    /// Degrees the aim moves per update while a direction is held
    pub const ANGLE_STEP: i32 = 1;

    /// Default ceiling for stored power
    pub const MAX_POWER: f32 = 2.5;
    /// Power change per update while charging (not scaled by dt)
    pub const POWER_STEP: f32 = 0.1;

    /// Launch velocity: vx = angle / LAUNCH_ANGLE_DIVISOR, vy = LAUNCH_POWER_SCALE * power
    pub const LAUNCH_ANGLE_DIVISOR: f32 = 30.0;
    pub const LAUNCH_POWER_SCALE: f32 = 2.5;

    /// Half of standard gravity, tuned for a floaty hop
    pub const GRAVITY: f32 = 4.9;
    /// Horizontal walls; leaving this span reflects vx
    pub const WALL_LEFT: f32 = -0.5;
    pub const WALL_RIGHT: f32 = 5.5;
    /// Fraction of vx kept (and reversed) on a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.8;
    /// Soft ceiling; above it the duck is forced downward
    pub const APEX_HEIGHT: f32 = 3.6;
    pub const APEX_FALL_SPEED: f32 = 2.0;
    /// Heights below this count as touching the ground
    pub const LANDING_HEIGHT: f32 = 0.01;

    /// Live targets on the board at all times
    pub const TARGET_COUNT: usize = 7;
    /// Targets never spawn lower than this
    pub const TARGET_MIN_HEIGHT: f32 = 1.0;
    /// Contact radius shared by target and enemy checks
    pub const MIN_R: f32 = 0.3;

    /// Enemy approach divisor is ENEMY_DAMPING * speed
    pub const ENEMY_DAMPING: f32 = 400.0;
    pub const ENEMY_SPEED: f32 = 0.5;
    /// Every enemy enters the board here
    pub const ENEMY_SPAWN_X: f32 = 0.0;
    pub const ENEMY_SPAWN_Y: f32 = 3.0;
    /// One extra enemy per this many points
    pub const ENEMY_MILESTONE: u64 = 10;
}

/// Euclidean distance test used for every contact check
#[inline]
pub fn within_reach(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) <= radius
}

/// Convert a launch angle (degrees) and stored power into an initial velocity
#[inline]
pub fn launch_velocity(angle: i32, power: f32) -> Vec2 {
    Vec2::new(
        angle as f32 / consts::LAUNCH_ANGLE_DIVISOR,
        consts::LAUNCH_POWER_SCALE * power,
    )
}
