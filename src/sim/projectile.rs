//! Duck flight: Resting -> Airborne -> Resting
//!
//! Integration is a semi-implicit Euler step with an extra gravity term on
//! the position update, then wall reflection, the apex clamp, and landing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Flight phase of the duck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightState {
    /// On the ground, waiting for the next charge release
    #[default]
    Resting,
    Airborne,
}

/// Outcome of a single integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Flying,
    /// Touched the ground this step and is now resting
    Landed,
}

/// The projectile the player launches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Duck {
    pub pos: Vec2,
    pub vel: Vec2,
    pub state: FlightState,
}

impl Duck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_airborne(&self) -> bool {
        self.state == FlightState::Airborne
    }

    /// Start a flight with the given initial velocity. Ignored mid-flight.
    pub fn launch(&mut self, vel: Vec2) -> bool {
        if self.is_airborne() {
            return false;
        }
        self.vel = vel;
        self.state = FlightState::Airborne;
        true
    }

    /// Advance one frame of flight. A resting duck does not move.
    pub fn integrate(&mut self, dt: f32) -> Option<StepOutcome> {
        if !self.is_airborne() {
            return None;
        }

        let gravity_step = dt * -GRAVITY;
        self.pos.y += dt * (self.vel.y + gravity_step);
        self.pos.x += dt * self.vel.x;
        self.vel.y += gravity_step;

        if self.pos.x < WALL_LEFT || self.pos.x > WALL_RIGHT {
            self.vel.x *= -WALL_RESTITUTION;
        }

        if self.pos.y > APEX_HEIGHT {
            self.vel.y = -APEX_FALL_SPEED;
        }

        if self.pos.y < LANDING_HEIGHT {
            self.pos.y = 0.0;
            self.vel.x = 0.0;
            self.state = FlightState::Resting;
            return Some(StepOutcome::Landed);
        }

        Some(StepOutcome::Flying)
    }
}
