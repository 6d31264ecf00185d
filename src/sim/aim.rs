//! Launch angle and charge oscillator
//!
//! Power is stored as a whole number of charge steps so the triangle wave is
//! exact: with the default ceiling it peaks after 25 updates and returns to
//! zero after 50, with no float drift between cycles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::control::ControlState;
use crate::consts::*;
use crate::launch_velocity;

/// Direction the charge oscillator is currently moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargeDirection {
    #[default]
    Increasing,
    Decreasing,
}

/// Aim angle plus stored power
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimState {
    /// Degrees from vertical, positive leans right (always within ANGLE_MIN..=ANGLE_MAX)
    pub angle: i32,
    level: u32,
    max_level: u32,
    max_power: f32,
    pub direction: ChargeDirection,
}

impl Default for AimState {
    fn default() -> Self {
        Self::new(MAX_POWER)
    }
}

impl AimState {
    pub fn new(max_power: f32) -> Self {
        let max_power = max_power.max(0.0);
        Self {
            angle: 0,
            level: 0,
            max_level: (max_power / POWER_STEP).round() as u32,
            max_power,
            direction: ChargeDirection::Increasing,
        }
    }

    /// Current stored power, in 0..=max_power
    pub fn power(&self) -> f32 {
        (self.level as f32 * POWER_STEP).min(self.max_power)
    }

    pub fn max_power(&self) -> f32 {
        self.max_power
    }

    /// Updates needed for power to rise from zero to the peak and back
    pub fn charge_period(&self) -> u32 {
        2 * self.max_level
    }

    /// Advance one update of aiming/charging from the held keys.
    ///
    /// Left wins over right; charging only happens when neither aim branch moved.
    pub fn apply_frame(&mut self, controls: &ControlState) {
        if controls.aim_left && self.angle > ANGLE_MIN {
            self.angle -= ANGLE_STEP;
        } else if controls.aim_right && self.angle < ANGLE_MAX {
            self.angle += ANGLE_STEP;
        } else if controls.charge {
            self.step_charge();
        }
    }

    fn step_charge(&mut self) {
        match self.direction {
            ChargeDirection::Increasing if self.level < self.max_level => self.level += 1,
            ChargeDirection::Decreasing if self.level > 0 => self.level -= 1,
            _ => {}
        }

        if self.direction == ChargeDirection::Increasing && self.level >= self.max_level {
            self.direction = ChargeDirection::Decreasing;
        }
        if self.direction == ChargeDirection::Decreasing && self.level == 0 {
            self.direction = ChargeDirection::Increasing;
        }
    }

    /// Initial velocity for a launch at the current angle and power
    pub fn launch_velocity(&self) -> Vec2 {
        launch_velocity(self.angle, self.power())
    }

    /// Drop stored power after a landing (direction is left as is)
    pub fn clear_power(&mut self) {
        self.level = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn charging() -> ControlState {
        ControlState {
            charge: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_charge_peaks_then_falls() {
        let mut aim = AimState::default();
        let controls = charging();
        for _ in 0..25 {
            aim.apply_frame(&controls);
        }
        assert!((aim.power() - MAX_POWER).abs() < 1e-5);
        assert_eq!(aim.direction, ChargeDirection::Decreasing);

        aim.apply_frame(&controls);
        assert!((aim.power() - 2.4).abs() < 1e-5);

        for _ in 0..24 {
            aim.apply_frame(&controls);
        }
        assert_eq!(aim.power(), 0.0);
        assert_eq!(aim.direction, ChargeDirection::Increasing);
    }

    #[test]
    fn test_default_period_is_fifty_updates() {
        let aim = AimState::default();
        assert_eq!(aim.charge_period(), 50);
    }

    #[test]
    fn test_left_has_priority_over_right() {
        let mut aim = AimState::default();
        let controls = ControlState {
            aim_left: true,
            aim_right: true,
            ..Default::default()
        };
        aim.apply_frame(&controls);
        assert_eq!(aim.angle, -1);
    }

    #[test]
    fn test_aim_blocks_charge() {
        let mut aim = AimState::default();
        let controls = ControlState {
            aim_right: true,
            charge: true,
            ..Default::default()
        };
        aim.apply_frame(&controls);
        assert_eq!(aim.angle, 1);
        assert_eq!(aim.power(), 0.0);
    }

    #[test]
    fn test_angle_stops_at_bound() {
        let mut aim = AimState::default();
        let controls = ControlState {
            aim_right: true,
            ..Default::default()
        };
        for _ in 0..200 {
            aim.apply_frame(&controls);
        }
        assert_eq!(aim.angle, ANGLE_MAX);
    }

    #[test]
    fn test_left_at_bound_falls_through_to_charge() {
        let mut aim = AimState::default();
        aim.angle = ANGLE_MIN;
        let controls = ControlState {
            aim_left: true,
            charge: true,
            ..Default::default()
        };
        aim.apply_frame(&controls);
        assert_eq!(aim.angle, ANGLE_MIN);
        assert!((aim.power() - POWER_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_launch_velocity_uses_latched_power() {
        let mut aim = AimState::default();
        let controls = charging();
        for _ in 0..10 {
            aim.apply_frame(&controls);
        }
        let v = aim.launch_velocity();
        assert_eq!(v.x, 0.0);
        assert!((v.y - 2.5).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_angle_and_power_stay_in_bounds(
            frames in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 0..600),
            max_power in 0.1f32..5.0,
        ) {
            let mut aim = AimState::new(max_power);
            for (left, right, charge) in frames {
                let controls = ControlState { aim_left: left, aim_right: right, charge, launch_pending: false };
                aim.apply_frame(&controls);
                prop_assert!((ANGLE_MIN..=ANGLE_MAX).contains(&aim.angle));
                prop_assert!(aim.power() >= 0.0 && aim.power() <= aim.max_power());
            }
        }

        #[test]
        fn prop_charge_is_periodic(n in 0u32..300) {
            let controls = charging();
            let mut aim = AimState::default();
            for _ in 0..n {
                aim.apply_frame(&controls);
            }
            let before = aim.power();
            for _ in 0..aim.charge_period() {
                aim.apply_frame(&controls);
            }
            prop_assert_eq!(before, aim.power());
        }
    }
}
