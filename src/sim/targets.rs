//! Scorable targets ("eggs")
//!
//! A fixed pool of targets; each one the duck touches is replaced in place
//! by a fresh spawn so the pool never shrinks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::within_reach;

/// A stationary target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
}

/// Owns the target pool and the RNG that places new targets
#[derive(Debug, Clone)]
pub struct TargetManager {
    targets: Vec<Target>,
    rng: Pcg32,
}

impl TargetManager {
    /// Create a full pool placed by an RNG seeded with `seed`
    pub fn new(seed: u64) -> Self {
        let mut manager = Self {
            targets: Vec::with_capacity(TARGET_COUNT),
            rng: Pcg32::seed_from_u64(seed),
        };
        for _ in 0..TARGET_COUNT {
            let target = manager.spawn();
            manager.targets.push(target);
        }
        manager
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Draw a new target position.
    ///
    /// x lands in [0, 4.95]; y is redrawn on a slightly taller scale until it
    /// clears the ground band.
    pub fn spawn(&mut self) -> Target {
        let x = self.rng.random_range(0..100u32) as f32 / 20.0;
        let mut y = self.rng.random_range(0..100u32) as f32 / 28.0;
        while y < TARGET_MIN_HEIGHT {
            y = self.rng.random_range(0..100u32) as f32 / 26.0;
        }
        Target {
            pos: Vec2::new(x, y),
        }
    }

    /// Replace every target within reach of the duck. Returns how many were hit.
    pub fn check_and_resolve(&mut self, duck: Vec2) -> u32 {
        let mut hits = 0;
        for i in 0..self.targets.len() {
            if within_reach(duck, self.targets[i].pos, MIN_R) {
                self.targets[i] = self.spawn();
                hits += 1;
            }
        }
        hits
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, index: usize, pos: Vec2) {
        self.targets[index].pos = pos;
    }
}
