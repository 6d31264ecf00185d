//! Drifting enemy cubes
//!
//! Each enemy closes a fixed fraction of its gap to the duck every update,
//! so it slows as it approaches. The pool only grows.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::within_reach;

/// An enemy piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
}

impl Enemy {
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(ENEMY_SPAWN_X, ENEMY_SPAWN_Y),
        }
    }
}

/// Owns every enemy on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyManager {
    enemies: Vec<Enemy>,
    speed: f32,
}

impl EnemyManager {
    /// Start with a single enemy at the spawn point
    pub fn new(speed: f32) -> Self {
        Self {
            enemies: vec![Enemy::spawn()],
            speed,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Append a fresh enemy at the spawn point
    pub fn spawn(&mut self) {
        self.enemies.push(Enemy::spawn());
    }

    /// Fraction of the remaining gap closed per update.
    ///
    /// Capped at 1 so a very small speed snaps onto the duck instead of overshooting.
    pub fn approach_rate(&self) -> f32 {
        (1.0 / (ENEMY_DAMPING * self.speed)).min(1.0)
    }

    /// Move every enemy toward the duck by one update's share of the gap
    pub fn advance(&mut self, duck: Vec2) {
        let rate = self.approach_rate();
        for enemy in &mut self.enemies {
            enemy.pos += (duck - enemy.pos) * rate;
        }
    }

    /// True if any enemy is within contact range of the duck
    pub fn check_collision(&self, duck: Vec2) -> bool {
        self.enemies
            .iter()
            .any(|enemy| within_reach(duck, enemy.pos, MIN_R))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_with_one_enemy() {
        let manager = EnemyManager::new(ENEMY_SPEED);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.enemies()[0].pos, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_advance_closes_fixed_fraction() {
        let mut manager = EnemyManager::new(ENEMY_SPEED);
        manager.advance(Vec2::ZERO);
        // 1 / (400 * 0.5) of the 3.0 gap
        let expected = 3.0 - 3.0 / 200.0;
        assert!((manager.enemies()[0].pos.y - expected).abs() < 1e-6);
        assert_eq!(manager.enemies()[0].pos.x, 0.0);
    }

    #[test]
    fn test_collision_radius() {
        let manager = EnemyManager::new(ENEMY_SPEED);
        assert!(manager.check_collision(Vec2::new(0.0, 2.75)));
        assert!(!manager.check_collision(Vec2::new(0.0, 2.5)));
    }

    #[test]
    fn test_tiny_speed_snaps_without_overshoot() {
        let mut manager = EnemyManager::new(0.0001);
        manager.advance(Vec2::new(1.0, 1.0));
        assert_eq!(manager.enemies()[0].pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_spawn_appends_at_spawn_point() {
        let mut manager = EnemyManager::new(ENEMY_SPEED);
        manager.advance(Vec2::ZERO);
        manager.spawn();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.enemies()[1], Enemy::spawn());
    }

    proptest! {
        #[test]
        fn prop_distance_strictly_decreases(
            speed in 0.01f32..10.0,
            duck_x in -1.0f32..6.0,
            duck_y in 0.0f32..4.0,
        ) {
            let duck = Vec2::new(duck_x, duck_y);
            prop_assume!(duck.distance(Enemy::spawn().pos) > 0.5);

            let mut manager = EnemyManager::new(speed);
            let mut last = manager.enemies()[0].pos.distance(duck);
            for _ in 0..50 {
                manager.advance(duck);
                let now = manager.enemies()[0].pos.distance(duck);
                prop_assert!(now < last);
                last = now;
            }
        }
    }
}
