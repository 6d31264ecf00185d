//! Game state and the input side of the simulation driver
//!
//! Everything a frame needs lives here; `tick` advances it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aim::AimState;
use super::control::{Action, ControlState, InputEvent};
use super::enemies::EnemyManager;
use super::projectile::Duck;
use super::targets::TargetManager;
use crate::Settings;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// An enemy reached the duck; ticks do nothing until restart
    GameOver,
}

/// Things that happened during a tick, for HUD/audio hooks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { vel: Vec2 },
    Landed { x: f32 },
    TargetHit { score: u64 },
    /// Milestone spawn; `count` is the new enemy total
    EnemySpawned { count: usize },
    GameOver { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the target RNG started from
    pub seed: u64,
    pub phase: GamePhase,
    pub controls: ControlState,
    pub aim: AimState,
    pub duck: Duck,
    pub targets: TargetManager,
    pub enemies: EnemyManager,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    enemy_speed: f32,
}

impl GameState {
    /// New run with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::build(seed, MAX_POWER, ENEMY_SPEED)
    }

    /// New run from settings; picks and logs a random seed when none is configured
    pub fn with_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| {
            let seed = rand::random::<u64>();
            log::info!("No seed configured, using {}", seed);
            seed
        });
        Self::build(seed, settings.max_power, settings.enemy_speed)
    }

    fn build(seed: u64, max_power: f32, enemy_speed: f32) -> Self {
        Self {
            seed,
            phase: GamePhase::Playing,
            controls: ControlState::default(),
            aim: AimState::new(max_power),
            duck: Duck::new(),
            targets: TargetManager::new(seed),
            enemies: EnemyManager::new(enemy_speed),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            enemy_speed,
        }
    }

    /// Start over with the same tuning and a new seed
    pub fn restart(&mut self, seed: u64) {
        let max_power = self.aim.max_power();
        *self = Self::build(seed, max_power, self.enemy_speed);
        log::info!("Run restarted with seed {}", seed);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Feed one input event. Returns true if the event was consumed.
    ///
    /// Auto-repeat presses are ignored. Releasing charge while the duck rests
    /// latches a launch at the current angle and power; the velocity is fixed
    /// here, so power moving afterward does not change it.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let (key, held) = match event {
            InputEvent::Pressed { repeat: true, .. } => return false,
            InputEvent::Pressed { key, .. } => (key, true),
            InputEvent::Released { key } => (key, false),
        };
        let Some(action) = Action::from_key(key) else {
            return false;
        };

        let released = self.controls.set_held(action, held);
        if released && self.phase == GamePhase::Playing && !self.duck.is_airborne() {
            self.duck.vel = self.aim.launch_velocity();
            self.controls.launch_pending = true;
        }
        true
    }

    /// Take every event produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Score one target hit, spawning an enemy on each milestone
    pub(crate) fn add_point(&mut self) {
        self.score += 1;
        self.events.push(GameEvent::TargetHit { score: self.score });
        log::debug!("Target hit, score {}", self.score);

        if self.score.is_multiple_of(ENEMY_MILESTONE) {
            self.enemies.spawn();
            let count = self.enemies.len();
            self.events.push(GameEvent::EnemySpawned { count });
            log::info!("Score {} reached, enemy count now {}", self.score, count);
        }
    }
}
