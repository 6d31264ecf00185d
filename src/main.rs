//! Duck Hop headless runner
//!
//! Plays the simulation with a simple autopilot at a fixed frame rate and
//! logs how the run went. Usage: `duck-hop [settings.json]`

use std::path::Path;

use serde::Serialize;

use duck_hop::Settings;
use duck_hop::consts::*;
use duck_hop::sim::{Action, GameEvent, GamePhase, GameState, InputEvent};

/// What the autopilot is doing between hops
#[derive(Debug, Clone, Copy, PartialEq)]
enum Plan {
    /// Waiting for the duck to land
    Idle,
    /// Holding a direction until the angle matches, then charge to `level`
    Aim { angle: i32, level: u32 },
    /// Holding charge until power reaches `level` steps
    Charge { level: u32 },
}

/// Lines the duck up under the nearest egg and hops to it
struct Autopilot {
    plan: Plan,
}

impl Autopilot {
    fn new() -> Self {
        Self { plan: Plan::Idle }
    }

    /// Choose an angle and power that put the apex of the hop on the nearest target
    fn plan_hop(state: &GameState) -> Option<(i32, u32)> {
        let duck = state.duck.pos;
        let target = state
            .targets
            .targets()
            .iter()
            .min_by(|a, b| {
                let da = a.pos.distance(duck);
                let db = b.pos.distance(duck);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })?;

        let apex = target.pos.y.min(APEX_HEIGHT);
        let vy = (2.0 * GRAVITY * apex).sqrt();
        let power = (vy / LAUNCH_POWER_SCALE).min(state.aim.max_power());
        let level = (power / POWER_STEP).round().max(1.0) as u32;

        let time_to_apex = vy / GRAVITY;
        let vx = (target.pos.x - duck.x) / time_to_apex;
        let angle = (vx * LAUNCH_ANGLE_DIVISOR).round() as i32;
        Some((angle.clamp(ANGLE_MIN, ANGLE_MAX), level))
    }

    fn step(&mut self, state: &mut GameState) {
        match self.plan {
            Plan::Idle => {
                if !state.duck.is_airborne() {
                    if let Some((angle, level)) = Self::plan_hop(state) {
                        self.plan = Plan::Aim { angle, level };
                    }
                }
            }
            Plan::Aim { angle, level } => {
                let held_left = angle < state.aim.angle;
                let held_right = angle > state.aim.angle;
                state.handle_event(key(Action::AimLeft, held_left));
                state.handle_event(key(Action::AimRight, held_right));
                if !held_left && !held_right {
                    state.handle_event(InputEvent::press(Action::Charge));
                    self.plan = Plan::Charge { level };
                }
            }
            Plan::Charge { level } => {
                let reached = state.aim.power() >= level as f32 * POWER_STEP - POWER_STEP / 2.0;
                if reached {
                    state.handle_event(InputEvent::release(Action::Charge));
                    self.plan = Plan::Idle;
                }
            }
        }
    }
}

fn key(action: Action, held: bool) -> InputEvent {
    if held {
        InputEvent::press(action)
    } else {
        InputEvent::release(action)
    }
}

/// End-of-run report
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    score: u64,
    hops: u32,
    enemies: usize,
    game_over: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Duck Hop (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };

    let mut state = GameState::with_settings(&settings);
    log::info!("Game initialized with seed: {}", state.seed);

    let mut pilot = Autopilot::new();
    let dt = settings.frame_dt();
    let mut hops = 0;

    for _ in 0..settings.frames {
        pilot.step(&mut state);
        state.update(dt);

        for event in state.drain_events() {
            if let GameEvent::Launched { .. } = event {
                hops += 1;
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let summary = RunSummary {
        seed: state.seed,
        frames: state.time_ticks,
        score: state.score,
        hops,
        enemies: state.enemies.len(),
        game_over: state.is_over(),
    };
    match serde_json::to_string(&summary) {
        Ok(json) => log::info!("Run finished: {}", json),
        Err(e) => log::error!("Could not encode run summary: {}", e),
    }
}
