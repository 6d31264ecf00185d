//! Per-frame simulation tick
//!
//! Fixed order every frame: aim/charge, flight plus target contacts, then
//! enemy drift plus enemy contact. Contacts always see the post-integration
//! duck position of the same frame.

use super::projectile::StepOutcome;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Aim and charge only while the duck is on the ground
    if !state.duck.is_airborne() {
        state.aim.apply_frame(&state.controls);
    }

    if state.controls.launch_pending {
        state.controls.launch_pending = false;
        let vel = state.duck.vel;
        if state.duck.launch(vel) {
            state.events.push(GameEvent::Launched { vel });
            log::debug!("Launched with velocity ({:.2}, {:.2})", vel.x, vel.y);
        }
    }

    if let Some(outcome) = state.duck.integrate(dt) {
        let hits = state.targets.check_and_resolve(state.duck.pos);
        for _ in 0..hits {
            state.add_point();
        }

        if outcome == StepOutcome::Landed {
            state.aim.clear_power();
            state.events.push(GameEvent::Landed { x: state.duck.pos.x });
            log::debug!("Landed at x={:.2}", state.duck.pos.x);
        }
    }

    state.enemies.advance(state.duck.pos);
    if state.enemies.check_collision(state.duck.pos) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over with score {}", state.score);
    }
}

impl GameState {
    /// Advance one frame; see [`tick`]
    pub fn update(&mut self, dt: f32) {
        tick(self, dt);
    }
}
