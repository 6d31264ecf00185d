//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied dt, one tick per frame
//! - Seeded RNG only
//! - Fixed component order within a tick
//! - No rendering or platform dependencies

pub mod aim;
pub mod control;
pub mod enemies;
pub mod projectile;
pub mod state;
pub mod targets;
pub mod tick;

pub use aim::{AimState, ChargeDirection};
pub use control::{Action, ControlState, InputEvent, Key};
pub use enemies::{Enemy, EnemyManager};
pub use projectile::{Duck, FlightState, StepOutcome};
pub use state::{GameEvent, GamePhase, GameState};
pub use targets::{Target, TargetManager};
pub use tick::tick;
