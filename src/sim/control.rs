//! Player intent: held keys and the launch latch
//!
//! The host translates its own key codes into [`Key`]s; bindings map them to
//! [`Action`]s. Auto-repeat is flagged on the event and dropped by the game.

use serde::{Deserialize, Serialize};

/// Host key codes, independent of the windowing system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    /// Anything the game has no binding for
    Other,
}

/// The logical actions the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    AimLeft,
    AimRight,
    /// Hold to charge, release to launch
    Charge,
}

impl Action {
    /// Key binding lookup; None for unbound keys
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowLeft => Some(Action::AimLeft),
            Key::ArrowRight => Some(Action::AimRight),
            Key::Space => Some(Action::Charge),
            Key::Other => None,
        }
    }
}

impl From<Action> for Key {
    fn from(action: Action) -> Self {
        match action {
            Action::AimLeft => Key::ArrowLeft,
            Action::AimRight => Key::ArrowRight,
            Action::Charge => Key::Space,
        }
    }
}

/// A discrete key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed { key: Key, repeat: bool },
    Released { key: Key },
}

impl InputEvent {
    pub fn press(key: impl Into<Key>) -> Self {
        InputEvent::Pressed {
            key: key.into(),
            repeat: false,
        }
    }

    pub fn release(key: impl Into<Key>) -> Self {
        InputEvent::Released { key: key.into() }
    }
}

/// Raw input state, mutated only by input events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub aim_left: bool,
    pub aim_right: bool,
    pub charge: bool,
    /// Set on charge release; consumed by the next tick
    pub launch_pending: bool,
}

impl ControlState {
    /// Any key that shows the aim indicator is held
    pub fn aiming(&self) -> bool {
        self.aim_left || self.aim_right || self.charge
    }

    /// Track a held key. Returns true if the charge key went from held to released.
    pub fn set_held(&mut self, action: Action, held: bool) -> bool {
        match action {
            Action::AimLeft => self.aim_left = held,
            Action::AimRight => self.aim_right = held,
            Action::Charge => {
                let released = self.charge && !held;
                self.charge = held;
                return released;
            }
        }
        false
    }
}
