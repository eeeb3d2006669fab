use dronebay_kernel::Scene;
use std::fmt;
use std::str::FromStr;

/// A discrete control action produced by any input source.
///
/// The scene consumes actions, never raw key events, so keyboard input and
/// scripted runs drive exactly the same entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    DecreaseSpin,
    IncreaseSpin,
    TriggerRoll,
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    TurnUp,
    TurnDown,
    Reset,
    /// Switch to the camera at this index.
    SelectCamera(usize),
}

impl Action {
    /// Dispatch to the matching scene or actor entry point.
    pub fn apply(self, scene: &mut Scene) {
        tracing::trace!(action = %self, "applying action");
        match self {
            Self::DecreaseSpin => scene.actor_mut().decrease_spin(),
            Self::IncreaseSpin => scene.actor_mut().increase_spin(),
            Self::TriggerRoll => scene.actor_mut().trigger_roll(),
            Self::MoveForward => scene.actor_mut().move_forward(),
            Self::MoveBackward => scene.actor_mut().move_backward(),
            Self::TurnLeft => scene.actor_mut().turn_left(),
            Self::TurnRight => scene.actor_mut().turn_right(),
            Self::TurnUp => scene.actor_mut().turn_up(),
            Self::TurnDown => scene.actor_mut().turn_down(),
            Self::Reset => scene.actor_mut().reset(),
            Self::SelectCamera(index) => scene.select_camera(index),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecreaseSpin => f.write_str("decrease-spin"),
            Self::IncreaseSpin => f.write_str("increase-spin"),
            Self::TriggerRoll => f.write_str("roll"),
            Self::MoveForward => f.write_str("forward"),
            Self::MoveBackward => f.write_str("backward"),
            Self::TurnLeft => f.write_str("left"),
            Self::TurnRight => f.write_str("right"),
            Self::TurnUp => f.write_str("up"),
            Self::TurnDown => f.write_str("down"),
            Self::Reset => f.write_str("reset"),
            Self::SelectCamera(index) => write!(f, "camera-{}", index + 1),
        }
    }
}

/// Error returned when an action name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action `{0}`")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts the long names printed by `Display` plus the single-key
    /// shortcuts of the desktop bindings (`s`, `f`, `j`, `+`, `-`, `d`,
    /// `1`..`9`). Camera names are 1-based: `camera-1` selects index 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let action = match name.as_str() {
            "s" | "decrease-spin" => Self::DecreaseSpin,
            "f" | "increase-spin" => Self::IncreaseSpin,
            "j" | "roll" | "trigger-roll" => Self::TriggerRoll,
            "+" | "=" | "forward" | "move-forward" => Self::MoveForward,
            "-" | "backward" | "move-backward" => Self::MoveBackward,
            "left" | "turn-left" => Self::TurnLeft,
            "right" | "turn-right" => Self::TurnRight,
            "up" | "turn-up" => Self::TurnUp,
            "down" | "turn-down" => Self::TurnDown,
            "d" | "reset" => Self::Reset,
            other => {
                let number = other
                    .strip_prefix("select-camera-")
                    .or_else(|| other.strip_prefix("camera-"))
                    .unwrap_or(other);
                match number.parse::<usize>() {
                    Ok(n) if n >= 1 => Self::SelectCamera(n - 1),
                    _ => return Err(ParseActionError(s.trim().to_string())),
                }
            }
        };
        Ok(action)
    }
}
