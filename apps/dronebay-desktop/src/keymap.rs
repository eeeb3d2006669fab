use dronebay_input::Action;
use winit::keyboard::KeyCode;

/// Map a physical key to its control action.
///
/// S/F change rotor speed, J rolls, plus/minus (main row or keypad) move,
/// arrows turn, D resets and 1-3 pick the camera.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::KeyS => Action::DecreaseSpin,
        KeyCode::KeyF => Action::IncreaseSpin,
        KeyCode::KeyJ => Action::TriggerRoll,
        KeyCode::Equal | KeyCode::NumpadAdd => Action::MoveForward,
        KeyCode::Minus | KeyCode::NumpadSubtract => Action::MoveBackward,
        KeyCode::ArrowLeft => Action::TurnLeft,
        KeyCode::ArrowRight => Action::TurnRight,
        KeyCode::ArrowUp => Action::TurnUp,
        KeyCode::ArrowDown => Action::TurnDown,
        KeyCode::KeyD => Action::Reset,
        KeyCode::Digit1 => Action::SelectCamera(0),
        KeyCode::Digit2 => Action::SelectCamera(1),
        KeyCode::Digit3 => Action::SelectCamera(2),
        _ => return None,
    };
    Some(action)
}

pub const KEY_HELP: &str = "S/F: spin -/+ | J: roll | +/-: move | arrows: turn | D: reset | 1-3: camera | F1: HUD";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_plus_keys_move_forward() {
        assert_eq!(action_for_key(KeyCode::Equal), Some(Action::MoveForward));
        assert_eq!(action_for_key(KeyCode::NumpadAdd), Some(Action::MoveForward));
    }

    #[test]
    fn digits_select_zero_based_cameras() {
        assert_eq!(action_for_key(KeyCode::Digit1), Some(Action::SelectCamera(0)));
        assert_eq!(action_for_key(KeyCode::Digit3), Some(Action::SelectCamera(2)));
        assert_eq!(action_for_key(KeyCode::Digit4), None);
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(action_for_key(KeyCode::KeyQ), None);
        assert_eq!(action_for_key(KeyCode::F1), None);
    }
}
