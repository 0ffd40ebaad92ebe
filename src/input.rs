use log::info;

/// Logical actions the simulation understands, independent of physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Accelerate,
    Brake,
    TurnLeft,
    TurnRight,
    PickDrop,
    Restart,
}

impl InputAction {
    /// Maps a key name to its action. Matching ignores case, and accepts both
    /// browser-style (`ArrowUp`, `" "`) and SDL-style (`Up`, `Space`) names.
    pub fn from_key(key: &str) -> Option<InputAction> {
        if key == " " {
            return Some(InputAction::PickDrop);
        }

        match key.to_ascii_lowercase().as_str() {
            "arrowup" | "up" | "w" => Some(InputAction::Accelerate),
            "arrowdown" | "down" | "s" => Some(InputAction::Brake),
            "arrowleft" | "left" | "a" => Some(InputAction::TurnLeft),
            "arrowright" | "right" | "d" => Some(InputAction::TurnRight),
            "space" | "spacebar" => Some(InputAction::PickDrop),
            "r" => Some(InputAction::Restart),
            _ => None,
        }
    }
}

/// Level-triggered key state, written by event handlers and sampled once per tick.
///
/// Presses and releases are idempotent: repeating a press (key repeat) or a
/// release leaves the state unchanged, so any number of ticks may run between
/// two events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub accelerate: bool,
    pub brake: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub action: bool,
    pub restart: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) -> Option<InputAction> {
        let action = InputAction::from_key(key)?;
        self.set(action, true);
        Some(action)
    }

    pub fn release(&mut self, key: &str) -> Option<InputAction> {
        let action = InputAction::from_key(key)?;
        self.set(action, false);
        Some(action)
    }

    pub fn set(&mut self, action: InputAction, pressed: bool) {
        match action {
            InputAction::Accelerate => self.accelerate = pressed,
            InputAction::Brake => self.brake = pressed,
            InputAction::TurnLeft => self.turn_left = pressed,
            InputAction::TurnRight => self.turn_right = pressed,
            InputAction::PickDrop => self.action = pressed,
            InputAction::Restart => self.restart = pressed,
        }
    }

    pub fn is_pressed(&self, action: InputAction) -> bool {
        match action {
            InputAction::Accelerate => self.accelerate,
            InputAction::Brake => self.brake,
            InputAction::TurnLeft => self.turn_left,
            InputAction::TurnRight => self.turn_right,
            InputAction::PickDrop => self.action,
            InputAction::Restart => self.restart,
        }
    }

    /// Drops every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_any_movement_key_pressed(&self) -> bool {
        self.accelerate || self.brake || self.turn_left || self.turn_right
    }
}

pub fn print_controls() {
    info!("=== CONTROLS ===");
    info!("Arrow Up / W     accelerate");
    info!("Arrow Down / S   brake, then reverse");
    info!("Arrow Left / A   steer left");
    info!("Arrow Right / D  steer right");
    info!("Space            pick up / drop off passenger");
    info!("R                restart");
    info!("Esc              quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_are_case_insensitive() {
        assert_eq!(InputAction::from_key("ArrowUp"), Some(InputAction::Accelerate));
        assert_eq!(InputAction::from_key("arrowup"), Some(InputAction::Accelerate));
        assert_eq!(InputAction::from_key("W"), Some(InputAction::Accelerate));
        assert_eq!(InputAction::from_key("w"), Some(InputAction::Accelerate));
        assert_eq!(InputAction::from_key("R"), Some(InputAction::Restart));
        assert_eq!(InputAction::from_key("Space"), Some(InputAction::PickDrop));
        assert_eq!(InputAction::from_key(" "), Some(InputAction::PickDrop));
        assert_eq!(InputAction::from_key("Q"), None);
    }

    #[test]
    fn test_press_and_release_are_idempotent() {
        let mut input = InputState::new();
        input.press("Left");
        input.press("left");
        assert!(input.turn_left);
        input.release("LEFT");
        input.release("a");
        assert!(!input.turn_left);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut input = InputState::new();
        assert_eq!(input.press("F5"), None);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut input = InputState::new();
        input.press("w");
        input.press("d");
        input.press("space");
        assert!(input.is_any_movement_key_pressed());
        input.clear();
        assert!(!input.is_any_movement_key_pressed());
        assert!(!input.is_pressed(InputAction::PickDrop));
    }
}
