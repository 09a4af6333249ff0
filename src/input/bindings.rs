use serde::{Deserialize, Serialize};

use crate::input::Command;

/// Physical-key-to-command mapping, loadable alongside the rest of the host
/// configuration. Key codes are whatever numeric identifiers the host's input
/// source reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: u32,
    pub move_right: u32,
    pub jump: u32,
}

impl Default for KeyBindings {
    /// WASD-style defaults: A / D / W.
    fn default() -> Self {
        Self {
            move_left: 65,
            move_right: 68,
            jump: 87,
        }
    }
}

impl KeyBindings {
    /// Resolve a raw key code. Unmapped keys are simply ignored by the core.
    pub fn command_for(&self, key_code: u32) -> Option<Command> {
        if key_code == self.move_left {
            Some(Command::MoveLeft)
        } else if key_code == self.move_right {
            Some(Command::MoveRight)
        } else if key_code == self.jump {
            Some(Command::Jump)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_resolve() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.command_for(65), Some(Command::MoveLeft));
        assert_eq!(bindings.command_for(68), Some(Command::MoveRight));
        assert_eq!(bindings.command_for(87), Some(Command::Jump));
        assert_eq!(bindings.command_for(32), None);
    }

    #[test]
    fn bindings_are_configurable() {
        let bindings: KeyBindings =
            serde_json::from_str(r#"{ "jump": 32 }"#).unwrap();
        assert_eq!(bindings.command_for(32), Some(Command::Jump));
        assert_eq!(bindings.command_for(87), None);
        // Unlisted fields keep their defaults.
        assert_eq!(bindings.command_for(65), Some(Command::MoveLeft));
    }
}
