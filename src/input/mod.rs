pub mod bindings;
pub mod latch;

/// Raw input events the core understands. The host delivers these as
/// discrete transitions; mapping physical keys to logical commands is
/// configuration (`KeyBindings`), not core logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// The three logical commands the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Jump,
}
