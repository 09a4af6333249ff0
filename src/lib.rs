pub mod core;
pub mod input;
pub mod runner;

// Re-export key types at crate root for convenience
pub use crate::core::config::{ConfigError, SimConfig};
pub use crate::core::ground::find_support;
pub use crate::core::level::{Level, Platform};
pub use crate::core::player::Player;
pub use crate::core::sim::Simulation;
pub use crate::input::bindings::KeyBindings;
pub use crate::input::latch::{InputLatch, InputState};
pub use crate::input::{Command, InputEvent};
pub use crate::runner::clock::{FrameClock, FrameHandle, ManualClock};
pub use crate::runner::driver::LoopDriver;
pub use crate::runner::Runner;
