pub mod config;
pub mod ground;
pub mod level;
pub mod player;
pub mod sim;
