mod action;
pub mod config;
mod env;
mod grid;
mod state;

pub use action::Move;
pub use env::GridWorld;
pub use grid::Grid;
pub use state::Coord;

/// Identifier the environment is registered under.
pub const ENV_ID: &str = "customenv-v0";
