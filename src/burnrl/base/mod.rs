mod action;
pub mod agent;
pub mod environment;
mod snapshot;
mod state;

pub use action::Action;
pub use agent::Agent;
pub use environment::Environment;
pub use snapshot::Snapshot;
pub use state::State;

pub type ElemType = f32;
