//! A fixed 10x10 grid world behind a small reinforcement-learning
//! environment interface: `reset`, `step`, `render`, `close`.

pub mod burnrl;
pub mod error;
pub mod gridworld;
pub mod logging;
pub mod registry;
pub mod render;

pub use burnrl::agent::{RandomAgent, ScriptedAgent};
pub use burnrl::base::{Action, Agent, ElemType, Environment, Snapshot, State};
pub use error::EnvError;
pub use gridworld::{Coord, ENV_ID, Grid, GridWorld, Move};
pub use registry::{Registry, default_registry};
pub use render::{RenderFrame, RenderMode, Renderer};
