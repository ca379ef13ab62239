//! Fixed layout of the grid world. None of it changes after construction.

use crate::gridworld::Coord;

pub const X_BOUND: usize = 10;
pub const Y_BOUND: usize = 10;

/// Checked in this order when scoring a cell.
pub const GOALS: [Coord; 2] = [Coord::new(0, 3), Coord::new(6, 9)];

pub const START: Coord = Coord::new(9, 0);

pub const GOAL_REWARD: f32 = 10.0;
pub const STEP_REWARD: f32 = -1.0;
pub const START_REWARD: f32 = 0.0;
