use crate::burnrl::base::ElemType;
use crate::gridworld::{Coord, config};

/// Immutable reward table. Goal cells pay `GOAL_REWARD`, every other cell
/// `STEP_REWARD`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x_bound: usize,
    y_bound: usize,
    goals: Vec<Coord>,
    // Row-major, x_bound * y_bound
    rewards: Vec<ElemType>,
}

impl Grid {
    pub(crate) fn new(x_bound: usize, y_bound: usize, goals: &[Coord]) -> Self {
        let mut rewards = vec![config::STEP_REWARD; x_bound * y_bound];
        for goal in goals {
            rewards[goal.row * y_bound + goal.col] = config::GOAL_REWARD;
        }

        Self {
            x_bound,
            y_bound,
            goals: goals.to_vec(),
            rewards,
        }
    }

    pub fn x_bound(&self) -> usize {
        self.x_bound
    }

    pub fn y_bound(&self) -> usize {
        self.y_bound
    }

    pub fn goals(&self) -> &[Coord] {
        &self.goals
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.x_bound && coord.col < self.y_bound
    }

    pub fn cell_reward(&self, coord: Coord) -> Option<ElemType> {
        if !self.contains(coord) {
            return None;
        }
        Some(self.rewards[coord.row * self.y_bound + coord.col])
    }

    pub fn is_goal(&self, coord: Coord) -> bool {
        self.goals.contains(&coord)
    }

    /// Rows of rewards, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[ElemType]> {
        self.rewards.chunks(self.y_bound)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(config::X_BOUND, config::Y_BOUND, &config::GOALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_goal_cells_only() {
        let grid = Grid::default();
        let goal_cells = grid
            .rows()
            .flatten()
            .filter(|&&reward| reward == config::GOAL_REWARD)
            .count();

        assert_eq!(goal_cells, 2);
        assert_eq!(grid.cell_reward(Coord::new(0, 3)), Some(10.0));
        assert_eq!(grid.cell_reward(Coord::new(6, 9)), Some(10.0));
        assert_eq!(grid.cell_reward(Coord::new(9, 0)), Some(-1.0));
        assert_eq!(grid.cell_reward(Coord::new(10, 0)), None);
    }

    #[test]
    fn has_ten_rows_of_ten() {
        let grid = Grid::default();
        assert_eq!(grid.rows().count(), 10);
        assert!(grid.rows().all(|row| row.len() == 10));
        assert!(grid.is_goal(Coord::new(0, 3)));
        assert!(!grid.is_goal(Coord::new(3, 0)));
    }
}
