use tracing::{debug, info};

use crate::burnrl::base::{ElemType, Environment, Snapshot};
use crate::error::EnvError;
use crate::gridworld::{Coord, Grid, Move, config};
use crate::render::{BoardRenderer, GridView, RenderFrame, RenderMode, Renderer};

/// Deterministic single-agent grid world.
///
/// The agent starts at `(9, 0)` and is paid `-1` per step until it lands on
/// one of the goal cells `(0, 3)` or `(6, 9)`, which pays `10` and ends the
/// episode.
#[derive(Debug)]
pub struct GridWorld {
    grid: Grid,
    agent: Coord,
    reward: ElemType,
    done: bool,
    renderer: Option<Box<dyn Renderer>>,
}

impl GridWorld {
    /// Attaches a rendering backend, replacing the current one.
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn reward(&self) -> ElemType {
        self.reward
    }

    pub fn done(&self) -> bool {
        self.done
    }

    /// Next cell after moving one step from `from`. Does not touch the agent.
    ///
    /// A move that leaves the grid is pulled back by one cell on the axis
    /// that overflowed.
    pub fn transition(&self, from: Coord, action: Move) -> Coord {
        let (dr, dc) = action.delta();
        Coord {
            row: normalise(from.row as isize + dr, self.grid.x_bound()),
            col: normalise(from.col as isize + dc, self.grid.y_bound()),
        }
    }

    /// Reward for occupying `coord`: goal reward if it is any goal cell,
    /// step reward otherwise.
    pub fn score(&self, coord: Coord) -> ElemType {
        if self.grid.is_goal(coord) {
            config::GOAL_REWARD
        } else {
            config::STEP_REWARD
        }
    }

    #[cfg(test)]
    pub(crate) fn place_agent(&mut self, coord: Coord) {
        self.agent = coord;
    }
}

fn normalise(value: isize, bound: usize) -> usize {
    let upper = bound as isize - 1;
    let value = if value > upper {
        value - 1
    } else if value < 0 {
        value + 1
    } else {
        value
    };
    value as usize
}

impl Environment for GridWorld {
    type StateType = Coord;
    type ActionType = Move;
    type RewardType = ElemType;

    const MAX_STEPS: usize = 200;

    fn new(visualized: bool) -> Self {
        let renderer: Option<Box<dyn Renderer>> = if visualized {
            Some(Box::new(BoardRenderer::default()))
        } else {
            None
        };

        Self {
            grid: Grid::default(),
            agent: config::START,
            reward: config::START_REWARD,
            done: false,
            renderer,
        }
    }

    fn state(&self) -> Self::StateType {
        self.agent
    }

    fn reset(&mut self) -> Snapshot<Self> {
        self.agent = config::START;
        self.reward = config::START_REWARD;
        self.done = false;
        info!(agent = %self.agent, "episode reset");

        Snapshot::new(self.agent, self.reward, self.done)
    }

    fn step(&mut self, action: Self::ActionType) -> Snapshot<Self> {
        if self.done {
            debug!(agent = %self.agent, "stepping an episode that already reached a goal");
        }

        self.agent = self.transition(self.agent, action);
        self.reward = self.score(self.agent);
        if self.reward == config::GOAL_REWARD {
            self.done = true;
        }
        debug!(?action, agent = %self.agent, reward = self.reward, done = self.done, "step");

        Snapshot::new(self.agent, self.reward, self.done)
    }

    fn render(&self, mode: RenderMode) -> Result<Option<RenderFrame>, EnvError> {
        let renderer = self
            .renderer
            .as_ref()
            .ok_or(EnvError::RendererUnavailable)?;
        let view = GridView {
            grid: &self.grid,
            agent: self.agent,
        };
        let frame = renderer.frame(&view, mode);

        match (mode, frame) {
            (RenderMode::Human, RenderFrame::Text(text)) => {
                println!("{text}");
                Ok(None)
            }
            (RenderMode::Human, _) => Ok(None),
            (_, frame) => Ok(Some(frame)),
        }
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_at(row: usize, col: usize) -> GridWorld {
        let mut env = GridWorld::new(false);
        env.place_agent(Coord::new(row, col));
        env
    }

    #[test]
    fn starts_outside_any_goal() {
        let env = GridWorld::new(false);
        assert_eq!(env.state(), Coord::new(9, 0));
        assert_eq!(env.reward(), 0.0);
        assert!(!env.done());
        assert!(!env.grid().is_goal(env.state()));
    }

    #[test]
    fn transition_moves_along_one_axis() {
        let env = GridWorld::new(false);
        let here = Coord::new(4, 4);
        assert_eq!(env.transition(here, Move::South), Coord::new(3, 4));
        assert_eq!(env.transition(here, Move::North), Coord::new(5, 4));
        assert_eq!(env.transition(here, Move::East), Coord::new(4, 5));
        assert_eq!(env.transition(here, Move::West), Coord::new(4, 3));
    }

    #[test]
    fn transition_stays_put_at_walls() {
        let env = GridWorld::new(false);
        assert_eq!(env.transition(Coord::new(0, 5), Move::South), Coord::new(0, 5));
        assert_eq!(env.transition(Coord::new(9, 5), Move::North), Coord::new(9, 5));
        assert_eq!(env.transition(Coord::new(5, 9), Move::East), Coord::new(5, 9));
        assert_eq!(env.transition(Coord::new(5, 0), Move::West), Coord::new(5, 0));
    }

    #[test]
    fn transition_does_not_touch_the_agent() {
        let env = GridWorld::new(false);
        let _ = env.transition(Coord::new(1, 3), Move::South);
        assert_eq!(env.state(), Coord::new(9, 0));
    }

    #[test]
    fn scores_every_goal_regardless_of_order() {
        let env = GridWorld::new(false);
        assert_eq!(env.score(Coord::new(0, 3)), 10.0);
        assert_eq!(env.score(Coord::new(6, 9)), 10.0);
        assert_eq!(env.score(Coord::new(0, 4)), -1.0);
        assert_eq!(env.score(Coord::new(6, 8)), -1.0);
        assert_eq!(env.score(Coord::new(9, 0)), -1.0);
    }

    #[test]
    fn reaching_a_goal_ends_the_episode() {
        let mut env = env_at(1, 3);
        let snapshot = env.step(Move::South);
        assert_eq!(snapshot.state, Coord::new(0, 3));
        assert_eq!(snapshot.reward, 10.0);
        assert!(snapshot.done);
    }

    #[test]
    fn stepping_after_done_keeps_moving() {
        let mut env = env_at(1, 3);
        env.step(Move::South);

        let snapshot = env.step(Move::East);
        assert_eq!(snapshot.state, Coord::new(0, 4));
        assert_eq!(snapshot.reward, -1.0);
        assert!(snapshot.done);
    }

    #[test]
    fn invalid_code_leaves_state_alone() {
        let mut env = env_at(4, 4);
        let err = env.step_code(7).unwrap_err();
        assert_eq!(err, EnvError::InvalidAction(7));
        assert_eq!(env.state(), Coord::new(4, 4));
        assert_eq!(env.reward(), 0.0);
        assert!(!env.done());
    }

    #[derive(Debug)]
    struct AgentOnly;

    impl Renderer for AgentOnly {
        fn frame(&self, view: &GridView<'_>, _mode: RenderMode) -> RenderFrame {
            RenderFrame::Text(view.agent.to_string())
        }
    }

    #[test]
    fn custom_renderer_replaces_missing_one() {
        let env = GridWorld::new(false).with_renderer(Box::new(AgentOnly));
        assert_eq!(
            env.render(RenderMode::Ansi).unwrap(),
            Some(RenderFrame::Text("(9, 0)".to_string()))
        );
    }

    #[test]
    fn render_without_renderer_fails() {
        let env = GridWorld::new(false);
        assert_eq!(
            env.render(RenderMode::Ansi).unwrap_err(),
            EnvError::RendererUnavailable
        );
    }

    #[test]
    fn render_does_not_change_state() {
        let mut env = GridWorld::new(true);
        env.step(Move::North);
        let before = env.state();

        let frame = env.render(RenderMode::Ansi).unwrap();
        assert!(matches!(frame, Some(RenderFrame::Text(_))));
        assert!(env.render(RenderMode::Human).unwrap().is_none());
        assert_eq!(env.state(), before);
    }
}
