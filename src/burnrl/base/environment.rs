use std::fmt::Debug;

use crate::burnrl::base::{Action, ElemType, Snapshot, State};
use crate::error::EnvError;
use crate::render::{RenderFrame, RenderMode};

pub trait Environment: Debug + Sized {
    type StateType: State;
    type ActionType: Action;
    type RewardType: Debug + Clone + Into<ElemType>;

    const MAX_STEPS: usize = usize::MAX;

    fn new(visualized: bool) -> Self;

    fn state(&self) -> Self::StateType;

    fn reset(&mut self) -> Snapshot<Self>;

    fn step(&mut self, action: Self::ActionType) -> Snapshot<Self>;

    /// Steps with a raw action code, as handed over by an external driver.
    ///
    /// Codes outside the action set are rejected before any state changes.
    fn step_code(&mut self, code: u32) -> Result<Snapshot<Self>, EnvError> {
        let action = Self::ActionType::try_from(code)?;
        Ok(self.step(action))
    }

    fn render(&self, mode: RenderMode) -> Result<Option<RenderFrame>, EnvError>;

    fn close(&mut self) {}
}
