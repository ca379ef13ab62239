use std::fmt;

use crate::burnrl::base::Environment;

/// What the environment hands back after `reset` or `step`.
pub struct Snapshot<E: Environment> {
    pub state: E::StateType,
    pub reward: E::RewardType,
    pub done: bool,
}

impl<E: Environment> Snapshot<E> {
    pub fn new(state: E::StateType, reward: E::RewardType, done: bool) -> Self {
        Self {
            state,
            reward,
            done,
        }
    }
}

impl<E: Environment> Clone for Snapshot<E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            reward: self.reward.clone(),
            done: self.done,
        }
    }
}

impl<E: Environment> fmt::Debug for Snapshot<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("state", &self.state)
            .field("reward", &self.reward)
            .field("done", &self.done)
            .finish()
    }
}
