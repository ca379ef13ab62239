use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::burnrl::base::{Action, Agent, Environment};

/// Samples uniformly from the action set on every call.
#[derive(Debug)]
pub struct RandomAgent<E: Environment> {
    _env: PhantomData<E>,
}

impl<E: Environment> RandomAgent<E> {
    pub fn new() -> Self {
        Self { _env: PhantomData }
    }
}

impl<E: Environment> Default for RandomAgent<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> Agent<E> for RandomAgent<E> {
    fn react(&mut self, _state: &E::StateType) -> Option<E::ActionType> {
        Some(E::ActionType::random())
    }
}

/// Replays a fixed list of actions, then stops.
#[derive(Debug)]
pub struct ScriptedAgent<E: Environment> {
    script: VecDeque<E::ActionType>,
}

impl<E: Environment> ScriptedAgent<E> {
    pub fn new(script: impl IntoIterator<Item = E::ActionType>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<E: Environment> Agent<E> for ScriptedAgent<E> {
    fn react(&mut self, _state: &E::StateType) -> Option<E::ActionType> {
        self.script.pop_front()
    }
}
