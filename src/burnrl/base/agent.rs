use crate::burnrl::base::environment::Environment;

/// Picks the next action for an environment. `None` means the agent gives up
/// on the episode.
pub trait Agent<E: Environment> {
    fn react(&mut self, state: &E::StateType) -> Option<E::ActionType>;
}
