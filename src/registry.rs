use std::collections::BTreeMap;

use tracing::info;

use crate::burnrl::base::Environment;
use crate::error::EnvError;
use crate::gridworld::{ENV_ID, GridWorld};

pub type Factory<E> = fn(bool) -> E;

/// Maps environment ids to constructors so drivers can build them by name.
#[derive(Debug)]
pub struct Registry<E: Environment> {
    factories: BTreeMap<String, Factory<E>>,
}

impl<E: Environment> Registry<E> {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, id: &str, factory: Factory<E>) -> Result<(), EnvError> {
        if self.factories.contains_key(id) {
            return Err(EnvError::AlreadyRegistered(id.to_owned()));
        }
        self.factories.insert(id.to_owned(), factory);
        info!(id, "registered environment");
        Ok(())
    }

    pub fn make(&self, id: &str, visualized: bool) -> Result<E, EnvError> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| EnvError::UnknownEnvironment(id.to_owned()))?;
        Ok(factory(visualized))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl<E: Environment> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the grid world under [`ENV_ID`].
pub fn default_registry() -> Registry<GridWorld> {
    let mut registry = Registry::new();
    registry
        .factories
        .insert(ENV_ID.to_owned(), <GridWorld as Environment>::new);
    registry
}
