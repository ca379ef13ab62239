use std::fmt::Debug;

use rand::{Rng, rng};

use crate::error::EnvError;

pub trait Action: Debug + Copy + Clone + TryFrom<u32, Error = EnvError> + Into<u32> {
    fn random() -> Self {
        let actions = Self::enumerate();
        actions[rng().random_range(0..actions.len())]
    }

    fn enumerate() -> Vec<Self>;

    fn size() -> usize {
        Self::enumerate().len()
    }
}
