use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("invalid action code {0}, expected one of 0..=3")]
    InvalidAction(u32),
    #[error("no renderer attached, construct the environment with visualized = true")]
    RendererUnavailable,
    #[error("no environment registered under id {0:?}")]
    UnknownEnvironment(String),
    #[error("environment id {0:?} is already registered")]
    AlreadyRegistered(String),
}
