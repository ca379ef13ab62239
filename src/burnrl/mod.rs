pub mod agent;
pub mod base;
