//! Domain layer: lock file model and the pure services that map it to components.

pub mod domain;
pub mod services;
