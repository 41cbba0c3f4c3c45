pub mod env_keys;
pub mod service;
