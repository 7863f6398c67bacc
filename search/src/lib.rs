mod config;
pub mod engine;

pub use config::{EngineConfig, DEFAULT_DEPTH};
pub use engine::{Engine, SearchResult};
