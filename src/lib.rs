// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod errors;
pub mod fuzzy;
pub mod serve;

pub use crate::config::EngineConfig;
pub use crate::core::engine::{
    LanguageModel, ModelBuilder, SuggestEngine, SuggestResponse, SuggestState,
};
pub use crate::core::types::Suggestion;
pub use crate::errors::BuildError;
