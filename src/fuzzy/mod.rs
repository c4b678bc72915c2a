// src/fuzzy/mod.rs

pub mod matcher;

pub use matcher::{search, MAX_FUZZY_RESULTS};
