//! # ranbot-core
//!
//! Core types, traits, configuration, and the classify-then-compose pipeline
//! for the ranbot shop assistant.

pub mod compose;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod intent;
mod keywords_data;
pub mod locale;
pub mod message;
pub mod records;
pub mod traits;
