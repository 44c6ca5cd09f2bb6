//! # ranbot-providers
//!
//! Generative backends for ranbot.

pub mod openai;
