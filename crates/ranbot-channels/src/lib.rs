//! # ranbot-channels
//!
//! Messaging platform integrations for ranbot.

pub mod line;
