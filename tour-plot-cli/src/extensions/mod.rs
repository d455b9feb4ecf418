//! Module provides various helper functionality.

pub mod config;
pub mod input;
