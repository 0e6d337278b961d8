//! Application shell - screens and session lifecycle.
//!
//! The core crate knows how a single deal plays out. This crate strings deals
//! together the way the player sees them: a main menu, a game board, and the
//! records screen, plus the environment configuration the runner starts from.

pub mod app;
pub mod config;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use app::{App, AppEvent, Screen};
pub use config::Config;
