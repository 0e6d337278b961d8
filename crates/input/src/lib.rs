//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps keys to per-screen commands and tracks the
//! board cursor that turns "flip" into a concrete card id.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::BoardCursor;
pub use map::{board_command, menu_command, records_command, should_quit};
pub use map::{BoardCommand, MenuCommand, RecordsCommand};
