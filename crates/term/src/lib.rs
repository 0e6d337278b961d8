//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal play. Views render
//! into a plain framebuffer, and the renderer flushes that framebuffer to a
//! crossterm backend, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Keep views pure so they can be unit-tested without a TTY
//! - Draw cards as boxes whose size is independent of the font

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{render_menu, render_menu_into, render_records, render_records_into};
