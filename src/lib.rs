//! TUI Memory (workspace facade crate).
//!
//! This package exposes `tui_memory::{core,engine,input,term,types}` as one
//! public API while the implementation lives in dedicated crates under
//! `crates/`. The runner pieces (argument parsing, key dispatch and the
//! snapshot observer) live here.

pub mod cli;
pub mod observe;
pub mod runner;

pub use tui_memory_core as core;
pub use tui_memory_engine as engine;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
