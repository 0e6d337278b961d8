//! Core types module - shared ids and constants
//!
//! This module defines the small value types used throughout the application.
//! Everything here is plain data, usable from the core rules, the terminal
//! views, and the snapshot observer alike.
//!
//! # Board Dimensions
//!
//! The classic board is a 6x6 grid:
//!
//! - **Columns**: 6 (indexed 0-5)
//! - **Rows**: 6 (indexed 0-5)
//! - **Cards**: 36, i.e. 18 pairs
//!
//! Card ids are assigned row-major in deal order, so the card at
//! `(col, row)` has id `row * BOARD_COLS + col`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `RESOLVE_DELAY_MS` | 500 | Pause between the second flip and scoring |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CardId, BOARD_COLS, TOTAL_CARDS};
//!
//! let id = CardId::from_grid(2, 1, BOARD_COLS);
//! assert_eq!(id, CardId(8));
//! assert_eq!(id.grid(BOARD_COLS), (2, 1));
//!
//! assert_eq!(TOTAL_CARDS, 36);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cards (6 columns)
pub const BOARD_COLS: u8 = 6;

/// Board height in cards (6 rows)
pub const BOARD_ROWS: u8 = 6;

/// Number of cards dealt on a full board
pub const TOTAL_CARDS: usize = BOARD_COLS as usize * BOARD_ROWS as usize;

/// Points awarded for each matched pair
pub const MATCH_SCORE: u32 = 20;

/// Pause between completing a selection and scoring it (500ms)
pub const RESOLVE_DELAY_MS: u32 = 500;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of scores kept in the records list
pub const RECORDS_CAPACITY: usize = 5;

/// Maximum number of cards a selection can hold
pub const SELECTION_LIMIT: usize = 2;

/// Stable identity of a card for one deal.
///
/// Ids are dense and sequential from 0, which lets the board index cards
/// directly by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u16);

impl CardId {
    /// Board index of this card.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Row-major id of the card at `(col, row)`.
    pub fn from_grid(col: u8, row: u8, cols: u8) -> Self {
        CardId(row as u16 * cols as u16 + col as u16)
    }

    /// `(col, row)` of this card on a board `cols` wide.
    pub fn grid(self, cols: u8) -> (u8, u8) {
        let cols = cols.max(1) as u16;
        ((self.0 % cols) as u8, (self.0 / cols) as u8)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a card face.
///
/// Two cards match when their symbols are equal. The display name and label
/// of a symbol live in the symbol set it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub u16);

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "symbol {}", self.0)
    }
}

/// Cursor movement on the board or in a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column/row delta of one step in this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    /// Deal a new board and start playing
    StartGame,
    /// Show the records list
    Records,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::StartGame, MenuItem::Records];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::StartGame => "Start game",
            MenuItem::Records => "Records",
        }
    }
}
