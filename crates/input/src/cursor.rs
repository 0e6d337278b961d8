//! Board cursor - which card a flip command targets.

use crate::types::{CardId, Direction, BOARD_COLS, BOARD_ROWS};

/// Highlighted cell on the board grid.
///
/// Movement wraps around the edges, so every card is reachable from every
/// other one without dead ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    col: u8,
    row: u8,
    cols: u8,
    rows: u8,
}

impl BoardCursor {
    /// Cursor at the top-left of a `cols` x `rows` grid.
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            col: 0,
            row: 0,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Cursor sized for a board of `total_cards`, `BOARD_COLS` wide.
    pub fn for_cards(total_cards: usize) -> Self {
        let cols = BOARD_COLS as usize;
        let rows = total_cards.div_ceil(cols).min(u8::MAX as usize);
        Self::new(BOARD_COLS, rows as u8)
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn move_by(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        self.col = wrap(self.col, dx, self.cols);
        self.row = wrap(self.row, dy, self.rows);
    }

    /// Card under the cursor
    pub fn card_id(&self) -> CardId {
        CardId::from_grid(self.col, self.row, self.cols)
    }

    pub fn reset(&mut self) {
        self.col = 0;
        self.row = 0;
    }
}

impl Default for BoardCursor {
    fn default() -> Self {
        Self::new(BOARD_COLS, BOARD_ROWS)
    }
}

fn wrap(value: u8, delta: i8, len: u8) -> u8 {
    let len = len as i16;
    ((value as i16 + delta as i16).rem_euclid(len)) as u8
}
