//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Card, GameSnapshot, SymbolSet};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BOARD_COLS;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const TITLE: &str = "MEMORY GAME";
const HINT: &str = "arrows: move  enter: flip  esc: exit  q: quit";

/// Rows above the board: title, score line, blank.
const HEADER_ROWS: u16 = 3;

const BG: Rgb = Rgb::new(0, 0, 0);

/// Board renderer. Each card is drawn as a small box `card_w` x `card_h`.
/// Neighbours in a row are one column apart; rows are stacked without a gap
/// so a 6x6 board fits a 24-row terminal.
pub struct GameView {
    card_w: u16,
    card_h: u16,
    cols: u8,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 5,
            card_h: 3,
            cols: BOARD_COLS,
        }
    }
}

impl GameView {
    fn rows_for(&self, snap: &GameSnapshot) -> u16 {
        snap.cards.len().div_ceil(self.cols as usize) as u16
    }

    /// Terminal size of the board grid (without header and hint).
    pub fn board_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let cols = self.cols as u16;
        let rows = self.rows_for(snap);
        let w = cols * self.card_w + cols.saturating_sub(1);
        let h = rows * self.card_h;
        (w, h)
    }

    /// Top-left terminal position of the card at grid `(col, row)`.
    pub fn card_origin(&self, snap: &GameSnapshot, viewport: Viewport, col: u8, row: u8) -> (u16, u16) {
        let (start_x, start_y) = self.board_origin(snap, viewport);
        (
            start_x + col as u16 * (self.card_w + 1),
            start_y + row as u16 * self.card_h,
        )
    }

    fn board_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.board_size(snap);
        let total_h = HEADER_ROWS + h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(total_h) / 2 + HEADER_ROWS;
        (x, y)
    }

    /// Render the board into an existing framebuffer.
    ///
    /// `cursor` is the highlighted `(col, row)`, if any.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        symbols: &SymbolSet,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (_, board_h) = self.board_size(snap);
        let (_, start_y) = self.board_origin(snap, viewport);
        let header_y = start_y.saturating_sub(HEADER_ROWS);

        let title = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        fb.put_str_centered(0, viewport.width, header_y, TITLE, title);
        self.draw_score_line(fb, snap, viewport, header_y + 1);

        for card in &snap.cards {
            let (col, row) = card.id.grid(self.cols);
            let (x, y) = self.card_origin(snap, viewport, col, row);
            let highlighted = cursor == Some((col, row));
            self.draw_card(fb, card, symbols, snap.is_selected(card.id), highlighted, x, y);
        }

        let hint = CellStyle::new(Rgb::new(150, 150, 160), BG).dim();
        let hint_y = start_y + board_h + 1;
        if hint_y < viewport.height {
            fb.put_str_centered(0, viewport.width, hint_y, HINT, hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        symbols: &SymbolSet,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, symbols, cursor, viewport, &mut fb);
        fb
    }

    fn draw_score_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, y: u16) {
        let label = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let value = label.bold();

        // "Score: N  Moves: M", centered.
        let width = 7 + digits(snap.score) + 9 + digits(snap.moves);
        let mut x = viewport.width.saturating_sub(width) / 2;
        x = fb.put_str(x, y, "Score: ", label);
        x = fb.put_u32(x, y, snap.score, value);
        x = fb.put_str(x, y, "  Moves: ", label);
        fb.put_u32(x, y, snap.moves, value);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        card: &Card,
        symbols: &SymbolSet,
        selected: bool,
        highlighted: bool,
        x: u16,
        y: u16,
    ) {
        let frame = match (highlighted, selected) {
            (true, _) => CellStyle::new(Rgb::new(255, 220, 80), BG).bold(),
            (false, true) => CellStyle::new(Rgb::new(120, 200, 255), BG).bold(),
            (false, false) => CellStyle::new(Rgb::new(110, 110, 130), BG),
        };

        if !card.visible {
            // Matched pairs leave an empty slot; keep the cursor visible there.
            if highlighted {
                fb.draw_box(x, y, self.card_w, self.card_h, frame.dim());
            }
            return;
        }

        fb.draw_box(x, y, self.card_w, self.card_h, frame);

        let inner_w = self.card_w - 2;
        let mid_y = y + self.card_h / 2;
        if card.face_up() {
            let face = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 60, 90)).bold();
            fb.fill_rect(x + 1, y + 1, inner_w, self.card_h - 2, ' ', face);
            fb.put_str_centered(x + 1, inner_w, mid_y, symbols.label(card.symbol), face);
        } else {
            let back = CellStyle::new(Rgb::new(90, 90, 110), Rgb::new(25, 25, 35));
            fb.fill_rect(x + 1, y + 1, inner_w, self.card_h - 2, '▒', back);
        }
    }
}

fn digits(n: u32) -> u16 {
    let mut n = n;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_counts_decimal_width() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(4_000_000_000), 10);
    }

    #[test]
    fn full_board_size() {
        let snap = GameSnapshot {
            cards: vec![Card::new(crate::types::CardId(0), crate::types::Symbol(0)); 36],
            ..GameSnapshot::default()
        };
        // 6 cards of 5 columns plus 5 gaps; 6 rows of 3.
        assert_eq!(GameView::default().board_size(&snap), (35, 18));
    }
}
