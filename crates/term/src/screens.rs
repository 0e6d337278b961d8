//! Main menu and records screens.
//!
//! Both are pure functions of their inputs, like [`GameView`](crate::GameView).

use crate::core::Records;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::MenuItem;

const BG: Rgb = Rgb::new(0, 0, 0);

fn title_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), BG).bold()
}

fn text_style() -> CellStyle {
    CellStyle::new(Rgb::new(210, 210, 210), BG)
}

fn accent_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 220, 80), BG).bold()
}

fn hint_style() -> CellStyle {
    CellStyle::new(Rgb::new(150, 150, 160), BG).dim()
}

/// Render the main menu with `selected` highlighted.
pub fn render_menu_into(selected: usize, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().cell(' '));

    // Title, blank, one row per item with a blank between, blank, hint.
    let lines = 2 + MenuItem::ALL.len() as u16 * 2 + 1;
    let mut y = viewport.height.saturating_sub(lines) / 2;

    fb.put_str_centered(0, viewport.width, y, "MEMORY GAME", title_style());
    y += 2;

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let (marker, style) = if i == selected {
            ('>', accent_style())
        } else {
            (' ', text_style())
        };
        let label = item.label();
        let w = label.chars().count() as u16 + 4;
        let x = viewport.width.saturating_sub(w) / 2;
        fb.put_char(x, y, marker, style);
        fb.put_u32(x + 1, y, i as u32 + 1, style);
        fb.put_char(x + 2, y, '.', style);
        fb.put_str(x + 4, y, label, style);
        y += 2;
    }

    fb.put_str_centered(0, viewport.width, y, "enter: select  q: quit", hint_style());
}

pub fn render_menu(selected: usize, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_menu_into(selected, viewport, &mut fb);
    fb
}

/// Render the records list, numbered from 1.
///
/// `highlight` is the 0-based rank of the game that just finished, if any.
pub fn render_records_into(
    records: &Records,
    highlight: Option<usize>,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().cell(' '));

    let rows = records.len().max(1) as u16;
    let lines = 2 + rows + 2;
    let mut y = viewport.height.saturating_sub(lines) / 2;

    fb.put_str_centered(0, viewport.width, y, "RECORDS", title_style());
    y += 2;

    if records.is_empty() {
        fb.put_str_centered(0, viewport.width, y, "No records yet", hint_style());
        y += 1;
    } else {
        // "N. score", left-aligned in a centered column.
        let x = viewport.width.saturating_sub(10) / 2;
        for (i, &score) in records.entries().iter().enumerate() {
            let style = if highlight == Some(i) {
                accent_style()
            } else {
                text_style()
            };
            let cx = fb.put_u32(x, y, i as u32 + 1, style);
            let cx = fb.put_str(cx, y, ". ", style);
            fb.put_u32(cx, y, score, style);
            y += 1;
        }
    }

    y += 1;
    fb.put_str_centered(0, viewport.width, y, "enter: back", hint_style());
}

pub fn render_records(records: &Records, highlight: Option<usize>, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_records_into(records, highlight, viewport, &mut fb);
    fb
}
