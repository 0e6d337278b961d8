//! Terminal memory game runner (default binary).
//!
//! Owns the event loop: renders the current screen, maps key presses to
//! commands, and ticks the app at a fixed rate so the resolution delay runs
//! without blocking input.

use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_memory::cli::Cli;
use tui_memory::core::{GameSnapshot, SymbolSet};
use tui_memory::engine::{App, AppEvent, Config, Screen};
use tui_memory::input::{should_quit, BoardCursor};
use tui_memory::observe::{ObservedFrame, SnapshotObserver};
use tui_memory::runner::handle_key;
use tui_memory::term::{
    render_menu_into, render_records_into, FrameBuffer, GameView, TerminalRenderer, Viewport,
};
use tui_memory::types::TICK_MS;

type FileObserver = SnapshotObserver<BufWriter<File>>;

fn init_tracing(config: &Config) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // The terminal belongs to the game, so logs only ever go to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Cli::parse().apply(Config::from_env());

    init_tracing(&config)?;
    info!(
        seed = ?config.seed,
        resolve_delay_ms = config.resolve_delay_ms,
        "tui-memory starting"
    );

    let mut observer = config
        .snapshot_path
        .as_deref()
        .map(FileObserver::open)
        .transpose()?;
    let mut app = App::new(config, SymbolSet::animals());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, observer.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "runner stopped with an error");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    app: &mut App,
    mut observer: Option<&mut FileObserver>,
) -> Result<()> {
    let view = GameView::default();
    let mut cursor = BoardCursor::for_cards(app.config().total_cards);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        if let Some(game) = app.game() {
            game.snapshot_into(&mut snap);
        } else {
            snap.clear();
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match app.screen() {
            Screen::MainMenu => render_menu_into(app.menu_index(), viewport, &mut fb),
            Screen::Game => view.render_into(
                &snap,
                app.symbols(),
                Some((cursor.col(), cursor.row())),
                viewport,
                &mut fb,
            ),
            Screen::Records => {
                render_records_into(app.records(), app.last_rank(), viewport, &mut fb)
            }
        }
        term.draw(&fb)?;

        if let Some(observer) = observer.as_deref_mut() {
            observer.observe(&ObservedFrame {
                screen: app.screen().as_str(),
                game: app.game().map(|_| &snap),
                records: app.records().entries(),
            })?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    handle_key(app, &mut cursor, key)?;
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            if let Some(AppEvent::GameOver { score, moves, rank }) = app.tick(elapsed_ms) {
                info!(score, moves, ?rank, "showing records");
            }
        }
    }
}
