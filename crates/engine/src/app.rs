//! App module - screens, sessions, and the records list
//!
//! `App` is the shell around the game state machine. It decides which screen
//! is showing, deals a board when a game starts, feeds the final score into the
//! records when a game completes, and drops the session on exit.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::core::{GameRng, GameState, Records, SymbolSet};
use crate::types::{CardId, MenuItem};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    MainMenu,
    Game,
    Records,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::MainMenu => "main_menu",
            Screen::Game => "game",
            Screen::Records => "records",
        }
    }
}

/// Notable app-level transitions reported by [`App::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Every pair was matched; the score went into the records.
    GameOver {
        score: u32,
        moves: u32,
        /// 0-based position in the records, if the score made the list.
        rank: Option<usize>,
    },
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    menu_index: usize,
    records: Records,
    game: Option<GameState>,
    symbols: SymbolSet,
    rng: GameRng,
    config: Config,
    /// Number of games dealt so far.
    episodes: u32,
    /// Rank of the most recently finished game, for highlighting.
    last_rank: Option<usize>,
}

impl App {
    pub fn new(config: Config, symbols: SymbolSet) -> Self {
        let rng = config.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
        info!(seed = rng.seed(), symbols = symbols.len(), "app created");

        Self {
            screen: Screen::MainMenu,
            menu_index: 0,
            records: Records::new(),
            game: None,
            symbols,
            rng,
            config,
            episodes: 0,
            last_rank: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index]
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    /// Run the highlighted menu entry
    pub fn menu_activate(&mut self) -> Result<()> {
        match self.menu_item() {
            MenuItem::StartGame => self.start_game(),
            MenuItem::Records => {
                self.open_records();
                Ok(())
            }
        }
    }

    /// Deal a new board and switch to the game screen.
    pub fn start_game(&mut self) -> Result<()> {
        let seed = self.rng.next_deal_seed();
        let game = GameState::deal(
            &self.symbols.symbols(),
            self.config.total_cards,
            seed,
            self.config.resolve_delay_ms,
        )
        .with_context(|| {
            format!(
                "failed to deal {} cards from {} symbols",
                self.config.total_cards,
                self.symbols.len()
            )
        })?;

        self.episodes = self.episodes.wrapping_add(1);
        self.game = Some(game.with_episode_id(self.episodes));
        self.last_rank = None;
        self.set_screen(Screen::Game);
        Ok(())
    }

    pub fn open_records(&mut self) {
        self.set_screen(Screen::Records);
    }

    pub fn back_to_menu(&mut self) {
        self.set_screen(Screen::MainMenu);
    }

    /// Abort the running game without recording a score.
    pub fn exit_game(&mut self) {
        if let Some(game) = self.game.take() {
            info!(
                episode = game.episode_id(),
                score = game.score(),
                moves = game.moves(),
                "game abandoned"
            );
        }
        self.set_screen(Screen::MainMenu);
    }

    /// Forward a click to the running game.
    ///
    /// Completion is reported by the next [`App::tick`].
    pub fn click(&mut self, id: CardId) -> bool {
        if self.screen != Screen::Game {
            return false;
        }
        self.game.as_mut().is_some_and(|g| g.handle_click(id))
    }

    /// Advance the running game and finish it once every pair is matched.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<AppEvent> {
        if self.screen != Screen::Game {
            return None;
        }
        let game = self.game.as_mut()?;
        game.tick(elapsed_ms);

        let score = game.final_score()?;
        let moves = game.moves();
        let episode = game.episode_id();
        self.game = None;

        let rank = self.records.record(score);
        self.last_rank = rank;
        info!(episode, score, moves, ?rank, "game finished");
        self.set_screen(Screen::Records);

        Some(AppEvent::GameOver { score, moves, rank })
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            info!(from = self.screen.as_str(), to = screen.as_str(), "screen changed");
        }
        self.screen = screen;
    }
}
