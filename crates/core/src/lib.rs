//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: dealing, flipping,
//! matching, scoring, and the records list. It has **no dependencies** on
//! terminals, input devices, or files, making it:
//!
//! - **Deterministic**: Same seed deals the same board
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can be driven by the terminal runner or headless tests
//!
//! # Module Structure
//!
//! - [`card`]: A single tile with its two flags
//! - [`deck`]: Deck builder and board validation
//! - [`game_state`]: The click/resolve state machine
//! - [`records`]: Top-5 score list
//! - [`rng`]: Seedable ChaCha8 RNG
//! - [`snapshot`]: Read-only state copies for views and observers
//! - [`symbols`]: Named card faces
//!
//! # Game Rules
//!
//! - Cards start face-down. Clicking a card flips it face-up.
//! - The second flip completes a selection. After a short delay the pair is
//!   resolved: a match scores 20 points and removes both cards, a mismatch
//!   turns both face-down again. Either way one move is counted.
//! - Clicks on removed or face-up cards, and clicks during the delay, are
//!   ignored.
//! - The game is over once every card has been removed.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Card, GameState};
//! use tui_memory_core::types::{CardId, Symbol};
//!
//! let cards = vec![
//!     Card::new(CardId(0), Symbol(0)),
//!     Card::new(CardId(1), Symbol(0)),
//! ];
//! let mut game = GameState::new(cards, 0).unwrap();
//!
//! game.handle_click(CardId(0));
//! game.handle_click(CardId(1));
//!
//! assert!(game.is_complete());
//! assert_eq!(game.final_score(), Some(20));
//! ```
//!
//! # Timing
//!
//! The resolution delay is a countdown, not a sleep. Call
//! [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time, or [`GameState::resolve`](game_state::GameState::resolve) to
//! skip the wait.

pub mod card;
pub mod deck;
pub mod game_state;
pub mod records;
pub mod rng;
pub mod snapshot;
pub mod symbols;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use card::Card;
pub use deck::{build_deck, validate_deck, DeckError};
pub use game_state::{GameState, ResolveEvent};
pub use records::Records;
pub use rng::GameRng;
pub use snapshot::{GameSnapshot, Phase};
pub use symbols::{SymbolInfo, SymbolSet};
