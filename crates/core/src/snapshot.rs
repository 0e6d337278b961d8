use arrayvec::ArrayVec;
use serde::Serialize;

use crate::card::Card;
use crate::types::{CardId, SELECTION_LIMIT};

/// Where the game state machine currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No card is face-up and unresolved
    #[default]
    Idle,
    /// One card is face-up, waiting for its partner
    OneSelected,
    /// Two cards are face-up and the resolution delay is running
    Resolving,
    /// Every card has been matched and removed
    AllMatched,
}

/// Read-only copy of the game state handed to views and observers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub cards: Vec<Card>,
    pub selection: ArrayVec<CardId, SELECTION_LIMIT>,
    pub phase: Phase,
    pub score: u32,
    pub moves: u32,
    pub resolve_remaining_ms: u32,
    pub complete: bool,
    pub episode_id: u32,
    pub seed: Option<u64>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.selection.clear();
        self.phase = Phase::Idle;
        self.score = 0;
        self.moves = 0;
        self.resolve_remaining_ms = 0;
        self.complete = false;
        self.episode_id = 0;
        self.seed = None;
    }

    pub fn is_selected(&self, id: CardId) -> bool {
        self.selection.contains(&id)
    }
}
