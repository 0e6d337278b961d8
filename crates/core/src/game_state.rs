//! Game state module - the card-flip state machine
//!
//! The state machine owns the board, the current selection, and the score and
//! move counters. It is driven entirely by the caller:
//!
//! - [`GameState::handle_click`] flips a card and, on the second card of a
//!   pair, starts the resolution delay
//! - [`GameState::tick`] advances that delay and resolves the pair when it
//!   expires
//! - [`GameState::resolve`] resolves a pending pair immediately
//!
//! Illegal clicks are silent no-ops. They return `false` and leave the state
//! untouched.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::card::Card;
use crate::deck::{build_deck, validate_deck, DeckError};
use crate::rng::GameRng;
use crate::snapshot::{GameSnapshot, Phase};
use crate::types::{CardId, Symbol, MATCH_SCORE, SELECTION_LIMIT};

/// Outcome of one resolved pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolveEvent {
    pub first: CardId,
    pub second: CardId,
    pub matched: bool,
    /// Score after this resolution
    pub score: u32,
    /// Move count after this resolution
    pub moves: u32,
    /// Whether this resolution removed the last pair
    pub complete: bool,
}

/// Complete game state for one deal
#[derive(Debug, Clone)]
pub struct GameState {
    cards: Vec<Card>,
    selection: ArrayVec<CardId, SELECTION_LIMIT>,
    score: u32,
    moves: u32,
    /// Set while a full selection waits for resolution.
    resolving: bool,
    resolve_delay_ms: u32,
    resolve_timer_ms: u32,
    /// Monotonic id of this deal within the app session.
    episode_id: u32,
    /// Seed the deck was shuffled with, if it was dealt here.
    seed: Option<u64>,
    /// Last resolution outcome (consumed by observers).
    last_event: Option<ResolveEvent>,
}

impl GameState {
    /// Start a game on an existing deck.
    ///
    /// Cards already removed stay removed; face-up cards are turned face-down
    /// since no selection carries over.
    pub fn new(mut cards: Vec<Card>, resolve_delay_ms: u32) -> Result<Self, DeckError> {
        validate_deck(&cards)?;
        for card in &mut cards {
            card.flipped = false;
        }

        Ok(Self {
            cards,
            selection: ArrayVec::new(),
            score: 0,
            moves: 0,
            resolving: false,
            resolve_delay_ms,
            resolve_timer_ms: 0,
            episode_id: 0,
            seed: None,
            last_event: None,
        })
    }

    /// Deal a fresh shuffled board of `total_cards` cards.
    pub fn deal(
        symbols: &[Symbol],
        total_cards: usize,
        seed: u64,
        resolve_delay_ms: u32,
    ) -> Result<Self, DeckError> {
        let mut rng = GameRng::new(seed);
        let cards = build_deck(symbols, total_cards, &mut rng)?;
        let mut state = Self::new(cards, resolve_delay_ms)?;
        state.seed = Some(seed);

        info!(seed, total_cards, resolve_delay_ms, "dealt new board");
        Ok(state)
    }

    pub fn with_episode_id(mut self, episode_id: u32) -> Self {
        self.episode_id = episode_id;
        self
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn resolve_delay_ms(&self) -> u32 {
        self.resolve_delay_ms
    }

    /// Time left before the pending pair is resolved (0 when none is pending)
    pub fn resolve_remaining_ms(&self) -> u32 {
        self.resolve_timer_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::AllMatched
        } else if self.resolving {
            Phase::Resolving
        } else if self.selection.len() == 1 {
            Phase::OneSelected
        } else {
            Phase::Idle
        }
    }

    /// True iff no card is left in play.
    ///
    /// A selected card is still visible, so this can never flip to true while
    /// a pair is half-picked or waiting for resolution.
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| !c.visible)
    }

    /// Final score once every pair is matched
    pub fn final_score(&self) -> Option<u32> {
        self.is_complete().then_some(self.score)
    }

    pub fn take_last_event(&mut self) -> Option<ResolveEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend_from_slice(&self.cards);
        out.selection.clear();
        out.selection.extend(self.selection.iter().copied());
        out.phase = self.phase();
        out.score = self.score;
        out.moves = self.moves;
        out.resolve_remaining_ms = self.resolve_timer_ms;
        out.complete = self.is_complete();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Flip `id` face-up and add it to the selection.
    ///
    /// Returns `false` without touching the state when two cards are already
    /// selected, a pair is resolving, or the card is unknown, face-up, or
    /// already removed. Completing a pair starts the resolution delay; with a
    /// zero delay the pair is resolved before this returns.
    pub fn handle_click(&mut self, id: CardId) -> bool {
        if self.selection.is_full() || self.resolving {
            return false;
        }

        let Some(card) = self.cards.get_mut(id.index()) else {
            return false;
        };
        if !card.is_selectable() {
            return false;
        }

        card.flipped = true;
        self.selection.push(id);
        trace!(card = id.0, selected = self.selection.len(), "card flipped");

        if self.selection.is_full() {
            self.resolving = true;
            self.resolve_timer_ms = self.resolve_delay_ms;
            if self.resolve_delay_ms == 0 {
                self.resolve();
            }
        }

        true
    }

    /// Advance the resolution delay by `elapsed_ms`.
    ///
    /// Returns the resolution outcome on the tick the delay runs out.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<ResolveEvent> {
        if !self.resolving {
            return None;
        }

        self.resolve_timer_ms = self.resolve_timer_ms.saturating_sub(elapsed_ms);
        if self.resolve_timer_ms > 0 {
            return None;
        }

        self.resolve()
    }

    /// Resolve the pending pair now, skipping whatever delay is left.
    ///
    /// Counts a move, scores and removes a matching pair or turns a
    /// mismatched pair face-down, then clears the selection. Returns `None`
    /// when no pair is pending.
    pub fn resolve(&mut self) -> Option<ResolveEvent> {
        if !self.resolving {
            return None;
        }
        let (first, second) = match self.selection.as_slice() {
            &[first, second] => (first, second),
            _ => return None,
        };

        let matched = self.cards[first.index()].symbol == self.cards[second.index()].symbol;
        self.moves += 1;

        for id in [first, second] {
            let card = &mut self.cards[id.index()];
            if matched {
                card.visible = false;
            } else {
                card.flipped = false;
            }
        }
        if matched {
            self.score += MATCH_SCORE;
        }

        self.selection.clear();
        self.resolving = false;
        self.resolve_timer_ms = 0;

        let complete = self.is_complete();
        let event = ResolveEvent {
            first,
            second,
            matched,
            score: self.score,
            moves: self.moves,
            complete,
        };
        self.last_event = Some(event);

        debug!(
            first = first.0,
            second = second.0,
            matched,
            score = self.score,
            moves = self.moves,
            "pair resolved"
        );
        if complete {
            info!(score = self.score, moves = self.moves, "all pairs matched");
        }

        Some(event)
    }
}
