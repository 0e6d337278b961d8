//! Deck module - builds the shuffled pairs for a deal
//!
//! A deck is made by choosing `total_cards / 2` distinct symbols, doubling
//! them, and shuffling the result with a uniform permutation. Cards receive
//! sequential ids in the shuffled order.
//!
//! The RNG is injected so that tests and replays can pass a seeded
//! [`GameRng`](crate::rng::GameRng) while normal play uses an entropy seed.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::card::Card;
use crate::types::{CardId, Symbol};

/// Reasons a deck cannot be built or accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("not enough symbols: need {needed} distinct symbols, got {available}")]
    InsufficientSymbols { needed: usize, available: usize },
    #[error("invalid board size {0}: must be even, non-zero, and fit the id range")]
    InvalidBoardSize(usize),
    #[error("{0} is listed more than once in the symbol set")]
    DuplicateSymbol(Symbol),
    #[error("{0} does not appear exactly twice on the board")]
    UnpairedSymbol(Symbol),
    #[error("card at index {index} has id {id}, ids must be sequential from 0")]
    NonSequentialId { index: usize, id: CardId },
    #[error("{0} has one card removed and its partner still in play")]
    SplitPair(Symbol),
}

const MAX_CARDS: usize = u16::MAX as usize + 1;

/// Build a shuffled deck of `total_cards` cards from `symbols`.
///
/// Every symbol that ends up on the board appears exactly twice. When the set
/// has more symbols than the board needs, a random subset is used.
///
/// # Errors
///
/// - [`DeckError::InvalidBoardSize`] if `total_cards` is zero or odd
/// - [`DeckError::DuplicateSymbol`] if `symbols` repeats an id
/// - [`DeckError::InsufficientSymbols`] if fewer than `total_cards / 2`
///   symbols are supplied (an empty set included)
///
/// # Examples
///
/// ```
/// use tui_memory_core::{build_deck, GameRng};
/// use tui_memory_core::types::Symbol;
///
/// let symbols = [Symbol(0), Symbol(1)];
/// let deck = build_deck(&symbols, 4, &mut GameRng::new(7)).unwrap();
/// assert_eq!(deck.len(), 4);
/// assert!(deck.iter().all(|c| c.visible && !c.flipped));
/// ```
pub fn build_deck<R: Rng + ?Sized>(
    symbols: &[Symbol],
    total_cards: usize,
    rng: &mut R,
) -> Result<Vec<Card>, DeckError> {
    if total_cards == 0 || total_cards % 2 != 0 || total_cards > MAX_CARDS {
        return Err(DeckError::InvalidBoardSize(total_cards));
    }

    let mut seen = HashSet::with_capacity(symbols.len());
    for &symbol in symbols {
        if !seen.insert(symbol) {
            return Err(DeckError::DuplicateSymbol(symbol));
        }
    }

    let pairs = total_cards / 2;
    if symbols.len() < pairs {
        return Err(DeckError::InsufficientSymbols {
            needed: pairs,
            available: symbols.len(),
        });
    }

    let chosen: Vec<Symbol> = if symbols.len() == pairs {
        symbols.to_vec()
    } else {
        symbols.choose_multiple(rng, pairs).copied().collect()
    };

    let mut faces = Vec::with_capacity(total_cards);
    faces.extend_from_slice(&chosen);
    faces.extend_from_slice(&chosen);
    faces.shuffle(rng);

    Ok(faces
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Card::new(CardId(i as u16), symbol))
        .collect())
}

/// Check that `cards` form a playable board.
///
/// The board must be non-empty and even, ids must run `0, 1, 2, ...` in
/// order, every symbol must appear on exactly two cards, and both cards of a
/// pair must be either in play or removed.
pub fn validate_deck(cards: &[Card]) -> Result<(), DeckError> {
    if cards.is_empty() || cards.len() % 2 != 0 || cards.len() > MAX_CARDS {
        return Err(DeckError::InvalidBoardSize(cards.len()));
    }

    // symbol -> (count, visible cards)
    let mut pairs: HashMap<Symbol, (u32, u32)> = HashMap::with_capacity(cards.len() / 2);
    for (index, card) in cards.iter().enumerate() {
        if card.id.index() != index {
            return Err(DeckError::NonSequentialId { index, id: card.id });
        }
        let entry = pairs.entry(card.symbol).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u32::from(card.visible);
    }

    // Report the first offending symbol in board order for a stable message.
    for card in cards {
        let (count, visible) = pairs[&card.symbol];
        if count != 2 {
            return Err(DeckError::UnpairedSymbol(card.symbol));
        }
        if visible == 1 {
            return Err(DeckError::SplitPair(card.symbol));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    fn symbols(n: u16) -> Vec<Symbol> {
        (0..n).map(Symbol).collect()
    }

    #[test]
    fn test_full_board_uses_every_symbol_twice() {
        let deck = build_deck(&symbols(18), 36, &mut GameRng::new(1)).unwrap();
        assert_eq!(deck.len(), 36);

        let mut counts = HashMap::new();
        for card in &deck {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 18);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_ids_are_sequential() {
        let deck = build_deck(&symbols(18), 36, &mut GameRng::new(2)).unwrap();
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id, CardId(i as u16));
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = build_deck(&symbols(18), 36, &mut GameRng::new(42)).unwrap();
        let b = build_deck(&symbols(18), 36, &mut GameRng::new(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_larger_symbol_set_still_pairs() {
        let deck = build_deck(&symbols(30), 8, &mut GameRng::new(5)).unwrap();
        assert_eq!(deck.len(), 8);
        assert!(validate_deck(&deck).is_ok());
    }

    #[test]
    fn test_insufficient_symbols() {
        let err = build_deck(&symbols(17), 36, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            DeckError::InsufficientSymbols {
                needed: 18,
                available: 17
            }
        );
    }

    #[test]
    fn test_empty_symbol_set() {
        let err = build_deck(&[], 36, &mut GameRng::new(1)).unwrap_err();
        assert!(matches!(
            err,
            DeckError::InsufficientSymbols { available: 0, .. }
        ));
    }

    #[test]
    fn test_odd_or_zero_board_size() {
        let mut rng = GameRng::new(1);
        assert_eq!(
            build_deck(&symbols(18), 35, &mut rng),
            Err(DeckError::InvalidBoardSize(35))
        );
        assert_eq!(
            build_deck(&symbols(18), 0, &mut rng),
            Err(DeckError::InvalidBoardSize(0))
        );
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let set = [Symbol(0), Symbol(1), Symbol(0)];
        assert_eq!(
            build_deck(&set, 4, &mut GameRng::new(1)),
            Err(DeckError::DuplicateSymbol(Symbol(0)))
        );
    }

    #[test]
    fn test_validate_rejects_unpaired_symbol() {
        let cards = vec![
            Card::new(CardId(0), Symbol(0)),
            Card::new(CardId(1), Symbol(0)),
            Card::new(CardId(2), Symbol(0)),
            Card::new(CardId(3), Symbol(1)),
        ];
        assert_eq!(
            validate_deck(&cards),
            Err(DeckError::UnpairedSymbol(Symbol(0)))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_order_ids() {
        let cards = vec![
            Card::new(CardId(1), Symbol(0)),
            Card::new(CardId(0), Symbol(0)),
        ];
        assert_eq!(
            validate_deck(&cards),
            Err(DeckError::NonSequentialId {
                index: 0,
                id: CardId(1)
            })
        );
    }

    #[test]
    fn test_validate_rejects_half_removed_pair() {
        let mut cards = vec![
            Card::new(CardId(0), Symbol(0)),
            Card::new(CardId(1), Symbol(0)),
            Card::new(CardId(2), Symbol(1)),
            Card::new(CardId(3), Symbol(1)),
        ];
        cards[1].visible = false;
        assert_eq!(validate_deck(&cards), Err(DeckError::SplitPair(Symbol(0))));

        // Removing the partner too makes the board valid again.
        cards[0].visible = false;
        assert_eq!(validate_deck(&cards), Ok(()));
    }

    #[test]
    fn test_error_message_names_counts() {
        let err = DeckError::InsufficientSymbols {
            needed: 18,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "not enough symbols: need 18 distinct symbols, got 3"
        );
    }
}
