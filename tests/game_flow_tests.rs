//! Integration tests for the card-flip state machine

use tui_memory::core::{Card, GameState, Phase, SymbolSet};
use tui_memory::types::{CardId, Symbol, MATCH_SCORE, TOTAL_CARDS};

/// `[A, A, B, B]` with ids 0..4
fn aabb(delay_ms: u32) -> GameState {
    let cards = [0, 0, 1, 1]
        .iter()
        .enumerate()
        .map(|(i, &s)| Card::new(CardId(i as u16), Symbol(s)))
        .collect();
    GameState::new(cards, delay_ms).unwrap()
}

#[test]
fn test_mismatch_then_match() {
    let mut state = aabb(500);

    assert!(state.handle_click(CardId(0)));
    assert!(state.handle_click(CardId(2)));
    assert_eq!(state.phase(), Phase::Resolving);

    // Delay not yet over: both stay face-up.
    assert!(state.tick(499).is_none());
    assert!(state.card(CardId(0)).unwrap().flipped);
    assert!(state.card(CardId(2)).unwrap().flipped);

    let event = state.tick(1).unwrap();
    assert!(!event.matched);
    assert_eq!((state.score(), state.moves()), (0, 1));
    assert!(!state.card(CardId(0)).unwrap().flipped);
    assert!(!state.card(CardId(2)).unwrap().flipped);
    assert!(state.selection().is_empty());

    assert!(state.handle_click(CardId(0)));
    assert!(state.handle_click(CardId(1)));
    let event = state.tick(500).unwrap();
    assert!(event.matched);
    assert_eq!((state.score(), state.moves()), (MATCH_SCORE, 2));
    assert!(!state.card(CardId(0)).unwrap().visible);
    assert!(!state.card(CardId(1)).unwrap().visible);
    assert!(!state.is_complete());
}

#[test]
fn test_removed_card_click_is_noop() {
    let mut state = aabb(0);
    state.handle_click(CardId(0));
    state.handle_click(CardId(1));
    assert_eq!(state.score(), MATCH_SCORE);

    let before = state.snapshot();
    assert!(!state.handle_click(CardId(1)));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_third_click_ignored_while_resolving() {
    let mut state = aabb(500);
    state.handle_click(CardId(0));
    state.handle_click(CardId(2));

    assert!(!state.handle_click(CardId(3)));
    assert!(!state.card(CardId(3)).unwrap().flipped);
    assert_eq!(state.selection(), &[CardId(0), CardId(2)]);
}

#[test]
fn test_full_game_reaches_final_score() {
    let mut state = aabb(0);
    for id in [0, 2, 0, 1, 2, 3] {
        state.handle_click(CardId(id));
    }

    assert!(state.is_complete());
    assert_eq!(state.phase(), Phase::AllMatched);
    assert_eq!(state.final_score(), Some(2 * MATCH_SCORE));
    assert_eq!(state.moves(), 3);
}

#[test]
fn test_resolve_skips_delay() {
    let mut state = aabb(10_000);
    state.handle_click(CardId(2));
    state.handle_click(CardId(3));
    assert_eq!(state.resolve_remaining_ms(), 10_000);

    let event = state.resolve().unwrap();
    assert!(event.matched);
    assert_eq!(state.resolve_remaining_ms(), 0);
    assert!(state.resolve().is_none());
}

#[test]
fn test_dealt_board_is_solvable_by_symbol() {
    let symbols = SymbolSet::animals();
    let mut state = GameState::deal(&symbols.symbols(), TOTAL_CARDS, 42, 0).unwrap();
    let cards = state.cards().to_vec();

    for symbol in symbols.symbols() {
        let pair: Vec<CardId> = cards
            .iter()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.id)
            .collect();
        if pair.is_empty() {
            continue;
        }
        assert_eq!(pair.len(), 2);
        assert!(state.handle_click(pair[0]));
        assert!(state.handle_click(pair[1]));
    }

    assert_eq!(state.final_score(), Some(MATCH_SCORE * (TOTAL_CARDS as u32 / 2)));
    assert_eq!(state.moves(), TOTAL_CARDS as u32 / 2);
}

#[test]
fn test_same_seed_same_deal() {
    let symbols = SymbolSet::animals().symbols();
    let a = GameState::deal(&symbols, TOTAL_CARDS, 9, 0).unwrap();
    let b = GameState::deal(&symbols, TOTAL_CARDS, 9, 0).unwrap();
    assert_eq!(a.cards(), b.cards());
    assert_eq!(a.seed(), Some(9));
}
