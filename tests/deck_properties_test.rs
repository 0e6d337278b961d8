//! Property tests for deck building and records

use std::collections::HashMap;

use proptest::prelude::*;

use tui_memory::core::{build_deck, DeckError, GameRng, Records};
use tui_memory::types::{Symbol, RECORDS_CAPACITY};

fn symbols(n: u16) -> Vec<Symbol> {
    (0..n).map(Symbol).collect()
}

proptest! {
    #[test]
    fn every_symbol_on_board_appears_twice(
        seed in any::<u64>(),
        pairs in 1usize..=18,
        extra in 0u16..6,
    ) {
        let set = symbols(pairs as u16 + extra);
        let deck = build_deck(&set, pairs * 2, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(deck.len(), pairs * 2);

        let mut counts: HashMap<Symbol, usize> = HashMap::new();
        for card in &deck {
            *counts.entry(card.symbol).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert!(counts.keys().all(|s| set.contains(s)));
    }

    #[test]
    fn ids_are_sequential_and_cards_fresh(seed in any::<u64>(), pairs in 1usize..=18) {
        let deck = build_deck(&symbols(18), pairs * 2, &mut GameRng::new(seed)).unwrap();
        for (i, card) in deck.iter().enumerate() {
            prop_assert_eq!(card.id.index(), i);
            prop_assert!(card.visible);
            prop_assert!(!card.flipped);
        }
    }

    #[test]
    fn odd_sizes_rejected(seed in any::<u64>(), half in 0usize..18) {
        let total = half * 2 + 1;
        prop_assert_eq!(
            build_deck(&symbols(18), total, &mut GameRng::new(seed)),
            Err(DeckError::InvalidBoardSize(total))
        );
    }

    #[test]
    fn records_stay_sorted_and_bounded(scores in proptest::collection::vec(0u32..200, 0..20)) {
        let records: Records = scores.iter().copied().collect();

        prop_assert!(records.len() <= RECORDS_CAPACITY);
        prop_assert_eq!(records.len(), scores.len().min(RECORDS_CAPACITY));
        prop_assert!(records.entries().windows(2).all(|w| w[0] >= w[1]));

        let mut expected = scores.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(RECORDS_CAPACITY);
        prop_assert_eq!(records.entries(), expected.as_slice());
    }
}

#[test]
fn records_keep_top_five() {
    let records: Records = [10, 50, 30, 20, 40, 5].into_iter().collect();
    assert_eq!(records.entries(), &[50, 40, 30, 20, 10]);
}
