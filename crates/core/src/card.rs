//! Card module - a single tile on the board

use serde::{Deserialize, Serialize};

use crate::types::{CardId, Symbol};

/// A tile with an identity, a face symbol, and two visibility flags.
///
/// `flipped` means face-up. `visible` drops to `false` once the card has been
/// matched and removed from play; a removed card never comes back within a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub flipped: bool,
    pub visible: bool,
}

impl Card {
    /// A fresh face-down card in play
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            flipped: false,
            visible: true,
        }
    }

    /// Whether a click on this card could select it
    pub fn is_selectable(&self) -> bool {
        self.visible && !self.flipped
    }

    /// Whether the face is currently shown to the player
    pub fn face_up(&self) -> bool {
        self.visible && self.flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down_and_in_play() {
        let card = Card::new(CardId(3), Symbol(1));
        assert!(!card.flipped);
        assert!(card.visible);
        assert!(card.is_selectable());
        assert!(!card.face_up());
    }

    #[test]
    fn test_removed_card_is_not_selectable() {
        let mut card = Card::new(CardId(0), Symbol(0));
        card.visible = false;
        assert!(!card.is_selectable());
        assert!(!card.face_up());
    }
}
