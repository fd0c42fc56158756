//! Card navigation

use rand::Rng;

use crate::catalog::{Catalog, Example};
use crate::error::{CardsError, Result};

/// The card list and the index of the card on screen
pub struct Deck {
    cards: Vec<Example>,
    index: usize,
}

impl Deck {
    /// Create a deck positioned on the first card
    pub fn new(catalog: Catalog) -> Result<Self> {
        if catalog.cards.is_empty() {
            return Err(CardsError::EmptyDeck);
        }
        Ok(Self {
            cards: catalog.cards,
            index: 0,
        })
    }

    /// Card currently shown
    pub fn current(&self) -> &Example {
        &self.cards[self.index]
    }

    /// 0-based index of the current card
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Jump to a random card other than the current one.
    ///
    /// With a single card this is a no-op. Returns whether the index moved.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let len = self.cards.len();
        if len < 2 {
            return false;
        }
        // Draw from the other len-1 slots and skip over the current one
        let pick = rng.gen_range(0..len - 1);
        self.index = if pick >= self.index { pick + 1 } else { pick };
        true
    }

    /// Jump to the card with the given id
    pub fn select(&mut self, id: &str) -> Result<()> {
        let idx = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or_else(|| CardsError::NoSuchCard(id.to_string()))?;
        self.index = idx;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_card_catalog() -> Catalog {
        let mut catalog = Catalog::builtin();
        catalog.cards.truncate(1);
        catalog
    }

    #[test]
    fn test_advance_always_moves_and_visits_all() {
        let mut deck = Deck::new(Catalog::builtin()).unwrap();
        assert_eq!(deck.len(), 7);

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 7];
        seen[deck.index()] = true;

        for _ in 0..1000 {
            let before = deck.index();
            assert!(deck.advance(&mut rng));
            assert_ne!(deck.index(), before);
            assert!(deck.index() < 7);
            seen[deck.index()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_advance_single_card_is_noop() {
        let mut deck = Deck::new(single_card_catalog()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!deck.advance(&mut rng));
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn test_empty_deck_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.cards.clear();
        assert!(matches!(Deck::new(catalog), Err(CardsError::EmptyDeck)));
    }

    #[test]
    fn test_select() {
        let mut deck = Deck::new(Catalog::builtin()).unwrap();
        deck.select("5").unwrap();
        assert_eq!(deck.current().title, "Avoid Side Effects");
        assert!(deck.select("nope").is_err());
        assert_eq!(deck.index(), 4);
    }
}
