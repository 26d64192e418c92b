use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use president_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal the whole deck one card at a time around `seats` players.
    /// Earlier seats receive the extra cards when the deck does not divide evenly.
    ///
    /// ```
    /// use president_rs::deck::Deck;
    ///
    /// let hands = Deck::standard().deal(3);
    /// assert_eq!(hands.iter().map(Vec::len).collect::<Vec<_>>(), vec![18, 17, 17]);
    /// ```
    pub fn deal(mut self, seats: usize) -> Vec<Vec<Card>> {
        let mut hands = vec![Vec::with_capacity(self.len() / seats.max(1) + 1); seats];
        if seats == 0 {
            return hands;
        }
        let mut seat = 0;
        while let Some(card) = self.draw() {
            hands[seat].push(card);
            seat = (seat + 1) % seats;
        }
        hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_hands_out_every_card_once() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let hands = d.deal(4);
        assert!(hands.iter().all(|h| h.len() == 13));
        let set: HashSet<Card> = hands.iter().flatten().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn deal_to_no_seats_is_empty() {
        assert!(Deck::standard().deal(0).is_empty());
    }
}
