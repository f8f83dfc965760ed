use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// An ordered run of the 52 distinct cards, dealt from the front.
///
/// A deck is never refilled: each hand gets a freshly shuffled one, so no
/// card can be dealt twice within a hand and `remaining()` only shrinks.
///
/// # Examples
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// assert_eq!(a.deal_n(5), b.deal_n(5));
/// assert_eq!(a.remaining(), 47);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Uniform permutation of a fresh deck drawn from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards, position: 0 }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Unshuffled deck in canonical order.
    pub fn ordered() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// Deck that deals `top` first, in the given order, followed by the rest
    /// of the 52 cards in canonical order. Used to stage known hands.
    pub fn stacked(top: &[Card]) -> Self {
        let mut cards: Vec<Card> = top.to_vec();
        cards.extend(full_deck().into_iter().filter(|c| !top.contains(c)));
        Self { cards, position: 0 }
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.deal_card()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
