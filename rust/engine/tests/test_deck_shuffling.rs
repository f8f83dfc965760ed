use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
        assert_eq!(deck.remaining(), 51 - i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = d1.deal_n(10);
    let b: Vec<Card> = d2.deal_n(10);
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let a = Deck::new_with_seed(1).deal_n(10);
    let b = Deck::new_with_seed(2).deal_n(10);
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn consecutive_shuffles_from_one_stream_do_not_repeat() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let first = Deck::shuffled(&mut rng).deal_n(52);
    let second = Deck::shuffled(&mut rng).deal_n(52);
    assert_ne!(first, second);
}

#[test]
fn a_hand_never_needs_more_than_the_deck_holds() {
    let mut deck = Deck::new_with_seed(777);

    let p1 = deck.deal_n(2);
    let p2 = deck.deal_n(2);
    let flop = deck.deal_n(3);
    let turn = deck.deal_n(1);
    let river = deck.deal_n(1);

    let mut set = HashSet::new();
    for c in p1.iter().chain(&p2).chain(&flop).chain(&turn).chain(&river) {
        assert!(set.insert(*c));
    }
    assert_eq!(set.len(), 9);
    assert_eq!(deck.remaining(), 43);
}
