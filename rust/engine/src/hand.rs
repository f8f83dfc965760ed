use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::HandError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Best five-card value of a card set. Ordering compares the category
/// first, then the kickers high to low; equal values are a true tie.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Ranks the best five-card hand found in `cards` (hole cards plus board).
///
/// Stateless and safe to call from any thread.
///
/// # Errors
///
/// - [`HandError::TooFewCards`] when fewer than five cards are given
/// - [`HandError::DuplicateCard`] when the same card appears twice
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::Card;
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let cards: Vec<Card> = ["Ah", "2c", "3d", "4s", "5h", "Kc", "Kd"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let strength = evaluate_hand(&cards).unwrap();
/// assert_eq!(strength.category, Category::Straight);
/// assert_eq!(strength.kickers[0], 5);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, HandError> {
    if cards.len() < 5 {
        return Err(HandError::TooFewCards { count: cards.len() });
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(HandError::DuplicateCard(c));
        }
    }

    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut rank_mask: u16 = 0;
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    let mut by_suit_mask = [0u16; 4];
    for &c in cards {
        let r = rank_val(c.rank);
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        let s = suit_index(c.suit);
        by_suit[s].push(r);
        by_suit_mask[s] |= 1 << r;
    }

    let flush_suit = by_suit.iter().position(|ranks| ranks.len() >= 5);

    // Straight flush
    if let Some(s) = flush_suit {
        if let Some(high) = straight_high_from_mask(by_suit_mask[s]) {
            return Ok(HandStrength {
                category: Category::StraightFlush,
                kickers: [high, 0, 0, 0, 0],
            });
        }
    }

    // Four of a kind
    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return Ok(HandStrength {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        });
    }

    // Full house
    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return Ok(HandStrength {
            category: Category::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        });
    }

    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let mut k = [0u8; 5];
        k.copy_from_slice(&ranks[..5]);
        return Ok(HandStrength {
            category: Category::Flush,
            kickers: k,
        });
    }

    if let Some(high) = straight_high_from_mask(rank_mask) {
        return Ok(HandStrength {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        });
    }

    // Three / Two pair / One pair / High card
    let (trip_ranks, pair_ranks, singles) = classify_multiples(&rank_counts);
    if let Some(t) = trip_ranks.first().copied() {
        let rest = kickers_excluding(&rank_counts, &[t]);
        return Ok(HandStrength {
            category: Category::ThreeOfAKind,
            kickers: fill_kickers(&[t], &rest, 2),
        });
    }
    if pair_ranks.len() >= 2 {
        let (high, low) = (pair_ranks[0], pair_ranks[1]);
        // a third pair still counts as a kicker candidate
        let rest = kickers_excluding(&rank_counts, &[high, low]);
        return Ok(HandStrength {
            category: Category::TwoPair,
            kickers: fill_kickers(&[high, low], &rest, 1),
        });
    }
    if let Some(p) = pair_ranks.first().copied() {
        return Ok(HandStrength {
            category: Category::OnePair,
            kickers: fill_kickers(&[p], &singles, 3),
        });
    }

    Ok(HandStrength {
        category: Category::HighCard,
        kickers: fill_kickers(&[], &singles, 5),
    })
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and optionally as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14u8).rev() {
        let window = 0b1_1111u16 << (high - 4);
        if (m & window) == window {
            return Some(high);
        }
    }
    None
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut trips: Vec<u8> = vec![];
    let mut pairs: Vec<u8> = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }
    let trip = *trips.first()?;
    // a second set of trips plays as the pair when it outranks every pair
    let pair = trips.get(1).copied().into_iter().chain(pairs.first().copied()).max()?;
    Some((trip, pair))
}

/// Ranks with exactly 3, 2 and 1 copies, each sorted high to low.
fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}

fn kickers_excluding(rank_counts: &[u8; 15], used: &[u8]) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0 && !used.contains(r))
        .collect()
}

fn fill_kickers(lead: &[u8], rest: &[u8], take: usize) -> [u8; 5] {
    let mut k = [0u8; 5];
    for (slot, r) in k.iter_mut().zip(lead.iter().chain(rest.iter().take(take))) {
        *slot = *r;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn third_pair_can_be_the_two_pair_kicker() {
        let hs = evaluate_hand(&cards(&["Ah", "Ad", "Kc", "Ks", "Qh", "Qd", "2c"])).unwrap();
        assert_eq!(hs.category, Category::TwoPair);
        assert_eq!(hs.kickers, [14, 13, 12, 0, 0]);
    }

    #[test]
    fn two_trips_make_a_full_house_with_the_higher_leftover() {
        let hs = evaluate_hand(&cards(&["Kh", "Kd", "Kc", "2s", "2h", "2d", "Qc"])).unwrap();
        assert_eq!(hs.category, Category::FullHouse);
        assert_eq!(hs.kickers[..2], [13, 2]);

        let hs = evaluate_hand(&cards(&["Kh", "Kd", "Kc", "2s", "2h", "2d", "Qc", "Qd"])).unwrap();
        assert_eq!(hs.kickers[..2], [13, 12]);
    }

    #[test]
    fn wheel_in_one_suit_is_a_five_high_straight_flush() {
        let hs = evaluate_hand(&cards(&["Ac", "2c", "3c", "4c", "5c", "9d", "Kh"])).unwrap();
        assert_eq!(hs.category, Category::StraightFlush);
        assert_eq!(hs.kickers[0], 5);
    }

    #[test]
    fn rejects_short_and_duplicate_input() {
        assert_eq!(
            evaluate_hand(&cards(&["Ac", "2c", "3c", "4c"])),
            Err(HandError::TooFewCards { count: 4 })
        );
        let dup = cards(&["Ac", "2c", "3c", "4c", "Ac"]);
        assert_eq!(evaluate_hand(&dup), Err(HandError::DuplicateCard(dup[0])));
    }
}
