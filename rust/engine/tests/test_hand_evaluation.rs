use std::cmp::Ordering;

use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::deck::Deck;
use holdem_engine::errors::HandError;
use holdem_engine::hand::{Category, HandStrength, compare_hands, evaluate_hand};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn parse(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hs = evaluate_hand(&cards).unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.kickers[0], 14);
}

#[test]
fn category_ordering_is_correct() {
    // Four of a kind vs full house
    let quads = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
    ];
    let full_house = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
    ];
    let a = evaluate_hand(&quads).unwrap();
    let b = evaluate_hand(&full_house).unwrap();
    assert_eq!(a.category, Category::FourOfAKind);
    assert_eq!(a.kickers[..2], [14, 13]);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn flush_beats_straight_even_with_lower_cards() {
    let flush = parse(&["2h", "4h", "6h", "7h", "9h", "Kc", "3d"]);
    let straight = parse(&["Tc", "Jh", "Qc", "Kh", "Ad", "2s", "3c"]);
    let a = evaluate_hand(&flush).unwrap();
    assert_eq!(a.category, Category::Flush);
    let b = evaluate_hand(&straight).unwrap();
    assert_eq!(b.category, Category::Straight);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn wheel_sits_between_six_high_straight_and_trips() {
    let wheel = evaluate_hand(&parse(&["Ah", "2c", "3d", "4s", "5h", "9c", "Jd"])).unwrap();
    let six_high = evaluate_hand(&parse(&["2h", "3c", "4d", "5s", "6h", "9c", "Jd"])).unwrap();
    let trips = evaluate_hand(&parse(&["Ah", "Ac", "Ad", "4s", "5h", "9c", "Jd"])).unwrap();
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.kickers[0], 5);
    assert!(wheel < six_high);
    assert!(wheel > trips);
}

#[test]
fn ace_high_straight_is_the_best_straight() {
    let broadway = evaluate_hand(&parse(&["Ah", "Kc", "Qd", "Js", "Th", "2c", "3d"])).unwrap();
    let king_high = evaluate_hand(&parse(&["9h", "Kc", "Qd", "Js", "Th", "2c", "3d"])).unwrap();
    assert_eq!(broadway.kickers[0], 14);
    assert!(broadway > king_high);
}

#[test]
fn pair_kickers_are_compared_high_to_low() {
    // same pair and top two kickers, decided on the third
    let a = evaluate_hand(&parse(&["8h", "8c", "Ad", "Ks", "7h", "3c", "2d"])).unwrap();
    let b = evaluate_hand(&parse(&["8d", "8s", "Ac", "Kh", "6h", "3s", "2h"])).unwrap();
    assert_eq!(a.category, Category::OnePair);
    assert_eq!(a.kickers, [8, 14, 13, 7, 0]);
    assert!(compare_hands(&a, &b).is_gt());
    assert!(compare_hands(&b, &a).is_lt());
}

#[test]
fn board_plays_for_both_is_a_true_tie() {
    let board = ["As", "Ks", "Qs", "Js", "Ts"];
    let mut p = parse(&["2c", "3d"]);
    p.extend(parse(&board));
    let mut o = parse(&["2h", "3s"]);
    o.extend(parse(&board));
    let a = evaluate_hand(&p).unwrap();
    let b = evaluate_hand(&o).unwrap();
    assert!(compare_hands(&a, &b).is_eq());
    assert_eq!(a, b);
}

#[test]
fn five_and_six_card_sets_are_accepted() {
    let five = evaluate_hand(&parse(&["2h", "2c", "9d", "9s", "Kh"])).unwrap();
    assert_eq!(five.category, Category::TwoPair);
    assert_eq!(five.kickers[..3], [9, 2, 13]);
    let six = evaluate_hand(&parse(&["2h", "2c", "2d", "9s", "9h", "Kh"])).unwrap();
    assert_eq!(six.category, Category::FullHouse);
}

#[test]
fn malformed_input_is_an_invalid_hand() {
    assert_eq!(
        evaluate_hand(&parse(&["2h", "3h", "4h", "5h"])),
        Err(HandError::TooFewCards { count: 4 })
    );
    assert!(matches!(
        evaluate_hand(&parse(&["2h", "3h", "4h", "5h", "2h"])),
        Err(HandError::DuplicateCard(_))
    ));
}

#[test]
fn disjoint_seven_card_sets_compare_exactly_one_way() {
    for seed in 0..2_000u64 {
        let mut deck = Deck::new_with_seed(seed);
        let a = evaluate_hand(&deck.deal_n(7)).unwrap();
        let b = evaluate_hand(&deck.deal_n(7)).unwrap();
        let outcomes = [
            compare_hands(&a, &b) == Ordering::Greater,
            compare_hands(&a, &b) == Ordering::Less,
            compare_hands(&a, &b) == Ordering::Equal,
        ];
        assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
        assert_eq!(compare_hands(&b, &a), compare_hands(&a, &b).reverse());
        assert_eq!(compare_hands(&a, &b) == Ordering::Equal, a == b);
    }
}

#[test]
fn ordering_is_transitive_across_sorted_samples() {
    let mut strengths: Vec<HandStrength> = (0..400u64)
        .map(|seed| evaluate_hand(&Deck::new_with_seed(seed).deal_n(7)).unwrap())
        .collect();
    strengths.sort_by(compare_hands);
    for i in 0..strengths.len() {
        for j in i + 1..strengths.len() {
            assert_ne!(
                compare_hands(&strengths[i], &strengths[j]),
                Ordering::Greater,
                "{:?} sorted before {:?}",
                strengths[i],
                strengths[j]
            );
        }
    }
}

#[test]
fn seven_cards_rank_as_their_best_five() {
    for seed in 0..2_000u64 {
        let cards = Deck::new_with_seed(seed).deal_n(7);
        let best = (0..7)
            .flat_map(|skip_a| (skip_a + 1..7).map(move |skip_b| (skip_a, skip_b)))
            .map(|(skip_a, skip_b)| {
                let five: Vec<Card> = cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c)
                    .collect();
                evaluate_hand(&five).unwrap()
            })
            .max()
            .unwrap();
        assert_eq!(evaluate_hand(&cards).unwrap(), best, "cards {:?}", cards);
    }
}
