//! Hand evaluation and card tests.

use bjengine::{
    Card, DealerHand, Game, GameOptions, Hand, HandValue, PayoutRatio, Shoe, ShoeError, Suit,
    hand_value,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: u8) -> Card {
    Card::new(Suit::Spades, rank)
}

fn value_of(ranks: &[u8]) -> HandValue {
    let cards: Vec<Card> = ranks.iter().map(|&rank| card(rank)).collect();
    hand_value(&cards)
}

#[test]
fn natural_blackjack_is_soft_21() {
    assert_eq!(
        value_of(&[1, 13]),
        HandValue {
            total: 21,
            is_soft: true
        }
    );
}

#[test]
fn bust_without_aces_is_hard() {
    assert_eq!(
        value_of(&[10, 9, 5]),
        HandValue {
            total: 24,
            is_soft: false
        }
    );
}

#[test]
fn pair_of_aces_counts_twelve_soft() {
    assert_eq!(
        value_of(&[1, 1]),
        HandValue {
            total: 12,
            is_soft: true
        }
    );
}

#[test]
fn empty_hand_is_zero_hard() {
    assert_eq!(hand_value(&[]), HandValue::default());
    assert_eq!(Game::hand_value(&[]).total, 0);
}

#[test]
fn aces_demote_one_at_a_time() {
    // A + 6 + 10: the ace must drop to 1.
    assert_eq!(
        value_of(&[1, 6, 10]),
        HandValue {
            total: 17,
            is_soft: false
        }
    );
    // A + A + 9: one ace stays high.
    assert_eq!(
        value_of(&[1, 1, 9]),
        HandValue {
            total: 21,
            is_soft: true
        }
    );
    // Four aces and a king.
    assert_eq!(
        value_of(&[1, 1, 1, 1, 13]),
        HandValue {
            total: 14,
            is_soft: false
        }
    );
}

#[test]
fn soft_total_never_exceeds_21() {
    for a in 1..=13 {
        for b in 1..=13 {
            for c in 0..=13 {
                let ranks: Vec<u8> = [a, b, c].into_iter().filter(|&r| r != 0).collect();
                let value = value_of(&ranks);
                assert!(
                    !(value.is_soft && value.total > 21),
                    "{ranks:?} evaluated to {value:?}"
                );
            }
        }
    }
}

#[test]
fn long_hands_keep_exact_totals() {
    // 24 aces: 23 demoted to 1, the last would push past 21 as an 11.
    assert_eq!(
        value_of(&[1; 24]),
        HandValue {
            total: 24,
            is_soft: false
        }
    );
    assert_eq!(value_of(&[13; 26]).total, 260);

    // Eleven aces: ten at 1 plus one at 11.
    assert_eq!(
        value_of(&[1; 11]),
        HandValue {
            total: 21,
            is_soft: true
        }
    );
}

#[test]
fn split_pairs_compare_counting_value() {
    let mut tens = Hand::new(10);
    tens.add_card(card(10));
    tens.add_card(card(13));
    assert!(tens.can_split());

    let mut faces = Hand::new(10);
    faces.add_card(card(11));
    faces.add_card(card(12));
    assert!(faces.can_split());

    let mut mixed = Hand::new(10);
    mixed.add_card(card(9));
    mixed.add_card(card(10));
    assert!(!mixed.can_split());

    let mut three = Hand::new(10);
    three.add_card(card(4));
    three.add_card(card(4));
    three.add_card(card(4));
    assert!(!three.can_split());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Card::new(Suit::Hearts, 1));
    dealer.add_card(Card::new(Suit::Clubs, 6));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.value().is_soft);
    assert!(!dealer.is_blackjack());
    assert!(!dealer.is_bust());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn shoe_holds_every_card_of_every_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut shoe = Shoe::new(2, &mut rng);
    assert_eq!(shoe.remaining(), 104);

    let mut counts = [[0_u8; 14]; 4];
    while let Ok(card) = shoe.draw() {
        let suit = Suit::ALL.iter().position(|s| *s == card.suit).unwrap();
        counts[suit][card.rank as usize] += 1;
    }

    assert_eq!(shoe.draw(), Err(ShoeError::Exhausted));
    for suit in counts {
        assert!(suit[1..].iter().all(|&count| count == 2));
    }
}

#[test]
fn same_seed_same_shuffle() {
    let a = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(9));
    let b = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(9));
    let c = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(10));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn payout_ratio_rounds_down() {
    assert_eq!(PayoutRatio::THREE_TO_TWO.winnings(5), 7);
    assert_eq!(PayoutRatio::ONE_TO_ONE.winnings(5), 5);
    assert!(PayoutRatio::new(0, 2).is_err());
    assert_eq!(
        PayoutRatio::new(3, 2).unwrap(),
        GameOptions::default().blackjack_pays
    );
}
