//! Hi-Lo counting tests.

use bjcount::{Card, Counted, DECK_SIZE, Hand, Shoe, Suit, count, hi_lo_value, true_count};
use proptest::prelude::*;

fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=13).map(move |rank| Card::new(suit, rank)))
        .collect()
}

#[test]
fn hi_lo_tags() {
    for rank in 2..=6 {
        assert_eq!(hi_lo_value(&Card::new(Suit::Hearts, rank)), 1);
    }
    for rank in 7..=9 {
        assert_eq!(hi_lo_value(&Card::new(Suit::Hearts, rank)), 0);
    }
    for rank in [1, 10, 11, 12, 13] {
        assert_eq!(hi_lo_value(&Card::new(Suit::Hearts, rank)), -1);
    }
}

#[test]
fn empty_and_full_deck_balance() {
    let none: [Card; 0] = [];
    assert_eq!(count(&none), 0);

    let deck = full_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(count(&deck), 0);
}

#[test]
fn count_mixes_hands_and_cards() {
    let player = Hand::from_cards(&[Card::new(Suit::Clubs, 2), Card::new(Suit::Clubs, 3)]);
    let split = Hand::from_cards(&[Card::new(Suit::Hearts, 13), Card::new(Suit::Hearts, 8)]);
    let dealer = Hand::from_cards(&[Card::new(Suit::Spades, 1), Card::new(Suit::Spades, 5)]);

    let family = vec![&player, &split];
    assert_eq!(count(&(family, &dealer)), 1);
    assert_eq!(player.hi_lo(), 2);
    assert_eq!(count(&[Card::new(Suit::Hearts, 4), Card::new(Suit::Hearts, 10)]), 0);
}

#[test]
fn true_count_divides_by_decks_remaining() {
    assert_eq!(true_count(6, 3 * DECK_SIZE), 2.0);
    assert_eq!(true_count(-3, DECK_SIZE / 2), -6.0);
    assert_eq!(true_count(0, 104), 0.0);
}

#[test]
fn true_count_of_empty_shoe_is_zero() {
    assert_eq!(true_count(12, 0), 0.0);
    assert_eq!(true_count(-7, 0), 0.0);
}

#[test]
fn dealing_a_whole_shoe_counts_back_to_zero() {
    let mut shoe = Shoe::shuffled(6, 11).unwrap();
    let mut running = 0;
    while let Ok(card) = shoe.draw() {
        running += count(&card);
    }
    assert_eq!(running, 0);
}

proptest! {
    #[test]
    fn count_is_order_independent(seed in any::<u64>(), cut in 0usize..=DECK_SIZE) {
        let mut shoe = Shoe::shuffled(1, seed).unwrap();
        let mut dealt = Vec::new();
        for _ in 0..cut {
            dealt.push(shoe.draw().unwrap());
        }
        let mut rest = Vec::new();
        while let Ok(card) = shoe.draw() {
            rest.push(card);
        }

        prop_assert_eq!(count(&dealt) + count(&rest), 0);
        prop_assert_eq!(count(&(dealt.as_slice(), rest.as_slice())), 0);
    }
}
