use std::collections::HashSet;

use elevens_engine::cards::{all_suits, Card, Rank, Suit};
use elevens_engine::deck::{Deck, FnShuffler, KeepOrder};
use proptest::prelude::*;

#[test]
fn full_deck_has_52_unique_cards() {
    let mut deck = Deck::new(KeepOrder);
    deck.initialize_full_deck();
    assert_eq!(deck.remaining(), 52);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn initialization_order_is_rank_then_suit() {
    let deck = Deck::standard(KeepOrder);
    let cards: Vec<Card> = deck.cards().copied().collect();
    for (i, suit) in all_suits().into_iter().enumerate() {
        assert_eq!(cards[i], Card::new(Rank::Ace, suit));
    }
    assert_eq!(cards[4], Card::new(Rank::Two, Suit::Spades));
    assert_eq!(cards[51], Card::new(Rank::King, Suit::Clubs));
}

#[test]
fn initializing_twice_does_not_duplicate() {
    let mut deck = Deck::standard(KeepOrder);
    deck.deal_card();
    deck.initialize_full_deck();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn entropy_shuffle_moves_cards() {
    let mut deck = Deck::from_entropy();
    let before: Vec<Card> = deck.cards().copied().collect();
    deck.shuffle();
    let after: Vec<Card> = deck.cards().copied().collect();
    assert_ne!(before, after, "52! orders; identity is practically impossible");
}

#[test]
fn dealing_follows_shuffled_order() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    let expected: Vec<Card> = deck.cards().copied().collect();
    let dealt: Vec<Card> = std::iter::from_fn(|| deck.deal_card()).collect();
    assert_eq!(dealt, expected);
}

#[test]
fn injected_permutation_decides_the_order() {
    let mut deck = Deck::standard(FnShuffler(|cards: &mut [Card]| cards.rotate_left(4)));
    deck.shuffle();
    assert_eq!(deck.deal_card(), Some(Card::new(Rank::Two, Suit::Spades)));
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn keep_order_shuffle_is_identity() {
    let mut deck = Deck::standard(KeepOrder);
    deck.shuffle();
    assert_eq!(deck.peek(), Some(&Card::new(Rank::Ace, Suit::Spades)));
}

#[test]
fn dealing_n_cards_drains_deck() {
    let cards = [
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
    ];
    let mut deck = Deck::from_cards(cards, KeepOrder);
    for expected in cards {
        assert_eq!(deck.deal_card(), Some(expected));
    }
    assert!(deck.is_empty());
    assert_eq!(deck.deal_card(), None);
    assert_eq!(deck.deal_card(), None);
    assert_eq!(deck.remaining(), 0);
}

proptest! {
    #[test]
    fn shuffle_preserves_the_multiset(seed in any::<u64>(), dealt in 0usize..52) {
        let mut deck = Deck::new_with_seed(seed);
        for _ in 0..dealt {
            deck.deal_card();
        }
        let before: HashSet<Card> = deck.cards().copied().collect();
        deck.shuffle();
        let after: HashSet<Card> = deck.cards().copied().collect();
        prop_assert_eq!(deck.remaining(), 52 - dealt);
        prop_assert_eq!(before, after);
    }
}
