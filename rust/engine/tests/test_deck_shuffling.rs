use std::collections::HashSet;

use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(deck.deal_card().is_none(), "after 52 cards, deck should be empty");
    assert!(deck.deal_hole().is_none());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.deal_n(10);
    let b: Vec<Card> = d2.deal_n(10);
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.deal_n(10),
        d2.deal_n(10),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn dealing_a_full_table_keeps_cards_unique() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();

    let holes: Vec<[Card; 2]> = (0..6).map(|_| deck.deal_hole().unwrap()).collect();
    deck.burn_card();
    let mut board = deck.deal_n(3);
    deck.burn_card();
    board.extend(deck.deal_n(1));
    deck.burn_card();
    board.extend(deck.deal_n(1));
    assert_eq!(deck.remaining(), 52 - 12 - 3 - 5);

    let mut set = HashSet::new();
    for c in holes.iter().flatten().chain(board.iter()) {
        assert!(set.insert(*c));
    }
}

#[test]
fn deal_n_stops_at_the_bottom() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    assert_eq!(deck.deal_n(60).len(), 52);
    assert_eq!(deck.remaining(), 0);
}
