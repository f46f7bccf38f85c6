use elevens_engine::cards::{all_suits, Card, Rank};
use elevens_engine::deck::{Deck, KeepOrder};
use elevens_engine::engine::{Engine, GameStatus};
use elevens_engine::errors::MoveError;
use elevens_engine::grid::{Grid, Slot};

fn engine_with(rows: [[u8; 3]; 3], deck: &[u8]) -> Engine {
    let card = |rank: u8, i: usize| Card::new(Rank::from_value(rank).unwrap(), all_suits()[i % 4]);
    let mut i = 0;
    let grid = Grid::from_rows(rows.map(|row| {
        row.map(|rank| {
            i += 1;
            (rank != 0).then(|| card(rank, i))
        })
    }));
    let deck = Deck::from_cards(deck.iter().enumerate().map(|(j, &r)| card(r, j)), KeepOrder);
    Engine::from_parts(grid, deck)
}

#[test]
fn empty_grid_and_deck_is_won() {
    let engine = Engine::from_parts(Grid::empty(), Deck::new(KeepOrder));
    assert!(engine.is_won());
    assert!(!engine.is_lost());
    assert_eq!(engine.status(), GameStatus::Won);
    // idempotent
    assert!(engine.is_won());
}

#[test]
fn empty_grid_with_cards_left_is_not_won() {
    let engine = engine_with([[0; 3]; 3], &[4]);
    assert!(!engine.is_won());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn no_moves_with_empty_deck_is_lost() {
    let engine = engine_with([[2, 3, 4], [0, 0, 0], [0, 0, 0]], &[]);
    assert!(engine.is_lost());
    assert!(!engine.is_won());
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn no_moves_with_cards_left_is_still_in_progress() {
    let engine = engine_with([[2, 3, 4], [0, 0, 0], [0, 0, 0]], &[5]);
    assert!(!engine.is_lost());
    assert!(!engine.has_legal_move());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn available_move_prevents_loss() {
    let pair = engine_with([[2, 9, 4], [0, 0, 0], [0, 0, 0]], &[]);
    assert!(!pair.is_lost());
    let faces = engine_with([[13, 3, 12], [0, 11, 0], [0, 0, 0]], &[]);
    assert!(!faces.is_lost());
}

#[test]
fn last_removal_wins_and_further_moves_are_refused() {
    let mut engine = engine_with([[5, 6, 0], [0, 0, 0], [0, 0, 0]], &[]);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(engine.remove_pair(0, 0, 0, 1));
    assert_eq!(engine.status(), GameStatus::Won);
    let a = Slot::new(0, 0).unwrap();
    let b = Slot::new(0, 1).unwrap();
    assert_eq!(engine.try_remove_pair(a, b), Err(MoveError::GameOver));
}

#[test]
fn lost_game_refuses_moves() {
    let mut engine = engine_with([[2, 3, 4], [0, 0, 0], [0, 0, 0]], &[]);
    let a = Slot::new(0, 0).unwrap();
    let b = Slot::new(0, 1).unwrap();
    assert_eq!(engine.try_remove_pair(a, b), Err(MoveError::GameOver));
    assert_eq!(engine.grid().occupied_count(), 3);
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn removal_can_lead_to_loss() {
    let mut engine = engine_with([[5, 6, 2], [3, 0, 0], [0, 0, 0]], &[]);
    assert!(engine.remove_pair(0, 0, 0, 1));
    assert!(engine.is_lost());
    assert_eq!(engine.grid_cards().len(), 2);
}
