use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::cards::{Card, Rank};
use crate::config::Config;
use crate::deck::{Deck, Shuffler};
use crate::errors::MoveError;
use crate::grid::{Grid, GridSnapshot, Slot};

/// Sum a pair of ranks must reach to be removable.
pub const PAIR_TARGET: u8 = 11;

/// Where a session stands. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be attempted
    InProgress,
    /// Grid and deck are both empty
    Won,
    /// Deck is empty and the grid holds no removable pair or face triple
    Lost,
}

/// A removal the player can make.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Move {
    /// Two cards whose ranks sum to 11
    Pair(Slot, Slot),
    /// One Jack, one Queen and one King, in any order
    FaceTriple(Slot, Slot, Slot),
}

/// Game engine for a single Elevens session.
/// Owns the deck and the 3x3 grid; every change to either goes through here.
///
/// # Examples
///
/// ```
/// use elevens_engine::engine::{Engine, GameStatus};
///
/// let mut engine = Engine::new_with_seed(12345);
/// assert_eq!(engine.grid().occupied_count(), 9);
/// assert_eq!(engine.deck_remaining(), 43);
/// assert_eq!(engine.status(), GameStatus::InProgress);
///
/// if let Some((a, b)) = engine.find_pair() {
///     engine.try_remove_pair(a, b).expect("found pair is removable");
///     // the two gaps are refilled straight from the deck
///     assert_eq!(engine.grid().occupied_count(), 9);
///     assert_eq!(engine.deck_remaining(), 41);
/// }
///
/// // raw coordinates are validated by the engine itself
/// assert!(!engine.remove_pair(0, 0, 0, 0));
/// assert!(!engine.remove_pair(-1, 0, 5, 5));
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Cards not yet dealt to the grid
    deck: Deck,
    /// The 3x3 layout
    grid: Grid,
    /// Cards discarded by successful removals
    removed: usize,
}

impl Engine {
    /// New session shuffled from OS entropy.
    pub fn new() -> Self {
        Self::with_deck(Deck::from_entropy())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_deck(Deck::new_with_seed(seed))
    }

    pub fn with_shuffler(shuffler: impl Shuffler + 'static) -> Self {
        Self::with_deck(Deck::standard(shuffler))
    }

    pub fn from_config(cfg: &Config) -> Self {
        match cfg.seed {
            Some(seed) => Self::new_with_seed(seed),
            None => Self::new(),
        }
    }

    /// Shuffles `deck` with its own shuffler and deals up to nine cards.
    pub fn with_deck(mut deck: Deck) -> Self {
        deck.shuffle();
        let mut engine = Self::from_parts(Grid::empty(), deck);
        engine.refill();
        debug!(
            grid = engine.grid.occupied_count(),
            deck = engine.deck.remaining(),
            "session dealt"
        );
        engine
    }

    /// Takes a layout exactly as given: no shuffle, no initial fill.
    pub fn from_parts(grid: Grid, deck: Deck) -> Self {
        Self {
            deck,
            grid,
            removed: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Occupied cards in row-major order.
    pub fn grid_cards(&self) -> Vec<Card> {
        self.grid.occupied().map(|(_, c)| *c).collect()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn cards_removed(&self) -> usize {
        self.removed
    }

    pub fn has_removable_pair(&self) -> bool {
        self.find_pair().is_some()
    }

    pub fn has_face_triple(&self) -> bool {
        self.find_face_triple().is_some()
    }

    pub fn has_legal_move(&self) -> bool {
        self.has_removable_pair() || self.has_face_triple()
    }

    pub fn is_won(&self) -> bool {
        self.grid.is_empty() && self.deck.is_empty()
    }

    /// False for a won game even though an empty grid has no moves.
    pub fn is_lost(&self) -> bool {
        !self.is_won() && self.deck.is_empty() && !self.has_legal_move()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// First pair summing to 11, scanning slots row-major.
    pub fn find_pair(&self) -> Option<(Slot, Slot)> {
        self.pairs().next()
    }

    /// Slots of the first Jack, Queen and King on the grid.
    pub fn find_face_triple(&self) -> Option<[Slot; 3]> {
        let first = |rank: Rank| {
            self.grid
                .occupied()
                .find(|(_, c)| c.rank == rank)
                .map(|(s, _)| s)
        };
        Some([first(Rank::Jack)?, first(Rank::Queen)?, first(Rank::King)?])
    }

    /// Every removal currently available: all pairs, then all face triples.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.pairs().map(|(a, b)| Move::Pair(a, b)).collect();
        let with = |rank: Rank| -> Vec<Slot> {
            self.grid
                .occupied()
                .filter(|(_, c)| c.rank == rank)
                .map(|(s, _)| s)
                .collect()
        };
        let (jacks, queens, kings) = (with(Rank::Jack), with(Rank::Queen), with(Rank::King));
        for &j in &jacks {
            for &q in &queens {
                for &k in &kings {
                    moves.push(Move::FaceTriple(j, q, k));
                }
            }
        }
        moves
    }

    /// Removes the pair at the raw coordinates. Returns whether anything changed.
    pub fn remove_pair(&mut self, r1: i32, c1: i32, r2: i32, c2: i32) -> bool {
        let result = slot_at(r1, c1)
            .and_then(|a| Ok((a, slot_at(r2, c2)?)))
            .and_then(|(a, b)| self.try_remove_pair(a, b));
        result.is_ok()
    }

    /// Removes the face triple at the raw coordinates. Returns whether anything changed.
    pub fn remove_face_triple(
        &mut self,
        r1: i32,
        c1: i32,
        r2: i32,
        c2: i32,
        r3: i32,
        c3: i32,
    ) -> bool {
        let result = slot_at(r1, c1)
            .and_then(|a| Ok((a, slot_at(r2, c2)?, slot_at(r3, c3)?)))
            .and_then(|(a, b, c)| self.try_remove_face_triple(a, b, c));
        result.is_ok()
    }

    pub fn try_remove_pair(&mut self, a: Slot, b: Slot) -> Result<(), MoveError> {
        self.validate_pair(a, b).inspect_err(log_rejection)?;
        self.discard(&[a, b]);
        Ok(())
    }

    pub fn try_remove_face_triple(&mut self, a: Slot, b: Slot, c: Slot) -> Result<(), MoveError> {
        self.validate_face_triple(a, b, c).inspect_err(log_rejection)?;
        self.discard(&[a, b, c]);
        Ok(())
    }

    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::Pair(a, b) => self.try_remove_pair(a, b),
            Move::FaceTriple(a, b, c) => self.try_remove_face_triple(a, b, c),
        }
    }

    fn pairs(&self) -> impl Iterator<Item = (Slot, Slot)> + '_ {
        let occupied: Vec<(Slot, u8)> = self.grid.occupied().map(|(s, c)| (s, c.rank())).collect();
        (0..occupied.len()).flat_map(move |i| {
            let (a, ra) = occupied[i];
            occupied[i + 1..]
                .iter()
                .filter(move |(_, rb)| ra + rb == PAIR_TARGET)
                .map(move |&(b, _)| (a, b))
                .collect::<Vec<_>>()
        })
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        match self.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::Won | GameStatus::Lost => Err(MoveError::GameOver),
        }
    }

    fn rank_at(&self, slot: Slot) -> Result<Rank, MoveError> {
        self.grid
            .get(slot)
            .map(|c| c.rank)
            .ok_or(MoveError::EmptySlot {
                row: slot.row(),
                col: slot.col(),
            })
    }

    fn validate_pair(&self, a: Slot, b: Slot) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        if a == b {
            return Err(MoveError::DuplicateSlot);
        }
        let sum = self.rank_at(a)?.value() + self.rank_at(b)?.value();
        if sum != PAIR_TARGET {
            return Err(MoveError::NotEleven { sum });
        }
        Ok(())
    }

    fn validate_face_triple(&self, a: Slot, b: Slot, c: Slot) -> Result<(), MoveError> {
        self.ensure_in_progress()?;
        if a == b || b == c || a == c {
            return Err(MoveError::DuplicateSlot);
        }
        let mut ranks = [self.rank_at(a)?, self.rank_at(b)?, self.rank_at(c)?];
        ranks.sort();
        if ranks != [Rank::Jack, Rank::Queen, Rank::King] {
            return Err(MoveError::NotFaceTriple);
        }
        Ok(())
    }

    /// Empties `slots` (already validated), then refills from the deck.
    fn discard(&mut self, slots: &[Slot]) {
        for &slot in slots {
            if let Some(card) = self.grid.take(slot) {
                debug!(%slot, card = %card, "card removed");
                self.removed += 1;
            }
        }
        let dealt = self.refill();
        debug!(
            removed = slots.len(),
            dealt,
            deck = self.deck.remaining(),
            "removal applied"
        );
        match self.status() {
            GameStatus::Won => info!(removed = self.removed, "game won"),
            GameStatus::Lost => info!(
                removed = self.removed,
                left = self.grid.occupied_count(),
                "game lost"
            ),
            GameStatus::InProgress => {}
        }
    }

    /// Deals into empty slots, row-major, until none are left or the deck runs out.
    fn refill(&mut self) -> usize {
        let deck = &mut self.deck;
        self.grid.fill_empty_with(|| {
            let card = deck.deal_card();
            if let Some(c) = &card {
                trace!(card = %c, "dealt to grid");
            }
            card
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn slot_at(row: i32, col: i32) -> Result<Slot, MoveError> {
    Slot::new(row, col)
        .ok_or(MoveError::OutOfBounds { row, col })
        .inspect_err(log_rejection)
}

fn log_rejection(err: &MoveError) {
    debug!(%err, "move rejected");
}
