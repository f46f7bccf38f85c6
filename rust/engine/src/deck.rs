use std::collections::VecDeque;
use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Source of the permutation applied by [`Deck::shuffle`].
///
/// Production decks shuffle with a [`ChaCha20Rng`]; tests can plug in
/// [`KeepOrder`] or an [`FnShuffler`] to get a known order.
pub trait Shuffler {
    /// Reorder `cards` in place without adding or removing any.
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl Shuffler for ChaCha20Rng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        SliceRandom::shuffle(cards, self);
    }
}

/// Leaves the deck order untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
}

/// Adapts any `FnMut(&mut [Card])` into a [`Shuffler`].
pub struct FnShuffler<F>(pub F);

impl<F> Shuffler for FnShuffler<F>
where
    F: FnMut(&mut [Card]),
{
    fn shuffle(&mut self, cards: &mut [Card]) {
        (self.0)(cards)
    }
}

/// Ordered pile of cards dealt from the front.
///
/// A deck starts empty, is filled once by [`Deck::initialize_full_deck`],
/// may be shuffled, and then only shrinks as cards are dealt.
///
/// # Examples
///
/// ```
/// use elevens_engine::deck::Deck;
///
/// // Same seed produces the same order
/// let mut d1 = Deck::new_with_seed(42);
/// let mut d2 = Deck::new_with_seed(42);
/// d1.shuffle();
/// d2.shuffle();
/// assert_eq!(d1.deal_card(), d2.deal_card());
/// assert_eq!(d1.remaining(), 51);
/// ```
pub struct Deck {
    /// Undealt cards, front of the deque is the next card dealt
    cards: VecDeque<Card>,
    /// Permutation source used by `shuffle`
    shuffler: Box<dyn Shuffler>,
}

impl Deck {
    /// Empty deck using the given shuffler.
    pub fn new(shuffler: impl Shuffler + 'static) -> Self {
        Self {
            cards: VecDeque::with_capacity(52),
            shuffler: Box::new(shuffler),
        }
    }

    /// Full 52-card deck in initialization order.
    pub fn standard(shuffler: impl Shuffler + 'static) -> Self {
        let mut deck = Self::new(shuffler);
        deck.initialize_full_deck();
        deck
    }

    /// Full deck that shuffles with a ChaCha20 stream seeded from `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::standard(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Full deck that shuffles with a ChaCha20 stream seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::standard(ChaCha20Rng::from_rng(&mut rand::rng()))
    }

    /// Deck holding `cards`, first element dealt first.
    pub fn from_cards<I>(cards: I, shuffler: impl Shuffler + 'static) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut deck = Self::new(shuffler);
        deck.cards.extend(cards);
        deck
    }

    /// Discards any current contents and lays down all 52 cards, one per
    /// rank and suit, rank ascending and suits in `all_suits` order.
    pub fn initialize_full_deck(&mut self) {
        self.cards.clear();
        self.cards.extend(full_deck());
    }

    /// Permutes the remaining cards with this deck's [`Shuffler`]. Never adds
    /// or removes a card.
    pub fn shuffle(&mut self) {
        self.shuffler.shuffle(self.cards.make_contiguous());
    }

    /// Removes and returns the front card, `None` once the deck is drained.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Cards still to be dealt.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards front to back.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}
