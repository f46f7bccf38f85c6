use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// The declaration order is the order suits are laid down within each rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    /// Capitalised suit name used in card labels.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

/// Represents the rank of a playing card from Ace (1) through King (13).
/// The numeric value is what the Elevens rules add up.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Numeric value the rules add up, 1..=13.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// `None` outside 1..=13.
    pub fn from_value(v: u8) -> Option<Rank> {
        all_ranks().get(usize::from(v).checked_sub(1)?).copied()
    }

    /// Jack, Queen and King.
    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    fn label(self) -> String {
        match self {
            Rank::Jack => "Jack".to_string(),
            Rank::Queen => "Queen".to_string(),
            Rank::King => "King".to_string(),
            other => other.value().to_string(),
        }
    }
}

/// A single playing card: a rank, a suit and a cosmetic face-up flag.
///
/// Two cards are equal when rank and suit match; the face-up flag never
/// takes part in comparisons or in the game rules.
///
/// # Examples
///
/// ```
/// use elevens_engine::cards::{Card, Rank, Suit};
///
/// let mut card = Card::new(Rank::Queen, Suit::Spades);
/// assert_eq!(card.display_name(), "Queen of Spades");
/// assert!(!card.is_face_up());
/// card.flip();
/// assert!(card.is_face_up());
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
    #[serde(default)]
    face_up: bool,
}

impl Card {
    /// New card, face down.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Numeric rank, 1..=13.
    pub fn rank(&self) -> u8 {
        self.rank.value()
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggles the face-up flag; has no effect on play.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Human-readable label such as "5 of Hearts" or "King of Clubs".
    pub fn display_name(&self) -> String {
        format!("{} of {}", self.rank.label(), self.suit.name())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards, rank ascending, suits in [`all_suits`] order within a rank.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card::new(r, s));
        }
    }
    v
}
