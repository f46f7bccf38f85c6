//! # elevens-engine: Elevens Solitaire Core
//!
//! Game-state engine for Elevens: nine cards are dealt onto a 3x3 grid and
//! the player clears pairs summing to 11 or Jack-Queen-King triples, refilling
//! from the deck, until both grid and deck are empty (won) or no move is left
//! with the deck exhausted (lost).
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Front-dealt deck with a pluggable [`deck::Shuffler`]
//! - [`grid`] - The 3x3 slot layout and its render-friendly snapshot
//! - [`engine`] - Move validation, refill and win/loss detection
//! - [`errors`] - Reasons a move was rejected
//! - [`config`] - Seed configuration from file and environment
//! - [`logging`] - `tracing` subscriber setup and capture for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use elevens_engine::engine::Engine;
//!
//! let mut engine = Engine::new_with_seed(7);
//! println!("{}", engine.snapshot());
//!
//! // a presentation layer passes raw coordinates straight through
//! let applied = engine.remove_pair(0, 0, 1, 1);
//! if !applied {
//!     println!("not a pair that sums to 11");
//! }
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use elevens_engine::cards::Card;
//! use elevens_engine::deck::{Deck, FnShuffler, KeepOrder};
//!
//! // Same seed produces same shuffle
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert!(d1.cards().eq(d2.cards()));
//!
//! // or skip randomness entirely
//! let mut fixed = Deck::standard(KeepOrder);
//! fixed.shuffle();
//! let mut reversed = Deck::standard(FnShuffler(|c: &mut [Card]| c.reverse()));
//! reversed.shuffle();
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod grid;
pub mod logging;
