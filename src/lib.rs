//! A single-seat blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow as a phase
//! machine: betting, the player's turn (hit, stand, double down, split),
//! dealer play, and settlement. Callers read the table through
//! [`Game::state`], an owned snapshot that also lists the legal actions,
//! and drive it through the action methods. Illegal actions are ignored.
//!
//! # Example
//!
//! ```
//! use bjengine::{Game, GameOptions, GamePhase};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.start_round(10).unwrap();
//! while game.phase() == GamePhase::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! assert_eq!(game.phase(), GamePhase::RoundOver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use action::{ActionSet, PlayerAction, legal_actions};
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, OptionsError, RoundError, ShoeError};
pub use game::{Game, GamePhase, GameState};
pub use hand::{DealerHand, Hand, HandStatus, HandValue, hand_value};
pub use options::{GameOptions, PayoutRatio};
pub use result::HandResult;
pub use shoe::Shoe;
