//! Error types for engine operations.
//!
//! Illegal player actions are not errors: they are ignored and leave the
//! game untouched. The variants here cover invalid input, invalid
//! configuration, and a drained shoe.

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Exhausted,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Bet amount is zero.
    #[error("bet amount must be positive")]
    InvalidBet,
    /// A round is still being played.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<ShoeError> for RoundError {
    fn from(_: ShoeError) -> Self {
        Self::NoCards
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<ShoeError> for ActionError {
    fn from(_: ShoeError) -> Self {
        Self::NoCards
    }
}

/// Errors returned when validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The shoe must hold at least one deck.
    #[error("at least one deck is required")]
    NoDecks,
    /// Payout ratio has a zero numerator or denominator.
    #[error("blackjack payout ratio must be positive")]
    InvalidPayout,
}
