//! Game phase and the read-only snapshot handed to callers.

extern crate alloc;

use alloc::vec::Vec;

use crate::action::ActionSet;
use crate::card::Card;
use crate::hand::Hand;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Waiting for a bet to start the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled.
    RoundOver,
}

impl GamePhase {
    /// Returns whether a new round may be started from this phase.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Betting | Self::RoundOver)
    }
}

/// An owned copy of the game as a player may see it.
///
/// Every field is owned data; changing a snapshot never touches the game
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cards left in the shoe.
    pub deck_size: usize,
    /// Player hands, in turn order.
    pub player_hands: Vec<Hand>,
    /// Dealer cards. Only the up card is included during the player's turn.
    pub dealer_hand: Vec<Card>,
    /// Hand being played; `None` outside the player's turn.
    pub active_hand_index: Option<usize>,
    /// Current phase.
    pub phase: GamePhase,
    /// Value of the dealer's up card (ace = 11), 0 before the deal.
    pub dealer_up_card_value: u8,
    /// Actions legal right now.
    pub available_actions: ActionSet,
}

impl GameState {
    /// Returns the hand being played, if any.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        self.active_hand_index
            .and_then(|index| self.player_hands.get(index))
    }
}
