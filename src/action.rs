//! Player actions and legal-action resolution.

extern crate alloc;

use alloc::collections::BTreeSet;

use crate::game::GamePhase;
use crate::hand::{Hand, HandStatus};

/// An action a player can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerAction {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, take exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
    /// Side bet against a dealer blackjack.
    ///
    /// Reserved: never reported as available and ignored by [`Game::apply`](crate::Game::apply)
    /// until payout rules for it are settled.
    Insurance,
}

/// Set of actions legal at a given moment.
pub type ActionSet = BTreeSet<PlayerAction>;

/// Computes the actions the player may take on `hand` in `phase`.
///
/// Hit and stand are always legal on an active hand during the player's
/// turn. Doubling and splitting are only offered on the first two cards.
#[must_use]
pub fn legal_actions(phase: GamePhase, hand: Option<&Hand>) -> ActionSet {
    let mut actions = ActionSet::new();

    if phase != GamePhase::PlayerTurn {
        return actions;
    }
    let Some(hand) = hand.filter(|hand| hand.status() == HandStatus::Active) else {
        return actions;
    };

    actions.insert(PlayerAction::Hit);
    actions.insert(PlayerAction::Stand);

    if hand.len() == 2 {
        actions.insert(PlayerAction::DoubleDown);
    }
    if hand.can_split() {
        actions.insert(PlayerAction::Split);
    }

    // Insurance would be offered here once the dealer shows an ace.

    actions
}
