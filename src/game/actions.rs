use tracing::{debug, trace};

use crate::action::PlayerAction;
use crate::error::{ActionError, ShoeError};
use crate::hand::{Hand, HandStatus};

use super::Game;

impl Game {
    /// Returns whether `action` is currently legal, tracing it if not.
    fn is_legal(&self, action: PlayerAction) -> bool {
        let legal = self.available_actions().contains(&action);
        if !legal {
            trace!(?action, phase = ?self.phase, "ignoring illegal action");
        }
        legal
    }

    /// Moves to the next active hand after the current one, or hands over to
    /// the dealer once every hand is finished.
    pub(super) fn advance_turn(&mut self) -> Result<(), ShoeError> {
        let next = self
            .player_hands
            .iter()
            .enumerate()
            .skip(self.active_hand_index + 1)
            .find(|(_, hand)| !hand.status().is_terminal())
            .map(|(index, _)| index);

        match next {
            Some(index) => {
                self.active_hand_index = index;
                Ok(())
            }
            None => self.play_dealer(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Does nothing if hitting is not currently legal. A bust finishes the
    /// hand and moves play on.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out.
    pub fn hit(&mut self) -> Result<(), ActionError> {
        if !self.is_legal(PlayerAction::Hit) {
            return Ok(());
        }

        let card = self.draw()?;
        let index = self.active_hand_index;
        let Some(hand) = self.active_hand_mut() else {
            return Ok(());
        };

        let value = hand.add_card(card);
        debug!(hand = index, rank = card.rank, total = value.total, "hit");

        if value.total > 21 {
            hand.set_status(HandStatus::Bust);
            self.advance_turn()?;
        }

        Ok(())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Does nothing if standing is not currently legal.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out during dealer play.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if !self.is_legal(PlayerAction::Stand) {
            return Ok(());
        }

        let index = self.active_hand_index;
        let Some(hand) = self.active_hand_mut() else {
            return Ok(());
        };

        hand.set_status(HandStatus::Stood);
        debug!(hand = index, total = hand.total(), "stand");

        self.advance_turn()?;
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// Only legal on the first two cards of a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out.
    pub fn double_down(&mut self) -> Result<(), ActionError> {
        if !self.is_legal(PlayerAction::DoubleDown) {
            return Ok(());
        }

        let card = self.draw()?;
        let index = self.active_hand_index;
        let Some(hand) = self.active_hand_mut() else {
            return Ok(());
        };

        hand.double_bet();
        let value = hand.add_card(card);
        hand.set_status(if value.total > 21 {
            HandStatus::Bust
        } else {
            HandStatus::Stood
        });
        debug!(hand = index, bet = hand.bet(), total = value.total, "double down");

        self.advance_turn()?;
        Ok(())
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand with the same bet, inserted right
    /// after the current one, and each hand gets one new card. Play stays on
    /// the current hand. A 21 made this way is an ordinary 21, not a
    /// blackjack: the hand stands and play moves on, since a stood hand has
    /// no actions left and the turn would otherwise stall on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out.
    pub fn split(&mut self) -> Result<(), ActionError> {
        if !self.is_legal(PlayerAction::Split) {
            return Ok(());
        }

        let index = self.active_hand_index;
        let first = self.draw()?;
        let second = self.draw()?;

        let Some(hand) = self.player_hands.get_mut(index) else {
            return Ok(());
        };
        let Some(split_card) = hand.take_split_card() else {
            return Ok(());
        };

        let mut new_hand = Hand::from_split(split_card, hand.bet());
        hand.mark_split();
        let value = hand.add_card(first);
        new_hand.add_card(second);

        let made_21 = value.total == 21;
        if made_21 {
            hand.set_status(HandStatus::Stood);
        }

        self.player_hands.insert(index + 1, new_hand);
        debug!(hand = index, hands = self.player_hands.len(), total = value.total, "split");

        if made_21 {
            self.advance_turn()?;
        }

        Ok(())
    }

    /// Applies `action` through the matching operation.
    ///
    /// [`PlayerAction::Insurance`] is never legal and is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out.
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), ActionError> {
        match action {
            PlayerAction::Hit => self.hit(),
            PlayerAction::Stand => self.stand(),
            PlayerAction::DoubleDown => self.double_down(),
            PlayerAction::Split => self.split(),
            PlayerAction::Insurance => {
                trace!(?action, "insurance is not offered");
                Ok(())
            }
        }
    }
}
