use alloc::vec;

use tracing::debug;

use crate::error::RoundError;
use crate::hand::{Hand, HandStatus};

use super::{Game, GamePhase};

impl Game {
    /// Starts a new round with the given bet.
    ///
    /// The shoe is rebuilt first if fewer than a third of its cards remain.
    /// The player and the dealer each receive two cards. A natural 21 for the
    /// player skips straight to dealer play and settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, a round is still being played, or
    /// the shoe runs out while dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default().with_decks(1), 7).unwrap();
    /// game.start_round(10).unwrap();
    /// let state = game.state();
    /// assert_eq!(state.player_hands[0].bet(), 10);
    /// assert!(state.dealer_hand.len() >= 1);
    /// ```
    pub fn start_round(&mut self, bet: usize) -> Result<(), RoundError> {
        if bet == 0 {
            return Err(RoundError::InvalidBet);
        }
        if !self.phase.accepts_bets() {
            return Err(RoundError::RoundInProgress);
        }

        if self.needs_reshuffle() {
            debug!(
                remaining = self.cards_remaining(),
                shoe_size = self.options.shoe_size(),
                "reshuffling before deal"
            );
            self.rebuild_shoe();
        }

        self.player_hands = vec![Hand::new(bet)];
        self.dealer_hand.clear();
        self.active_hand_index = 0;

        // Player, dealer up card, player, dealer hole card.
        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hands[0].add_card(card);
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        self.phase = GamePhase::PlayerTurn;

        let opening = self.player_hands[0].value();
        debug!(bet, total = opening.total, soft = opening.is_soft, "round started");

        if opening.total == 21 {
            self.player_hands[0].set_status(HandStatus::Blackjack);
            debug!("natural blackjack");
            self.play_dealer()?;
        }

        Ok(())
    }
}
