use tracing::{debug, info};

use crate::error::ShoeError;
use crate::hand::{Hand, HandStatus};
use crate::result::HandResult;

use super::{Game, GamePhase};

/// Outcome of one finished player hand against the dealer's final hand.
fn settle_hand(hand: &Hand, dealer_total: u16, dealer_blackjack: bool) -> HandResult {
    match hand.status() {
        HandStatus::Bust => HandResult::DealerWins,
        HandStatus::Blackjack if dealer_blackjack => HandResult::Push,
        HandStatus::Blackjack => HandResult::PlayerWins,
        HandStatus::Stood | HandStatus::Active => {
            let player_total = hand.total();
            if dealer_total > 21 || player_total > dealer_total {
                HandResult::PlayerWins
            } else if player_total < dealer_total {
                HandResult::DealerWins
            } else {
                HandResult::Push
            }
        }
    }
}

impl Game {
    /// Dealer plays their hand, then the round is settled.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher, drawing once more on soft 17 when the table hits soft 17.
    pub(super) fn play_dealer(&mut self) -> Result<(), ShoeError> {
        self.phase = GamePhase::DealerTurn;
        self.dealer_hand.reveal_hole();

        while self.options.dealer_hits(self.dealer_hand.value()) {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            debug!(
                rank = card.rank,
                total = self.dealer_hand.value().total,
                "dealer draws"
            );
        }

        self.settle();
        Ok(())
    }

    /// Assigns a result to every player hand and ends the round.
    fn settle(&mut self) {
        let dealer_total = self.dealer_hand.value().total;
        let dealer_blackjack = self.dealer_hand.is_blackjack();

        for (index, hand) in self.player_hands.iter_mut().enumerate() {
            let result = settle_hand(hand, dealer_total, dealer_blackjack);
            hand.set_result(result);
            debug!(hand = index, total = hand.total(), ?result, "hand settled");
        }

        self.phase = GamePhase::RoundOver;
        info!(
            dealer_total,
            dealer_blackjack,
            hands = self.player_hands.len(),
            "round settled"
        );
    }
}
