//! Round settlement outcomes.

/// Outcome of a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandResult {
    /// Round has not been settled yet.
    #[default]
    Pending,
    /// Player wins (dealer busts or player has higher value, or an unmatched blackjack).
    PlayerWins,
    /// Dealer wins (player busts or dealer has higher value).
    DealerWins,
    /// Push (tie).
    Push,
}

impl HandResult {
    /// Returns whether the hand has been settled.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Pending)
    }
}
