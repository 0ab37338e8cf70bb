//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::error::OptionsError;
use crate::hand::HandValue;

/// Blackjack payout multiplier as a ratio.
///
/// The engine only records outcomes; callers use the ratio to price a
/// winning natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRatio {
    /// Numerator of the ratio.
    pub numerator: u16,
    /// Denominator of the ratio.
    pub denominator: u16,
}

impl PayoutRatio {
    /// Pays 3 to 2.
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    /// Pays 6 to 5.
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };
    /// Pays even money.
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a ratio.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidPayout`] if either part is zero.
    pub const fn new(numerator: u16, denominator: u16) -> Result<Self, OptionsError> {
        if numerator == 0 || denominator == 0 {
            return Err(OptionsError::InvalidPayout);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Winnings on `bet` at this ratio, rounded down. The stake is not included.
    ///
    /// ```
    /// use bjengine::PayoutRatio;
    ///
    /// assert_eq!(PayoutRatio::THREE_TO_TWO.winnings(10), 15);
    /// assert_eq!(PayoutRatio::SIX_TO_FIVE.winnings(7), 8);
    /// ```
    #[must_use]
    pub const fn winnings(&self, bet: usize) -> usize {
        if self.denominator == 0 {
            return 0;
        }
        bet.saturating_mul(self.numerator as usize) / self.denominator as usize
    }

    /// Returns the ratio as a float (for display).
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl Default for PayoutRatio {
    fn default() -> Self {
        Self::THREE_TO_TWO
    }
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjengine::{GameOptions, PayoutRatio};
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(PayoutRatio::SIX_TO_FIVE)
///     .with_dealer_hits_soft_17(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether the dealer draws on soft 17.
    pub dealer_hits_soft_17: bool,
    /// Blackjack payout ratio, for callers computing payouts.
    pub blackjack_pays: PayoutRatio,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            dealer_hits_soft_17: true,
            blackjack_pays: PayoutRatio::THREE_TO_TWO,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer hits soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hits_soft_17(false);
    /// assert!(!options.dealer_hits_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::{GameOptions, PayoutRatio};
    ///
    /// let options = GameOptions::default().with_blackjack_pays(PayoutRatio::ONE_TO_ONE);
    /// assert_eq!(options.blackjack_pays, PayoutRatio::ONE_TO_ONE);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: PayoutRatio) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks or the payout ratio has a zero
    /// part. Any deck count a `u8` holds is accepted.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::NoDecks);
        }
        if self.blackjack_pays.numerator == 0 || self.blackjack_pays.denominator == 0 {
            return Err(OptionsError::InvalidPayout);
        }
        Ok(())
    }

    /// Total number of cards in a fresh shoe.
    #[must_use]
    pub const fn shoe_size(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns whether a shoe with `remaining` cards is below the reshuffle
    /// point of one third of a fresh shoe.
    ///
    /// ```
    /// use bjengine::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert!(!options.below_reshuffle_threshold(18));
    /// assert!(options.below_reshuffle_threshold(17));
    /// ```
    #[must_use]
    pub const fn below_reshuffle_threshold(&self, remaining: usize) -> bool {
        remaining.saturating_mul(3) < self.shoe_size()
    }

    /// Returns whether the dealer must draw on `value`.
    ///
    /// The dealer draws below 17, and on a soft 17 when
    /// [`dealer_hits_soft_17`](Self::dealer_hits_soft_17) is set.
    ///
    /// ```
    /// use bjengine::{GameOptions, HandValue};
    ///
    /// let soft_17 = HandValue { total: 17, is_soft: true };
    /// assert!(GameOptions::default().dealer_hits(soft_17));
    /// assert!(!GameOptions::default().with_dealer_hits_soft_17(false).dealer_hits(soft_17));
    /// ```
    #[must_use]
    pub const fn dealer_hits(&self, value: HandValue) -> bool {
        value.total < 17 || (value.total == 17 && value.is_soft && self.dealer_hits_soft_17)
    }
}
