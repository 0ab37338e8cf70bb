//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error};

use crate::action::{ActionSet, legal_actions};
use crate::card::Card;
use crate::error::{OptionsError, ShoeError};
use crate::hand::{DealerHand, Hand, HandValue, hand_value};
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod dealer;
mod round;
pub mod state;

pub use state::{GamePhase, GameState};

/// A single-seat blackjack engine.
///
/// The game owns the shoe, the player's hands, and the dealer's hand. All
/// operations take `&mut self` and run to completion; callers that share a
/// game across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Game options.
    options: GameOptions,
    /// Current phase.
    phase: GamePhase,
    /// Player hands in turn order (more than one after a split).
    player_hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Index of the hand being played.
    active_hand_index: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjengine::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.phase(), GamePhase::Betting);
    /// assert_eq!(game.cards_remaining(), 4 * 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game seeded from the operating system's entropy source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_os_rng(options: GameOptions) -> Result<Self, OptionsError> {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(options: GameOptions, mut rng: ChaCha8Rng) -> Result<Self, OptionsError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, &mut rng);

        Ok(Self {
            shoe,
            options,
            phase: GamePhase::Betting,
            player_hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            active_hand_index: 0,
            rng,
        })
    }

    /// Evaluates a sequence of cards without needing a game.
    #[must_use]
    pub fn hand_value(cards: &[Card]) -> HandValue {
        hand_value(cards)
    }

    /// Rebuilds the shoe, clears every hand, and returns to [`GamePhase::Betting`].
    pub fn reset_game(&mut self) {
        self.rebuild_shoe();
        self.player_hands.clear();
        self.dealer_hand.clear();
        self.active_hand_index = 0;
        self.phase = GamePhase::Betting;
    }

    /// Replaces the shoe, e.g. to replay a recorded deal.
    ///
    /// The reshuffle check at round start still applies, so a shoe shorter
    /// than a third of the configured size is replaced before dealing.
    pub fn replace_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    fn rebuild_shoe(&mut self) {
        self.shoe = Shoe::new(self.options.decks, &mut self.rng);
        debug!(cards = self.shoe.remaining(), "shoe rebuilt");
    }

    /// Returns whether the shoe would be reshuffled before the next deal.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.options
            .below_reshuffle_threshold(self.cards_remaining())
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, ShoeError> {
        self.shoe.draw().inspect_err(|_| {
            error!(phase = ?self.phase, "shoe exhausted mid-round");
        })
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the dealer's hand, hole card included.
    ///
    /// Use [`Game::state`] for the view a player is allowed to see.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the index of the hand being played, during the player's turn.
    #[must_use]
    pub const fn active_hand_index(&self) -> Option<usize> {
        match self.phase {
            GamePhase::PlayerTurn => Some(self.active_hand_index),
            _ => None,
        }
    }

    fn active_hand(&self) -> Option<&Hand> {
        self.player_hands.get(self.active_hand_index)
    }

    fn active_hand_mut(&mut self) -> Option<&mut Hand> {
        self.player_hands.get_mut(self.active_hand_index)
    }

    /// Returns the actions the player may take right now.
    #[must_use]
    pub fn available_actions(&self) -> ActionSet {
        legal_actions(self.phase, self.active_hand())
    }

    /// Returns an owned snapshot of the game.
    ///
    /// While the player is acting, the dealer's hole card is left out.
    #[must_use]
    pub fn state(&self) -> GameState {
        let dealer_hand = match self.phase {
            GamePhase::PlayerTurn => self.dealer_hand.cards().iter().take(1).copied().collect(),
            GamePhase::Betting | GamePhase::DealerTurn | GamePhase::RoundOver => {
                self.dealer_hand.cards().to_vec()
            }
        };

        GameState {
            deck_size: self.cards_remaining(),
            player_hands: self.player_hands.clone(),
            dealer_hand,
            active_hand_index: self.active_hand_index(),
            phase: self.phase,
            dealer_up_card_value: self.dealer_hand.up_card().map_or(0, Card::points),
            available_actions: self.available_actions(),
        }
    }
}
