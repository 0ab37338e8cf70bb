use bjengine::{
    Card, Game, GameOptions, GamePhase, GameState, Hand, HandResult, HandStatus, PayoutRatio,
    PlayerAction, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(
        seed: u32,
        decks: u8,
        dealer_hits_soft_17: bool,
        payout_numerator: u16,
        payout_denominator: u16,
    ) -> Result<WasmGame, JsValue> {
        let ratio = PayoutRatio::new(payout_numerator, payout_denominator).map_err(js_err)?;
        let options = GameOptions::default()
            .with_decks(decks)
            .with_dealer_hits_soft_17(dealer_hits_soft_17)
            .with_blackjack_pays(ratio);
        let game = Game::new(options, seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    #[wasm_bindgen(js_name = resetGame)]
    pub fn reset_game(&mut self) {
        self.game.reset_game();
    }

    #[wasm_bindgen(js_name = startRound)]
    pub fn start_round(&mut self, bet: u32) -> Result<(), JsValue> {
        self.game.start_round(bet as usize).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    #[wasm_bindgen(js_name = doubleDown)]
    pub fn double_down(&mut self) -> Result<(), JsValue> {
        self.game.double_down().map_err(js_err)
    }

    pub fn split(&mut self) -> Result<(), JsValue> {
        self.game.split().map_err(js_err)
    }

    #[wasm_bindgen(js_name = getAvailableActions)]
    pub fn available_actions(&self) -> Result<JsValue, JsValue> {
        let actions: Vec<&'static str> = self
            .game
            .available_actions()
            .into_iter()
            .map(action_to_str)
            .collect();
        to_js_value(&actions)
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot::from(self.game.state());
        to_js_value(&snapshot)
    }

    #[wasm_bindgen(js_name = blackjackPayout)]
    pub fn blackjack_payout(&self) -> f64 {
        self.game.options().blackjack_pays.as_f64()
    }

    /// Evaluates cards given as ranks (1 = Ace .. 13 = King).
    #[wasm_bindgen(js_name = handValue)]
    pub fn hand_value(ranks: Vec<u8>) -> Result<JsValue, JsValue> {
        let cards: Vec<Card> = ranks
            .into_iter()
            .map(|rank| Card::new(Suit::Spades, rank))
            .collect();
        let value = Game::hand_value(&cards);
        to_js_value(&JsHandValue {
            total: value.total,
            is_soft: value.is_soft,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    deck_size: u32,
    player_hands: Vec<JsHand>,
    dealer_hand: Vec<JsCard>,
    active_hand_index: Option<u32>,
    phase: &'static str,
    dealer_up_card_value: u8,
    available_actions: Vec<&'static str>,
}

impl From<GameState> for Snapshot {
    fn from(state: GameState) -> Self {
        Self {
            deck_size: state.deck_size as u32,
            player_hands: state.player_hands.iter().map(JsHand::from).collect(),
            dealer_hand: state.dealer_hand.into_iter().map(card_to_js).collect(),
            active_hand_index: state.active_hand_index.map(|index| index as u32),
            phase: phase_to_str(state.phase),
            dealer_up_card_value: state.dealer_up_card_value,
            available_actions: state
                .available_actions
                .into_iter()
                .map(action_to_str)
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: u8,
    rank: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsHandValue {
    total: u16,
    is_soft: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsHand {
    cards: Vec<JsCard>,
    bet: u32,
    status: &'static str,
    result: &'static str,
    value: JsHandValue,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        let value = hand.value();
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            bet: hand.bet() as u32,
            status: hand_status_to_str(hand.status()),
            result: result_to_str(hand.result()),
            value: JsHandValue {
                total: value.total,
                is_soft: value.is_soft,
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_index(card.suit),
        rank: card.rank,
    }
}

fn suit_index(suit: Suit) -> u8 {
    match suit {
        Suit::Hearts => 0,
        Suit::Diamonds => 1,
        Suit::Clubs => 2,
        Suit::Spades => 3,
    }
}

fn phase_to_str(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Betting => "BETTING",
        GamePhase::PlayerTurn => "PLAYER_TURN",
        GamePhase::DealerTurn => "DEALER_TURN",
        GamePhase::RoundOver => "ROUND_OVER",
    }
}

fn action_to_str(action: PlayerAction) -> &'static str {
    match action {
        PlayerAction::Hit => "HIT",
        PlayerAction::Stand => "STAND",
        PlayerAction::DoubleDown => "DOUBLE_DOWN",
        PlayerAction::Split => "SPLIT",
        PlayerAction::Insurance => "INSURANCE",
    }
}

fn hand_status_to_str(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "ACTIVE",
        HandStatus::Stood => "STOOD",
        HandStatus::Bust => "BUST",
        HandStatus::Blackjack => "BLACKJACK",
    }
}

fn result_to_str(result: HandResult) -> &'static str {
    match result {
        HandResult::Pending => "PENDING",
        HandResult::PlayerWins => "PLAYER_WINS",
        HandResult::DealerWins => "DEALER_WINS",
        HandResult::Push => "PUSH",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
