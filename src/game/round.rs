use crate::card::{Card, CardGenerator, CardState, ConfigError, LotoConfig, Token};
use crate::game::bag::{DrawResult, TokenBag};
use crate::game::error::GameError;
use crate::rng::GameRng;
use std::fmt;
use tracing::{debug, info, warn};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    Ongoing,
    PlayerWon,
    ComputerWon,
    Aborted,
    /// Bag ran dry with neither card complete
    Exhausted,
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::Ongoing)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundState::Ongoing => "ongoing",
            RoundState::PlayerWon => "player won",
            RoundState::ComputerWon => "computer won",
            RoundState::Aborted => "aborted",
            RoundState::Exhausted => "bag exhausted",
        };
        write!(f, "{}", name)
    }
}

/// The human's answer to "is this barrel on your card?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    Present,
    Absent,
    Quit,
}

impl Claim {
    /// Whether this claim agrees with the card. Quit is never correct.
    pub fn is_correct(&self, actually_present: bool) -> bool {
        matches!(
            (self, actually_present),
            (Claim::Present, true) | (Claim::Absent, false)
        )
    }
}

/// One adjudicated turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub token: Token,
    pub claim: Claim,
    pub correct: bool,
}

/// One game between the human and the computer
#[derive(Debug, Clone)]
pub struct Round {
    config: LotoConfig,
    player_card: Card,
    player_state: CardState,
    computer_card: Card,
    computer_state: CardState,
    bag: TokenBag,
    pending: Option<Token>,
    last_token: Option<Token>,
    draws: usize,
    turns: Vec<Turn>,
    state: RoundState,
}

impl Round {
    /// Deal two fresh cards and shuffle a fresh bag
    pub fn new(config: LotoConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let generator = CardGenerator::new(config)?;
        let player_card = generator.generate(rng);
        let computer_card = generator.generate(rng);
        let bag = TokenBag::new(&config, rng);
        debug!(seed = rng.seed(), "new round dealt");
        Ok(Self::from_parts(config, player_card, computer_card, bag))
    }

    /// Assemble a round from known cards and bag
    pub fn from_parts(config: LotoConfig, player_card: Card, computer_card: Card, bag: TokenBag) -> Self {
        Round {
            config,
            player_state: player_card.new_state(),
            computer_state: computer_card.new_state(),
            player_card,
            computer_card,
            bag,
            pending: None,
            last_token: None,
            draws: 0,
            turns: Vec::new(),
            state: RoundState::Ongoing,
        }
    }

    /// Pull the next barrel. It must be claimed before another can be drawn.
    pub fn draw_next(&mut self) -> Result<DrawResult, GameError> {
        self.ensure_ongoing()?;
        if let Some(token) = self.pending {
            warn!(token, "draw requested while a claim is pending");
            return Err(GameError::DrawPending(token));
        }

        let draw = match self.bag.draw() {
            Ok(draw) => draw,
            Err(e) => {
                self.finish(RoundState::Exhausted);
                return Err(e);
            }
        };
        debug!(token = draw.token, remaining = draw.remaining, "barrel drawn");
        self.pending = Some(draw.token);
        self.last_token = Some(draw.token);
        self.draws += 1;
        Ok(draw)
    }

    /// Adjudicate the claim for the pending barrel and advance the round
    pub fn submit_claim(&mut self, claim: Claim) -> Result<RoundState, GameError> {
        self.ensure_ongoing()?;
        let token = match self.pending.take() {
            Some(token) => token,
            None => {
                warn!(?claim, "claim submitted without a drawn barrel");
                return Err(GameError::NoPendingDraw);
            }
        };

        if claim == Claim::Quit {
            self.finish(RoundState::Aborted);
            return Ok(self.state);
        }

        let correct = claim.is_correct(self.player_card.contains(token));
        self.turns.push(Turn { token, claim, correct });
        debug!(token, ?claim, correct, "claim adjudicated");

        if !correct {
            self.finish(RoundState::ComputerWon);
            return Ok(self.state);
        }

        // Both cards get the barrel; it's a no-op where absent
        self.player_state.mark(token);
        self.computer_state.mark(token);

        if self.player_state.is_complete() {
            self.finish(RoundState::PlayerWon);
        } else if self.computer_state.is_complete() {
            self.finish(RoundState::ComputerWon);
        } else if self.bag.is_empty() {
            self.finish(RoundState::Exhausted);
        }
        Ok(self.state)
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        if self.state.is_terminal() {
            warn!(state = %self.state, "round is already over");
            return Err(GameError::RoundNotOngoing(self.state));
        }
        Ok(())
    }

    fn finish(&mut self, outcome: RoundState) {
        self.state = outcome;
        info!(outcome = %outcome, draws = self.draws, "round finished");
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn config(&self) -> &LotoConfig {
        &self.config
    }

    pub fn player_card(&self) -> &Card {
        &self.player_card
    }

    pub fn player_state(&self) -> &CardState {
        &self.player_state
    }

    pub fn computer_card(&self) -> &Card {
        &self.computer_card
    }

    pub fn computer_state(&self) -> &CardState {
        &self.computer_state
    }

    pub fn last_token(&self) -> Option<Token> {
        self.last_token
    }

    /// Barrel drawn but not yet claimed
    pub fn pending_token(&self) -> Option<Token> {
        self.pending
    }

    pub fn remaining(&self) -> usize {
        self.bag.remaining()
    }

    /// Adjudicated turns so far, oldest first. A quit is not recorded.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of barrels taken out of the bag
    pub fn draws(&self) -> usize {
        self.draws
    }
}
