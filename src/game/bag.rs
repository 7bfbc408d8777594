use crate::card::{LotoConfig, Token};
use crate::game::error::GameError;
use crate::rng::GameRng;

/// Result of pulling one barrel out of the bag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawResult {
    pub token: Token,
    pub remaining: usize,
}

/// Bag of barrels - every token exactly once, in random order
#[derive(Debug, Clone)]
pub struct TokenBag {
    tokens: Vec<Token>,
}

impl TokenBag {
    /// Fill the bag with 1..=max_token and shuffle it
    pub fn new(config: &LotoConfig, rng: &mut GameRng) -> Self {
        let mut tokens = config.all_tokens();
        rng.shuffle(&mut tokens);
        TokenBag { tokens }
    }

    /// A bag that yields `draw_order` front to back, for scripted rounds
    pub fn from_draw_order(draw_order: Vec<Token>) -> Self {
        let mut tokens = draw_order;
        tokens.reverse();
        TokenBag { tokens }
    }

    /// Take the next barrel. Order was randomized up front, so it comes off the end.
    pub fn draw(&mut self) -> Result<DrawResult, GameError> {
        let token = self.tokens.pop().ok_or(GameError::EmptyBag)?;
        Ok(DrawResult {
            token,
            remaining: self.tokens.len(),
        })
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens still in the bag; the next draw is the last element
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
