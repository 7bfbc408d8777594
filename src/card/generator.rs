use crate::card::config::{ConfigError, LotoConfig};
use crate::card::types::{Card, Token};
use crate::rng::GameRng;

/// Deals valid cards for a validated configuration
#[derive(Debug, Clone)]
pub struct CardGenerator {
    config: LotoConfig,
    pool: Vec<Token>,
}

impl CardGenerator {
    pub fn new(config: LotoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(CardGenerator {
            config,
            pool: config.all_tokens(),
        })
    }

    pub fn config(&self) -> &LotoConfig {
        &self.config
    }

    /// Sample tokens_per_card distinct tokens, cut them into rows in the order
    /// they were sampled, then sort each row on its own
    pub fn generate(&self, rng: &mut GameRng) -> Card {
        let sample = rng.sample(&self.pool, self.config.tokens_per_card());
        let rows = sample
            .chunks(self.config.tokens_per_line)
            .map(|chunk| chunk.to_vec())
            .collect();
        Card::from_rows(rows)
    }
}
