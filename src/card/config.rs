use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_TOKEN: u8 = 90;
pub const LINES_PER_CARD: usize = 3;
pub const TOKENS_PER_LINE: usize = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("A card needs {requested} distinct tokens but only {available} exist")]
    NotEnoughTokens { requested: usize, available: usize },
    #[error("'{0}' must be greater than zero")]
    ZeroSized(&'static str),
}

/// Shape of the game: how many tokens are in the bag and how a card is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotoConfig {
    pub max_token: u8,
    pub lines_per_card: usize,
    pub tokens_per_line: usize,
}

impl Default for LotoConfig {
    fn default() -> Self {
        LotoConfig {
            max_token: MAX_TOKEN,
            lines_per_card: LINES_PER_CARD,
            tokens_per_line: TOKENS_PER_LINE,
        }
    }
}

impl LotoConfig {
    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: LotoConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tokens_per_card(&self) -> usize {
        self.lines_per_card * self.tokens_per_line
    }

    /// Every token value in the bag, ascending
    pub fn all_tokens(&self) -> Vec<u8> {
        (1..=self.max_token).collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_token == 0 {
            return Err(ConfigError::ZeroSized("max_token"));
        }
        if self.lines_per_card == 0 {
            return Err(ConfigError::ZeroSized("lines_per_card"));
        }
        if self.tokens_per_line == 0 {
            return Err(ConfigError::ZeroSized("tokens_per_line"));
        }
        if (self.max_token as usize) < self.tokens_per_card() {
            return Err(ConfigError::NotEnoughTokens {
                requested: self.tokens_per_card(),
                available: self.max_token as usize,
            });
        }
        Ok(())
    }
}
