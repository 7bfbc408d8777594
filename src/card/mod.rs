pub mod config;
pub mod generator;
pub mod render;
pub mod types;

pub use config::{ConfigError, LotoConfig, LINES_PER_CARD, MAX_TOKEN, TOKENS_PER_LINE};
pub use generator::CardGenerator;
pub use render::{render_card, render_rows};
pub use types::{Card, CardState, Cell, Token};
