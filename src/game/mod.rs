pub mod bag;
pub mod error;
pub mod round;

pub use bag::{DrawResult, TokenBag};
pub use error::GameError;
pub use round::{Claim, Round, RoundState, Turn};
