use crate::card::Token;
use crate::game::round::RoundState;
use thiserror::Error;

/// Caller misuse of the round engine. Losing a round is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("The bag is empty")]
    EmptyBag,
    #[error("Round is over ({0})")]
    RoundNotOngoing(RoundState),
    #[error("No barrel has been drawn this turn")]
    NoPendingDraw,
    #[error("Barrel {0} is still waiting for a claim")]
    DrawPending(Token),
}
