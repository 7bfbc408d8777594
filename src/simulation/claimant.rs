use crate::game::{Claim, DrawResult, Round};
use crate::rng::GameRng;
use std::collections::VecDeque;

/// Whoever answers for the human player: a console, a bot, a test script
pub trait Claimant {
    /// Decide whether the drawn barrel is on the player's card
    fn claim(&mut self, round: &Round, draw: DrawResult) -> Claim;

    /// Called after each adjudicated claim
    fn after_claim(&mut self, _round: &Round) {}
}

/// Always answers correctly
#[derive(Debug, Clone, Default)]
pub struct TruthfulClaimant;

impl Claimant for TruthfulClaimant {
    fn claim(&mut self, round: &Round, draw: DrawResult) -> Claim {
        if round.player_card().contains(draw.token) {
            Claim::Present
        } else {
            Claim::Absent
        }
    }
}

/// Answers correctly except with probability `mistake_rate`, when it flips the answer
#[derive(Clone)]
pub struct FallibleClaimant {
    mistake_rate: f64,
    rng: GameRng,
}

impl FallibleClaimant {
    pub fn new(mistake_rate: f64, rng: GameRng) -> Self {
        FallibleClaimant {
            mistake_rate: mistake_rate.clamp(0.0, 1.0),
            rng,
        }
    }
}

impl Claimant for FallibleClaimant {
    fn claim(&mut self, round: &Round, draw: DrawResult) -> Claim {
        let truth = TruthfulClaimant.claim(round, draw);
        if self.mistake_rate > 0.0 && self.rng.random() < self.mistake_rate {
            match truth {
                Claim::Present => Claim::Absent,
                _ => Claim::Present,
            }
        } else {
            truth
        }
    }
}

/// Replays a fixed list of claims, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedClaimant {
    claims: VecDeque<Claim>,
}

impl ScriptedClaimant {
    pub fn new(claims: impl IntoIterator<Item = Claim>) -> Self {
        ScriptedClaimant {
            claims: claims.into_iter().collect(),
        }
    }
}

impl Claimant for ScriptedClaimant {
    fn claim(&mut self, _round: &Round, _draw: DrawResult) -> Claim {
        self.claims.pop_front().unwrap_or(Claim::Quit)
    }
}
