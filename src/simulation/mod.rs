pub mod batch;
pub mod claimant;
pub mod engine;

pub use batch::{simulate_rounds, BatchParams, BatchSummary};
pub use claimant::{Claimant, FallibleClaimant, ScriptedClaimant, TruthfulClaimant};
pub use engine::{play_round, run_round, RoundResult, SimulationError};
