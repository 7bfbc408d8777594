use crate::card::LotoConfig;
use crate::game::RoundState;
use crate::rng::GameRng;
use crate::simulation::claimant::FallibleClaimant;
use crate::simulation::engine::{run_round, RoundResult, SimulationError};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Parameters for a batch of autoplayed rounds
#[derive(Debug, Clone)]
pub struct BatchParams {
    pub config: LotoConfig,
    pub num_rounds: usize,
    /// Round i uses seed base_seed + i; random when None
    pub base_seed: Option<u64>,
    /// Chance that the autoplayer gets a single claim wrong
    pub mistake_rate: f64,
    pub show_progress: bool,
}

/// Aggregate outcome of many rounds
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub base_seed: u64,
    pub rounds: usize,
    pub player_wins: usize,
    pub computer_wins: usize,
    pub lost_by_mistake: usize,
    pub aborted: usize,
    pub exhausted: usize,
    pub avg_draws: f64,
    /// Number of draws -> rounds that ended after exactly that many
    pub draw_distribution: BTreeMap<usize, usize>,
}

impl BatchSummary {
    pub fn player_win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.player_wins as f64 / self.rounds as f64
        }
    }

    fn from_results(base_seed: u64, results: &[RoundResult]) -> Result<Self, SimulationError> {
        let mut summary = BatchSummary {
            base_seed,
            rounds: results.len(),
            ..Default::default()
        };

        for r in results {
            match r.outcome {
                RoundState::PlayerWon => summary.player_wins += 1,
                RoundState::ComputerWon => summary.computer_wins += 1,
                RoundState::Aborted => summary.aborted += 1,
                RoundState::Exhausted => summary.exhausted += 1,
                RoundState::Ongoing => return Err(SimulationError::Unfinished { seed: r.seed }),
            }
            if r.lost_by_mistake {
                summary.lost_by_mistake += 1;
            }
            *summary.draw_distribution.entry(r.draws).or_insert(0) += 1;
        }

        if !results.is_empty() {
            summary.avg_draws =
                results.iter().map(|r| r.draws as f64).sum::<f64>() / results.len() as f64;
        }
        Ok(summary)
    }
}

/// Play `num_rounds` independent rounds in parallel with an autoplayer
pub fn simulate_rounds(params: &BatchParams) -> Result<BatchSummary, SimulationError> {
    params.config.validate()?;
    let base_seed = params.base_seed.unwrap_or_else(|| GameRng::new(None).seed());

    let progress = if params.show_progress {
        let bar = ProgressBar::new(params.num_rounds as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rounds ({eta})") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<RoundResult> = (0..params.num_rounds)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(i as u64);
            // Claim mistakes get their own stream so they don't shift the deal
            let mut claimant = FallibleClaimant::new(
                params.mistake_rate,
                GameRng::new(Some(seed.rotate_left(32))),
            );
            let result = run_round(params.config, seed, &mut claimant, false);
            progress.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;
    progress.finish_and_clear();

    BatchSummary::from_results(base_seed, &results)
}
