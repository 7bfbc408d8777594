use crate::card::{ConfigError, LotoConfig};
use crate::game::{GameError, Round, RoundState};
use crate::rng::GameRng;
use crate::simulation::claimant::Claimant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Game error: {0}")]
    Game(#[from] GameError),
    #[error("Round with seed {seed} stopped before it finished")]
    Unfinished { seed: u64 },
}

/// Result of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub seed: u64,
    pub outcome: RoundState,
    /// Barrels drawn before the round ended
    pub draws: usize,
    /// The round was lost to a wrong claim rather than the computer's card
    pub lost_by_mistake: bool,
    pub player_marked: usize,
    pub computer_marked: usize,
}

/// Drive a round until it reaches a terminal state
pub fn play_round<C: Claimant + ?Sized>(
    round: &mut Round,
    claimant: &mut C,
    verbose: bool,
) -> Result<RoundState, GameError> {
    while !round.state().is_terminal() {
        let draw = match round.draw_next() {
            Ok(draw) => draw,
            Err(GameError::EmptyBag) => break,
            Err(e) => return Err(e),
        };

        let claim = claimant.claim(round, draw);
        let state = round.submit_claim(claim)?;

        if verbose {
            let verdict = match round.last_turn() {
                Some(turn) if turn.token == draw.token && turn.correct => "correct",
                Some(turn) if turn.token == draw.token => "WRONG",
                _ => "quit",
            };
            println!(
                "[Draw {:2}] barrel {:2} (left {:2}) claim {:?} -> {} | player {}/{} computer {}/{}",
                round.draws(),
                draw.token,
                draw.remaining,
                claim,
                verdict,
                round.player_state().marked_count(),
                round.player_card().token_count(),
                round.computer_state().marked_count(),
                round.computer_card().token_count(),
            );
        }

        claimant.after_claim(round);

        if verbose && state.is_terminal() {
            println!("Round over after {} draws: {}", round.draws(), state);
        }
    }
    Ok(round.state())
}

/// Deal a fresh seeded round and play it out
pub fn run_round<C: Claimant + ?Sized>(
    config: LotoConfig,
    seed: u64,
    claimant: &mut C,
    verbose: bool,
) -> Result<RoundResult, SimulationError> {
    let mut rng = GameRng::new(Some(seed));
    let mut round = Round::new(config, &mut rng)?;

    let outcome = play_round(&mut round, claimant, verbose)?;
    if !outcome.is_terminal() {
        return Err(SimulationError::Unfinished { seed });
    }

    Ok(summarize(seed, &round, outcome))
}

fn summarize(seed: u64, round: &Round, outcome: RoundState) -> RoundResult {
    RoundResult {
        seed,
        outcome,
        draws: round.draws(),
        lost_by_mistake: outcome == RoundState::ComputerWon
            && round.last_turn().map_or(false, |t| !t.correct),
        player_marked: round.player_state().marked_count(),
        computer_marked: round.computer_state().marked_count(),
    }
}
