//! Console front end: shows the barrel and both cards, reads y/n/q.

use crate::card::render_card;
use crate::game::{Claim, DrawResult, Round, RoundState};
use crate::rng::GameRng;
use crate::simulation::Claimant;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the loto game. You are playing against the computer.
You must not mistake or you lose.
Generating your card and mixing the barrels...";

const PROMPT: &str = "Is the barrel on your card? y/n or q to exit: ";

/// Map a typed answer to a claim. Anything unrecognised returns None.
pub fn parse_answer(input: &str) -> Option<Claim> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(Claim::Present),
        "n" | "no" => Some(Claim::Absent),
        "q" | "quit" => Some(Claim::Quit),
        _ => None,
    }
}

/// Closing sentence for a finished round
pub fn outcome_message(round: &Round) -> &'static str {
    match round.state() {
        RoundState::PlayerWon => "You filled the entire card!",
        RoundState::ComputerWon => match round.last_turn() {
            Some(turn) if !turn.correct => "You lose!",
            _ => "Computer filled the entire card!",
        },
        RoundState::Aborted => "Game aborted.",
        RoundState::Exhausted => "The bag is empty. Nobody wins.",
        RoundState::Ongoing => "The round is still going.",
    }
}

/// Interactive human player on any reader/writer pair
pub struct ConsoleClaimant<R, W> {
    input: R,
    output: W,
    // Only for the cosmetic padding in card rows
    display_rng: GameRng,
}

impl<R: BufRead, W: Write> ConsoleClaimant<R, W> {
    pub fn new(input: R, output: W, display_rng: GameRng) -> Self {
        ConsoleClaimant {
            input,
            output,
            display_rng,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_turn(&mut self, round: &Round, draw: DrawResult) -> std::io::Result<()> {
        writeln!(self.output, "New barrel: {} (left: {})", draw.token, draw.remaining)?;
        let player = render_card(
            "Your card",
            round.player_card(),
            round.player_state(),
            &mut self.display_rng,
        );
        let computer = render_card(
            "Computer's card",
            round.computer_card(),
            round.computer_state(),
            &mut self.display_rng,
        );
        writeln!(self.output, "{}\n{}", player, computer)
    }

    /// Prompt until a valid answer arrives. End of input counts as quitting.
    fn read_claim(&mut self) -> std::io::Result<Claim> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Claim::Quit);
            }
            if let Some(claim) = parse_answer(&line) {
                return Ok(claim);
            }
        }
    }
}

impl<R: BufRead, W: Write> Claimant for ConsoleClaimant<R, W> {
    fn claim(&mut self, round: &Round, draw: DrawResult) -> Claim {
        let answer = self
            .show_turn(round, draw)
            .and_then(|_| self.read_claim());
        match answer {
            Ok(claim) => claim,
            Err(e) => {
                tracing::error!(error = %e, "console I/O failed, quitting");
                Claim::Quit
            }
        }
    }

    fn after_claim(&mut self, round: &Round) {
        // a quit leaves the previous turn in place, so it must not be praised again
        let right = round.state() != RoundState::Aborted
            && round.last_turn().map_or(false, |t| t.correct);
        if !right {
            return;
        }
        let written = if round.state() == RoundState::Ongoing {
            writeln!(self.output, "You're right!\n\nNext turn...\n")
        } else {
            writeln!(self.output, "You're right!\n")
        };
        if let Err(e) = written {
            tracing::error!(error = %e, "console I/O failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, LotoConfig};
    use crate::game::TokenBag;
    use crate::simulation::play_round;
    use std::io::Cursor;

    fn scripted_round(draw_order: Vec<u8>) -> Round {
        let player = Card::from_rows(vec![
            vec![1, 2, 3, 4, 5],
            vec![6, 7, 8, 9, 10],
            vec![11, 12, 13, 14, 15],
        ]);
        let computer = Card::from_rows(vec![
            vec![16, 17, 18, 19, 20],
            vec![21, 22, 23, 24, 25],
            vec![26, 27, 28, 29, 30],
        ]);
        Round::from_parts(LotoConfig::default(), player, computer, TokenBag::from_draw_order(draw_order))
    }

    fn console(input: &str) -> ConsoleClaimant<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleClaimant::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            GameRng::new(Some(1)),
        )
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Some(Claim::Present));
        assert_eq!(parse_answer(" N "), Some(Claim::Absent));
        assert_eq!(parse_answer("q"), Some(Claim::Quit));
        assert_eq!(parse_answer("maybe"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn test_console_round_with_retry() {
        let mut round = scripted_round(vec![1, 50, 2]);
        let mut claimant = console("y\nwhat\nn\nq\n");
        let outcome = play_round(&mut round, &mut claimant, false).unwrap();
        assert_eq!(outcome, RoundState::Aborted);

        let transcript = String::from_utf8(claimant.into_output()).unwrap();
        assert!(transcript.contains("New barrel: 1 (left: 2)"));
        assert!(transcript.contains("New barrel: 50 (left: 1)"));
        assert_eq!(transcript.matches("You're right!").count(), 2);
        // the unrecognised answer re-prompts
        assert_eq!(transcript.matches(PROMPT).count(), 4);
        assert!(transcript.contains(" Your card "));
        assert!(transcript.contains(" Computer's card "));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut round = scripted_round(vec![1, 2]);
        let mut claimant = console("");
        let outcome = play_round(&mut round, &mut claimant, false).unwrap();
        assert_eq!(outcome, RoundState::Aborted);
        assert_eq!(outcome_message(&round), "Game aborted.");
    }

    #[test]
    fn test_outcome_messages() {
        let mut round = scripted_round(vec![50, 1]);
        round.draw_next().unwrap();
        round.submit_claim(Claim::Present).unwrap();
        assert_eq!(outcome_message(&round), "You lose!");

        let mut round = scripted_round((16..=30).collect());
        let mut claimant = console(&"n\n".repeat(15));
        play_round(&mut round, &mut claimant, false).unwrap();
        assert_eq!(outcome_message(&round), "Computer filled the entire card!");
    }

    #[test]
    fn test_winning_claim_is_acknowledged() {
        let mut round = scripted_round((1..=15).collect());
        let mut claimant = console(&"y\n".repeat(15));
        let outcome = play_round(&mut round, &mut claimant, false).unwrap();
        assert_eq!(outcome, RoundState::PlayerWon);
        assert_eq!(outcome_message(&round), "You filled the entire card!");

        let transcript = String::from_utf8(claimant.into_output()).unwrap();
        assert_eq!(transcript.matches("You're right!").count(), 15);
        assert_eq!(transcript.matches("Next turn...").count(), 14);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_broken_output_quits_quietly() {
        let mut round = scripted_round(vec![1, 2]);
        let mut claimant = ConsoleClaimant::new(Cursor::new(b"y\n".to_vec()), BrokenPipe, GameRng::new(Some(1)));
        let outcome = play_round(&mut round, &mut claimant, false).unwrap();
        assert_eq!(outcome, RoundState::Aborted);

        // acknowledging a correct claim on a dead console must not panic
        let mut round = scripted_round(vec![1, 2]);
        round.draw_next().unwrap();
        round.submit_claim(Claim::Present).unwrap();
        claimant.after_claim(&round);
        assert_eq!(round.state(), RoundState::Ongoing);
    }
}
