use clap::{Parser, Subcommand};
use loto::card::LotoConfig;
use loto::cli::{outcome_message, ConsoleClaimant, WELCOME};
use loto::game::Round;
use loto::rng::GameRng;
use loto::simulation::{play_round, simulate_rounds, BatchParams, BatchSummary};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "loto")]
#[command(about = "Loto: cross out your card before the computer does", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// JSON file overriding max_token, lines_per_card, tokens_per_line
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging and turn-by-turn output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one interactive round (default)
    Play,

    /// Autoplay many rounds and report outcome statistics
    Simulate {
        /// Number of rounds to simulate
        #[arg(short, long, default_value = "1000")]
        num_rounds: usize,

        /// Probability that the autoplayer answers a single barrel wrongly
        #[arg(short, long, default_value = "0.0")]
        mistake_rate: f64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match LotoConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("✗ Failed to load config '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => LotoConfig::default(),
    };

    match cli.command {
        Some(Commands::Simulate {
            num_rounds,
            mistake_rate,
            json,
        }) => {
            run_simulation(config, num_rounds, cli.seed, mistake_rate, json);
        }
        Some(Commands::Play) | None => {
            play_interactive(config, cli.seed, cli.verbose);
        }
    }
}

fn play_interactive(config: LotoConfig, seed: Option<u64>, verbose: bool) {
    let mut rng = GameRng::new(seed);
    println!("{}", WELCOME);
    println!("Seed: {}\n", rng.seed());

    let mut round = match Round::new(config, &mut rng) {
        Ok(round) => round,
        Err(e) => {
            eprintln!("✗ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut claimant = ConsoleClaimant::new(stdin.lock(), std::io::stdout(), rng.split());

    if let Err(e) = play_round(&mut round, &mut claimant, verbose) {
        eprintln!("✗ Round failed: {}", e);
        std::process::exit(1);
    }

    println!("{}", outcome_message(&round));
    println!("Barrels drawn: {}", round.draws());
}

fn run_simulation(config: LotoConfig, num_rounds: usize, seed: Option<u64>, mistake_rate: f64, json: bool) {
    let params = BatchParams {
        config,
        num_rounds,
        base_seed: seed,
        mistake_rate,
        show_progress: !json,
    };

    let start = std::time::Instant::now();
    let summary = match simulate_rounds(&params) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("✗ Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_summary(&summary, mistake_rate);
    println!(
        "\nSimulation completed in {:.2?} ({:.0} rounds/sec)",
        elapsed,
        num_rounds as f64 / elapsed.as_secs_f64()
    );
}

fn print_summary(summary: &BatchSummary, mistake_rate: f64) {
    let rounds = summary.rounds.max(1) as f64;

    println!("\n=== Loto Simulation ===\n");
    println!("Rounds: {}", summary.rounds);
    println!("Base seed: {}", summary.base_seed);
    println!("Mistake rate: {:.1}%", mistake_rate * 100.0);
    println!();

    println!("=== Results ===\n");
    println!("Player wins:   {:5.1}% ({})", summary.player_win_rate() * 100.0, summary.player_wins);
    println!(
        "Computer wins: {:5.1}% ({}, {} by mistake)",
        summary.computer_wins as f64 / rounds * 100.0,
        summary.computer_wins,
        summary.lost_by_mistake
    );
    if summary.exhausted > 0 {
        println!("Exhausted:     {:5.1}% ({})", summary.exhausted as f64 / rounds * 100.0, summary.exhausted);
    }
    println!("Average draws: {:.2}", summary.avg_draws);
    println!();

    println!("Draw distribution:");
    for (draws, count) in &summary.draw_distribution {
        let pct = *count as f64 / rounds * 100.0;
        let bar = "█".repeat((pct * 2.0) as usize);
        println!("  {:2} draws: {:5.1}% {} ({})", draws, pct, bar, count);
    }
}
