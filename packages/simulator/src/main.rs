//! Session simulator CLI - plays whole impostor sessions in memory.
//!
//! Useful for checking that configuration changes (tie-break policy, voting
//! order, timer handling) behave sensibly over thousands of rounds.

mod error;
mod metrics;
mod output;
mod roster;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use error::SimulatorError;
use impostor_engine::SessionConfig;
use metrics::{build_game_metrics, catch_rate, GameContext, SpyStats};
use output::OutputWriter;
use simulator::{GameResult, Simulator, VoterProfile};
use tracing::{info, warn};
use types::{OutputFormat, TieBreakArg};

#[derive(Parser)]
#[command(name = "session-simulator")]
#[command(about = "In-memory simulator for pass-and-play impostor sessions")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Rounds per game (restart between rounds)
    #[arg(short, long, default_value = "3")]
    rounds: u32,

    /// Players at the table
    #[arg(short, long, default_value = "5")]
    players: usize,

    /// Category id from the built-in catalog
    #[arg(long, default_value = "food")]
    category: String,

    /// Base seed; game N uses seed + N. Random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Discussion countdown in seconds
    #[arg(long, default_value = "180")]
    discussion_seconds: u32,

    /// Move to voting as soon as the timer expires
    #[arg(long)]
    auto_advance: bool,

    /// Tie-break policy for the vote leader
    #[arg(long, default_value = "first")]
    tie_break: TieBreakArg,

    /// Draw a fresh voting order each round
    #[arg(long)]
    reshuffle_voting: bool,

    /// Chance a citizen names the spy
    #[arg(long, default_value = "0.5")]
    accuracy: f64,

    /// Chance a voter passes without voting
    #[arg(long, default_value = "0.0")]
    abstain_rate: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_discussion_seconds(self.discussion_seconds)
            .with_auto_advance(self.auto_advance)
            .with_tie_break(self.tie_break.into())
            .with_reshuffled_voting(self.reshuffle_voting)
    }

    fn profile(&self) -> VoterProfile {
        VoterProfile {
            accuracy: self.accuracy,
            abstain_rate: self.abstain_rate,
        }
    }
}

fn main() -> Result<(), SimulatorError> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.session_config();
    config.validate()?;
    // Fail before writing any files when the table cannot be set.
    roster::table(args.players, &args.category)?;
    config.check_player_count(args.players)?;

    if args.show_output {
        info!(
            games = args.games,
            rounds = args.rounds,
            players = args.players,
            category = %args.category,
            "Starting session simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut stats = SpyStats::default();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num));

        match run_game(&args, &config, game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let ctx = GameContext {
                    game_id: game_num,
                    seed: game_seed,
                    players: args.players,
                    category: &args.category,
                    session: &config,
                    total_games: args.games,
                };
                let metrics = build_game_metrics(&ctx, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                stats.record(&result);
                if args.verbose {
                    info!(
                        game_num,
                        caught = result.spies_caught(),
                        rounds = result.rounds.len(),
                        "Game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = {
        let (d, c) = output_writer.output_paths();
        (d.to_path_buf(), c.to_path_buf())
    };
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &stats, errors, elapsed, args.games);
    }

    Ok(())
}

fn run_game(
    args: &Args,
    config: &SessionConfig,
    seed: u64,
) -> Result<GameResult, SimulatorError> {
    let (players, category) = roster::table(args.players, &args.category)?;
    Simulator::new(config.clone(), args.profile(), seed)?
        .simulate_game(players, category, args.rounds)
}

fn print_summary(
    results: &[GameResult],
    stats: &SpyStats,
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let rounds: usize = results.iter().map(|r| r.rounds.len()).sum();
    let caught: usize = results.iter().map(GameResult::spies_caught).sum();
    let no_leader = results
        .iter()
        .flat_map(|r| &r.rounds)
        .filter(|r| r.leader.is_none())
        .count();
    println!(
        "Rounds: {}, spies caught: {} ({:.1}%), no leader: {}",
        rounds,
        caught,
        catch_rate(caught, rounds) * 100.0,
        no_leader
    );

    println!("\n=== Results by Player ===");
    for (player, (spied, caught)) in &stats.by_player {
        println!(
            "Player {}: spy {} times, caught {} ({:.1}%)",
            player,
            spied,
            caught,
            catch_rate(*caught as usize, *spied as usize) * 100.0
        );
    }
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
