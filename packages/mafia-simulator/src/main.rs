//! Mafia simulator CLI: runs batches of AI-only games in memory.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use mafia_engine::ai::{create_ai, AiPlayer};
use mafia_engine::domain::{validate_complete, RoleCounts, PLAYERS};
use mafia_engine::{GameEnding, RoleKind, WinOutcome};
use metrics::{build_game_metrics, GameMetricsInput};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use types::{MetricsLevel, OutputFormat, RoleArg};

#[derive(Parser)]
#[command(name = "mafia-simulator")]
#[command(about = "Fast in-memory Mafia game simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "strategic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "strategic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "strategic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "strategic")]
    seat3: AiType,

    /// Role for each seat, in seat order
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["mafia", "doctor", "civilian", "civilian"]
    )]
    roles: Vec<RoleArg>,

    /// Base seed; game N seeds its AIs from seed + N for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

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

    /// Compress the results file
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "basic")]
    metrics_level: MetricsLevel,
}

#[derive(Debug, Clone, ValueEnum)]
enum AiType {
    Strategic,
    Random,
}

impl AiType {
    fn name(&self) -> &'static str {
        match self {
            AiType::Strategic => "Strategic",
            AiType::Random => "RandomPlayer", // Actual name in registry
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise silent unless asked
    let default_level = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let roles = parse_roles(&args.roles)?;

    let seat_types = if let Some(seats_ai) = args.seats {
        [
            seats_ai.clone(),
            seats_ai.clone(),
            seats_ai.clone(),
            seats_ai,
        ]
    } else {
        [args.seat0, args.seat1, args.seat2, args.seat3]
    };
    let ai_types: [String; PLAYERS] =
        std::array::from_fn(|seat| seat_types[seat].name().to_string());

    if args.show_output {
        info!("Starting Mafia simulator: {} games", args.games);
        info!("AI types: {:?}", ai_types);
        info!("Roles: {:?}", roles);
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num));
        let ais = create_ai_players(&ai_types, game_seed)?;

        match Simulator::new(roles).simulate_game(&ais) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    GameMetricsInput {
                        game_id: game_num,
                        seed: game_seed,
                        ai_types: ai_types.clone(),
                        roles,
                        total_games: args.games,
                        detailed: matches!(args.metrics_level, MetricsLevel::Detailed),
                    },
                    &result,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!("Game {} completed: {:?}", game_num, result.ending);
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
    let (results_path, csv_path) = output_writer.output_paths();
    let (results_path, csv_path) = (results_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", results_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

/// One role per seat, matching the required line-up.
fn parse_roles(args: &[RoleArg]) -> Result<[RoleKind; PLAYERS], Box<dyn std::error::Error>> {
    let roles: [RoleKind; PLAYERS] = args
        .iter()
        .map(|&r| RoleKind::from(r))
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|v: Vec<RoleKind>| format!("expected {PLAYERS} roles, got {}", v.len()))?;

    let mut counts = RoleCounts::default();
    for role in roles {
        counts.increment(role);
    }
    if !validate_complete(&counts) {
        let msg = format!("roles must be one Mafia, one Doctor, two Civilians; got {roles:?}");
        return Err(msg.into());
    }
    Ok(roles)
}

fn create_ai_players(
    ai_types: &[String; PLAYERS],
    game_seed: u64,
) -> Result<[Box<dyn AiPlayer>; PLAYERS], Box<dyn std::error::Error>> {
    let mut ais = Vec::with_capacity(PLAYERS);
    for (seat, ai_type) in ai_types.iter().enumerate() {
        let config = serde_json::json!({
            "seed": game_seed.wrapping_mul(PLAYERS as u64).wrapping_add(seat as u64)
        });
        let ai = create_ai(ai_type, Some(&config))
            .ok_or_else(|| format!("Unknown AI type: {ai_type}"))?;
        ais.push(ai);
    }
    ais.try_into().map_err(|_| "AI player count mismatch".into())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
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

    let mut town_wins = 0u32;
    let mut mafia_wins = 0u32;
    let mut saves = 0u32;
    let mut total_rounds = 0u64;
    for result in results {
        match result.ending {
            GameEnding::Victory(WinOutcome::TownWin) => town_wins += 1,
            GameEnding::Victory(WinOutcome::MafiaWin) => mafia_wins += 1,
            GameEnding::DoctorSave { .. } => saves += 1,
            GameEnding::Victory(WinOutcome::Ongoing) => {}
        }
        total_rounds += u64::from(result.rounds);
    }

    let n = results.len() as f64;
    let pct = |count: u32| count as f64 / n * 100.0;
    println!("\n=== Outcomes ===");
    println!("Town wins:      {} ({:.1}%)", town_wins, pct(town_wins));
    println!("Mafia wins:     {} ({:.1}%)", mafia_wins, pct(mafia_wins));
    println!("Doctor saves:   {} ({:.1}%)", saves, pct(saves));
    println!("Average rounds: {:.2}", total_rounds as f64 / n);
}
