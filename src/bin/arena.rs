//! Arena CLI — run opponent-vs-opponent experiments from the command line.
//!
//! Usage:
//!   cargo run --release --bin arena -- --games 200 --p1-type minimax --p2-type random
//!   cargo run --release --bin arena -- --games 50 --p1-profile perfect --p2-profile shuffler

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe_engine::engine::arena::run_arena;
use tictactoe_engine::engine::opponent::{MinimaxOpponent, Opponent, RandomOpponent};
use tictactoe_engine::engine::profiles::{load_default_profiles, load_profiles, ProfilesFile};

#[derive(Parser)]
#[command(name = "arena", about = "Run opponent-vs-opponent arena experiments")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    games: usize,

    /// Board size N (NxN grid)
    #[arg(long, default_value = "3")]
    size: usize,

    /// Base RNG seed for seeded strategies without an explicit seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Alternate which opponent plays circle between games
    #[arg(long, default_value = "true")]
    alternate_seats: bool,

    /// Path to opponent_profiles.toml (default: auto-discover)
    #[arg(long, env = "TICTACTOE_OPPONENT_PROFILES")]
    profiles: Option<PathBuf>,

    // --- Player 1 ---
    /// P1 display name
    #[arg(long, default_value = "p1")]
    p1_name: String,

    /// P1 profile name (from opponent_profiles.toml)
    #[arg(long)]
    p1_profile: Option<String>,

    /// P1 strategy type: "random" or "minimax"
    #[arg(long, default_value = "random")]
    p1_type: String,

    /// P1 RNG seed (random strategy)
    #[arg(long)]
    p1_seed: Option<u64>,

    /// P1 search depth (minimax strategy)
    #[arg(long)]
    p1_depth: Option<usize>,

    // --- Player 2 ---
    /// P2 display name
    #[arg(long, default_value = "p2")]
    p2_name: String,

    /// P2 profile name (from opponent_profiles.toml)
    #[arg(long)]
    p2_profile: Option<String>,

    /// P2 strategy type: "random" or "minimax"
    #[arg(long, default_value = "minimax")]
    p2_type: String,

    /// P2 RNG seed (random strategy)
    #[arg(long)]
    p2_seed: Option<u64>,

    /// P2 search depth (minimax strategy)
    #[arg(long)]
    p2_depth: Option<usize>,
}

struct PlayerSpec {
    name: String,
    opponent: Box<dyn Opponent>,
}

fn build_player(
    name: &str,
    profile_name: Option<&str>,
    strategy_type: &str,
    seed: Option<u64>,
    depth: Option<usize>,
    fallback_seed: u64,
    profiles: &ProfilesFile,
) -> PlayerSpec {
    if let Some(prof_name) = profile_name {
        let profile = profiles.profiles.get(prof_name).unwrap_or_else(|| {
            eprintln!("Error: profile '{}' not found in opponent_profiles.toml", prof_name);
            eprintln!(
                "Available profiles: {:?}",
                profiles.profiles.keys().collect::<Vec<_>>()
            );
            std::process::exit(1);
        });

        let opponent = profile.build().unwrap_or_else(|e| {
            eprintln!("Error in profile '{}': {}", prof_name, e);
            std::process::exit(1);
        });

        let display_name = if name == "p1" || name == "p2" {
            prof_name.to_string()
        } else {
            name.to_string()
        };

        return PlayerSpec {
            name: display_name,
            opponent,
        };
    }

    let opponent: Box<dyn Opponent> = match strategy_type {
        "minimax" => match depth {
            Some(d) => Box::new(MinimaxOpponent::with_depth(d)),
            None => Box::new(MinimaxOpponent::new()),
        },
        "random" => Box::new(RandomOpponent::seeded(seed.unwrap_or(fallback_seed))),
        other => {
            eprintln!("Error: unknown strategy type '{}'", other);
            std::process::exit(1);
        }
    };

    PlayerSpec {
        name: name.to_string(),
        opponent,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let profiles = match &cli.profiles {
        Some(path) => load_profiles(path).unwrap_or_else(|e| {
            eprintln!("Error loading profiles: {}", e);
            std::process::exit(1);
        }),
        None => load_default_profiles(),
    };

    let p1 = build_player(
        &cli.p1_name,
        cli.p1_profile.as_deref(),
        &cli.p1_type,
        cli.p1_seed,
        cli.p1_depth,
        cli.seed,
        &profiles,
    );
    let p2 = build_player(
        &cli.p2_name,
        cli.p2_profile.as_deref(),
        &cli.p2_type,
        cli.p2_seed,
        cli.p2_depth,
        cli.seed.wrapping_add(1),
        &profiles,
    );

    eprintln!(
        "Arena: {} games on a {size}x{size} board, alternate_seats={alt}",
        cli.games,
        size = cli.size,
        alt = cli.alternate_seats,
    );
    eprintln!("  {} vs {}", p1.name, p2.name);
    eprintln!();

    let total = cli.games;
    let progress_cb = move |done: usize, _total: usize| {
        eprint!("\r  [{}/{}] games completed", done, total);
    };

    let result = run_arena(
        cli.size,
        cli.games,
        cli.alternate_seats,
        (p1.name.as_str(), p1.opponent.as_ref()),
        (p2.name.as_str(), p2.opponent.as_ref()),
        Some(&progress_cb),
    )?;

    eprintln!("\r                                    "); // clear progress line
    println!("{}", result.summary());
    Ok(())
}
