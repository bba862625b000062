//! Round simulator CLI: runs seeded rounds through the engine and writes
//! per-episode records, or samples raw meld scores per deal.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::build_episode_metrics;
use output::{MeldWriter, RoundsWriter};
use pinochle_engine::{EngineConfig, PinochleEnv};
use rand::Rng;
use simulator::{meld_sample, run_episode, Agent};
use tracing::{info, warn};
use types::{AgentKind, Mode};

#[derive(Parser)]
#[command(name = "round-simulator")]
#[command(about = "Seeded pinochle round simulator")]
struct Args {
    /// Number of episodes (rounds, or deals in meld mode)
    #[arg(short, long, default_value = "1")]
    episodes: u32,

    /// Episode seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Policy feeding the agent seat's actions
    #[arg(long, default_value = "heuristic")]
    agent: AgentKind,

    #[arg(long, default_value = "rounds")]
    mode: Mode,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit engine logs as JSON (filtered by RUST_LOG)
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        pinochle_engine::telemetry::init_tracing();
    } else {
        let filter = if args.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // PINOCHLE_* variables still apply; --seed wins over PINOCHLE_SEED.
    let mut config = EngineConfig::from_env()?;
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(|| rand::rng().random());
    config.seed = Some(seed);
    info!(seed, episodes = args.episodes, mode = ?args.mode, "Starting simulator");

    let start = Instant::now();
    match args.mode {
        Mode::Rounds => run_rounds(&args, config)?,
        Mode::Meld => run_meld(&args, &config)?,
    }
    println!("Finished {} episodes in {:?}", args.episodes, start.elapsed());
    Ok(())
}

fn run_rounds(args: &Args, config: EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let seed = config.seed.unwrap_or_default();
    let mut writer = RoundsWriter::new(&args.output_dir, args.compress)?;
    let mut env = PinochleEnv::new(config)?;
    let mut agent = Agent::new(args.agent, seed);
    let mut errors = 0u32;
    let mut met = 0u32;

    for episode in 1..=args.episodes {
        if episode > 1 {
            env.reset()?;
        }
        let episode_start = Instant::now();
        match run_episode(&mut env, &mut agent) {
            Ok(outcomes) => {
                let duration_ms = episode_start.elapsed().as_secs_f64() * 1000.0;
                let metrics =
                    build_episode_metrics(episode, seed, agent.name(), &outcomes, duration_ms);
                if metrics.result.as_ref().is_some_and(|r| r.contract_met) {
                    met += 1;
                }
                if let Err(e) = writer.write_episode(&metrics) {
                    warn!("Failed to write episode {}: {}", episode, e);
                }
                if args.verbose {
                    info!(episode, reward = metrics.total_reward, "Episode finished");
                }
            }
            Err(e) => {
                if e.is_invariant() {
                    return Err(e.into());
                }
                errors += 1;
                warn!("Episode {} failed: {}", episode, e);
            }
        }
    }

    let (jsonl, csv) = writer.output_paths();
    println!("Detailed results: {}", jsonl.display());
    println!("Summary CSV: {}", csv.display());
    writer.finish()?;
    println!("Contracts met: {met}/{}", args.episodes);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    Ok(())
}

fn run_meld(args: &Args, config: &EngineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let seed = config.seed.unwrap_or_default();
    let mut writer = MeldWriter::new(&args.output_dir)?;
    for deal in 0..args.episodes {
        let row = meld_sample(seed, deal, &config.meld_table)?;
        writer.write_meld(&row)?;
    }
    println!("Meld scores: {}", writer.path().display());
    writer.finish()?;
    Ok(())
}
