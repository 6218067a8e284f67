//! Sketch - REPL entry point
//!
//! Reads workspace commands line by line from stdin.

use std::time::Duration;

use clap::Parser;
use sketchpot::config::RemoteConfig;
use sketchpot::runner::{run_repl, AppConfig};

/// Sketchpot - landing page layout sketches from a prompt 🎨
#[derive(Parser, Debug)]
#[command(name = "sketch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Compose layouts locally without calling the text-generation service
    #[arg(long)]
    offline: bool,

    /// Simulated processing delay per generation, in milliseconds
    #[arg(long, env = "SKETCH_LATENCY_MS", default_value_t = 1500)]
    latency_ms: u64,

    /// Seed for reproducible layout composition
    #[arg(long, env = "SKETCH_SEED")]
    seed: Option<u64>,

    /// Chat-completion endpoint
    #[arg(long, env = "SKETCH_ENDPOINT")]
    endpoint: Option<String>,

    /// Completion model
    #[arg(long, env = "SKETCH_MODEL")]
    model: Option<String>,

    /// Layouts per generation (2-5)
    #[arg(long)]
    layouts: Option<usize>,

    /// Save every generated batch as a project
    #[arg(long)]
    auto_save: bool,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        let mut remote = RemoteConfig::from_env();
        if let Some(endpoint) = &args.endpoint {
            remote.endpoint = endpoint.clone();
        }
        if let Some(model) = &args.model {
            remote.model = model.clone();
        }

        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
            offline: args.offline,
            latency: Duration::from_millis(args.latency_ms),
            seed: args.seed,
            layouts: args.layouts,
            auto_save: args.auto_save,
            remote,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run_repl(AppConfig::from(&args))
}
