//! Motivator trace runner
//!
//! Feeds a script of motivation events and mutation commands through a
//! single emotion core and prints the mood reported for each step.

mod script;

use anyhow::{Context, Result};
use clap::Parser;
use motivator_core::{
    load_env, load_env_from_path, EmotionConfig, EmotionCore, Mood, MoodCategory, RandomSource,
    SeededRandom, ThreadRandom,
};
use script::{parse_script, Step};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script file to replay; reads stdin when omitted
    script: Option<PathBuf>,

    /// JSON emotion configuration (overrides environment variables)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment file to load instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Seed for reproducible draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print one JSON object per step
    #[arg(long)]
    json: bool,

    /// Log every derivation
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct StepReport {
    line: usize,
    step: String,
    mood: Mood,
    category: MoodCategory,
    intensity: u32,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<EmotionConfig> {
    match &cli.env_file {
        Some(path) => load_env_from_path(path)?,
        None => load_env()?,
    }

    let config = match &cli.config {
        Some(path) => EmotionConfig::from_json_file(path)?,
        None => EmotionConfig::from_env(),
    };
    config.validate()?;
    Ok(config)
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read script from stdin")?;
            Ok(buffer)
        }
    }
}

fn run<R: RandomSource>(
    core: &mut EmotionCore<R>,
    steps: Vec<(usize, Step)>,
) -> Vec<StepReport> {
    steps
        .into_iter()
        .map(|(line, step)| {
            let mood = match &step {
                Step::Event(event) => core.derive_mood(event),
                Step::Mutation(command) => core.mutate_mood(command),
            };
            StepReport {
                line,
                step: step.to_string(),
                mood,
                category: mood.category(),
                intensity: core.negative_intensity(),
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    tracing::info!(?config, seed = ?cli.seed, "Starting trace");

    let source = read_script(cli.script.as_ref())?;
    let steps = parse_script(&source)?;

    let random: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let mut core = EmotionCore::with_random(config, random);
    let reports = run(&mut core, steps);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(report)?)?;
        } else {
            writeln!(
                out,
                "{:>4}  {:<20} {:<14} intensity={}",
                report.line, report.step, report.mood, report.intensity
            )?;
        }
    }

    Ok(())
}
