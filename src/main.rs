//! MQTT Wordle - CLI
//!
//! Runs the daily game against a local in-process broker: play it, inspect the
//! current day, or load-test it with simulated clients.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use mqtt_wordle::{
    broker::{DEFAULT_TOPIC, WordlePlugin},
    commands::{PlayConfig, SimulationConfig, run_play, run_simulation, score_pair, today},
    game::{Clock, FixedClock, GameController, SystemClock},
    output::{print_play_banner, print_score_result, print_simulation_result, print_today},
    wordlists::load_from_file,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mqtt-wordle",
    about = "Daily Wordle played over a publish/subscribe topic",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one 5-letter word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_WORDS",
        default_value = "/etc/mosquitto/words"
    )]
    words: PathBuf,

    /// Topic guesses are written to and replies are sent on
    #[arg(long, global = true, env = "WORDLE_TOPIC", default_value = DEFAULT_TOPIC)]
    topic: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play from this terminal (default)
    Play {
        /// Network address used as the player identity
        #[arg(long, default_value = "127.0.0.1")]
        address: String,

        /// Client id replies are addressed to
        #[arg(long, default_value = "local")]
        client_id: String,
    },

    /// Show today's word number and time until the next word
    Today {
        /// Also print today's answer
        #[arg(long)]
        reveal: bool,
    },

    /// Score a guess against an answer without playing
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Play many simulated clients concurrently
    Simulate {
        /// Number of simulated clients
        #[arg(short = 'n', long, default_value = "1000")]
        clients: usize,

        /// Seed for the simulated guesses
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "mqtt_wordle=info".to_string()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        address: "127.0.0.1".to_string(),
        client_id: "local".to_string(),
    });

    match command {
        Commands::Score { guess, answer } => {
            let result = score_pair(&guess, &answer).context("cannot score words")?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Play { address, client_id } => {
            let plugin = load_plugin(&cli.words, &cli.topic, SystemClock)?;
            run_play_command(&plugin, PlayConfig { client_id, address })
        }
        Commands::Today { reveal } => {
            let plugin = load_plugin(&cli.words, &cli.topic, SystemClock)?;
            print_today(&today(plugin.controller(), reveal));
            Ok(())
        }
        Commands::Simulate { clients, seed } => {
            // Pin the clock so a midnight rollover cannot split the run.
            let clock = FixedClock::new(Utc::now());
            let plugin = load_plugin(&cli.words, &cli.topic, clock)?;
            run_simulate_command(&plugin, &SimulationConfig { clients, seed })
        }
    }
}

/// Load the word list and wire the game to the topic
fn load_plugin(words: &Path, topic: &str, clock: impl Clock + 'static) -> Result<WordlePlugin> {
    let dictionary = load_from_file(words)
        .with_context(|| format!("failed to load word list from {}", words.display()))?;
    let controller = GameController::new(dictionary, clock);
    Ok(WordlePlugin::new(Arc::new(controller), topic))
}

fn run_play_command(plugin: &WordlePlugin, config: PlayConfig) -> Result<()> {
    print_play_banner(plugin.topic(), plugin.controller().day_index());

    let stdin = io::stdin();
    let sent = run_play(plugin, &config, stdin.lock(), io::stdout().lock())
        .context("terminal I/O failed")?;

    info!(guesses = sent, "local client disconnected");
    Ok(())
}

fn run_simulate_command(plugin: &WordlePlugin, config: &SimulationConfig) -> Result<()> {
    println!(
        "Simulating {} clients on topic '{}'...",
        config.clients,
        plugin.topic()
    );

    let bar = ProgressBar::new(config.clients as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.green} {pos}/{len} clients ({per_sec})")
            .context("invalid progress template")?,
    );
    let result = run_simulation(plugin, config, Some(&bar));
    bar.finish_and_clear();

    print_simulation_result(&result);
    anyhow::ensure!(
        result.unfinished == 0,
        "{} simulated clients never finished",
        result.unfinished
    );
    Ok(())
}
