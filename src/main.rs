//! Binary entrypoint for the Lost Artifact CLI.
//!
//! Commands:
//! - `play [--seed <n>]` - start an interactive game (default when no subcommand is given)
//! - `init [--force]` - write a starter `lost-artifact.toml`
//!
//! See the library crate docs for module-level details: `lost_artifact::`.
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::Path;

use lost_artifact::config::Config;
use lost_artifact::game::text::intro_text;
use lost_artifact::game::{GameSession, GameStatus};

#[derive(Parser)]
#[command(name = "lost-artifact")]
#[command(about = "A text-based dungeon crawler: claim the lost artifact and survive")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "lost-artifact.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter the dungeon
    Play {
        /// Seed for reproducible dice rolls (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let config = Config::load_or_default(&cli.config)?;
            init_logging(&config, cli.verbose);
            info!("Starting Lost Artifact v{}", env!("CARGO_PKG_VERSION"));
            let seed = seed.or(config.game.seed);
            run_game(&config, seed)?;
        }
        Commands::Init { force } => {
            init_logging(&Config::default(), cli.verbose);
            if Path::new(&cli.config).exists() && !force {
                bail!(
                    "Config file {} already exists (use --force to overwrite)",
                    cli.config
                );
            }
            Config::create_default(&cli.config)?;
            info!("Wrote default config to {}", cli.config);
            println!("Created {}", cli.config);
        }
    }

    Ok(())
}

/// The interactive prompt: show the turn, read a line, resolve it, repeat.
fn run_game(config: &Config, seed: Option<u64>) -> Result<()> {
    let mut session = GameSession::new(seed)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    if config.game.show_intro {
        print!("{}", intro_text());
    }

    loop {
        print!("{}", session.describe_turn()?);
        if session.is_over() {
            break;
        }

        print!("\nWhat will you do? ");
        stdout.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                debug!("Input closed on turn {}", session.turn());
                println!();
                break;
            }
        };

        print!("{}", session.handle_input(&line)?);
        if session.is_over() {
            break;
        }
    }
    stdout.flush()?;

    info!(
        "Session finished: status={:?} turns={} health={}",
        session.status(),
        session.turn(),
        session.player().health
    );
    if session.status() == GameStatus::InProgress {
        debug!("Session abandoned mid-game");
    }
    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));

            // The game owns the terminal; only mirror to stderr when it is redirected
            let mirror = !atty::is(atty::Stream::Stderr);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if mirror {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            eprintln!("Could not open log file {}; logging to stderr", file);
            format_to_stderr(&mut builder);
        }
    } else {
        format_to_stderr(&mut builder);
    }

    let _ = builder.try_init();
}

fn format_to_stderr(builder: &mut env_logger::Builder) {
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
}
