//! Wordle Game - CLI
//!
//! Command-line host for the guessing game: loads word libraries, applies the
//! saved settings and runs the interactive loop.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{check_guess, run_play},
    config::{GameStats, Settings},
    library::{BUILTIN_NAME, builtin_catalog, loader::merge_libraries},
    output::{formatters::colored_feedback, print_library_info, print_library_list, print_stats},
    session::GameSession,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with green/yellow/red letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of word lists (one `<name>.txt` file per library)
    #[arg(short = 'w', long, global = true, default_value = "wordlib")]
    wordlib: PathBuf,

    /// Settings file
    #[arg(short, long, global = true, default_value = "config.json")]
    config: PathBuf,

    /// Statistics file
    #[arg(long, global = true, default_value = "game_stats.json")]
    stats: PathBuf,

    /// Seed for reproducible target words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Library to play from (default: settings, then the first available)
        #[arg(short, long)]
        library: Option<String>,

        /// Word length (default: settings, then the shortest available)
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },

    /// List available libraries
    Libraries {
        /// Show the length histogram of one library
        name: Option<String>,
    },

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Merge word list files into one sorted, deduplicated list
    Merge {
        /// Output file
        output: PathBuf,

        /// Input word list files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show saved statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        library: None,
        length: None,
    });

    match command {
        Commands::Play { library, length } => run_play_command(
            &cli.wordlib,
            &cli.config,
            &cli.stats,
            cli.seed,
            library.as_deref(),
            length,
        ),
        Commands::Libraries { name } => run_libraries_command(&cli.wordlib, name.as_deref()),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
        Commands::Merge { output, inputs } => run_merge_command(&inputs, &output),
        Commands::Stats => {
            let stats = GameStats::load_or_default(&cli.stats);
            print_stats(&mut io::stdout().lock(), &stats)?;
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Build a session over the word-list directory, or the embedded list if it is empty
fn load_session(wordlib: &Path, seed: Option<u64>) -> GameSession {
    let mut session = seed.map_or_else(GameSession::new, GameSession::with_seed);
    if session.load_libraries(wordlib).is_empty() {
        info!(
            "No libraries in {}; using the built-in list",
            wordlib.display()
        );
        session.install_catalog(builtin_catalog());
    }
    session
}

fn run_play_command(
    wordlib: &Path,
    config: &Path,
    stats_path: &Path,
    seed: Option<u64>,
    library: Option<&str>,
    length: Option<usize>,
) -> Result<()> {
    let settings = Settings::load_or_default(config);
    let mut session = load_session(wordlib, seed);

    // Explicit choice, then saved default, then whatever exists
    let name = match library {
        Some(name) => name.to_string(),
        None if session.catalog().contains(&settings.default_library) => {
            settings.default_library.clone()
        }
        None => session
            .catalog()
            .names()
            .next()
            .unwrap_or(BUILTIN_NAME)
            .to_string(),
    };
    session.select_library(&name)?;

    let lengths = session.available_lengths();
    let length = match length {
        Some(length) => length,
        None if lengths.contains(&settings.default_length) => settings.default_length,
        None => match lengths.first() {
            Some(&length) => length,
            None => bail!("Library '{name}' is empty"),
        },
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let rounds = run_play(&mut session, length, stdin.lock(), &mut stdout)?;

    if settings.auto_save && !rounds.is_empty() {
        let mut stats = GameStats::load_or_default(stats_path);
        for status in &rounds {
            stats.record(status);
        }
        if let Err(e) = stats.save(stats_path) {
            warn!("Could not save statistics: {e}");
        }
    }
    Ok(())
}

fn run_libraries_command(wordlib: &Path, name: Option<&str>) -> Result<()> {
    let session = load_session(wordlib, None);
    let mut out = io::stdout().lock();

    match name {
        Some(name) => {
            let info = session
                .catalog()
                .library_info(name)
                .with_context(|| format!("No library named '{name}'"))?;
            print_library_info(&mut out, &info)?;
        }
        None => print_library_list(&mut out, session.catalog())?,
    }
    Ok(())
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let feedback = check_guess(guess, target)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}  {}", colored_feedback(&feedback), feedback.to_emoji())?;
    writeln!(out, "{}", feedback.code())?;
    Ok(())
}

fn run_merge_command(inputs: &[PathBuf], output: &Path) -> Result<()> {
    let count = merge_libraries(inputs, output)
        .with_context(|| format!("Failed to merge into {}", output.display()))?;
    println!("Merged {count} words into {}", output.display());
    Ok(())
}
