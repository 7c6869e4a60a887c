use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use xc_scorer::config::Config;
use xc_scorer::meet::{Meet, Standings};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Finish order, team scores and qualifiers
    Table,
    /// Team scores as tab-separated values
    Tsv,
    /// Everything as JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a results file and print the standings
    Score {
        /// Results file with tab-separated rows, or '-' for stdin
        input: String,

        /// Move the runner in place FROM to place TO (1-based, applied in order)
        #[arg(short, long = "move", value_name = "FROM:TO", value_parser = parse_move)]
        moves: Vec<(usize, usize)>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Reorder runners interactively and watch scores update
    Tui {
        /// Results file with tab-separated rows, or '-' for stdin
        input: String,
    },
    /// Write the built-in team list and scoring settings to the config file
    Init {
        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "xc-scorer")]
#[command(about = "Cross-country meet scoring from pasted results", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/xc-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Parse "FROM:TO" into zero-based indices.
fn parse_move(s: &str) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
    let place = |p: &str| -> Result<usize, String> {
        match p.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("'{}' is not a place (1 or higher)", p.trim())),
        }
    };
    Ok((place(from)?, place(to)?))
}

/// Read results text from a file, or stdin for "-".
fn read_input(input: &str) -> Result<(String, Option<PathBuf>)> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read results from stdin")?;
        Ok((text, None))
    } else {
        let path = PathBuf::from(input);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read results file {}", path.display()))?;
        Ok((text, Some(path)))
    }
}

/// Scored teams that have no entry in the team metadata, in ranked order.
fn teams_without_metadata<'a>(standings: &'a Standings, config: &Config) -> Vec<&'a str> {
    standings
        .team_scores
        .iter()
        .map(|s| s.team.as_str())
        .filter(|team| config.team(team).is_none())
        .collect()
}

fn load_meet(input: &str, config: &Config, verbose: bool) -> (Meet, Option<PathBuf>) {
    let (text, source) = match read_input(input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let mut meet = Meet::new(config.effective_scoring());
    let stats = meet.load(&text);

    if verbose {
        eprintln!(
            "Parsed {} finishers ({} lines dropped)",
            stats.kept, stats.dropped
        );
        let standings = meet.standings();
        let unknown = teams_without_metadata(&standings, config);
        if !unknown.is_empty() {
            eprintln!("Teams without metadata: {}", unknown.join(", "));
        }
    }

    (meet, source)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    if let Commands::Init { force } = cli.command {
        let path = cli.config.clone().map(PathBuf::from);
        match xc_scorer::config::run_init(path, force) {
            Ok(written) => {
                println!("Config written to {}", written.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match xc_scorer::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Loaded metadata for {} teams", config.teams.len());
    }

    // Validate scoring config at startup
    let effective_scoring = config.effective_scoring();
    if let Err(errors) = xc_scorer::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Bad team colors only lose styling
    if let Err(errors) = xc_scorer::config::validate_teams(&config) {
        for error in errors {
            eprintln!("Warning: {}", error);
        }
    }

    match cli.command {
        Commands::Score {
            input,
            moves,
            format,
        } => {
            let (mut meet, _) = load_meet(&input, &config, cli.verbose);

            for (from, to) in moves {
                if !meet.move_finisher(from, to) {
                    eprintln!(
                        "Invalid move {}:{}. Places must be between 1 and {}.",
                        from + 1,
                        to + 1,
                        meet.len()
                    );
                    std::process::exit(EXIT_INPUT);
                }
                if cli.verbose {
                    eprintln!("Moved place {} to place {}", from + 1, to + 1);
                }
            }

            let standings = meet.standings();
            match format {
                OutputFormat::Table => {
                    let use_colors = xc_scorer::output::should_use_colors();
                    println!(
                        "{}",
                        xc_scorer::output::format_standings(&standings, &config, use_colors)
                    );
                }
                OutputFormat::Tsv => {
                    println!("{}", xc_scorer::output::format_tsv(&standings));
                }
                OutputFormat::Json => match xc_scorer::output::format_json(&standings, &config) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Scored {} teams in {:?}",
                    standings.team_scores.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Tui { input } => {
            if input == "-" {
                // Keys come from the terminal, so results must come from a file
                eprintln!("The TUI needs a results file; stdin is used for keyboard input.");
                std::process::exit(EXIT_INPUT);
            }
            let (meet, source) = load_meet(&input, &config, cli.verbose);
            let app = xc_scorer::tui::App::new(meet, config, source, cli.verbose);
            if let Err(e) = xc_scorer::tui::run_tui(app).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
        Commands::Init { .. } => unreachable!("handled before config load"),
    }

    std::process::exit(EXIT_SUCCESS);
}
