mod prompt;
mod registry;
mod settings;
mod terminal;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use registry::{
    RunContext, RunOptions, SeedSource, init_console_logging, init_run_logging, start_run,
    write_report,
};
use settings::{Settings, load_settings};
use terminal::{ProgressPrinter, clear_screen};
use thiserror::Error;
use userseed_core::UserCount;
use userseed_generate::{
    GenerationError, PickError, format_row, pick_address_row, write_script_file,
};
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] settings::SettingsError),
    #[error("prompt error: {0}")]
    Prompt(#[from] prompt::PromptError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("address error: {0}")]
    Pick(#[from] PickError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "userseed", version, about = "Synthetic user SQL script generator")]
struct Cli {
    /// Settings file (defaults to ./userseed.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a SQL script inserting synthetic accounts and users.
    Generate(GenerateArgs),
    /// Print one random row from a street address CSV.
    PickAddress(PickAddressArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of users; prompts interactively when omitted.
    #[arg(long)]
    count: Option<UserCount>,
    /// Output path for the SQL script.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Keep terminal contents instead of clearing between prompts.
    #[arg(long, default_value_t = false)]
    no_clear: bool,
    /// Directory for run artifacts (config, logs, report).
    #[arg(long)]
    run_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PickAddressArgs {
    /// Street address CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Seed for reproducible picks.
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate options after merging flags over the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GenerateConfig {
    output: PathBuf,
    seed: u64,
    seed_source: SeedSource,
    clear_screen: bool,
    run_dir: Option<PathBuf>,
}

impl GenerateConfig {
    fn resolve(args: &GenerateArgs, settings: &Settings) -> Self {
        let (seed, seed_source) = resolve_seed(args.seed, settings.seed);
        Self {
            output: args
                .out
                .clone()
                .unwrap_or_else(|| settings.output_or_default()),
            seed,
            seed_source,
            clear_screen: !args.no_clear && settings.clear_screen_or_default(),
            run_dir: args.run_dir.clone().or_else(|| settings.run_dir.clone()),
        }
    }
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args, settings, cli.config),
        Command::PickAddress(args) => run_pick_address(args, settings),
    }
}

fn run_generate(
    args: GenerateArgs,
    settings: Settings,
    settings_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = GenerateConfig::resolve(&args, &settings);

    let run_paths = match &config.run_dir {
        Some(run_dir) => {
            let ctx = RunContext {
                run_id: Uuid::new_v4().to_string(),
                started_at: chrono::Utc::now(),
                run_dir: run_dir.clone(),
                options: RunOptions {
                    output: config.output.clone(),
                    seed: config.seed,
                    seed_source: config.seed_source,
                    clear_screen: config.clear_screen,
                    settings_path,
                },
            };
            let paths = start_run(&ctx)?;
            init_run_logging(&paths.logs_path)?;
            tracing::info!(event = "run_started", run_id = %ctx.run_id);
            Some(paths)
        }
        None => {
            init_console_logging()?;
            None
        }
    };

    tracing::info!(
        event = "seed_selected",
        seed = config.seed,
        source = ?config.seed_source
    );

    let count = match args.count {
        Some(count) => count,
        None => {
            let stdin = io::stdin();
            prompt::prompt_user_count(stdin.lock(), io::stdout(), config.clear_screen)?
        }
    };

    let timer = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut stdout = io::stdout();
    if config.clear_screen {
        clear_screen(&mut stdout)?;
    }
    let mut printer = ProgressPrinter::new(stdout, config.clear_screen);
    let report = write_script_file(&config.output, count, &mut rng, |progress| {
        printer.report(progress)
    })?;

    if let Some(paths) = &run_paths {
        write_report(paths, &report)?;
        tracing::info!(event = "report_written", path = %paths.report_path.display());
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "run_finished",
        status = "success",
        users = report.user_count,
        duration_ms = duration_ms
    );

    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Wrote {} users to {} (seed {})",
        report.user_count,
        config.output.display(),
        config.seed
    )?;
    if let Some(paths) = &run_paths {
        writeln!(stdout, "Run artifacts in {}", paths.root.display())?;
    }
    Ok(())
}

fn run_pick_address(args: PickAddressArgs, settings: Settings) -> Result<(), CliError> {
    init_console_logging()?;

    let path = args
        .csv
        .unwrap_or_else(|| settings.address_csv_or_default());
    let (seed, _) = resolve_seed(args.seed, settings.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let row = pick_address_row(&path, &mut rng)?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", format_row(&row))?;
    Ok(())
}

fn resolve_seed(flag: Option<u64>, settings: Option<u64>) -> (u64, SeedSource) {
    match (flag, settings) {
        (Some(seed), _) => (seed, SeedSource::Flag),
        (None, Some(seed)) => (seed, SeedSource::Settings),
        (None, None) => (rand::rng().random(), SeedSource::Random),
    }
}
