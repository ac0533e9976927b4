//! nuvscan - deployment task generator
//!
//! Usage:
//!   nuvscan scan [PATH]        # Scan PATH/packages and write ~/.nuvolaris/nuvolaris.yml
//!   nuvscan scan -o out/       # Write the script into out/
//!   nuvscan config show        # Print the effective configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nuvscan_core::commands::{ScanCommand, ScanOptions, ScanReport};
use nuvscan_core::config::{ScanConfig, to_toml};
use nuvscan_core::context::AppContext;

#[derive(Parser)]
#[command(name = "nuvscan")]
#[command(about = "Generate deployment task scripts from a packages folder", long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to nuvscan.toml (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a project and generate its task script
    Scan(ScanArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Project directory containing the packages folder
    #[arg(default_value = "./")]
    path: PathBuf,

    /// Directory to write the script into
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Print the script instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = AppContext::with_defaults(cli.config)?;
    match cli.command {
        Commands::Scan(args) => run_scan(&ctx, args),
        Commands::Config(args) => run_config(&ctx, args),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "nuvscan_cli=debug,nuvscan_core=debug,info"
    } else {
        "nuvscan_cli=info,nuvscan_core=info,warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_scan(ctx: &AppContext, args: ScanArgs) -> Result<()> {
    let config = ctx.config_store().load()?;
    tracing::debug!(
        path = %ctx.config_path().display(),
        folder = %config.scan_folder,
        "Loaded configuration"
    );
    let output_dir = match args.output {
        Some(dir) => absolutize(&dir)?,
        None => ctx.output_dir(&config)?,
    };

    let options = ScanOptions::new(&args.path, output_dir).with_dry_run(args.dry_run);
    let report = ScanCommand::new(config).run(&options)?;

    match args.format {
        OutputFormat::Text => print_text(&report, args.dry_run),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

fn run_config(ctx: &AppContext, args: ConfigArgs) -> Result<()> {
    let store = ctx.config_store();
    match args.command {
        ConfigSubcommand::Show => {
            let config = store.load()?;
            print!("{}", to_toml(&config)?);
        }
        ConfigSubcommand::Path => {
            println!("{}", store.config_path().display());
        }
        ConfigSubcommand::Init { force } => {
            if store.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    store.config_path().display()
                );
            }
            store.save(&ScanConfig::default())?;
            println!("Wrote {}", store.config_path().display());
        }
    }
    Ok(())
}

/// Resolve a relative output directory against the working directory, not the project.
fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(path))
}

fn print_text(report: &ScanReport, dry_run: bool) {
    if dry_run {
        print!("{}", report.script);
        return;
    }

    println!(
        "{} {}",
        style("Scanned").bold().green(),
        report.project_dir.display()
    );
    println!("  Packages:            {}", report.packages);
    println!("  Single-file actions: {}", report.single_file_actions);
    println!("  Multi-file actions:  {}", report.multi_file_actions);
    println!("  Commands:            {}", report.commands.len());
    if let Some(path) = &report.script_path {
        println!("{} {}", style("Script written to").bold(), path.display());
    }
}

fn print_json(report: &ScanReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
