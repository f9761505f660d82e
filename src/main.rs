mod calc;
mod cmd;
mod data;
mod logging;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rangepick", about = "terminal date range picker")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive date range picker
    Pick(cmd::root::PickArgs),
    /// Initialize data files with defaults
    Init,
    /// Format a hosted email price
    Price {
        /// Annual cost
        cost: f64,
        /// ISO currency code (default: settings.currency)
        #[arg(short, long)]
        currency: Option<String>,
        /// Show only one billing period
        #[arg(short, long, value_enum)]
        period: Option<cmd::price::Period>,
        /// Round up to this many decimal places before formatting
        #[arg(long)]
        precision: Option<u32>,
    },
    /// List domains and their hosted email eligibility
    Domains {
        /// Domain the user picked, preferred when eligible
        #[arg(short, long)]
        selected: Option<String>,
    },
    /// Validate a new mailbox signup form
    Validate(cmd::validate::ValidateArgs),
    /// Print hosted email links for a domain
    Links {
        domain: String,
        /// Also print the Terms of Service login URL for this address
        #[arg(short, long)]
        email: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    let settings = if is_init_command {
        data::AppSettings::default()
    } else {
        data::AppSettings::load()?
    };
    let is_interactive = matches!(cli.command, None | Some(Commands::Pick(_)));
    let log_dir = is_interactive.then_some(data_dir.as_path());
    let _guard = logging::init(&settings.log_level, log_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    match cli.command {
        None => cmd::root::run(&cmd::root::PickArgs::default()),
        Some(Commands::Pick(args)) => cmd::root::run(&args),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Price {
            cost,
            currency,
            period,
            precision,
        }) => cmd::price::run(cost, currency.as_deref(), period, precision),
        Some(Commands::Domains { selected }) => cmd::domains::run(selected.as_deref()),
        Some(Commands::Validate(args)) => cmd::validate::run(&args),
        Some(Commands::Links { domain, email }) => cmd::links::run(&domain, email.as_deref()),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
