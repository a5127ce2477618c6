//! QR Phone CLI
//!
//! Command-line interface for QR Phone - contact exchange over QR codes.

mod commands;
mod config;
mod display;
mod sink;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "qrphone")]
#[command(version, about = "Share your contact details as a QR code")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir/qrphone)
    #[arg(long, global = true, env = "QRPHONE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Save your profile (prompts for missing fields)
    Save {
        /// First name
        #[arg(long)]
        first: Option<String>,

        /// Last name
        #[arg(long)]
        last: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Email address (optional)
        #[arg(long)]
        email: Option<String>,
    },

    /// Show your saved profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display your profile as a QR code
    Qr {
        /// Write an SVG image to this file instead
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
    },

    /// Print the raw QR payload
    Payload,

    /// Delete your saved profile
    Delete {
        /// Skip confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Import a contact from scanned QR data
    Scan {
        /// Decoded QR text
        #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
        data: Option<String>,

        /// Read the QR text from standard input
        #[arg(long)]
        stdin: bool,

        /// Import without asking
        #[arg(long)]
        yes: bool,
    },

    /// Manage imported contacts
    #[command(subcommand)]
    Contacts(ContactCommands),

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ContactCommands {
    /// List imported contacts
    List,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("qrphone={level},qrphone_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        display::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Resolve data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("qrphone")
    });

    let config = CliConfig { data_dir };

    match cli.command {
        Commands::Save {
            first,
            last,
            phone,
            email,
        } => commands::profile::save(&config, first, last, phone, email)?,
        Commands::Show { json } => commands::profile::show(&config, json)?,
        Commands::Qr { svg } => commands::profile::qr(&config, svg.as_deref())?,
        Commands::Payload => commands::profile::payload(&config)?,
        Commands::Delete { yes } => commands::profile::delete(&config, yes)?,
        Commands::Scan { data, stdin, yes } => {
            let data = match data {
                Some(data) if !stdin => data,
                _ => commands::scan::read_stdin()?,
            };
            commands::scan::run(&config, &data, yes)?;
        }
        Commands::Contacts(cmd) => match cmd {
            ContactCommands::List => commands::contacts::list(&config)?,
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "qrphone", &mut io::stdout());
        }
    }

    Ok(())
}
