use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use goosebridge::{check, load_access_file, order_rows};
use goosegate::Capability;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "goosebridge",
    version,
    about = "Inspect and check goosegate access files"
)]
struct Cli {
    /// Log at debug level (otherwise RUST_LOG, default warn).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every entity with its computed order as JSON.
    Orders {
        /// Access file path.
        file: PathBuf,
    },

    /// Check one capability for one user. Exits 0 on allow, 1 on deny.
    Check {
        /// Access file path.
        file: PathBuf,

        /// Controller name.
        #[arg(long)]
        controller: String,

        /// User id, as listed under `actors`.
        #[arg(long)]
        user: u64,

        #[arg(long, value_enum)]
        capability: CapabilityArg,

        /// Do not let admin imply the capability.
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CapabilityArg {
    View,
    Use,
    Edit,
    Delete,
    Admin,
}

impl From<CapabilityArg> for Capability {
    fn from(arg: CapabilityArg) -> Self {
        match arg {
            CapabilityArg::View => Capability::View,
            CapabilityArg::Use => Capability::Use,
            CapabilityArg::Edit => Capability::Edit,
            CapabilityArg::Delete => Capability::Delete,
            CapabilityArg::Admin => Capability::Admin,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Orders { file } => run_orders(&file),
        Command::Check {
            file,
            controller,
            user,
            capability,
            strict,
        } => run_check(&file, &controller, user, capability.into(), strict),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_orders(path: &Path) -> anyhow::Result<ExitCode> {
    let file = load_access_file(path)?;
    let rows = order_rows(&file).context("computing orders")?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(ExitCode::SUCCESS)
}

fn run_check(
    path: &Path,
    controller: &str,
    user: u64,
    capability: Capability,
    strict: bool,
) -> anyhow::Result<ExitCode> {
    let file = load_access_file(path)?;
    let report = check(&file, controller, user, capability, strict)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(if report.allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
