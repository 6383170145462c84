// Rust guideline compliant 2026-02-06

//! Fmtgate CLI Application
//!
//! Command-line interface for the fmtgate push formatting gate.

use clap::Parser;
use fmtgate_cli::commands;

#[derive(Parser, Debug)]
#[command(
    name = "fmtgate",
    version,
    about = "Git pre-push formatting gate",
    long_about = "Fmtgate blocks pushes when the repository's format check reports issues. It checks the toolchain first and lets pushes through with a warning when the tools are not installed.",
    after_help = "Examples:\n  fmtgate init\n  fmtgate doctor\n  fmtgate check\n  fmtgate hooks pre-push origin git@example.com:repo.git\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize fmtgate and install the pre-push hook
    Init,

    /// Remove the installed pre-push hook
    Uninstall,

    /// Run the format check directly
    Check,

    /// Report availability of the configured tools
    Doctor,

    /// Run fmtgate Git hooks
    Hooks {
        #[command(subcommand)]
        action: commands::hooks::HookAction,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            commands::init::execute()?;
        }
        Some(Commands::Uninstall) => {
            commands::uninstall::execute()?;
        }
        Some(Commands::Check) => {
            commands::check::execute(cli.json)?;
        }
        Some(Commands::Doctor) => {
            commands::doctor::execute(cli.json)?;
        }
        Some(Commands::Hooks { action }) => {
            commands::hooks::execute(action)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
