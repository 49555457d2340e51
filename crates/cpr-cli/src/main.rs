use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use cpr_resolve::{ResolutionMode, ResolveError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

/// Variable holding the `tracing` filter for diagnostics on stderr
const LOG_VAR: &str = "CPR_LOG";

const USAGE: &str = "Usage: cpr <flags|libs> [...PKGS]";

/// Resolve compiler and linker flags for packages.
///
/// Each package is looked up with pkg-config first. Packages pkg-config does
/// not know are looked up under $CPRPATH as <base>/<pkg>/include (flags) or
/// <base>/<pkg>/lib (libs). All flags are printed on a single line.
///
/// EXAMPLES:
///     cpr flags zlib libpng       Compile flags for zlib and libpng
///     cpr libs zlib               Link flags for zlib
///     cc $(cpr flags sdl2) main.c $(cpr libs sdl2)
///
/// ENVIRONMENT VARIABLES:
///     CPRPATH          Base directory of local packages
///     CPR_PKG_CONFIG   Query tool to run instead of pkg-config
///     CPR_LOG          Log filter for diagnostics (e.g. 'debug')
#[derive(Parser, Debug)]
#[command(name = "cpr")]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print compile flags for packages
    ///
    /// Runs `pkg-config --cflags <pkg>` for each package, falling back to
    /// -I$CPRPATH/<pkg>/include.
    ///
    /// EXAMPLES:
    ///     cpr flags zlib
    ///     cpr flags glfw3 vulkan
    #[command(disable_help_flag = true)]
    Flags {
        /// Package names, resolved in order
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        packages: Vec<String>,
    },

    /// Print link flags for packages
    ///
    /// Runs `pkg-config --libs <pkg>` for each package, falling back to
    /// -L$CPRPATH/<pkg>/lib.
    ///
    /// EXAMPLES:
    ///     cpr libs zlib
    ///     cpr libs glfw3 vulkan
    #[command(disable_help_flag = true)]
    Libs {
        /// Package names, resolved in order
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        packages: Vec<String>,
    },
}

impl Commands {
    fn into_parts(self) -> (ResolutionMode, Vec<String>) {
        match self {
            Commands::Flags { packages } => (ResolutionMode::Flags, packages),
            Commands::Libs { packages } => (ResolutionMode::Libs, packages),
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_usage(err),
    };

    let (mode, packages) = cli.command.into_parts();
    match commands::resolve::run(mode, &packages) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; logging is off unless CPR_LOG is set
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {}", err);
    if let Some(note) = err.downcast_ref::<ResolveError>().and_then(ResolveError::note) {
        eprintln!("Note: {}", note);
    }
}

/// Report a command-line parse failure.
///
/// Help and version requests succeed; everything else exits with status 1.
fn report_usage(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            eprintln!("Error: command not found");
        }
        ErrorKind::InvalidSubcommand => match err.get(ContextKind::InvalidSubcommand) {
            Some(ContextValue::String(command)) => {
                eprintln!("Error: invalid command '{}'", command);
            }
            _ => eprintln!("Error: invalid command"),
        },
        _ => {
            let _ = err.print();
        }
    }
    eprintln!("{}", USAGE);
    ExitCode::FAILURE
}
