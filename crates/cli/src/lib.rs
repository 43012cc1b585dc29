mod check;
mod inspections;
mod schema;

pub use check::{render_text, OutputFormat};
pub use schema::SchemaTarget;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "collscope",
    version,
    about = "Finds inefficient collection usage in typed Java expression trees",
    long_about = "Collscope inspects analysis units (typed expression statements plus the types they \
                  refer to) for Eclipse Collections idioms: chains of eager transformations that could \
                  go through asLazy(), JDK collection constructions with a specialized replacement, \
                  negated isEmpty() calls and lookups whose argument cannot match the element type."
)]
pub struct Cli {
    /// Also log to stderr (RUST_LOG overrides the level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze unit files and print the findings
    #[command(
        long_about = "Loads analysis unit files (directories are searched for *.json), analyzes them \
                            in parallel and prints every finding. Configuration is read from --config, \
                            else from ~/.collscope/config.json, else defaults are used."
    )]
    Check {
        /// Unit files or directories containing them
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Do not seed the type universe with the bundled JDK and Eclipse Collections types
        #[arg(long)]
        no_stdlib: bool,

        /// Show each finding's source line with its fix applied
        #[arg(long)]
        show_fixes: bool,
    },
    /// Print the JSON schema of the unit file or configuration format
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Unit)]
        target: SchemaTarget,
    },
    /// List the available inspections
    Inspections {
        /// Configuration file used to show which inspections are enabled
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "debug" } else { "info" };
    let _guard = collscope_core::logging::init_logging_with("cli", cli.verbose, directive);

    match cli.command {
        Commands::Check {
            paths,
            format,
            config,
            no_stdlib,
            show_fixes,
        } => check::run(check::CheckOptions {
            paths,
            format,
            config,
            no_stdlib,
            show_fixes,
        }),
        Commands::Schema { target } => schema::run(target),
        Commands::Inspections { config } => inspections::run(config),
    }
}
