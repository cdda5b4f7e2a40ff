//! vitaform CLI entry point.
//!
//! Binary name: `vform`
//!
//! Parses CLI arguments, loads the schema file, initializes the database
//! and the form service, then dispatches to the command handlers.

mod cli;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, DraftAction};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,vitaform=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let (schema, rules) = cli::load_schema(&cli.schema)?;
    let state = AppState::init(schema, rules).await?;

    let exit_code = match cli.command {
        Commands::Validate { ref submission } => {
            cli::form::validate(&state, submission, cli.qtype, cli.lang, cli.json).await?
        }
        Commands::Render { ref submission } => {
            cli::form::render(&state, submission, cli.qtype, cli.lang).await?
        }
        Commands::Submit { ref submission } => {
            cli::form::submit(&state, submission, cli.qtype, cli.lang, cli.json).await?
        }
        Commands::Draft { ref action } => match action {
            DraftAction::Save { submission } => {
                cli::form::draft_save(&state, submission, cli.qtype, cli.lang).await?
            }
            DraftAction::Show => {
                cli::form::draft_show(&state, cli.qtype, cli.lang, cli.json).await?
            }
            DraftAction::Clear => cli::form::draft_clear(&state, cli.qtype, cli.lang).await?,
        },
    };

    std::process::exit(exit_code);
}
