//! playcall CLI
//!
//! ```bash
//! playcall recommend --yard 85 --down 4th --gain medium
//! playcall recommend --yard 15 --down 1st --gain short --local --json
//! playcall zone --yard 62
//! playcall serve --bind 0.0.0.0:8001
//! playcall schema
//! ```

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use pc_client::{
    DecisionEngine, DisplayView, HttpDecisionEngine, InProcessEngine, PlayCallSession, ResultPanel,
};
#[cfg(feature = "cli")]
use pc_core::{FieldPosition, SituationModel};
#[cfg(feature = "cli")]
use pc_server::ServerConfig;
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use tracing::info;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "playcall")]
#[command(about = "Football play recommendations for a game situation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Ask the decision engine for plays
    Recommend {
        /// Yard line, 0 (own goal line) to 100 (opponent goal line)
        #[arg(long, allow_negative_numbers = true)]
        yard: i64,

        /// Down: 1st, 2nd, 3rd or 4th
        #[arg(long)]
        down: String,

        /// Yard gain target: short, medium or long
        #[arg(long)]
        gain: String,

        /// Use the built-in play book instead of PLAYCALL_BACKEND_URL
        #[arg(long, default_value = "false")]
        local: bool,

        /// Print the display view as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the field zone for a yard line
    Zone {
        #[arg(long, allow_negative_numbers = true)]
        yard: i64,
    },

    /// Run the play book HTTP service
    Serve {
        /// Listen address (defaults to PLAYCALL_BIND or 127.0.0.1:8001)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print request and response JSON schemas
    Schema,
}

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("playcall was built without the `cli` feature");
}

#[cfg(feature = "cli")]
async fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Recommend { yard, down, gain, local, json } => {
            let situation = SituationModel::new(yard, &down, &gain)
                .context("invalid game situation")?;

            let view = if local {
                info!(engine = "local", "requesting recommendation");
                recommend(InProcessEngine::default(), situation).await
            } else {
                let engine = HttpDecisionEngine::from_env()
                    .context("decision engine is not configured (try --local)")?;
                info!(engine = %engine.endpoint(), "requesting recommendation");
                recommend(engine, situation).await
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{view}");
            }

            Ok(match view.result {
                ResultPanel::Error { .. } => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            })
        }

        Commands::Zone { yard } => {
            let position = FieldPosition::new(yard).context("invalid yard line")?;
            println!("{}", position.zone().label());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Serve { bind } => {
            let config = match bind {
                Some(addr) => ServerConfig::parse(&addr)?,
                None => ServerConfig::from_env()?,
            };
            info!(bind = %config.bind, "starting play book service");
            pc_server::serve(config).await.context("play book service stopped")?;
            info!("play book service shut down");
            Ok(ExitCode::SUCCESS)
        }

        Commands::Schema => {
            let schemas = serde_json::json!({
                "request": pc_core::request_schema(),
                "response": pc_core::response_schema(),
            });
            println!("{}", serde_json::to_string_pretty(&schemas)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One request through a fresh session, rendered for display.
#[cfg(feature = "cli")]
async fn recommend<E: DecisionEngine + 'static>(engine: E, situation: SituationModel) -> DisplayView {
    let session = PlayCallSession::with_situation(engine, situation);
    session.fetch().await;

    let view = session.view();
    info!(status = session.client().state().label(), "recommendation finished");
    view
}
