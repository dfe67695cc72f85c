//! Colloquy HTTP server entry point.
//!
//! Binary name: `colloquy`
//!
//! Parses CLI arguments, initializes the database and services, then either
//! starts the HTTP server or runs a one-shot maintenance command.

mod http;
mod state;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colloquy_infra::responder::SubprocessResponder;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Parser)]
#[command(name = "colloquy", about = "Conversational-session backend", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory holding the SQLite database
    #[arg(long, global = true, env = "COLLOQUY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Responder executable invoked once per query
    #[arg(long, global = true, default_value = "python3")]
    responder: String,

    /// Argument passed to the responder (repeatable)
    #[arg(long = "responder-arg", global = true, default_value = "main.py")]
    responder_args: Vec<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Create the database and run migrations, then exit
    InitDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG overrides.
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,colloquy=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let responder = SubprocessResponder::new(cli.responder.clone(), cli.responder_args.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            tracing::info!(
                responder = %responder.command_line(),
                data_dir = %data_dir.display(),
                "initializing"
            );

            let state = AppState::init(&data_dir, responder).await?;
            let router = http::router::build_router(state);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "colloquy listening");

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::InitDb => {
            // AppState::init runs migrations as a side effect of opening the pool.
            let state = AppState::init(&data_dir, responder).await?;

            // Touch the writer so a broken database surfaces here, not at
            // the first request.
            sqlx::query("SELECT 1").execute(&state.db_pool.writer).await?;

            println!(
                "database ready at {}",
                state.data_dir.join("colloquy.db").display()
            );
        }
    }

    Ok(())
}

/// Default data directory: `~/.colloquy` (current directory as a last resort).
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".colloquy")
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
