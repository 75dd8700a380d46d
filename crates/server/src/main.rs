//! # Taskdesk Server
//!
//! Thin axum transport over the `taskdesk_core` engine. Two surfaces,
//! mirroring the reference API: `POST /run?task=...` executes one task
//! description, `GET /read?path=...` returns a result artifact by path.
//! Rejections (unknown task, missing embedded parameter) map to 400,
//! handler failures to 500, a successful handler to 200.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path, sync::Arc};
use taskdesk_core::{
    config::TaskdeskConfig,
    engine::{Engine, Outcome},
    gateway::{self, ReadOutcome},
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Application state: the engine, built once and shared. The registry inside
/// is read-only after startup, so concurrent requests need no locking.
struct AppState {
    engine: Engine,
}

type SharedState = Arc<AppState>;

#[derive(Parser)]
#[command(author, version, about = "Taskdesk - data task automation agent")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Start the Taskdesk server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    /// Execute one task description and exit (no server)
    Run {
        /// The task text to resolve and run
        task: String,
    },
}

// === API Types ===

#[derive(Deserialize)]
struct RunQuery {
    task: String,
}

#[derive(Deserialize)]
struct ReadQuery {
    path: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct ContentResponse {
    content: String,
}

// === Handlers ===

async fn home() -> &'static str {
    "Welcome to the Taskdesk API"
}

/// Run one task description through the engine
async fn run_task(State(state): State<SharedState>, Query(query): Query<RunQuery>) -> Response {
    match state.engine.execute(&query.task).await {
        Outcome::Success { message } => {
            (StatusCode::OK, Json(MessageResponse { message })).into_response()
        }
        Outcome::Failure { error } => {
            let status = if error.is_rejection() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            let message = error.to_string();
            (status, Json(MessageResponse { message })).into_response()
        }
    }
}

/// Read a result artifact by caller-supplied path (see the gateway docs for
/// the deliberate lack of sandbox confinement)
async fn read_file(Query(query): Query<ReadQuery>) -> Response {
    match gateway::read(Path::new(&query.path)).await {
        Ok(ReadOutcome::Content(content)) => {
            (StatusCode::OK, Json(ContentResponse { content })).into_response()
        }
        Ok(ReadOutcome::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: "File not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageResponse {
                message: format!("{e:#}"),
            }),
        )
            .into_response(),
    }
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/run", post(run_task))
        .route("/read", get(read_file))
        .with_state(state)
}

// === Server Entry ===

async fn run_server(port: u16, config: TaskdeskConfig) -> anyhow::Result<()> {
    let state: SharedState = Arc::new(AppState {
        engine: Engine::standard(config),
    });
    tracing::info!(
        operations = state.engine.registry().len(),
        "operation registry built"
    );

    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Taskdesk server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = TaskdeskConfig::load();

    match args.command {
        Some(CliCommand::Run { task }) => {
            let engine = Engine::standard(config);
            let outcome = engine.execute(&task).await;
            if outcome.is_success() {
                println!("{}", outcome.message());
                Ok(())
            } else {
                eprintln!("{}", outcome.message());
                std::process::exit(1);
            }
        }
        Some(CliCommand::Serve { port }) => run_server(port, config).await,
        None => run_server(8000, config).await,
    }
}
