mod config;
mod content;
mod errors;
mod llm_client;
mod routes;
mod state;
mod terminal;

use std::io::Write as _;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::Content;
use crate::llm_client::{Completions, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;
use crate::terminal::{SubmitOutcome, Terminal};

#[derive(Parser)]
#[command(name = "folio", about = "Resume terminal with an AI ask command")]
struct Cli {
    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the resume Q&A over HTTP instead of the interactive terminal
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the transcript.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    let content = Arc::new(Content::builtin());

    let backend: Option<Arc<dyn Completions>> = match &config.openai_api_key {
        Some(key) => Some(Arc::new(OpenAiClient::new(key.clone())?)),
        None => {
            info!("OPENAI_API_KEY not set; the ask command will print setup instructions");
            None
        }
    };

    match cli.command {
        Some(Mode::Serve) => serve(config, content, backend).await,
        None => run_terminal(content, backend).await,
    }
}

async fn serve(
    config: Config,
    content: Arc<Content>,
    backend: Option<Arc<dyn Completions>>,
) -> Result<()> {
    let state = AppState {
        backend,
        content,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Interactive front end: reads one line at a time from stdin, feeds it to
/// the terminal session, and prints whatever the transcript gained.
async fn run_terminal(content: Arc<Content>, backend: Option<Arc<dyn Completions>>) -> Result<()> {
    let term = Terminal::new(content, backend);
    let mut printed = print_new_lines(&term, 0).await;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("$ ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };

        let outcome = term.submit(&line).await;
        printed = print_new_lines(&term, printed).await;

        if outcome == SubmitOutcome::Closed {
            break;
        }
    }

    Ok(())
}

/// Prints transcript lines added since the last call and returns the new
/// high-water mark. A `clear` shrinks the transcript, which resets it.
async fn print_new_lines(term: &Terminal, printed: usize) -> usize {
    let transcript = term.transcript().await;
    for line in &transcript[printed.min(transcript.len())..] {
        println!("{line}");
    }
    transcript.len()
}
