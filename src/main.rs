//! websift server entry point

use anyhow::{bail, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use websift::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting websift v{}", websift::VERSION);

    // Load configuration
    let settings = config::load(config_path.as_deref())?;
    info!(
        "Pipeline: {} results, {} chars per page, {} chars total",
        settings.pipeline.result_count,
        settings.pipeline.max_chars_per_page,
        settings.pipeline.max_context_chars
    );

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;

    // Create application state
    let state = AppState::new(settings.clone(), client)?;

    let app = create_router(state);

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Returns the optional settings path, or `None` when the process should exit
/// after printing help or version.
fn parse_args() -> Result<Option<Option<PathBuf>>> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => bail!("{} needs a file argument", arg),
            },
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("websift {}", websift::VERSION);
                return Ok(None);
            }
            other => bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(Some(config_path))
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
websift v{}
Search the web and summarize the top pages with a local model

USAGE:
    websift [OPTIONS]

OPTIONS:
    -c, --config <FILE>    Path to configuration file
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    WEBSIFT_SETTINGS_PATH  Path to settings.yml
    WEBSIFT_PORT           Server port
    WEBSIFT_BIND_ADDRESS   Bind address
    WEBSIFT_MODEL          Ollama model tag
    WEBSIFT_OLLAMA_URL     Ollama server URL
    WEBSIFT_ENGINE         Search engine (google, duckduckgo)
    WEBSIFT_RESULT_COUNT   Number of pages to summarize
    RUST_LOG               Log filter (default: info)
"#,
        websift::VERSION
    );
}
