//! Demo driver for the scoring engine.
//!
//! Loads OHLCV bars from JSON files (one file per symbol, file stem =
//! symbol name), runs the screener over them and prints the ranked
//! report. The files stand in for the market-data collaborator.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use augur::chat;
use augur::config::Config;
use augur::engine::screen;
use augur::error::EngineError;
use augur::types::Bar;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(horizon_token) = args.next() else {
        bail!("usage: augur <short|medium|long> <bars.json>...");
    };
    let horizon = chat::parse_horizon_keyword(&horizon_token)?;

    let files: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if files.is_empty() {
        bail!("usage: augur <short|medium|long> <bars.json>...");
    }

    let mut symbols = Vec::with_capacity(files.len());
    let mut paths: HashMap<String, PathBuf> = HashMap::new();
    for file in files {
        let symbol = file
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("bad file name: {}", file.display()))?
            .to_uppercase();
        symbols.push(symbol.clone());
        paths.insert(symbol, file);
    }

    let config = Config::from_env();
    info!(
        symbols = symbols.len(),
        horizon = horizon.name(),
        "running screener"
    );

    let report = screen(&symbols, horizon, &config.screener_options(), |symbol| {
        let path = paths.get(&symbol).cloned();
        async move {
            let path = path
                .ok_or_else(|| EngineError::FetchFailed(format!("no data file for {symbol}")))?;
            let raw = tokio::fs::read(&path)
                .await
                .map_err(|e| EngineError::FetchFailed(format!("{}: {e}", path.display())))?;
            serde_json::from_slice::<Vec<Bar>>(&raw)
                .map_err(|e| EngineError::FetchFailed(format!("{}: {e}", path.display())))
        }
    })
    .await;

    println!("{}", chat::format_report(&report));
    Ok(())
}
