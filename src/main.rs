use anyhow::Context;
use redis_reservation::{
    commands::CommandHandler, config::Config, expiry::spawn_expiry_sweeper, state::State,
};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(std::env::args()).context("failed to parse command line")?;
    info!(
        lock_ttl_secs = config.lock_ttl.as_secs(),
        sweep_interval_ms = config.sweep_interval.as_millis() as u64,
        "starting store"
    );

    let state = State::new(&config);
    let sweeper = spawn_expiry_sweeper(state.store.clone(), config.sweep_interval);

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let output = match CommandHandler::parse_line(&line) {
            Ok(handler) => match handler.handle_command(&state).await {
                Ok(reply) => reply.render(),
                Err(e) => format!("(error) {}", e.as_string()),
            },
            Err(e) => format!("(error) {}", e.as_string()),
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    sweeper.abort();
    info!("stdin closed, shutting down");

    Ok(())
}
