use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use infrastructure::MonitorConfig;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use machine_monitor::{AppContext, Args, Command, Console, Dispatcher, Outcome, USAGE};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<Outcome> {
    let command = args.command();

    // Usage never touches configuration or the database
    if command == Command::Usage {
        print!("{}", USAGE);
        return Ok(Outcome::Success);
    }

    let config = MonitorConfig::load(&args.config_dir)?.with_database_url(args.database_url);

    // Logs go to stderr, tables to stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(database_url = %config.database_url, ?command, "Starting");

    let ctx = AppContext::connect(&config.database_url).await?;
    let outcome = Dispatcher::new(&ctx)
        .execute(command, &mut Console::stdio())
        .await;

    if let Err(e) = ctx.close().await {
        warn!("Failed to close database connection: {}", e);
    }

    Ok(outcome)
}
