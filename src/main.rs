//! Fediprobe binary entry point

use clap::Parser;
use fediprobe::{AppState, config, demo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Limit the number of activities fetched per handle
    #[arg(short, long, global = true)]
    limit: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run WebFinger discovery for one or more handles
    Webfinger(HandlesArgs),
    /// Resolve and display an actor profile
    Actor(TargetArgs),
    /// Fetch recent timeline activities for one or more handles
    Timeline(HandlesArgs),
    /// Print annotated sample ActivityPub objects
    Objects,
    /// Simulate delivering a notification to a remote inbox (nothing is sent)
    Notify(NotifyArgs),
}

#[derive(Parser, Debug)]
struct HandlesArgs {
    /// Handles in user@domain form
    #[arg(required = true)]
    handles: Vec<String>,
}

#[derive(Parser, Debug)]
struct TargetArgs {
    /// A handle (user@domain) or a direct actor URL
    target: String,
}

#[derive(Parser, Debug)]
struct NotifyArgs {
    /// Optional recipient handle; its real inbox is looked up first
    #[arg(short = 'H', long)]
    handle: Option<String>,
}

/// Application entry point
///
/// # Setup
/// 1. Initialize tracing/logging
/// 2. Load configuration from file and environment
/// 3. Initialize AppState (shared HTTP client)
/// 4. Dispatch the requested demo command
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 1. Initialize tracing/logging
    let log_format =
        std::env::var("FEDIPROBE__LOGGING__FORMAT").unwrap_or_else(|_| "pretty".to_string());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "fediprobe=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "fediprobe=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    // 2. Load configuration
    let config = config::AppConfig::load()?;
    tracing::debug!(
        timeout_seconds = config.http.timeout_seconds,
        user_agent = %config.http.user_agent,
        "Configuration loaded"
    );

    // 3. Initialize application state
    let state = AppState::new(config)?;
    let limit = args.limit.unwrap_or(state.config.resolver.outbox_limit);

    // 4. Dispatch
    match args.command {
        Command::Webfinger(handles) => demo::webfinger::run(&state, &handles.handles).await?,
        Command::Actor(target) => demo::actor::run(&state, &target.target).await?,
        Command::Timeline(handles) => {
            demo::timeline::run(&state, &handles.handles, limit).await?
        }
        Command::Objects => demo::objects::run()?,
        Command::Notify(notify) => demo::notify::run(&state, notify.handle.as_deref()).await?,
    }

    Ok(())
}
