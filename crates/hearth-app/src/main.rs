mod cli;
mod commands;
mod terminal;

use hearth_common::HearthError;
use hearth_config::{HearthConfig, LogLevel};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::cli::{Args, Command};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` wins, then `--log-level`, then the configured level.
fn filter_directive(
    rust_log: Option<&str>,
    cli_level: Option<&str>,
    config_level: Option<LogLevel>,
) -> String {
    if let Some(env) = rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        return env.to_string();
    }
    let level = cli_level
        .or(config_level.map(LogLevel::as_str))
        .unwrap_or(LogLevel::default().as_str());
    format!("hearth={level}")
}

/// Install the subscriber before anything else logs. The filter can be
/// narrowed once the config file has been read.
fn init_logging(rust_log: Option<&str>, cli_level: Option<&str>) -> FilterHandle {
    let (filter, handle) =
        reload::Layer::new(EnvFilter::new(filter_directive(rust_log, cli_level, None)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    handle
}

fn apply_config_level(
    handle: &FilterHandle,
    rust_log: Option<&str>,
    cli_level: Option<&str>,
    config: &HearthConfig,
) {
    let directive = filter_directive(rust_log, cli_level, Some(config.logging.level));
    if let Err(e) = handle.reload(EnvFilter::new(&directive)) {
        tracing::warn!(error = %e, directive = %directive, "Could not apply configured log level");
    }
}

/// `config` shows whatever is on disk; every other command needs valid settings.
fn load_config(args: &Args) -> Result<HearthConfig, HearthError> {
    let lenient = args.command == Command::Config;
    let config = match (&args.config, lenient) {
        (Some(path), false) => hearth_config::load_config_from(path)?,
        (Some(path), true) => hearth_config::toml_loader::load_from_path(path)?,
        (None, false) => hearth_config::load_config()?,
        (None, true) => hearth_config::toml_loader::load_default()?,
    };
    Ok(config)
}

async fn run(args: Args, config: HearthConfig) -> Result<(), HearthError> {
    match args.command {
        Command::Presence => commands::presence::run(&config).await,
        Command::Clock { once } => commands::clock::run(&config, once).await,
        Command::Theme { action } => commands::theme::run(&config, action),
        Command::Tilt { card, pointer } => commands::tilt::run(&card, pointer.as_deref()),
        Command::Config => {
            println!("{}", hearth_config::config_to_json(&config));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    let rust_log = std::env::var("RUST_LOG").ok();
    let handle = init_logging(rust_log.as_deref(), args.log_level.as_deref());

    let result = match load_config(&args) {
        Ok(config) => {
            apply_config_level(&handle, rust_log.as_deref(), args.log_level.as_deref(), &config);
            run(args, config).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "hearth exited with an error");
        eprintln!("hearth: {e}");
        std::process::exit(1);
    }
}
