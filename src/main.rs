mod gateway;
mod provider_builder;

use clap::{Parser, Subcommand};
use ranbot_channels::line::LineChannel;
use ranbot_core::{
    config::{self, AppConfig, Config},
    intent::{classify, KeywordTable},
};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "ranbot",
    version,
    about = "ranbot: LINE shop assistant for sales, stock, and menu questions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "RANBOT_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server.
    Start,
    /// Check configuration and backend availability.
    Status,
    /// Compose one reply and print it.
    Ask {
        /// The message to answer.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Print the intent a message classifies as.
    Classify {
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A .env next to the binary supplies deployment secrets.
    let _ = dotenvy::dotenv();

    let cfg = load_config(&cli.config)?;
    let _log_guard = init_logging(&cfg.app)?;

    match cli.command {
        Commands::Start => {
            let composer = Arc::new(provider_builder::build_composer(&cfg)?);
            let line = build_line(&cfg)?;
            if line.is_none() {
                info!("LINE channel not configured; /callback is disabled");
            }

            info!(
                "ranbot starting (locale={}, provider={})",
                cfg.app.locale.code(),
                cfg.provider.default
            );
            let state = gateway::AppState::new(composer, line);
            gateway::serve(&cfg.server, state).await?;
        }
        Commands::Status => {
            println!("ranbot status\n");
            println!("Config: {}", cli.config);
            println!("Locale: {}", cfg.app.locale.code());
            println!("Default provider: {}", cfg.provider.default);
            println!();

            match provider_builder::build_backends(&cfg) {
                Ok((text, _)) => {
                    let available = text.is_available().await;
                    println!(
                        "  {}: {}",
                        text.name(),
                        if available { "available" } else { "unreachable" }
                    );
                }
                Err(e) => println!("  provider: {e}"),
            }

            match cfg.channel.line {
                Some(ref line) => println!(
                    "  line: {}",
                    if line.enabled
                        && !line.channel_access_token.is_empty()
                        && !line.channel_secret.is_empty()
                    {
                        "configured"
                    } else if line.enabled {
                        "enabled but missing channel_access_token or channel_secret"
                    } else {
                        "disabled"
                    }
                ),
                None => println!("  line: not configured"),
            }

            for path in [cfg.data.daily_sales_path(), cfg.data.ingredients_path()] {
                println!(
                    "  data {}: {}",
                    path.display(),
                    if path.exists() { "found" } else { "missing" }
                );
            }
        }
        Commands::Ask { message } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: ranbot ask <message>");
            }

            let query = message.join(" ");
            let composer = provider_builder::build_composer(&cfg)?;
            let composed = composer.compose(&query).await?;
            println!("{}", composed.payload.body());
            if let Some(url) = composed.payload.image_url() {
                println!("{url}");
            }
        }
        Commands::Classify { message } => {
            let query = message.join(" ");
            let table = KeywordTable::with_overrides(&cfg.keywords);
            println!("{}", classify(&query, &table));
        }
    }

    Ok(())
}

/// Config file, then environment overrides.
fn load_config(path: &str) -> anyhow::Result<Config> {
    let mut cfg = config::load(path)?;
    cfg.apply_env()?;
    Ok(cfg)
}

/// Install the tracing subscriber. `RUST_LOG` wins over `app.log_level`.
///
/// With `app.log_dir` set, logs also go to a daily-rolling file; the returned
/// guard flushes it and must live until exit.
fn init_logging(app: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    match app.log_dir {
        Some(ref dir) => {
            let dir = config::shellexpand(dir);
            std::fs::create_dir_all(&dir)
                .map_err(|e| anyhow::anyhow!("failed to create log dir {dir}: {e}"))?;
            let appender = tracing_appender::rolling::daily(&dir, format!("{}.log", app.name));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

/// Build the LINE webhook when the channel is enabled.
fn build_line(cfg: &Config) -> anyhow::Result<Option<gateway::LineWebhook>> {
    let Some(ref line) = cfg.channel.line else {
        return Ok(None);
    };
    if !line.enabled {
        return Ok(None);
    }
    if line.channel_access_token.is_empty() || line.channel_secret.is_empty() {
        anyhow::bail!(
            "LINE is enabled but channel_access_token or channel_secret is empty. \
             Set them in config.toml or the LINE_CHANNEL_ACCESS_TOKEN / LINE_CHANNEL_SECRET env vars."
        );
    }
    let channel = LineChannel::new(line.clone());
    let secret = channel.channel_secret().to_string();
    Ok(Some(gateway::LineWebhook::new(secret, Arc::new(channel))))
}
