use anyhow::{Context, Result};
use clap::Parser;
use infrastructure::config::AppConfig;
use infrastructure::{SqliteActionLog, TelegramClient};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bot_server::{api, build_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and per-environment overrides
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Listen address, overrides server.listen_addr
    #[arg(long)]
    listen: Option<String>,

    /// SQLite connection string, overrides database.url
    #[arg(long)]
    database_url: Option<String>,

    /// Do not call setWebhook at startup
    #[arg(long)]
    skip_webhook_registration: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "info,scooter_bot=debug,bot_server=debug,application=debug",
                )
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();
    let args = Args::parse();
    info!("🛵 Scooter Bot Starting...");

    // 1. Configuration
    let mut config = AppConfig::load(&args.config_dir).context("Failed to load configuration")?;
    if let Some(listen) = args.listen {
        config.server.listen_addr = listen;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    info!(
        admins = config.bot.admin_ids.len(),
        first = config.fleet.first,
        last = config.fleet.last,
        page_size = config.fleet.page_size,
        "✅ Configuration loaded"
    );
    if config.bot.admin_ids.is_empty() {
        warn!("No admin ids configured, admin commands are disabled");
    }

    // 2. Action log
    info!(url = %config.database.url, "Opening action log...");
    let log = Arc::new(SqliteActionLog::new(&config.database.url).await?);
    info!("✅ Action log ready");

    // 3. Chat platform
    let telegram = Arc::new(TelegramClient::new(
        config.bot.token.clone(),
        config.bot.api_base_url.clone(),
    )?);

    if args.skip_webhook_registration {
        info!("Skipping webhook registration");
    } else {
        match config.webhook_url() {
            Some(url) => {
                telegram
                    .set_webhook(&url, config.webhook.secret_token.as_deref())
                    .await
                    .context("Failed to register webhook")?;
                info!(url = %url, "✅ Webhook registered");
            }
            None => anyhow::bail!(
                "webhook.base_url must be set unless --skip-webhook-registration is given"
            ),
        }
    }

    // 4. HTTP server
    let state = build_state(&config, log, telegram)?;
    let app = api::create_router(state, &config.webhook.path);

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen_addr))?;
    info!(path = %config.webhook.path, "🚀 Listening on http://{}", config.server.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
