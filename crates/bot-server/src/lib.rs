pub mod api;
pub mod state;

use application::{AdminGate, BotService};
use domain::messaging::Messenger;
use infrastructure::config::AppConfig;
use infrastructure::{SqliteActionLog, XlsxReportExporter};
use state::AppState;
use std::sync::Arc;

/// Wire the bot service from loaded configuration
pub fn build_state(
    config: &AppConfig,
    log: Arc<SqliteActionLog>,
    messenger: Arc<dyn Messenger>,
) -> anyhow::Result<Arc<AppState>> {
    let fleet = config.scooter_fleet()?;
    let bot = BotService::new(
        log,
        Arc::new(XlsxReportExporter::new()),
        AdminGate::new(config.bot.admin_ids.iter().copied()),
    )
    .with_fleet(fleet, config.fleet.page_size);

    Ok(Arc::new(
        AppState::new(bot, messenger).with_secret_token(config.webhook.secret_token.clone()),
    ))
}
