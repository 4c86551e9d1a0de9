use config::{Config, ConfigError, Environment, File};
use domain::ScooterFleet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BotSettings {
    pub token: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub admin_ids: Vec<i64>,
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookSettings {
    /// Externally reachable origin, e.g. `https://bot.example.com`
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_webhook_path")]
    pub path: String,
    #[serde(default)]
    pub secret_token: Option<String>,
}

fn default_webhook_path() -> String {
    "/webhook".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FleetSettings {
    pub first: i64,
    pub last: i64,
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub bot: BotSettings,
    pub webhook: WebhookSettings,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub fleet: FleetSettings,
}

/// Unprefixed variables understood by earlier deployments of the bot
#[derive(Debug, Clone, Default)]
pub struct LegacyEnv {
    pub bot_token: Option<String>,
    pub webhook_url: Option<String>,
    pub admin_ids: Option<String>,
}

impl LegacyEnv {
    pub fn from_env() -> Self {
        Self {
            bot_token: std::env::var("BOT_TOKEN").ok(),
            webhook_url: std::env::var("WEBHOOK_URL").ok(),
            admin_ids: std::env::var("ADMIN_IDS").ok(),
        }
    }
}

/// Parse a comma or whitespace separated list of user ids
pub fn parse_admin_ids(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ConfigError::Message(format!("invalid admin id '{part}'")))
        })
        .collect()
}

impl AppConfig {
    /// Load using the process environment
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        Self::load_with(config_dir, LegacyEnv::from_env())
    }

    pub fn load_with(config_dir: &str, legacy: LegacyEnv) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let legacy_admins = legacy
            .admin_ids
            .as_deref()
            .map(parse_admin_ids)
            .transpose()?;

        let s = Config::builder()
            // Start with default settings
            .set_default("bot.api_base_url", default_api_base_url())?
            .set_default("webhook.path", default_webhook_path())?
            .set_default("server.listen_addr", "0.0.0.0:8080")?
            .set_default("database.url", "sqlite://scooters.db?mode=rwc")?
            .set_default("fleet.first", ScooterFleet::DEFAULT_FIRST)?
            .set_default("fleet.last", ScooterFleet::DEFAULT_LAST)?
            .set_default("fleet.page_size", 20)?
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. SCOOTER__BOT__ADMIN_IDS=1,2)
            .add_source(
                Environment::with_prefix("SCOOTER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("bot.admin_ids"),
            )
            .set_override_option("bot.token", legacy.bot_token)?
            .set_override_option("webhook.base_url", legacy.webhook_url)?
            .set_override_option("bot.admin_ids", legacy_admins)?
            .build()?;

        let cfg: Self = s.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.token.trim().is_empty() {
            return Err(ConfigError::Message("bot.token must not be empty".into()));
        }
        if self.fleet.page_size == 0 {
            return Err(ConfigError::Message("fleet.page_size must be >= 1".into()));
        }
        if !self.webhook.path.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "webhook.path must start with '/', got '{}'",
                self.webhook.path
            )));
        }
        self.scooter_fleet()?;
        Ok(())
    }

    pub fn scooter_fleet(&self) -> Result<ScooterFleet, ConfigError> {
        ScooterFleet::new(self.fleet.first, self.fleet.last)
            .map_err(|e| ConfigError::Message(e.to_string()))
    }

    /// Full URL the platform should push updates to
    pub fn webhook_url(&self) -> Option<String> {
        let base = self.webhook.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            None
        } else {
            Some(format!("{}{}", base, self.webhook.path))
        }
    }
}
