use application::BotService;
use domain::messaging::Messenger;
use std::sync::Arc;

/// Shared by every webhook request. Nothing in here is mutated after startup.
pub struct AppState {
    pub bot: BotService,
    pub messenger: Arc<dyn Messenger>,
    /// Expected value of the secret token header, when one is configured
    pub secret_token: Option<String>,
}

impl AppState {
    pub fn new(bot: BotService, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            bot,
            messenger,
            secret_token: None,
        }
    }

    pub fn with_secret_token(mut self, secret_token: Option<String>) -> Self {
        self.secret_token = secret_token.filter(|s| !s.is_empty());
        self
    }
}
