//! Application layer - Use cases and business workflows
//!
//! Routing of inbound events to intents, the admin gate, report queries and
//! the bot service that ties them together.

pub mod auth;
pub mod bot;
pub mod delivery;
pub mod intent;
pub mod report;

pub use auth::AdminGate;
pub use bot::{BotError, BotService, Reply, Response};
pub use delivery::deliver;
pub use intent::{CallbackToken, InputHint, Intent};
pub use report::ReportBuilder;
