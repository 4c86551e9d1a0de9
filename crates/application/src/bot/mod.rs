pub mod error;
pub mod keyboards;
pub mod reply;
pub mod service;
pub mod texts;

pub use error::BotError;
pub use reply::{Reply, Response};
pub use service::BotService;
