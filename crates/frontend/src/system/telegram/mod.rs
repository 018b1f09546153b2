pub mod bridge;
pub mod context;

pub use context::{use_telegram, TelegramContext};
