mod config;
mod display_config;
mod search_config;

pub use config::{get_config_manager, Config};
pub use display_config::DisplayConfig;
pub use search_config::SearchConfig;
