//! Configuration file management and model resolution.

mod manager;
mod model;

pub use manager::{ConfigFile, ConfigManager, ModelConfig, PlatformConfig, TEMPLATE_CONFIG};
pub use model::{Model, ModelEntry, ModelKind, ModelList};

/// The configuration cannot produce a callable model.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Missing required configuration: '{key}'\n\n\
         Please provide it via:\n  \
         - CLI option: -m <model>\n  \
         - Config file: set {key} in config.toml"
    )]
    NoModel { key: &'static str },

    #[error(
        "Invalid model: {abbr}\n\n\
         Available models: {available}\n\
         Run 'minall models' to see all configured models."
    )]
    InvalidModel { abbr: String, available: String },

    #[error(
        "Platform '{platform}' has no API key\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key under [platforms.{platform}] in config.toml"
    )]
    MissingApiKey { platform: String, env_var: String },
}
