//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigError, ConfigFile, ConfigManager, Model, ModelKind};

/// One-shot question and pipe handlers.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Config template command handler.
pub mod init;

/// Model listing command handler.
pub mod models;

/// Translation command handler.
pub mod translate;

/// Loads the config file, creating the template on first run.
///
/// `None` means the template was just written and the command should stop.
fn load_config() -> Result<Option<ConfigFile>> {
    ConfigManager::new()?.load_or_init()
}

/// What a command needs a model for.
#[derive(Debug, Clone, Copy)]
enum Purpose {
    Conversation,
    Translation,
}

impl Purpose {
    const fn config_key(self) -> &'static str {
        match self {
            Self::Conversation => "default_model",
            Self::Translation => "default_translator",
        }
    }

    const fn kinds(self) -> &'static [ModelKind] {
        match self {
            Self::Conversation => ModelKind::CONVERSATIONAL,
            Self::Translation => ModelKind::TRANSLATION,
        }
    }

    fn default_abbr(self, config: &ConfigFile) -> Option<&str> {
        match self {
            Self::Conversation => config.default_model.as_deref(),
            Self::Translation => config.default_translator.as_deref(),
        }
    }
}

/// Picks the model named on the command line, falling back to the config
/// default for `purpose`.
fn select_model(
    config: &ConfigFile,
    requested: Option<&str>,
    purpose: Purpose,
) -> Result<Model, ConfigError> {
    let abbr = requested
        .or_else(|| purpose.default_abbr(config))
        .ok_or(ConfigError::NoModel {
            key: purpose.config_key(),
        })?;

    config.models().resolve(abbr, purpose.kinds())
}
