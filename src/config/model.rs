use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ConfigError;

/// Capability of a configured model, the `type` key in config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Chat,
    Reasoner,
    Translator,
    #[serde(other)]
    Other,
}

impl ModelKind {
    /// Kinds accepted by chat, pipe and one-shot questions.
    pub const CONVERSATIONAL: &'static [Self] = &[Self::Chat, Self::Reasoner];
    /// Kinds accepted by `trans`.
    pub const TRANSLATION: &'static [Self] = &[Self::Translator];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Reasoner => "reasoner",
            Self::Translator => "translator",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to call one remote model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Model name sent in the request body.
    pub name: String,
    pub kind: ModelKind,
    /// Full endpoint URL requests are POSTed to.
    pub url: String,
    pub api_key: String,
}

/// A model entry before its API key is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    pub platform: String,
    pub name: String,
    pub kind: ModelKind,
    pub url: String,
    pub api_key: Option<String>,
    /// Environment variable the key was expected in, for error messages.
    pub api_key_env: Option<String>,
}

/// Models keyed by their abbreviation.
#[derive(Debug, Clone, Default)]
pub struct ModelList {
    models: BTreeMap<String, ModelEntry>,
}

impl ModelList {
    /// Adds an entry; returns `false` and keeps the existing one when the
    /// abbreviation is already taken.
    pub fn insert(&mut self, abbr: String, entry: ModelEntry) -> bool {
        if self.models.contains_key(&abbr) {
            return false;
        }
        self.models.insert(abbr, entry);
        true
    }

    pub fn get(&self, abbr: &str) -> Option<&ModelEntry> {
        self.models.get(abbr)
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModelEntry)> {
        self.models.iter()
    }

    /// Returns `true` if `abbr` names a model of one of the given kinds.
    pub fn is_valid_model(&self, abbr: &str, kinds: &[ModelKind]) -> bool {
        self.get(abbr).is_some_and(|entry| kinds.contains(&entry.kind))
    }

    /// Resolves an abbreviation into a callable [`Model`].
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unknown, of the wrong kind, or its
    /// platform has no API key.
    pub fn resolve(&self, abbr: &str, kinds: &[ModelKind]) -> Result<Model, ConfigError> {
        let Some(entry) = self.get(abbr).filter(|entry| kinds.contains(&entry.kind)) else {
            let available: Vec<&str> = self
                .iter()
                .filter(|(_, entry)| kinds.contains(&entry.kind))
                .map(|(abbr, _)| abbr.as_str())
                .collect();

            return Err(ConfigError::InvalidModel {
                abbr: abbr.to_string(),
                available: available.join(", "),
            });
        };

        let Some(api_key) = entry.api_key.clone() else {
            return Err(ConfigError::MissingApiKey {
                platform: entry.platform.clone(),
                env_var: entry
                    .api_key_env
                    .clone()
                    .unwrap_or_else(|| "API_KEY".to_string()),
            });
        };

        Ok(Model {
            name: entry.name.clone(),
            kind: entry.kind,
            url: entry.url.clone(),
            api_key,
        })
    }
}
