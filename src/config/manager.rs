use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::model::{ModelEntry, ModelKind, ModelList};
use crate::paths;

/// Commented starting point written on first run and by `minall init`.
pub const TEMPLATE_CONFIG: &str = include_str!("template.toml");

/// A model declared under `[platforms.<name>.models.<abbr>]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name sent to the endpoint.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ModelKind,
}

/// An API platform: one endpoint, one key, any number of models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Full chat completions URL.
    pub url: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Models keyed by abbreviation.
    #[serde(default)]
    pub models: BTreeMap<String, ModelConfig>,
}

impl PlatformConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/minall/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Abbreviation of the model used for chat, pipe and one-shot questions.
    #[serde(default)]
    pub default_model: Option<String>,
    /// Abbreviation of the model used for translation.
    #[serde(default)]
    pub default_translator: Option<String>,
    /// System message opening every conversation.
    #[serde(default)]
    pub system_msg: String,
    /// Platforms keyed by name.
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformConfig>,
}

impl ConfigFile {
    /// Flattens all platforms into one list keyed by model abbreviation.
    ///
    /// Platforms are visited in name order; when two declare the same
    /// abbreviation the first one wins and a warning is printed.
    pub fn models(&self) -> ModelList {
        let mut models = ModelList::default();

        for (platform_name, platform) in &self.platforms {
            let api_key = platform.get_api_key();

            for (abbr, model) in &platform.models {
                let entry = ModelEntry {
                    platform: platform_name.clone(),
                    name: model.name.clone(),
                    kind: model.kind,
                    url: platform.url.clone(),
                    api_key: api_key.clone(),
                    api_key_env: platform.api_key_env.clone(),
                };

                if !models.insert(abbr.clone(), entry) {
                    crate::warn!(
                        "Warning: model '{abbr}' of platform '{platform_name}' is shadowed by an earlier platform"
                    );
                }
            }
        }

        models
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/minall/config.toml`
    /// or `~/.config/minall/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit config file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, writing the template first if there is none.
    ///
    /// Returns `Ok(None)` when the template was just written: the caller
    /// should stop and let the user fill it in.
    pub fn load_or_init(&self) -> Result<Option<ConfigFile>> {
        if self.exists() {
            return self.load().map(Some);
        }

        crate::status!(
            "Config file not found. Creating a new one at {}",
            self.config_path.display()
        );
        self.write_template()?;
        crate::status!("Please make necessary modifications.");
        Ok(None)
    }

    /// Writes the template config, refusing to clobber an existing file
    /// unless `force` is set.
    pub fn init(&self, force: bool) -> Result<()> {
        if self.exists() && !force {
            bail!(
                "Config file already exists: {}\n\n\
                 Use 'minall init --force' to overwrite it.",
                self.config_path.display()
            );
        }
        self.write_template()
    }

    fn write_template(&self) -> Result<()> {
        self.write(TEMPLATE_CONFIG)
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("minall").join("config.toml"))
    }

    fn platform(url: &str, api_key: Option<&str>, models: &[(&str, &str, ModelKind)]) -> PlatformConfig {
        PlatformConfig {
            url: url.to_string(),
            api_key: api_key.map(str::to_string),
            api_key_env: None,
            models: models
                .iter()
                .map(|(abbr, name, kind)| {
                    (
                        (*abbr).to_string(),
                        ModelConfig {
                            name: (*name).to_string(),
                            kind: *kind,
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut platforms = BTreeMap::new();
        platforms.insert(
            "deepseek".to_string(),
            platform(
                "https://api.deepseek.com/chat/completions",
                Some("sk-test"),
                &[("ds", "deepseek-chat", ModelKind::Chat)],
            ),
        );

        let config = ConfigFile {
            default_model: Some("ds".to_string()),
            default_translator: None,
            system_msg: "be terse".to_string(),
            platforms,
        };

        manager
            .write(&toml::to_string_pretty(&config).unwrap())
            .unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.default_model, Some("ds".to_string()));
        assert_eq!(loaded.system_msg, "be terse");
        let deepseek = &loaded.platforms["deepseek"];
        assert_eq!(deepseek.models["ds"].name, "deepseek-chat");
        assert_eq!(deepseek.models["ds"].kind, ModelKind::Chat);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        manager.write("platforms = 3").unwrap();

        let err = manager.load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_or_init_writes_template() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load_or_init().unwrap().is_none());
        assert!(manager.exists());

        let written = fs::read_to_string(manager.config_path()).unwrap();
        assert_eq!(written, TEMPLATE_CONFIG);
        assert!(manager.load_or_init().unwrap().is_some());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        manager.write("system_msg = \"mine\"").unwrap();

        let err = manager.init(false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(manager.load().unwrap().system_msg, "mine");

        manager.init(true).unwrap();
        assert_eq!(
            fs::read_to_string(manager.config_path()).unwrap(),
            TEMPLATE_CONFIG
        );
    }

    #[test]
    #[serial]
    fn test_template_config_is_usable() {
        // SAFETY: serialized with the other env-var tests
        unsafe {
            std::env::set_var("DEEPSEEK_API_KEY", "sk-template");
            std::env::remove_var("DASHSCOPE_API_KEY");
        }

        let config: ConfigFile = toml::from_str(TEMPLATE_CONFIG).unwrap();
        let models = config.models();

        let default_model = config.default_model.as_deref().unwrap();
        let model = models
            .resolve(default_model, ModelKind::CONVERSATIONAL)
            .unwrap();
        assert_eq!(model.name, "deepseek-chat");
        assert_eq!(model.api_key, "sk-template");

        let translator = config.default_translator.as_deref().unwrap();
        assert!(models.is_valid_model(translator, ModelKind::TRANSLATION));
        assert!(models.resolve(translator, ModelKind::TRANSLATION).is_err());

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("DEEPSEEK_API_KEY");
        }
    }

    #[test]
    fn test_models_inherit_platform_url_and_key() {
        let mut platforms = BTreeMap::new();
        platforms.insert(
            "a".to_string(),
            platform(
                "https://a.example/v1",
                Some("key-a"),
                &[
                    ("chat", "a-chat", ModelKind::Chat),
                    ("mt", "a-mt", ModelKind::Translator),
                ],
            ),
        );
        platforms.insert(
            "b".to_string(),
            platform(
                "https://b.example/v1",
                Some("key-b"),
                &[("chat", "b-chat", ModelKind::Chat)],
            ),
        );
        let config = ConfigFile {
            platforms,
            ..ConfigFile::default()
        };

        let models = config.models();
        let chat = models.resolve("chat", ModelKind::CONVERSATIONAL).unwrap();
        assert_eq!(chat.name, "a-chat");
        assert_eq!(chat.url, "https://a.example/v1");
        assert_eq!(chat.api_key, "key-a");

        let mt = models.resolve("mt", ModelKind::TRANSLATION).unwrap();
        assert_eq!(mt.name, "a-mt");
    }

    #[test]
    #[serial]
    fn test_platform_get_api_key_from_env() {
        // SAFETY: serialized with the other env-var tests
        unsafe {
            std::env::set_var("MINALL_TEST_API_KEY", "test-key-value");
        }

        let mut provider = platform("https://api.example.com", Some("fallback-key"), &[]);
        provider.api_key_env = Some("MINALL_TEST_API_KEY".to_string());

        // Environment variable takes priority
        assert_eq!(provider.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("MINALL_TEST_API_KEY");
        }

        // Falls back to api_key when env var not set
        assert_eq!(provider.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_platform_empty_api_key_is_missing() {
        let provider = platform("https://api.example.com", Some(""), &[]);
        assert!(provider.get_api_key().is_none());
    }
}
