//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against the directory holding the configuration file.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

/// `[data]`: where the corpora live. Relative paths are resolved against the
/// configuration directory by [`Config::data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub intent_corpus: String,
    pub qa_corpus: String,
    pub small_talk_corpus: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            intent_corpus: "data/intent_matching.csv".to_string(),
            qa_corpus: "data/question_answering.csv".to_string(),
            small_talk_corpus: "data/small_talk.csv".to_string(),
        }
    }
}

/// Corpus locations after `~`/`${VAR}` expansion and base resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub intent_corpus: PathBuf,
    pub qa_corpus: PathBuf,
    pub small_talk_corpus: PathBuf,
}

/// `[bot]`: persona and dialogue knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    pub name: String,
    /// Re-prompts allowed after an utterance routes to `other`.
    pub max_attempts: usize,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self { name: "Sophia".to_string(), max_attempts: 2 }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_path("config.toml")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        let path = path.as_ref();
        let base_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("config");

        let mut figment = Figment::new().merge(Toml::file(path));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join(format!("{stem}.dev.toml")))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join(format!("{stem}.prod.toml")))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join(format!("{stem}.test.toml")))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base_dir };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like [`Config::get`], but an absent key yields `T::default()`.
    pub fn get_or_default<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if self.figment.contains(key) { self.get(key) } else { Ok(T::default()) }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data(&self) -> anyhow::Result<DataPaths> {
        let data: DataSettings = self.get_or_default("data")?;
        Ok(DataPaths {
            intent_corpus: resolve_with_base(&self.base_dir, &data.intent_corpus),
            qa_corpus: resolve_with_base(&self.base_dir, &data.qa_corpus),
            small_talk_corpus: resolve_with_base(&self.base_dir, &data.small_talk_corpus),
        })
    }

    pub fn bot(&self) -> anyhow::Result<BotSettings> {
        self.get_or_default("bot")
    }

    fn validate(&self) -> anyhow::Result<()> {
        let bot = self.bot()?;
        if bot.name.trim().is_empty() {
            anyhow::bail!(crate::error::Error::InvalidConfig("bot.name must not be empty".to_string()));
        }
        let data = self.get_or_default::<DataSettings>("data")?;
        for (key, value) in [
            ("data.intent_corpus", &data.intent_corpus),
            ("data.qa_corpus", &data.qa_corpus),
            ("data.small_talk_corpus", &data.small_talk_corpus),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!(crate::error::Error::InvalidConfig(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    // Expand env vars first
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    // Expand ~ at start
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
