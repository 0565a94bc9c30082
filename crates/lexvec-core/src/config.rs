//! Configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` +
//! `config.<env>.toml` + `LEXVEC_*` env vars (`__` separates nested keys, e.g.
//! `LEXVEC_FUSION__KEYWORD_WEIGHT`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub struct Config {
    figment: Figment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub corpus_path: String,
    pub vectors_path: String,
    pub raw_txt_dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            corpus_path: "data/documents.json".to_string(),
            vectors_path: "data/vectors.json".to_string(),
            raw_txt_dir: "data/txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { default_limit: 5 }
    }
}

/// Weights used when a document is found by both scorers, and how many
/// candidates each scorer contributes per requested result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionConfig {
    pub keyword_weight: f32,
    pub vector_weight: f32,
    pub candidate_factor: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self { keyword_weight: 0.6, vector_weight: 0.4, candidate_factor: 2 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub fusion: FusionConfig,
}

impl Settings {
    pub fn validate(&self) -> crate::error::Result<()> {
        let f = &self.fusion;
        for (name, w) in [("fusion.keyword_weight", f.keyword_weight), ("fusion.vector_weight", f.vector_weight)] {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be a non-negative number, got {w}")));
            }
        }
        if f.candidate_factor == 0 {
            return Err(Error::InvalidConfig("fusion.candidate_factor must be at least 1".into()));
        }
        if self.search.default_limit == 0 {
            return Err(Error::InvalidConfig("search.default_limit must be at least 1".into()));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Merge defaults, `config.toml`, `config.<env>.toml` and `LEXVEC_*`
    /// variables, looking for the files under `base`.
    pub fn load_in(base: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("LEXVEC_").split("__"));

        let config = Self { figment };
        config.settings()?.validate()?;
        tracing::debug!(env = %env_name, base = %base.display(), "configuration loaded");
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

    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to extract settings: {}", e))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
