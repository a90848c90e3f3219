//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + `APP_*` env vars (`__` separates nested keys). Provides helpers to expand
//! `~` and `${VAR}` and to resolve relative paths against a known base directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::alias::{AliasPattern, ALIAS};
use crate::error::Error;
use crate::settings::{IndexSettings, Rotation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub root_dir: String,
    pub alias: String,
    pub rotation: Rotation,
    pub writer_heap_bytes: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            root_dir: "../dev_data/indexes/amoozdb".to_string(),
            alias: ALIAS.to_string(),
            rotation: Rotation::default(),
            writer_heap_bytes: 50_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub default_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { default_limit: 10 }
    }
}

/// Typed view over the merged configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub index: IndexSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

impl Settings {
    pub fn root_dir(&self) -> PathBuf {
        expand_path(&self.store.root_dir)
    }

    pub fn alias_pattern(&self) -> crate::error::Result<AliasPattern> {
        AliasPattern::new(&self.store.alias)
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate_for_env(&env_name)?;
        Ok(config)
    }

    /// Builds a config from defaults plus an inline TOML document.
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        let figment = Figment::from(Serialized::defaults(Settings::default())).merge(Toml::string(toml));
        let config = Self { figment };
        config.settings()?;
        Ok(config)
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        if settings.store.alias.is_empty() {
            return Err(Error::InvalidConfig("store.alias must not be empty".to_string()).into());
        }
        if settings.index.number_of_shards == 0 {
            return Err(Error::InvalidConfig("index.number_of_shards must be at least 1".to_string()).into());
        }
        Ok(settings)
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let settings = self.settings()?;
        if matches!(env, "prod" | "production") && settings.index.number_of_replicas == 0 {
            return Err(Error::InvalidConfig("production partitions need at least one replica".to_string()).into());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_provisioning_contract() {
        let settings = Config::from_toml_str("").unwrap().settings().unwrap();
        assert_eq!(settings.store.alias, "amooozeshyar");
        assert_eq!(settings.store.rotation, Rotation::Monthly);
        assert_eq!(settings.index.number_of_shards, 7);
        assert_eq!(settings.index.number_of_replicas, 1);
        assert_eq!(settings.search.default_limit, 10);
    }

    #[test]
    fn toml_overrides_nested_keys() {
        let config = Config::from_toml_str("[store]\nrotation = \"daily\"\nroot_dir = \"/tmp/segments\"\n").unwrap();
        let settings = config.settings().unwrap();
        assert_eq!(settings.store.rotation, Rotation::Daily);
        assert_eq!(settings.root_dir(), PathBuf::from("/tmp/segments"));
        assert_eq!(settings.store.alias, "amooozeshyar");
    }

    #[test]
    fn empty_alias_is_invalid() {
        assert!(Config::from_toml_str("[store]\nalias = \"\"\n").is_err());
    }
}
