//! Tool configuration parsing and validation
use std::path::PathBuf;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format as _, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::profile::ProfileKind;

/// Paths and analysis settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, bon::Builder)]
#[skip_serializing_none]
#[non_exhaustive]
pub struct BaseConfig {
    /// One or more paths to files and folders to analyze
    #[builder(default)]
    pub paths: Vec<PathBuf>,

    /// Paths to files and folders to exclude
    #[builder(default)]
    pub exclude: Vec<PathBuf>,

    /// The analysis profile applied to the files
    #[builder(default)]
    pub profile: ProfileKind,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, bon::Builder)]
#[skip_serializing_none]
#[non_exhaustive]
pub struct OutputConfig {
    /// Path to a file where the output should be written (stderr/stdout if
    /// not present)
    pub out: Option<PathBuf>,

    /// Output JSON instead of text
    #[builder(default)]
    pub json: bool,

    /// Compact output (minified JSON or one-line-per-nit text)
    #[builder(default)]
    pub compact: bool,

    /// Sort the results by file path
    #[builder(default)]
    pub sort: bool,
}

/// The parsed and validated config for the tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, bon::Builder)]
#[skip_serializing_none]
#[non_exhaustive]
pub struct Config {
    #[builder(default)]
    pub trojanlint: BaseConfig,

    #[builder(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn from(provider: impl Provider) -> crate::error::Result<Config> {
        Ok(Figment::from(provider).extract()?)
    }

    /// The figment for this config: defaults, then the `.trojanlint.toml`
    /// file, then `TROJANLINT_`-prefixed environment variables
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Config::default())
            .admerge(Toml::file(".trojanlint.toml"))
            .admerge(Env::prefixed("TROJANLINT_"))
    }
}

impl Provider for Config {
    fn metadata(&self) -> figment::Metadata {
        Metadata::named("TrojanLint Config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        figment::providers::Serialized::defaults(Config::default()).data()
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_default_config_roundtrips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.output.json, parsed.output.json);
        assert_eq!(config.trojanlint.paths, parsed.trojanlint.paths);
        assert_eq!(config.trojanlint.profile, parsed.trojanlint.profile);
    }

    #[test]
    fn test_profile_kind_override() {
        let figment = Figment::from(Config::default())
            .admerge(Toml::string("[trojanlint]\nprofile = \"testing\"\n"));
        let config: Config = figment.extract().unwrap();
        assert_eq!(config.trojanlint.profile, ProfileKind::Testing);
        assert_eq!(Config::default().trojanlint.profile, ProfileKind::Python);
    }

    #[test]
    fn test_builder_matches_default() {
        let built = Config::builder().build();
        assert_eq!(built.output.sort, Config::default().output.sort);
        assert!(built.trojanlint.exclude.is_empty());
    }
}
