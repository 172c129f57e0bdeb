//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`AKIRO_*`, `__` as section separator)
//! 3. Config file (`--config`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for spec expansion.
    pub defaults: Defaults,
    /// Conan invocation settings.
    pub conan: ConanConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Build type when `-b` is not given.
    pub build_type: String,
    /// Profile when `-p` is not given.
    pub profile: String,
    /// Specification file when none is given on the command line.
    pub spec_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConanConfig {
    /// Binary to invoke; a bare name is resolved via PATH.
    pub program: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                build_type: akiro_core::domain::DEFAULT_BUILD_TYPE.into(),
                profile: akiro_core::domain::DEFAULT_PROFILE.into(),
                spec_file: PathBuf::from("subotai.yaml"),
            },
            conan: ConanConfig {
                program: "conan".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist. Without it, the default location is merged only if
    /// present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("defaults.build_type", akiro_core::domain::DEFAULT_BUILD_TYPE)?
            .set_default("defaults.profile", akiro_core::domain::DEFAULT_PROFILE)?
            .set_default("defaults.spec_file", "subotai.yaml")?
            .set_default("conan.program", "conan")?
            .set_default("output.no_color", false)?
            .set_default("output.format", "human")?;

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone()).required(true)),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        let config = builder
            .add_source(config::Environment::with_prefix("AKIRO").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.akiro.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "akiro", "akiro")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".akiro.toml"))
    }
}
