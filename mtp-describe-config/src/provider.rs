//! Annotation loading using Figment

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::error::{ConfigError, ConfigResult};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use mtp_describe::DescribeOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Environment variable prefix for annotation overrides
pub const ENV_PREFIX: &str = "MTP_DESCRIBE_";

/// Version override, read verbatim so `2.0` stays a string
pub const VERSION_ENV_VAR: &str = "MTP_DESCRIBE_VERSION";

/// Loads [`DescribeOptions`] from layered sources
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Defaults (programmatic options, or `DescribeOptions::default()`)
/// 2. Discovered annotation files, global then project
/// 3. An explicit annotation file
/// 4. Environment variables prefixed `MTP_DESCRIBE_`; `__` separates nested keys
///
/// File keys use the same spelling the types serialize with (`arg_types`,
/// `arg_descriptions`, `contentType`), so every layer deep-merges on the same
/// key. Other spellings are a [`ConfigError::ParseError`].
///
/// Nothing is cached; every [`load`](Self::load) reads the sources fresh.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    defaults: DescribeOptions,
    discovery: Option<FileDiscovery>,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self {
            defaults: DescribeOptions::default(),
            discovery: Some(FileDiscovery::new()),
            explicit_file: None,
        }
    }

    /// Use programmatic options as the lowest layer
    pub fn with_defaults(mut self, defaults: DescribeOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the file discovery, e.g. to search fixed directories
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = Some(discovery);
        self
    }

    /// Skip file discovery entirely
    pub fn without_discovery(mut self) -> Self {
        self.discovery = None;
        self
    }

    /// Merge one specific file above the discovered ones
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Load the merged options
    ///
    /// # Errors
    ///
    /// * [`ConfigError::FileNotFound`] if the explicit file does not exist
    /// * [`ConfigError::UnsupportedFormat`] if its extension is unknown
    /// * [`ConfigError::ParseError`] if any source fails to parse or the merged
    ///   data does not have the annotation shape
    pub fn load(&self) -> ConfigResult<DescribeOptions> {
        let options: DescribeOptions = self.build_figment()?.extract()?;
        debug!(
            "Loaded annotations for {} command paths",
            options.commands.len()
        );
        Ok(options)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(&self.defaults));

        if let Some(discovery) = &self.discovery {
            for file in discovery.discover_all() {
                figment = figment.merge(Self::file_provider(&file));
            }
        }

        if let Some(path) = &self.explicit_file {
            figment = figment.merge(Self::explicit_provider(path)?);
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["version"]).split("__"));
        if let Ok(version) = std::env::var(VERSION_ENV_VAR) {
            trace!("Version override from {VERSION_ENV_VAR}: {version}");
            figment = figment.merge(Serialized::default("version", version));
        }

        Ok(figment)
    }

    fn file_provider(file: &ConfigFile) -> Figment {
        trace!("Merging annotation file: {}", file.path.display());
        Self::format_provider(&file.path, file.format)
    }

    fn explicit_provider(path: &Path) -> ConfigResult<Figment> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            format: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })?;

        trace!("Merging explicit annotation file: {}", path.display());
        Ok(Self::format_provider(path, format))
    }

    fn format_provider(path: &Path, format: ConfigFormat) -> Figment {
        match format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}
