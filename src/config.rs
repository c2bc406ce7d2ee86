//! Locale bootstrap configuration.
//!
//! `GateConfig` captures everything the startup sequence needs to know before
//! it can resolve a locale: the supported catalog, the default locale, where
//! translation resources are served from, and how fallback values are marked.
//! Values are deserialised from TOML and fall back to the bundled defaults
//! when omitted. Every loader validates the result, so a `GateConfig` obtained
//! through [`GateConfig::from_toml_str`] or [`GateConfig::load_from_path`]
//! always names a default locale that is part of its catalog.

use std::time::Duration;

use camino::Utf8Path;
use localegate_common::i18n::{
    BUILTIN_LOCALES, DEFAULT_LOCALE, DEFAULT_MARKER_PREFIX, DEFAULT_MARKER_SUFFIX, FallbackMarkers,
    StoreOptions, SupportedLocaleCatalog,
};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Host serving `/locales/<locale>.json` when no override is configured.
pub const DEFAULT_RESOURCE_BASE: &str = "http://localhost:4200";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`GateConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// `supported_locales` lists no usable locale.
    #[error("supported_locales must name at least one locale")]
    EmptyCatalog,

    /// The default locale is not part of the supported catalog.
    #[error("default locale `{locale}` is not listed in supported_locales")]
    DefaultNotSupported {
        /// The configured default locale.
        locale: String,
    },

    /// A fallback marker is empty, so marked values would be indistinguishable.
    #[error("fallback marker `{which}` must not be empty")]
    EmptyMarker {
        /// Either `prefix` or `suffix`.
        which: &'static str,
    },
}

/// Configuration for locale resolution and translation loading.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Locale used when nothing better matches; must be a catalog member.
    pub default_locale: String,
    /// Locale keys with translations available. Entries are lower-cased
    /// when the catalog is built.
    pub supported_locales: Vec<String>,
    /// Scheme and host prefixed to `/locales/<locale>.json`.
    pub resource_base: String,
    /// Whether fallback values may be wrapped in markers.
    pub mark_fallback_values: bool,
    /// Whether the deployment is production-like. Markers are only applied
    /// when this and [`Self::mark_fallback_values`] are both set.
    pub production_mode: bool,
    /// Global timeout for the translation fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Markers wrapped around fallback values.
    pub fallback_markers: MarkerConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_owned(),
            supported_locales: BUILTIN_LOCALES.iter().map(|&locale| locale.to_owned()).collect(),
            resource_base: DEFAULT_RESOURCE_BASE.to_owned(),
            mark_fallback_values: true,
            production_mode: false,
            fetch_timeout_secs: 30,
            fallback_markers: MarkerConfig::default(),
        }
    }
}

impl GateConfig {
    /// Parse and validate configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// the validation errors described on [`Self::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use localegate::GateConfig;
    ///
    /// let config = GateConfig::from_toml_str("production_mode = true\n")?;
    /// assert!(config.production_mode);
    /// assert_eq!(config.default_locale(), "en-us");
    /// # Ok::<(), localegate::ConfigError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus every
    /// error [`Self::from_toml_str`] can produce.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(target: "localegate::config", "loaded configuration from {path}");
        Ok(config)
    }

    /// Load configuration through an injected loader, then validate it.
    ///
    /// This exists so callers can source configuration from somewhere other
    /// than the file system (tests, embedded defaults) while keeping the same
    /// validation rules.
    ///
    /// # Errors
    ///
    /// Returns whatever the loader returns, or a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use localegate::GateConfig;
    ///
    /// let config = GateConfig::load_with(|| Ok(GateConfig::default()))?;
    /// assert_eq!(config.resource_base, "http://localhost:4200");
    /// # Ok::<(), localegate::ConfigError>(())
    /// ```
    pub fn load_with<F>(loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce() -> Result<Self, ConfigError>,
    {
        let config = loader()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the startup sequence relies on.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyCatalog`] when no locale is listed.
    /// - [`ConfigError::DefaultNotSupported`] when the default locale is not
    ///   in the catalog (compared lower-cased).
    /// - [`ConfigError::EmptyMarker`] when marking is enabled and a marker is
    ///   empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let catalog = self.catalog();
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        if !catalog.contains(&self.default_locale()) {
            return Err(ConfigError::DefaultNotSupported {
                locale: self.default_locale.clone(),
            });
        }

        if self.mark_fallback_values {
            self.fallback_markers.validate()?;
        }

        Ok(())
    }

    /// The default locale, lower-cased and trimmed.
    #[must_use]
    pub fn default_locale(&self) -> String {
        self.default_locale.trim().to_lowercase()
    }

    /// Build the supported-locale catalog.
    #[must_use]
    pub fn catalog(&self) -> SupportedLocaleCatalog {
        SupportedLocaleCatalog::new(&self.supported_locales)
    }

    /// Translation store options derived from the marking settings.
    #[must_use]
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::default()
            .with_mark_fallback_values(self.mark_fallback_values)
            .with_production_mode(self.production_mode)
            .with_markers(self.fallback_markers.to_markers())
    }

    /// Timeout applied to the translation fetch.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// `[fallback_markers]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    /// Text placed before a fallback value.
    pub prefix: String,
    /// Text placed after a fallback value.
    pub suffix: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_MARKER_PREFIX.to_owned(),
            suffix: DEFAULT_MARKER_SUFFIX.to_owned(),
        }
    }
}

impl MarkerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyMarker { which: "prefix" });
        }
        if self.suffix.is_empty() {
            return Err(ConfigError::EmptyMarker { which: "suffix" });
        }
        Ok(())
    }

    /// Convert into the markers used by the translation store.
    #[must_use]
    pub fn to_markers(&self) -> FallbackMarkers {
        FallbackMarkers::new(self.prefix.as_str(), self.suffix.as_str())
    }
}
