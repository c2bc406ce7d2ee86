//! CLI argument definitions for the `localegate` probe.
//!
//! The probe feeds browser-like signals from the command line into the startup
//! gate so locale negotiation can be exercised against a live translation
//! host. Argument parsing lives here to keep the binary focused on
//! orchestration.

use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;
use localegate::GateConfig;
use localegate_common::{BrowserSignals, LegacyLanguageProperty};

/// Resolve a client locale and load its translations.
#[derive(Parser, Debug, Default)]
#[command(name = "localegate")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve from the browser language list:\n",
    "    $ localegate --language pt-BR --language en\n\n",
    "  Force a locale through the query string and look up a key:\n",
    "    $ localegate --query '?locale=fr' --lookup nav.home\n\n",
    "  Use a legacy navigator property:\n",
    "    $ localegate --legacy userLanguage=de-CH\n",
))]
pub struct Cli {
    /// Query string of the page URL, for example `?locale=fr`.
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Hash fragment of the page URL, for example `#/home?locale=fr`.
    #[arg(long, value_name = "HASH")]
    pub hash: Option<String>,

    /// Preferred browser language (repeatable, most preferred first).
    #[arg(short, long = "language", value_name = "TAG")]
    pub languages: Vec<String>,

    /// Legacy navigator property as PROPERTY=VALUE (repeatable).
    #[arg(long = "legacy", value_name = "PROPERTY=VALUE")]
    pub legacy: Vec<LegacyOverride>,

    /// Configuration file [default: built-in settings].
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Override the host serving `/locales/<locale>.json`.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Treat the deployment as production.
    #[arg(long)]
    pub production: bool,

    /// Never wrap fallback values in markers.
    #[arg(long)]
    pub no_mark_fallback: bool,

    /// Translation key to look up after startup (repeatable).
    #[arg(long = "lookup", value_name = "KEY")]
    pub lookups: Vec<String>,

    /// Increase log verbosity (repeatable: -v, -vv).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Environment signals described by the flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use localegate_bootstrap::cli::Cli;
    /// use localegate_common::detect_browser_locale;
    ///
    /// let cli = Cli::parse_from(["localegate", "--language", "pt-BR"]);
    /// let signal = detect_browser_locale(&cli.signals());
    ///
    /// assert_eq!(signal.as_ref().map(|s| s.value()), Some("pt-BR"));
    /// ```
    #[must_use]
    pub fn signals(&self) -> BrowserSignals {
        let mut signals = BrowserSignals::default();
        if let Some(query) = &self.query {
            signals = signals.with_query(query.as_str());
        }
        if let Some(hash) = &self.hash {
            signals = signals.with_hash(hash.as_str());
        }
        if !self.languages.is_empty() {
            signals = signals.with_languages(self.languages.iter().map(String::as_str));
        }
        for LegacyOverride { property, value } in &self.legacy {
            signals = signals.with_legacy(*property, value.as_str());
        }
        signals
    }

    /// Apply flag overrides on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut GateConfig) {
        if let Some(base_url) = &self.base_url {
            config.resource_base.clone_from(base_url);
        }
        if self.production {
            config.production_mode = true;
        }
        if self.no_mark_fallback {
            config.mark_fallback_values = false;
        }
    }

    /// Log level filter implied by `-v` flags.
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// A `--legacy PROPERTY=VALUE` argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegacyOverride {
    /// Which legacy navigator property is set.
    pub property: LegacyLanguageProperty,
    /// The reported value.
    pub value: String,
}

impl FromStr for LegacyOverride {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (property, value) = input
            .split_once('=')
            .ok_or_else(|| format!("expected PROPERTY=VALUE, got `{input}`"))?;
        Ok(Self {
            property: property.trim().parse()?,
            value: value.trim().to_owned(),
        })
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
