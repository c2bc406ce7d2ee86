//! Conditional translation loading.
//!
//! The loader always leaves the store in a usable state: the preference chain
//! is reset to the default locale before anything else happens, and a failed
//! fetch is logged and swallowed so the startup sequence can continue with
//! default-locale translations only.

use std::fmt;

use localegate_common::{LocalePreferenceChain, TranslationStore};
use log::{debug, warn};

use crate::fetch::{TranslationFetchError, TranslationFetcher, resource_path};

const LOG_TARGET: &str = "i18n::loader";

/// What the loader did for a resolved locale.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The resolved locale is the default; nothing was fetched.
    DefaultLocale,
    /// Translations were fetched, merged, and the locale is now preferred.
    Loaded {
        /// Locale whose translations were merged.
        locale: String,
        /// Number of translations merged.
        entries: usize,
    },
    /// The fetch failed; the default locale remains active.
    FellBack {
        /// Locale that could not be loaded.
        locale: String,
        /// Why the fetch failed.
        error: TranslationFetchError,
    },
}

impl LoadOutcome {
    /// Whether a fetch was attempted.
    #[must_use]
    pub const fn fetched(&self) -> bool {
        !matches!(self, Self::DefaultLocale)
    }

    /// Whether the resolved locale's translations are active.
    #[must_use]
    pub const fn loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// The swallowed fetch error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&TranslationFetchError> {
        match self {
            Self::FellBack { error, .. } => Some(error),
            Self::DefaultLocale | Self::Loaded { .. } => None,
        }
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultLocale => formatter.write_str("default locale, nothing fetched"),
            Self::Loaded { locale, entries } => {
                write!(formatter, "loaded {entries} translations for `{locale}`")
            }
            Self::FellBack { locale, error } => {
                write!(formatter, "kept default locale; `{locale}` failed: {error}")
            }
        }
    }
}

/// Loads the translations for a resolved locale when it is not the default.
///
/// # Examples
///
/// ```
/// use localegate_bootstrap::fetch::{TranslationFetchError, TranslationFetcher};
/// use localegate_bootstrap::loader::TranslationLoader;
/// use localegate_common::{StoreOptions, TranslationPayload, TranslationStore};
///
/// struct Offline;
///
/// impl TranslationFetcher for Offline {
///     fn fetch(&self, locale: &str) -> Result<TranslationPayload, TranslationFetchError> {
///         Err(TranslationFetchError::NotFound { url: format!("/locales/{locale}.json") })
///     }
/// }
///
/// let loader = TranslationLoader::new(Offline, "en-us");
/// let mut store = TranslationStore::new(StoreOptions::default());
/// let outcome = loader.load_if_needed("fr", &mut store);
///
/// assert!(outcome.error().is_some());
/// assert_eq!(store.locale_chain().as_slice(), ["en-us"]);
/// ```
pub struct TranslationLoader<F> {
    fetcher: F,
    default_locale: String,
}

impl<F> TranslationLoader<F>
where
    F: TranslationFetcher,
{
    /// Create a loader that falls back to `default_locale`.
    #[must_use]
    pub fn new(fetcher: F, default_locale: &str) -> Self {
        Self {
            fetcher,
            default_locale: default_locale.to_owned(),
        }
    }

    /// The locale kept active when nothing else can be loaded.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Prepare `store` for `resolved_locale`.
    ///
    /// The chain is first set to `[default]`. When `resolved_locale` differs
    /// from the default, one fetch is issued; on success its payload is
    /// merged under `resolved_locale` and the chain becomes
    /// `[resolved, default]`. Failures leave the store untouched beyond the
    /// initial chain reset. The call returns only after the fetch settles.
    pub fn load_if_needed(&self, resolved_locale: &str, store: &mut TranslationStore) -> LoadOutcome {
        store.set_locale(LocalePreferenceChain::default_only(&self.default_locale));

        if resolved_locale == self.default_locale {
            debug!(
                target: LOG_TARGET,
                "`{resolved_locale}` is the default locale; skipping translation fetch",
            );
            return LoadOutcome::DefaultLocale;
        }

        debug!(
            target: LOG_TARGET,
            "fetching {} for `{resolved_locale}`",
            resource_path(resolved_locale),
        );

        match self.fetcher.fetch(resolved_locale) {
            Ok(payload) => {
                let entries = payload.len();
                store.add_translations(resolved_locale, payload);
                store.set_locale(LocalePreferenceChain::with_fallback(
                    resolved_locale,
                    &self.default_locale,
                ));
                debug!(
                    target: LOG_TARGET,
                    "merged {entries} translations; active chain {}",
                    store.locale_chain(),
                );
                LoadOutcome::Loaded {
                    locale: resolved_locale.to_owned(),
                    entries,
                }
            }
            Err(error) => {
                warn!(
                    target: LOG_TARGET,
                    "continuing with `{}`: {error}",
                    self.default_locale,
                );
                LoadOutcome::FellBack {
                    locale: resolved_locale.to_owned(),
                    error,
                }
            }
        }
    }
}
