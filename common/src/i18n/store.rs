//! Translation store consulted by the rest of the application.
//!
//! Payloads are merged per locale namespace and looked up through the active
//! [`LocalePreferenceChain`]. Fallback marking is fixed at construction
//! through [`StoreOptions`] and applied by [`mark_fallback`] on every lookup.

use std::borrow::Cow;
use std::collections::HashMap;

use super::{FallbackMarkers, LocalePreferenceChain, TranslationPayload, mark_fallback};

/// Construction-time options for a [`TranslationStore`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreOptions {
    mark_fallback_values: bool,
    production_mode: bool,
    markers: FallbackMarkers,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            mark_fallback_values: true,
            production_mode: false,
            markers: FallbackMarkers::default(),
        }
    }
}

impl StoreOptions {
    /// Enable or disable fallback marking.
    #[must_use]
    pub const fn with_mark_fallback_values(mut self, enabled: bool) -> Self {
        self.mark_fallback_values = enabled;
        self
    }

    /// Declare whether the deployment runs in production mode.
    #[must_use]
    pub const fn with_production_mode(mut self, enabled: bool) -> Self {
        self.production_mode = enabled;
        self
    }

    /// Replace the markers wrapped around fallback values.
    #[must_use]
    pub fn with_markers(mut self, markers: FallbackMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Whether fallback marking was requested.
    #[must_use]
    pub const fn mark_fallback_values(&self) -> bool {
        self.mark_fallback_values
    }

    /// Whether the store serves a production deployment.
    #[must_use]
    pub const fn production_mode(&self) -> bool {
        self.production_mode
    }

    /// Whether fallback values are wrapped at lookup time.
    #[must_use]
    pub const fn marks_fallback_values(&self) -> bool {
        self.mark_fallback_values && self.production_mode
    }

    /// Markers used when wrapping.
    #[must_use]
    pub const fn markers(&self) -> &FallbackMarkers {
        &self.markers
    }
}

/// Raw lookup result before marking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LookupHit<'a> {
    /// Translated text as stored.
    pub value: &'a str,
    /// Locale namespace that supplied the value.
    pub locale: &'a str,
    /// Whether a less-preferred locale supplied the value.
    pub is_fallback: bool,
}

/// Per-locale translations plus the active preference chain.
///
/// ```
/// use localegate_common::{LocalePreferenceChain, StoreOptions, TranslationPayload, TranslationStore};
///
/// let mut store = TranslationStore::new(StoreOptions::default().with_production_mode(true));
/// store.add_translations("en-us", [("nav.home", "Home"), ("nav.search", "Search")].into_iter().collect());
/// store.add_translations("fr", [("nav.home", "Accueil")].into_iter().collect::<TranslationPayload>());
/// store.set_locale(LocalePreferenceChain::with_fallback("fr", "en-us"));
///
/// assert_eq!(store.translate("nav.home").as_deref(), Some("Accueil"));
/// assert_eq!(store.translate("nav.search").as_deref(), Some("[[Search]]"));
/// assert_eq!(store.translate("nav.missing"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TranslationStore {
    namespaces: HashMap<String, TranslationPayload>,
    chain: LocalePreferenceChain,
    options: StoreOptions,
}

impl TranslationStore {
    /// Create an empty store with an empty preference chain.
    #[must_use]
    pub fn new(options: StoreOptions) -> Self {
        Self {
            namespaces: HashMap::new(),
            chain: LocalePreferenceChain::default(),
            options,
        }
    }

    /// Merge `payload` into the namespace for `locale`; incoming keys win.
    pub fn add_translations(&mut self, locale: &str, payload: TranslationPayload) {
        self.namespaces
            .entry(locale.to_owned())
            .or_default()
            .merge(payload);
    }

    /// Replace the active preference chain.
    pub fn set_locale(&mut self, chain: LocalePreferenceChain) {
        self.chain = chain;
    }

    /// The active preference chain.
    #[must_use]
    pub const fn locale_chain(&self) -> &LocalePreferenceChain {
        &self.chain
    }

    /// Options fixed at construction.
    #[must_use]
    pub const fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Whether any translations were merged for `locale`.
    #[must_use]
    pub fn has_translations(&self, locale: &str) -> bool {
        self.namespaces.contains_key(locale)
    }

    /// Translations merged for `locale`.
    #[must_use]
    pub fn translations(&self, locale: &str) -> Option<&TranslationPayload> {
        self.namespaces.get(locale)
    }

    /// Find `key` by walking the chain, without marking.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<LookupHit<'_>> {
        self.chain.iter().find_map(|locale| {
            let value = self.namespaces.get(locale)?.get(key)?;
            Some(LookupHit {
                value,
                locale,
                is_fallback: !self.chain.is_most_preferred(locale),
            })
        })
    }

    /// Find `key` and apply fallback marking.
    #[must_use]
    pub fn translate(&self, key: &str) -> Option<Cow<'_, str>> {
        self.lookup(key)
            .map(|hit| mark_fallback(hit.value, hit.locale, &self.chain, &self.options))
    }

    /// Whether `key` resolves through any locale in the chain.
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}
