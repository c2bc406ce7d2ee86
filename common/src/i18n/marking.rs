//! Sentinel marking for translations served by a fallback locale.

use std::borrow::Cow;

use super::{LocalePreferenceChain, StoreOptions};

/// Prefix wrapped around fallback-sourced values unless configured otherwise.
pub const DEFAULT_MARKER_PREFIX: &str = "[[";
/// Suffix wrapped around fallback-sourced values unless configured otherwise.
pub const DEFAULT_MARKER_SUFFIX: &str = "]]";

/// Prefix and suffix wrapped around fallback values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FallbackMarkers {
    prefix: String,
    suffix: String,
}

impl FallbackMarkers {
    /// Construct markers from an explicit prefix and suffix.
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The marker placed before the value.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The marker placed after the value.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wrap `value` in the markers.
    #[must_use]
    pub fn wrap(&self, value: &str) -> String {
        format!("{}{value}{}", self.prefix, self.suffix)
    }
}

impl Default for FallbackMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_PREFIX, DEFAULT_MARKER_SUFFIX)
    }
}

/// Decorate a looked-up value according to the store options.
///
/// The value is wrapped only when `source_locale` is not the chain's most
/// preferred locale, and both `mark_fallback_values` and `production_mode`
/// are enabled. Every other combination returns the value untouched.
///
/// ```
/// use localegate_common::i18n::{LocalePreferenceChain, StoreOptions, mark_fallback};
///
/// let chain = LocalePreferenceChain::with_fallback("fr", "en-us");
/// let production = StoreOptions::default().with_production_mode(true);
/// assert_eq!(mark_fallback("Search", "en-us", &chain, &production), "[[Search]]");
/// assert_eq!(mark_fallback("Recherche", "fr", &chain, &production), "Recherche");
///
/// let development = StoreOptions::default();
/// assert_eq!(mark_fallback("Search", "en-us", &chain, &development), "Search");
/// ```
#[must_use]
pub fn mark_fallback<'a>(
    value: &'a str,
    source_locale: &str,
    chain: &LocalePreferenceChain,
    options: &StoreOptions,
) -> Cow<'a, str> {
    let is_fallback = !chain.is_most_preferred(source_locale);
    if is_fallback && options.marks_fallback_values() {
        Cow::Owned(options.markers().wrap(value))
    } else {
        Cow::Borrowed(value)
    }
}
