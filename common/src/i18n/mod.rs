//! Locale negotiation and translation storage for localegate.
//!
//! Resolution is a pure function of explicit inputs: the environment signals
//! are read through [`EnvironmentSignals`], matched against a
//! [`SupportedLocaleCatalog`], and collapsed into a [`LocaleSelection`] whose
//! locale is always a catalog member or the default.
//!
//! Fetched translations land in a [`TranslationStore`], which consults a
//! [`LocalePreferenceChain`] for every lookup and optionally marks values that
//! were served by a less-preferred locale.
//!
//! See [`resolve_from_environment`] for the full detection and matching flow.

/// The locale every deployment ships and falls back to.
pub const DEFAULT_LOCALE: &str = "en-us";

mod catalog;
mod chain;
mod marking;
mod payload;
mod selection;
mod signals;
mod store;

pub use catalog::{BUILTIN_LOCALES, SupportedLocaleCatalog};
pub use chain::LocalePreferenceChain;
pub use marking::{DEFAULT_MARKER_PREFIX, DEFAULT_MARKER_SUFFIX, FallbackMarkers, mark_fallback};
pub use payload::{PayloadError, TranslationPayload};
pub use selection::{LocaleSelection, MatchKind, resolve_from_environment, resolve_locale, translation_key};
pub use signals::{
    BrowserSignals, DetectedSignal, EnvironmentSignals, LegacyLanguageProperty, SignalSource,
    detect_browser_locale, locale_from_query,
};
pub use store::{LookupHit, StoreOptions, TranslationStore};
