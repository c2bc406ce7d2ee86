//! Shared localisation primitives for localegate: locale catalogs, browser
//! signal detection, locale resolution, and the translation store consulted by
//! the rest of the application once startup has finished.

pub mod i18n;

pub use i18n::{
    BrowserSignals, DEFAULT_LOCALE, DetectedSignal, EnvironmentSignals, FallbackMarkers,
    LegacyLanguageProperty, LocalePreferenceChain, LocaleSelection, LookupHit, MatchKind,
    PayloadError, SignalSource, StoreOptions, SupportedLocaleCatalog, TranslationPayload,
    TranslationStore, detect_browser_locale, resolve_from_environment, resolve_locale,
    translation_key,
};
