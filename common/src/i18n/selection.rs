use std::fmt;

use log::debug;

use super::SupportedLocaleCatalog;
use super::signals::{DetectedSignal, EnvironmentSignals, detect_browser_locale};

/// How the resolved locale relates to the detected signal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchKind {
    /// The lower-cased signal is itself a catalog member.
    Exact,
    /// The signal's language root (the part before the first `-`) is a member.
    LanguageRoot,
    /// Nothing matched; the default locale applies.
    Default,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => formatter.write_str("exact match"),
            Self::LanguageRoot => formatter.write_str("language root match"),
            Self::Default => formatter.write_str("default locale"),
        }
    }
}

/// Outcome of locale resolution including the matched key and its provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleSelection {
    locale: String,
    match_kind: MatchKind,
    signal: Option<DetectedSignal>,
}

impl LocaleSelection {
    const fn new(locale: String, match_kind: MatchKind, signal: Option<DetectedSignal>) -> Self {
        Self {
            locale,
            match_kind,
            signal,
        }
    }

    /// Returns the resolved locale key.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns how the locale was matched.
    #[must_use]
    pub const fn match_kind(&self) -> MatchKind {
        self.match_kind
    }

    /// Returns the detected signal, if the environment produced one.
    #[must_use]
    pub const fn signal(&self) -> Option<&DetectedSignal> {
        self.signal.as_ref()
    }

    /// Returns the raw locale the environment requested, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.signal.as_ref().map(DetectedSignal::value)
    }

    /// Whether resolution fell through to the default locale.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.match_kind == MatchKind::Default
    }

    /// Consumes the selection, yielding the locale key.
    #[must_use]
    pub fn into_locale(self) -> String {
        self.locale
    }

    /// Emit a debug log summarising the resolved locale.
    pub fn log_outcome(&self, target: &str) {
        match &self.signal {
            Some(signal) => debug!(
                target: target,
                "resolved `{}` from {} to `{}` ({})",
                signal.value(),
                signal.source(),
                self.locale,
                self.match_kind,
            ),
            None => debug!(
                target: target,
                "no locale signal detected; using `{}`",
                self.locale,
            ),
        }
    }
}

fn match_signal(raw: &str, catalog: &SupportedLocaleCatalog) -> Option<(String, MatchKind)> {
    let lowered = raw.to_lowercase();
    if catalog.contains(&lowered) {
        return Some((lowered, MatchKind::Exact));
    }

    let mut parts = lowered.split('-');
    let root = parts.next()?;
    if parts.next().is_some() && catalog.contains(root) {
        return Some((root.to_owned(), MatchKind::LanguageRoot));
    }

    None
}

/// Map a raw browser signal onto a catalog key.
///
/// The signal is lower-cased (absent signals count as empty), then matched
/// exactly, then by language root, and finally replaced with
/// `default_locale`.
///
/// ```
/// use localegate_common::{SupportedLocaleCatalog, translation_key};
///
/// let catalog = SupportedLocaleCatalog::new(["en-us", "de", "pt-br"]);
/// assert_eq!(translation_key(Some("pt-BR"), &catalog, "en-us"), "pt-br");
/// assert_eq!(translation_key(Some("de-CH"), &catalog, "en-us"), "de");
/// assert_eq!(translation_key(Some("xx-yy"), &catalog, "en-us"), "en-us");
/// assert_eq!(translation_key(None, &catalog, "en-us"), "en-us");
/// ```
#[must_use]
pub fn translation_key(
    signal: Option<&str>,
    catalog: &SupportedLocaleCatalog,
    default_locale: &str,
) -> String {
    match_signal(signal.unwrap_or_default(), catalog)
        .map_or_else(|| default_locale.to_owned(), |(locale, _)| locale)
}

/// Resolve an already-detected signal against `catalog`.
#[must_use]
pub fn resolve_locale(
    signal: Option<DetectedSignal>,
    catalog: &SupportedLocaleCatalog,
    default_locale: &str,
) -> LocaleSelection {
    let raw = signal.as_ref().map_or("", DetectedSignal::value);
    match match_signal(raw, catalog) {
        Some((locale, kind)) => LocaleSelection::new(locale, kind, signal),
        None => LocaleSelection::new(default_locale.to_owned(), MatchKind::Default, signal),
    }
}

/// Detect the browser locale from `signals` and resolve it against `catalog`.
///
/// The resolver considers candidates in the following order:
///
/// 1. The `locale=` query (or legacy hash) parameter.
/// 2. The first preferred browser language.
/// 3. The legacy single-value language properties.
/// 4. `default_locale` when no candidate matches the catalog.
#[must_use]
pub fn resolve_from_environment<S>(
    signals: &S,
    catalog: &SupportedLocaleCatalog,
    default_locale: &str,
) -> LocaleSelection
where
    S: EnvironmentSignals + ?Sized,
{
    let selection = resolve_locale(detect_browser_locale(signals), catalog, default_locale);
    selection.log_outcome("i18n::selection");
    selection
}
