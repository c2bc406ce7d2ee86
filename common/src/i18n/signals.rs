//! Browser locale signal detection.
//!
//! The host environment is abstracted behind [`EnvironmentSignals`] so that
//! detection stays a pure function of explicit inputs. Signals are checked in
//! strict priority order and the first usable one wins:
//!
//! 1. a `locale=` parameter in the query string, or in the hash fragment when
//!    the query string is empty (legacy `#/` routing);
//! 2. the first entry of the preferred-language list;
//! 3. the first non-empty legacy single-value language property.

use std::fmt;
use std::str::FromStr;

const LOCALE_PARAMETER: &str = "locale=";
const HASH_ROUTE_PREFIX: &str = "#/";

/// Legacy single-value language properties, in probing order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LegacyLanguageProperty {
    /// `navigator.language`.
    Language,
    /// `navigator.browserLanguage`.
    BrowserLanguage,
    /// `navigator.systemLanguage`.
    SystemLanguage,
    /// `navigator.userLanguage`.
    UserLanguage,
}

impl LegacyLanguageProperty {
    /// Every property in the order detection probes them.
    pub const PROBE_ORDER: [Self; 4] = [
        Self::Language,
        Self::BrowserLanguage,
        Self::SystemLanguage,
        Self::UserLanguage,
    ];

    /// Property name as exposed by the host.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::BrowserLanguage => "browserLanguage",
            Self::SystemLanguage => "systemLanguage",
            Self::UserLanguage => "userLanguage",
        }
    }
}

impl fmt::Display for LegacyLanguageProperty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for LegacyLanguageProperty {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::PROBE_ORDER
            .into_iter()
            .find(|property| property.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| format!("unknown language property '{input}'"))
    }
}

/// Capability exposing the locale-bearing parts of the host environment.
pub trait EnvironmentSignals {
    /// URL query string including its leading `?`, if any.
    fn query_string(&self) -> Option<&str>;

    /// URL hash fragment including its leading `#`, if any.
    fn hash_fragment(&self) -> Option<&str>;

    /// Ordered preferred-language list; `None` when the host has no such list.
    fn preferred_languages(&self) -> Option<&[String]>;

    /// Value of a legacy single-value language property.
    fn legacy_language(&self, property: LegacyLanguageProperty) -> Option<&str>;
}

/// Where a detected locale signal came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignalSource {
    /// `locale=` in the URL query string.
    QueryString,
    /// `locale=` in the hash fragment (legacy hash routing).
    HashFragment,
    /// First entry of the preferred-language list.
    PreferredLanguages,
    /// A legacy single-value language property.
    LegacyProperty(LegacyLanguageProperty),
}

impl fmt::Display for SignalSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryString => formatter.write_str("query string"),
            Self::HashFragment => formatter.write_str("hash fragment"),
            Self::PreferredLanguages => formatter.write_str("preferred languages"),
            Self::LegacyProperty(property) => write!(formatter, "navigator.{property}"),
        }
    }
}

/// Raw locale string plus the signal that produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DetectedSignal {
    value: String,
    source: SignalSource,
}

impl DetectedSignal {
    /// Pair a raw locale value with its source.
    #[must_use]
    pub fn new(value: impl Into<String>, source: SignalSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    /// The raw value, exactly as the environment reported it.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Which signal produced the value.
    #[must_use]
    pub const fn source(&self) -> SignalSource {
        self.source
    }
}

/// In-memory [`EnvironmentSignals`] for tests and command-line probes.
///
/// ```
/// use localegate_common::{BrowserSignals, SignalSource, detect_browser_locale};
///
/// let signals = BrowserSignals::default()
///     .with_query("?page=2&locale=fr")
///     .with_languages(["de-CH"]);
/// let detected = detect_browser_locale(&signals).expect("query parameter wins");
/// assert_eq!(detected.value(), "fr");
/// assert_eq!(detected.source(), SignalSource::QueryString);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BrowserSignals {
    query: Option<String>,
    hash: Option<String>,
    languages: Option<Vec<String>>,
    legacy: Vec<(LegacyLanguageProperty, String)>,
}

impl BrowserSignals {
    /// Set the query string (`?a=b&locale=fr`).
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the hash fragment (`#/route?locale=fr`).
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Set the preferred-language list.
    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    /// Set a legacy language property, replacing any earlier value.
    #[must_use]
    pub fn with_legacy(mut self, property: LegacyLanguageProperty, value: impl Into<String>) -> Self {
        self.legacy.retain(|(existing, _)| *existing != property);
        self.legacy.push((property, value.into()));
        self
    }
}

impl EnvironmentSignals for BrowserSignals {
    fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn hash_fragment(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    fn preferred_languages(&self) -> Option<&[String]> {
        self.languages.as_deref()
    }

    fn legacy_language(&self, property: LegacyLanguageProperty) -> Option<&str> {
        self.legacy
            .iter()
            .find(|(candidate, _)| *candidate == property)
            .map(|(_, value)| value.as_str())
    }
}

/// Extract the `locale=` value from a query-style string.
///
/// A single leading `?` is ignored; the remainder is split on `&` and the
/// first entry starting with `locale=` wins. The value is returned verbatim,
/// so `locale=` alone yields an empty string.
///
/// ```
/// use localegate_common::i18n::locale_from_query;
///
/// assert_eq!(locale_from_query("?locale=pt-BR&x=1"), Some("pt-BR"));
/// assert_eq!(locale_from_query("?xlocale=fr"), None);
/// ```
#[must_use]
pub fn locale_from_query(search: &str) -> Option<&str> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .find_map(|entry| entry.strip_prefix(LOCALE_PARAMETER))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|candidate| !candidate.is_empty())
}

fn detect_from_url<S>(signals: &S) -> Option<DetectedSignal>
where
    S: EnvironmentSignals + ?Sized,
{
    let (search, source) = match non_empty(signals.query_string()) {
        Some(query) => (query, SignalSource::QueryString),
        None => {
            let hash = non_empty(signals.hash_fragment())?;
            let routed = hash.strip_prefix(HASH_ROUTE_PREFIX).unwrap_or(hash);
            (routed, SignalSource::HashFragment)
        }
    };

    locale_from_query(search).map(|value| DetectedSignal::new(value, source))
}

fn detect_from_languages<S>(signals: &S) -> Option<DetectedSignal>
where
    S: EnvironmentSignals + ?Sized,
{
    let first = signals.preferred_languages()?.first()?;
    non_empty(Some(first.as_str()))
        .map(|value| DetectedSignal::new(value, SignalSource::PreferredLanguages))
}

fn detect_from_legacy<S>(signals: &S) -> Option<DetectedSignal>
where
    S: EnvironmentSignals + ?Sized,
{
    LegacyLanguageProperty::PROBE_ORDER
        .into_iter()
        .find_map(|property| {
            non_empty(signals.legacy_language(property))
                .map(|value| DetectedSignal::new(value, SignalSource::LegacyProperty(property)))
        })
}

/// Detect the raw locale the host environment is asking for.
///
/// Returns `None` when no signal produced a usable value. An explicit
/// `locale=` parameter is returned even when its value is empty; it still
/// outranks every browser-reported language.
#[must_use]
pub fn detect_browser_locale<S>(signals: &S) -> Option<DetectedSignal>
where
    S: EnvironmentSignals + ?Sized,
{
    detect_from_url(signals)
        .or_else(|| detect_from_languages(signals))
        .or_else(|| detect_from_legacy(signals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("?locale=fr", Some("fr"))]
    #[case("locale=fr", Some("fr"))]
    #[case("?page=1&locale=zh-TW&sort=asc", Some("zh-TW"))]
    #[case("?locale=fr&locale=de", Some("fr"))]
    #[case("?locale=", Some(""))]
    #[case("?mylocale=fr", None)]
    #[case("?page=1", None)]
    #[case("", None)]
    fn parses_query_parameter(#[case] search: &str, #[case] expected: Option<&str>) {
        assert_eq!(locale_from_query(search), expected);
    }

    #[rstest]
    #[case("#/locale=fr", Some("fr"))]
    #[case("#/?locale=fr", Some("fr"))]
    #[case("#/datasets?q=x&locale=ko", Some("ko"))]
    #[case("#/datasets", None)]
    #[case("#locale=fr", None)]
    #[case("#x&locale=fr", Some("fr"))]
    fn reads_hash_fragment_when_query_is_empty(#[case] hash: &str, #[case] expected: Option<&str>) {
        let signals = BrowserSignals::default().with_query("").with_hash(hash);

        let detected = detect_browser_locale(&signals);

        assert_eq!(detected.as_ref().map(DetectedSignal::value), expected);
        if let Some(signal) = detected {
            assert_eq!(signal.source(), SignalSource::HashFragment);
        }
    }

    #[test]
    fn non_empty_query_hides_hash_fragment() {
        let signals = BrowserSignals::default()
            .with_query("?page=1")
            .with_hash("#/?locale=fr")
            .with_languages(["de"]);

        let detected = detect_browser_locale(&signals).expect("languages should be used");

        assert_eq!(detected.value(), "de");
        assert_eq!(detected.source(), SignalSource::PreferredLanguages);
    }

    #[test]
    fn query_parameter_outranks_languages() {
        let signals = BrowserSignals::default()
            .with_query("?locale=ja")
            .with_languages(["fr-FR", "en"]);

        let detected = detect_browser_locale(&signals).expect("query should win");

        assert_eq!(detected.value(), "ja");
        assert_eq!(detected.source(), SignalSource::QueryString);
    }

    #[test]
    fn empty_query_parameter_is_still_detected() {
        let signals = BrowserSignals::default()
            .with_query("?locale=")
            .with_languages(["fr"]);

        let detected = detect_browser_locale(&signals).expect("explicit parameter wins");

        assert_eq!(detected.value(), "");
    }

    #[rstest]
    #[case(Some(vec![]), None)]
    #[case(Some(vec![String::new(), String::from("fr")]), None)]
    #[case(None, None)]
    #[case(Some(vec![String::from("pt-BR"), String::from("en")]), Some("pt-BR"))]
    fn uses_first_preferred_language(
        #[case] languages: Option<Vec<String>>,
        #[case] expected: Option<&str>,
    ) {
        let signals = match languages {
            Some(list) => BrowserSignals::default().with_languages(list),
            None => BrowserSignals::default(),
        };

        let detected = detect_browser_locale(&signals);

        assert_eq!(detected.as_ref().map(DetectedSignal::value), expected);
    }

    #[test]
    fn probes_legacy_properties_in_order() {
        let signals = BrowserSignals::default()
            .with_languages(Vec::<String>::new())
            .with_legacy(LegacyLanguageProperty::Language, "")
            .with_legacy(LegacyLanguageProperty::UserLanguage, "nb-NO")
            .with_legacy(LegacyLanguageProperty::SystemLanguage, "sv");

        let detected = detect_browser_locale(&signals).expect("legacy property expected");

        assert_eq!(detected.value(), "sv");
        assert_eq!(
            detected.source(),
            SignalSource::LegacyProperty(LegacyLanguageProperty::SystemLanguage)
        );
    }

    #[test]
    fn silent_environment_detects_nothing() {
        assert_eq!(detect_browser_locale(&BrowserSignals::default()), None);
    }

    #[rstest]
    #[case("language", LegacyLanguageProperty::Language)]
    #[case("BrowserLanguage", LegacyLanguageProperty::BrowserLanguage)]
    #[case(" userlanguage ", LegacyLanguageProperty::UserLanguage)]
    fn parses_property_names(#[case] input: &str, #[case] expected: LegacyLanguageProperty) {
        assert_eq!(input.parse::<LegacyLanguageProperty>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_property_names() {
        assert!("locale".parse::<LegacyLanguageProperty>().is_err());
    }
}
