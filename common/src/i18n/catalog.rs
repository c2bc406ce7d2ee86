//! Supported locale enumeration and membership checks.
//!
//! The catalog is fixed for the lifetime of a session. Entries are lower-cased
//! once at construction so that membership tests compare against the
//! lower-cased browser signal without touching the catalog again.

use once_cell::sync::Lazy;

/// Locale keys with translations shipped alongside the application.
pub const BUILTIN_LOCALES: &[&str] = &[
    "cs", "da", "de", "en-us", "es", "et", "el", "fi", "fr", "it", "ja", "ko", "lt", "lv", "nb",
    "nl", "pl", "pt-br", "pt-pt", "ro", "ru", "sv", "th", "tr", "vi", "zh-cn", "zh-tw", "zh-hk",
];

static BUILTIN: Lazy<SupportedLocaleCatalog> =
    Lazy::new(|| SupportedLocaleCatalog::new(BUILTIN_LOCALES.iter().copied()));

/// Ordered set of lower-case locale keys the application can translate into.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SupportedLocaleCatalog {
    locales: Vec<String>,
}

impl SupportedLocaleCatalog {
    /// Build a catalog from `locales`, lower-casing and deduplicating entries
    /// while preserving the first occurrence order.
    ///
    /// ```
    /// use localegate_common::SupportedLocaleCatalog;
    ///
    /// let catalog = SupportedLocaleCatalog::new(["en-US", "fr", "FR"]);
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.contains("en-us"));
    /// assert!(!catalog.contains("en-US"));
    /// ```
    #[must_use]
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for locale in locales {
            let lowered = locale.as_ref().trim().to_lowercase();
            if lowered.is_empty() || unique.contains(&lowered) {
                continue;
            }
            unique.push(lowered);
        }

        Self { locales: unique }
    }

    /// Return the catalog of locales bundled with the application.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Whether `locale` is a member. The comparison is exact; callers lower-case
    /// their candidate first.
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|candidate| candidate == locale)
    }

    /// Iterate over the catalog in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    /// Number of supported locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
