use std::fmt;

/// Ordered locale keys consulted for each translation lookup, most specific
/// first. Duplicates are dropped so every locale is consulted once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LocalePreferenceChain {
    locales: Vec<String>,
}

impl LocalePreferenceChain {
    /// Build a chain from `locales`, keeping the first occurrence of each key.
    ///
    /// ```
    /// use localegate_common::LocalePreferenceChain;
    ///
    /// let chain = LocalePreferenceChain::new(["pt-br", "en-us", "pt-br"]);
    /// assert_eq!(chain.as_slice(), ["pt-br", "en-us"]);
    /// ```
    #[must_use]
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut chain: Vec<String> = Vec::new();
        for locale in locales {
            let locale = locale.into();
            if !chain.contains(&locale) {
                chain.push(locale);
            }
        }
        Self { locales: chain }
    }

    /// A chain that consults only `default_locale`.
    #[must_use]
    pub fn default_only(default_locale: &str) -> Self {
        Self::new([default_locale])
    }

    /// A chain preferring `preferred` with `default_locale` as the fallback.
    #[must_use]
    pub fn with_fallback(preferred: &str, default_locale: &str) -> Self {
        Self::new([preferred, default_locale])
    }

    /// The locale consulted first, if the chain is non-empty.
    #[must_use]
    pub fn most_preferred(&self) -> Option<&str> {
        self.locales.first().map(String::as_str)
    }

    /// Whether `locale` is the first entry of the chain.
    #[must_use]
    pub fn is_most_preferred(&self, locale: &str) -> bool {
        self.most_preferred() == Some(locale)
    }

    /// Iterate over the chain in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    /// The chain as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.locales
    }

    /// Number of locales in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether the chain has no locales.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl fmt::Display for LocalePreferenceChain {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, locale) in self.locales.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            formatter.write_str(locale)?;
        }
        formatter.write_str("]")
    }
}
