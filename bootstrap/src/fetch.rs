//! Translation resource retrieval.
//!
//! Provides a trait-based abstraction for fetching `/locales/<locale>.json`,
//! enabling dependency injection for testing, plus the `ureq` implementation
//! used in production.

use std::time::Duration;

use localegate_common::TranslationPayload;

/// Trait for fetching the translation payload of a single locale.
///
/// Abstractions allow tests to mock HTTP behaviour without network access.
#[cfg_attr(test, mockall::automock)]
pub trait TranslationFetcher {
    /// Fetch and parse the translations for `locale`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the resource is missing, or the
    /// body is not a translation payload.
    fn fetch(&self, locale: &str) -> Result<TranslationPayload, TranslationFetchError>;
}

impl<T> TranslationFetcher for &T
where
    T: TranslationFetcher + ?Sized,
{
    fn fetch(&self, locale: &str) -> Result<TranslationPayload, TranslationFetchError> {
        (**self).fetch(locale)
    }
}

/// Errors arising while fetching a translation resource.
#[derive(Debug, thiserror::Error)]
pub enum TranslationFetchError {
    /// HTTP request failed.
    #[error("translation fetch failed for {url}: {reason}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The translation resource does not exist (HTTP 404).
    #[error("translation resource not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The body was not a usable translation payload.
    #[error("malformed translation payload at {url}: {reason}")]
    Malformed {
        /// The URL whose body was rejected.
        url: String,
        /// Why the payload was rejected.
        reason: String,
    },
}

/// Path of the translation resource for `locale`.
///
/// # Examples
///
/// ```
/// use localegate_bootstrap::fetch::resource_path;
///
/// assert_eq!(resource_path("pt-br"), "/locales/pt-br.json");
/// ```
#[must_use]
pub fn resource_path(locale: &str) -> String {
    format!("/locales/{locale}.json")
}

/// HTTP-based fetcher using `ureq`.
pub struct HttpFetcher {
    base: String,
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Create a fetcher resolving resource paths against `base`
    /// (scheme and host, for example `https://data.example.org`).
    #[must_use]
    pub fn new(base: &str, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            base: base.trim_end_matches('/').to_owned(),
            agent: ureq::Agent::new_with_config(config),
        }
    }

    /// Full URL of the translation resource for `locale`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use localegate_bootstrap::fetch::HttpFetcher;
    ///
    /// let fetcher = HttpFetcher::new("https://data.example.org/", Duration::from_secs(5));
    /// assert_eq!(fetcher.resource_url("fr"), "https://data.example.org/locales/fr.json");
    /// ```
    #[must_use]
    pub fn resource_url(&self, locale: &str) -> String {
        format!("{}{}", self.base, resource_path(locale))
    }
}

impl TranslationFetcher for HttpFetcher {
    fn fetch(&self, locale: &str) -> Result<TranslationPayload, TranslationFetchError> {
        let url = self.resource_url(locale);
        let body = self.download_text(&url)?;
        TranslationPayload::from_json_str(&body).map_err(|error| TranslationFetchError::Malformed {
            url,
            reason: error.to_string(),
        })
    }
}

impl HttpFetcher {
    /// Download a URL and return the body as a string.
    fn download_text(&self, url: &str) -> Result<String, TranslationFetchError> {
        let response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| TranslationFetchError::Http {
                url: url.to_owned(),
                reason: e.to_string(),
            })
    }
}

/// Map a ureq error to a [`TranslationFetchError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> TranslationFetchError {
    match err {
        ureq::Error::StatusCode(404) => TranslationFetchError::NotFound {
            url: url.to_owned(),
        },
        other => TranslationFetchError::Http {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fr", "/locales/fr.json")]
    #[case("zh-cn", "/locales/zh-cn.json")]
    fn resource_path_is_derived_from_locale(#[case] locale: &str, #[case] expected: &str) {
        assert_eq!(resource_path(locale), expected);
    }

    #[rstest]
    #[case("http://localhost:4200")]
    #[case("http://localhost:4200/")]
    #[case("http://localhost:4200//")]
    fn resource_url_joins_base_without_double_slash(#[case] base: &str) {
        let fetcher = HttpFetcher::new(base, Duration::from_secs(1));

        assert_eq!(
            fetcher.resource_url("pt-br"),
            "http://localhost:4200/locales/pt-br.json"
        );
    }

    #[test]
    fn map_ureq_error_maps_404_to_not_found() {
        let err = ureq::Error::StatusCode(404);
        let mapped = map_ureq_error("https://example.test/locales/fr.json", &err);
        assert!(matches!(mapped, TranslationFetchError::NotFound { .. }));
    }

    #[test]
    fn map_ureq_error_maps_other_status_to_http_error() {
        let err = ureq::Error::StatusCode(500);
        let mapped = map_ureq_error("https://example.test/locales/fr.json", &err);
        assert!(matches!(mapped, TranslationFetchError::Http { .. }));
    }

    fn fetch_through<F: TranslationFetcher>(
        fetcher: F,
        locale: &str,
    ) -> Result<TranslationPayload, TranslationFetchError> {
        fetcher.fetch(locale)
    }

    #[test]
    fn reference_fetchers_delegate() {
        let mut mock = MockTranslationFetcher::new();
        mock.expect_fetch()
            .withf(|locale| locale == "de")
            .times(1)
            .returning(|_| Ok(TranslationPayload::default()));

        assert!(fetch_through(&mock, "de").is_ok());
    }
}
