//! Startup gate sequencing locale resolution, translation loading, and
//! session initialisation.

use localegate::GateConfig;
use localegate_common::{
    EnvironmentSignals, LocaleSelection, TranslationStore, resolve_from_environment,
};
use log::debug;

use crate::fetch::TranslationFetcher;
use crate::loader::{LoadOutcome, TranslationLoader};

const LOG_TARGET: &str = "i18n::startup";

/// Hook run once translations are in place.
#[cfg_attr(test, mockall::automock)]
pub trait SessionInitializer {
    /// Start the session with the prepared translation store.
    fn init_session(&mut self, store: &TranslationStore);
}

impl<T> SessionInitializer for &mut T
where
    T: SessionInitializer + ?Sized,
{
    fn init_session(&mut self, store: &TranslationStore) {
        (**self).init_session(store);
    }
}

/// Session hook that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSession;

impl SessionInitializer for NoopSession {
    fn init_session(&mut self, _store: &TranslationStore) {}
}

/// Everything the startup gate decided.
#[derive(Debug)]
pub struct StartupReport {
    /// How the locale was chosen.
    pub selection: LocaleSelection,
    /// What the loader did for the chosen locale.
    pub outcome: LoadOutcome,
    /// The store handed to session initialisation.
    pub store: TranslationStore,
}

impl StartupReport {
    /// The resolved locale key.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.selection.locale()
    }
}

/// Resolve the locale, load its translations, then initialise the session.
///
/// The session hook runs only after the fetch has settled and runs whether or
/// not it succeeded. No error escapes: fetch failures are reported through
/// [`StartupReport::outcome`].
///
/// # Examples
///
/// ```
/// use localegate::GateConfig;
/// use localegate_bootstrap::fetch::{TranslationFetchError, TranslationFetcher};
/// use localegate_bootstrap::startup::{NoopSession, run_startup};
/// use localegate_common::{BrowserSignals, TranslationPayload};
///
/// struct Unreachable;
///
/// impl TranslationFetcher for Unreachable {
///     fn fetch(&self, _locale: &str) -> Result<TranslationPayload, TranslationFetchError> {
///         unreachable!("the default locale is never fetched")
///     }
/// }
///
/// let signals = BrowserSignals::default().with_languages(["en-US"]);
/// let report = run_startup(&signals, &GateConfig::default(), Unreachable, &mut NoopSession);
///
/// assert_eq!(report.locale(), "en-us");
/// ```
pub fn run_startup<S, F, I>(
    signals: &S,
    config: &GateConfig,
    fetcher: F,
    session: &mut I,
) -> StartupReport
where
    S: EnvironmentSignals + ?Sized,
    F: TranslationFetcher,
    I: SessionInitializer + ?Sized,
{
    let default_locale = config.default_locale();
    let catalog = config.catalog();
    let mut store = TranslationStore::new(config.store_options());

    let selection = resolve_from_environment(signals, &catalog, &default_locale);
    let loader = TranslationLoader::new(fetcher, &default_locale);
    let outcome = loader.load_if_needed(selection.locale(), &mut store);

    debug!(
        target: LOG_TARGET,
        "translations settled ({outcome}); initialising session with chain {}",
        store.locale_chain(),
    );
    session.init_session(&store);

    StartupReport {
        selection,
        outcome,
        store,
    }
}
