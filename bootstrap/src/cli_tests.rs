//! Tests for probe CLI parsing and signal construction.

use super::*;
use localegate_common::{SignalSource, detect_browser_locale};
use rstest::rstest;

#[test]
fn cli_parses_defaults() {
    let cli = Cli::parse_from(["localegate"]);
    assert!(cli.query.is_none());
    assert!(cli.hash.is_none());
    assert!(cli.languages.is_empty());
    assert!(cli.legacy.is_empty());
    assert!(cli.config.is_none());
    assert!(cli.base_url.is_none());
    assert!(!cli.production);
    assert!(!cli.no_mark_fallback);
    assert!(cli.lookups.is_empty());
    assert_eq!(cli.verbosity, 0);
}

#[test]
fn cli_parses_repeated_languages_in_order() {
    let cli = Cli::parse_from(["localegate", "-l", "pt-BR", "--language", "en"]);
    assert_eq!(cli.languages, ["pt-BR", "en"]);
}

#[test]
fn cli_parses_config_path() {
    let cli = Cli::parse_from(["localegate", "--config", "/etc/localegate.toml"]);
    assert_eq!(cli.config, Some(Utf8PathBuf::from("/etc/localegate.toml")));
}

#[rstest]
#[case("userLanguage=de-CH", LegacyLanguageProperty::UserLanguage, "de-CH")]
#[case("browserlanguage = fr", LegacyLanguageProperty::BrowserLanguage, "fr")]
#[case("language=", LegacyLanguageProperty::Language, "")]
fn legacy_override_parses(
    #[case] input: &str,
    #[case] property: LegacyLanguageProperty,
    #[case] value: &str,
) {
    let parsed: LegacyOverride = input
        .parse()
        .unwrap_or_else(|error| panic!("`{input}` should parse: {error}"));
    assert_eq!(parsed.property, property);
    assert_eq!(parsed.value, value);
}

#[rstest]
#[case("userLanguage")]
#[case("navigatorLanguage=fr")]
fn legacy_override_rejects_malformed_input(#[case] input: &str) {
    assert!(input.parse::<LegacyOverride>().is_err());
}

#[test]
fn cli_rejects_unknown_legacy_property() {
    let result = Cli::try_parse_from(["localegate", "--legacy", "oscpu=fr"]);
    assert!(result.is_err());
}

#[test]
fn query_flag_outranks_languages() {
    let cli = Cli::parse_from(["localegate", "--query", "?locale=ja", "--language", "fr"]);
    let signal = detect_browser_locale(&cli.signals())
        .unwrap_or_else(|| panic!("a signal should be detected"));

    assert_eq!(signal.value(), "ja");
    assert_eq!(signal.source(), SignalSource::QueryString);
}

#[test]
fn legacy_flag_feeds_legacy_property() {
    let cli = Cli::parse_from(["localegate", "--legacy", "systemLanguage=nl"]);
    let signal = detect_browser_locale(&cli.signals())
        .unwrap_or_else(|| panic!("a signal should be detected"));

    assert_eq!(
        signal.source(),
        SignalSource::LegacyProperty(LegacyLanguageProperty::SystemLanguage)
    );
}

#[test]
fn no_flags_produce_no_signal() {
    let cli = Cli::parse_from(["localegate"]);
    assert!(detect_browser_locale(&cli.signals()).is_none());
}

#[test]
fn overrides_update_configuration() {
    let cli = Cli::parse_from([
        "localegate",
        "--base-url",
        "https://cdn.example.test",
        "--production",
        "--no-mark-fallback",
    ]);
    let mut config = GateConfig::default();

    cli.apply_overrides(&mut config);

    assert_eq!(config.resource_base, "https://cdn.example.test");
    assert!(config.production_mode);
    assert!(!config.mark_fallback_values);
}

#[test]
fn absent_overrides_keep_configuration() {
    let cli = Cli::parse_from(["localegate"]);
    let mut config = GateConfig::default();

    cli.apply_overrides(&mut config);

    assert_eq!(config, GateConfig::default());
}

#[rstest]
#[case(&["localegate"], log::LevelFilter::Warn)]
#[case(&["localegate", "-v"], log::LevelFilter::Info)]
#[case(&["localegate", "-vv"], log::LevelFilter::Debug)]
#[case(&["localegate", "-vvv"], log::LevelFilter::Trace)]
fn verbosity_raises_log_level(#[case] args: &[&str], #[case] expected: log::LevelFilter) {
    assert_eq!(Cli::parse_from(args).log_level(), expected);
}
