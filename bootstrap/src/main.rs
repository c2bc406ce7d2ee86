//! localegate probe entrypoint.
//!
//! Runs the startup gate against a live translation host using signals given
//! on the command line, then prints what was resolved and loaded.

use std::io::Write;

use clap::Parser;
use localegate::GateConfig;
use localegate_bootstrap::cli::Cli;
use localegate_bootstrap::error::Result;
use localegate_bootstrap::fetch::HttpFetcher;
use localegate_bootstrap::startup::{NoopSession, StartupReport, run_startup};

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level().as_str()),
    )
    .init();

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let config = load_config(cli)?;
    let fetcher = HttpFetcher::new(&config.resource_base, config.fetch_timeout());
    let report = run_startup(&cli.signals(), &config, fetcher, &mut NoopSession);
    write_report(&report, &cli.lookups, stdout)
}

fn load_config(cli: &Cli) -> Result<GateConfig> {
    let mut config = match &cli.config {
        Some(path) => GateConfig::load_from_path(path)?,
        None => GateConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

fn write_report(report: &StartupReport, lookups: &[String], out: &mut dyn Write) -> Result<()> {
    let selection = &report.selection;
    writeln!(out, "locale: {}", selection.locale())?;
    writeln!(out, "match: {}", selection.match_kind())?;
    match selection.signal() {
        Some(signal) => writeln!(out, "signal: `{}` from {}", signal.value(), signal.source())?,
        None => writeln!(out, "signal: none")?,
    }
    writeln!(out, "translations: {}", report.outcome)?;
    writeln!(out, "chain: {}", report.store.locale_chain())?;

    for key in lookups {
        match report.store.translate(key) {
            Some(value) => writeln!(out, "{key} = {value}")?,
            None => writeln!(out, "{key} (missing)")?,
        }
    }
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localegate::ConfigError;
    use localegate_bootstrap::fetch::{TranslationFetchError, TranslationFetcher};
    use localegate_common::{BrowserSignals, TranslationPayload};
    use rstest::rstest;

    struct StaticFetcher;

    impl TranslationFetcher for StaticFetcher {
        fn fetch(&self, _locale: &str) -> std::result::Result<TranslationPayload, TranslationFetchError> {
            Ok([("nav.home", "Accueil")].into_iter().collect())
        }
    }

    fn report_text(report: &StartupReport, lookups: &[String]) -> String {
        let mut out = Vec::new();
        write_report(report, lookups, &mut out)
            .unwrap_or_else(|error| panic!("report should be written: {error}"));
        String::from_utf8(out).unwrap_or_else(|error| panic!("report was not UTF-8: {error}"))
    }

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_returns_one() {
        let err = ConfigError::DefaultNotSupported {
            locale: "tlh".to_owned(),
        };

        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err.into()), &mut stderr);
        assert_eq!(exit_code, 1);

        let stderr_text = String::from_utf8(stderr)
            .unwrap_or_else(|error| panic!("stderr was not UTF-8: {error}"));
        assert!(stderr_text.contains("default locale `tlh` is not listed"));
    }

    #[test]
    fn report_lists_resolution_and_lookups() {
        let signals = BrowserSignals::default().with_query("?locale=FR");
        let report = run_startup(&signals, &GateConfig::default(), StaticFetcher, &mut NoopSession);

        let text = report_text(&report, &["nav.home".to_owned(), "nav.missing".to_owned()]);

        assert!(text.contains("locale: fr\n"));
        assert!(text.contains("match: exact match\n"));
        assert!(text.contains("signal: `FR` from query string\n"));
        assert!(text.contains("chain: [fr, en-us]\n"));
        assert!(text.contains("nav.home = Accueil\n"));
        assert!(text.contains("nav.missing (missing)\n"));
    }

    #[test]
    fn report_without_signal_says_so() {
        let report = run_startup(
            &BrowserSignals::default(),
            &GateConfig::default(),
            StaticFetcher,
            &mut NoopSession,
        );

        let text = report_text(&report, &[]);

        assert!(text.contains("signal: none\n"));
        assert!(text.contains("chain: [en-us]\n"));
    }

    #[rstest]
    #[case(&["localegate"], true)]
    #[case(&["localegate", "--config", "/nonexistent/localegate.toml"], false)]
    fn load_config_reports_unreadable_files(#[case] args: &[&str], #[case] expected_ok: bool) {
        let cli = Cli::parse_from(args);
        assert_eq!(load_config(&cli).is_ok(), expected_ok);
    }
}
