//! Step parameter wrappers for locale scenarios.

use std::convert::Infallible;
use std::str::FromStr;

fn unquote(input: &str) -> &str {
    input
        .trim()
        .trim_matches(|candidate| matches!(candidate, '"' | '\''))
}

/// A single value from a step, such as a locale tag or a query string.
///
/// Surrounding quotes are dropped; everything else, including casing, is kept
/// so scenarios can feed raw browser values into detection.
#[derive(Clone, Debug)]
pub struct StepValue(String);

impl FromStr for StepValue {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self(unquote(input).to_owned()))
    }
}

impl StepValue {
    /// The unquoted value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Comma-separated locale list, for example `en-us, fr, pt-br`.
#[derive(Clone, Debug)]
pub struct StepLocaleList(Vec<String>);

impl FromStr for StepLocaleList {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            unquote(input)
                .split(',')
                .map(str::trim)
                .filter(|locale| !locale.is_empty())
                .map(str::to_owned)
                .collect(),
        ))
    }
}

impl StepLocaleList {
    /// The listed locales in order.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
