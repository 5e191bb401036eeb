//! Configuration errors.

use figment::providers::{Format, Toml};
use std::{collections::HashSet, error::Error, fmt};

/// Prefix of every [`ExtractConfigError`] message.
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract dapp config:";

/// Errors raised while interpreting individual config values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `wallet` is not one of `rpc`, `browser` or `none`.
    #[error("unknown wallet `{0}`, expected one of `rpc`, `browser`, `none`")]
    UnknownWallet(String),
}

/// A failed attempt to extract [`Config`](crate::Config) from a figment.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error.
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }

    /// Returns the underlying figment error.
    pub fn inner(&self) -> &figment::Error {
        &self.error
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut seen = HashSet::with_capacity(self.error.count());
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG_MSG}")?;
        for err in self.error.clone() {
            let from_toml =
                err.metadata.as_ref().is_some_and(|meta| meta.name.contains(Toml::NAME));
            let mut line = if from_toml { format!("dapp.toml error: {err}") } else { err.to_string() };
            if !err.path.is_empty() {
                line.push_str(&format!(" for setting `{}`", err.path.join(".")));
            }
            if seen.insert(line.clone()) {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}
