// SPDX-License-Identifier: MPL-2.0
//! Error types for the ambient parts of the brochure (configuration, logging,
//! launching external documents).
//!
//! Page state transitions never fail; only the I/O around them does.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The system browser could not be launched for an external document.
    #[error("Browser Error: {0}")]
    Browser(String),

    #[error("Logging Error: {0}")]
    Logging(String),
}

impl Error {
    /// Returns the i18n key of the toast shown for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::Config(_) => "notification-config-load-error",
            Error::Browser(_) => "notification-open-link-error",
            Error::Logging(_) => "notification-logging-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn i18n_keys_match_notifications() {
        assert_eq!(
            Error::Browser("no handler".into()).i18n_key(),
            "notification-open-link-error"
        );
        assert_eq!(
            Error::Config("x".into()).i18n_key(),
            "notification-config-load-error"
        );
    }
}
