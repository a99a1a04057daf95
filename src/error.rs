//! Error types and handling for `PokeWeather`

use thiserror::Error;

/// Coarse classification of a [`PokeWeatherError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    /// Transport failure or non-success status
    RequestError,
    /// Response body was not valid JSON
    DecodeError,
    /// JSON was well-formed but an expected field was absent or empty
    MissingData,
    Io,
}

/// Main error type for the `PokeWeather` application
#[derive(Error, Debug)]
pub enum PokeWeatherError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network failures and non-2xx responses
    #[error("Request error: {message}")]
    Request { message: String },

    /// Response body could not be parsed as JSON
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Expected data missing from an otherwise valid response
    #[error("Missing data: {message}")]
    MissingData { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PokeWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new request error
    pub fn request<S: Into<String>>(message: S) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new missing-data error
    pub fn missing_data<S: Into<String>>(message: S) -> Self {
        Self::MissingData {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PokeWeatherError::Config { .. } => ErrorKind::Config,
            PokeWeatherError::Request { .. } => ErrorKind::RequestError,
            PokeWeatherError::Decode { .. } => ErrorKind::DecodeError,
            PokeWeatherError::MissingData { .. } => ErrorKind::MissingData,
            PokeWeatherError::Io { .. } => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for PokeWeatherError {
    fn from(err: serde_json::Error) -> Self {
        PokeWeatherError::decode(err.to_string())
    }
}
