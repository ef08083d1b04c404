//! Error types for the OpenAntrag client.

use thiserror::Error;

/// The single failure kind of an API request.
///
/// Every lookup in [`crate::client::Client`] fails with this type; whether the
/// caller ever sees it depends on the lookup's [`crate::client::FailurePolicy`].
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with something other than `200 OK`.
    #[error("request to {url} returned HTTP {code} {reason}")]
    Status {
        url: String,
        code: u16,
        reason: String,
    },

    /// `200 OK` with nothing in the body.
    #[error("request to {url} returned an empty body")]
    EmptyBody { url: String },

    /// A path parameter that cannot be sent as a single URL segment.
    #[error("invalid path parameter {value:?}: {reason}")]
    InvalidParameter { value: String, reason: &'static str },

    /// The body is not JSON of the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading [`crate::config::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid api_host {value:?}: {reason}")]
    InvalidHost { value: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Rejected background colour value.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid colour {0:?}: expected #rgb, #rrggbb, #rrggbbaa or a CSS colour name")]
pub struct ColorError(pub String);
