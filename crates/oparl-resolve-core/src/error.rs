//! Resolution error type.

use std::fmt;
use std::string::FromUtf8Error;

/// Why a GET did not produce decoded text.
///
/// HTTP error statuses are not represented here: a 404 with a body is still a
/// received response and is reported through the result's status and flag.
#[derive(Debug)]
pub enum ResolveError {
    /// The URL could not be parsed; no request was sent.
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    /// The URL parsed but is not `http`/`https`; no request was sent.
    UnsupportedScheme { url: String, scheme: String },
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    Transport(curl::Error),
    /// The transfer finished but curl has no response code.
    NoResponse,
    /// A response arrived but its body is not valid UTF-8.
    Decode { status: u32, source: FromUtf8Error },
}

impl ResolveError {
    /// HTTP status attached to the error, if a response was received at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            ResolveError::Decode { status, .. } => Some(*status),
            ResolveError::InvalidUrl { .. }
            | ResolveError::UnsupportedScheme { .. }
            | ResolveError::Transport(_)
            | ResolveError::NoResponse => None,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidUrl { url, source } => {
                write!(f, "invalid URL {:?}: {}", url, source)
            }
            ResolveError::UnsupportedScheme { url, scheme } => {
                write!(f, "unsupported scheme {:?} in {:?}", scheme, url)
            }
            ResolveError::Transport(e) => write!(f, "{}", e),
            ResolveError::NoResponse => write!(f, "no response code"),
            ResolveError::Decode { status, source } => {
                write!(f, "HTTP {} body is not UTF-8: {}", status, source)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::InvalidUrl { source, .. } => Some(source),
            ResolveError::Transport(e) => Some(e),
            ResolveError::Decode { source, .. } => Some(source),
            ResolveError::UnsupportedScheme { .. } | ResolveError::NoResponse => None,
        }
    }
}

impl From<curl::Error> for ResolveError {
    fn from(e: curl::Error) -> Self {
        ResolveError::Transport(e)
    }
}
