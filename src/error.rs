use thiserror::Error;

/// Unified caller-visible error type for the gateway.
///
/// Cache faults are deliberately absent from this taxonomy: the cache is
/// advisory, and its failures are absorbed inside [`crate::cache`] (see
/// [`crate::cache::CacheFault`]).
#[derive(Debug, Error)]
pub enum Error {
    /// Empty or otherwise unusable caller input. Never reaches the cache
    /// or the upstream provider.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing credential or malformed configuration. Raised before any
    /// network I/O.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream provider failure: transport error, non-success status,
    /// timeout, or a response body with no usable payload.
    #[error("Upstream provider error{}: {message}", format_status(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
    },
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    pub fn upstream(status: Option<u16>, msg: impl Into<String>) -> Self {
        Error::Upstream {
            status,
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_includes_status() {
        let err = Error::upstream(Some(429), "quota exceeded");
        assert_eq!(
            err.to_string(),
            "Upstream provider error (HTTP 429): quota exceeded"
        );
    }

    #[test]
    fn upstream_display_without_status() {
        let err = Error::upstream(None, "connection reset");
        assert_eq!(err.to_string(), "Upstream provider error: connection reset");
    }
}
