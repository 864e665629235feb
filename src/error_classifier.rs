use crate::provider::error::ProviderError;
use crate::store::error::StoreError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &ProviderError) -> LogLevel {
        match error {
            // Rate limiting and server issues; each fetch is a single attempt
            ProviderError::Http { status, .. } if *status == 429 => LogLevel::Warn,
            ProviderError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth, malformed responses
            ProviderError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ProviderError::Http { status, .. } if *status == 403 => LogLevel::Error,
            ProviderError::Malformed(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    /// Store failures never corrupt in-memory state, so they stay warnings.
    pub fn classify_store_error(&self, _error: &StoreError) -> LogLevel {
        LogLevel::Warn
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ProviderError {
        ProviderError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_fetch_error_by_status() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Warn);
    }

    #[test]
    // A rate-limited fetch is still shown at the default log level.
    fn test_rate_limit_is_displayed_by_default() {
        let classifier = ErrorClassifier::new();
        let level = classifier.classify_fetch_error(&http(429));
        assert!(crate::logging::should_log(level, LogLevel::Info));
    }

    #[test]
    fn test_classify_malformed_body_as_error() {
        let classifier = ErrorClassifier::new();
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&ProviderError::Malformed(parse_error)),
            LogLevel::Error
        );
    }

    #[test]
    fn test_classify_store_error_as_warning() {
        let classifier = ErrorClassifier::new();
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert_eq!(
            classifier.classify_store_error(&StoreError::Io(io)),
            LogLevel::Warn
        );
    }
}
