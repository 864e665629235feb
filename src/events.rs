//! Event System
//!
//! Activity events recorded by the dashboard controller

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Fetching quotes from the provider.
    Fetcher,
    /// Liking, unliking and removing quotes.
    Likes,
    /// Reading and writing the key-value store.
    Store,
}

impl Source {
    /// Target name used when forwarding to the `log` facade.
    pub fn target(&self) -> &'static str {
        match self {
            Source::Fetcher => "quote_dashboard::fetcher",
            Source::Likes => "quote_dashboard::likes",
            Source::Store => "quote_dashboard::store",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Liked,
    Unliked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn fetcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Fetcher, msg, event_type, log_level)
    }

    pub fn likes_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Likes, msg, event_type, log_level)
    }

    pub fn store_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Store, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
