//! Dashboard State Controller
//!
//! Owns every piece of dashboard state: the quote on display, the loading
//! flag, the liked quotes and the search term. The provider and the store
//! are injected so the controller never touches the network or disk directly.

use crate::consts::cli_consts::{LIKES_KEY, MAX_ACTIVITY_LOGS};
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType};
use crate::logging::log_event;
use crate::provider::QuoteProvider;
use crate::provider::error::ProviderError;
use crate::quote::{LikedQuote, LikedQuotes, Quote};
use crate::store::{KeyValueStore, load_json, save_json};
use std::collections::VecDeque;
use std::sync::Arc;

pub struct DashboardController {
    provider: Arc<dyn QuoteProvider>,
    store: Box<dyn KeyValueStore>,
    classifier: ErrorClassifier,

    current_quote: Option<Quote>,
    loading: bool,
    liked_quotes: LikedQuotes,
    search_term: String,

    activity_logs: VecDeque<Event>,
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("current_quote", &self.current_quote)
            .field("loading", &self.loading)
            .field("liked_quotes", &self.liked_quotes)
            .field("search_term", &self.search_term)
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Creates a controller and hydrates the liked quotes from `store`.
    ///
    /// Missing, unreadable or unparseable saved data all start from an empty
    /// collection.
    pub fn new(provider: Arc<dyn QuoteProvider>, store: Box<dyn KeyValueStore>) -> Self {
        let mut controller = Self {
            provider,
            store,
            classifier: ErrorClassifier::new(),
            current_quote: None,
            loading: false,
            liked_quotes: LikedQuotes::new(),
            search_term: String::new(),
            activity_logs: VecDeque::new(),
        };
        controller.hydrate();
        controller
    }

    fn hydrate(&mut self) {
        match load_json::<LikedQuotes>(self.store.as_ref(), LIKES_KEY) {
            Ok(Some(liked)) => {
                self.record(Event::store_with_level(
                    format!("Loaded {} liked quote(s)", liked.len()),
                    EventType::Refresh,
                    LogLevel::Debug,
                ));
                self.liked_quotes = liked;
            }
            Ok(None) => {}
            Err(e) => {
                let level = self.classifier.classify_store_error(&e);
                self.record(Event::store_with_level(
                    format!("Ignoring saved likes: {}", e),
                    EventType::Error,
                    level,
                ));
            }
        }
    }

    // Getters

    pub fn current_quote(&self) -> Option<&Quote> {
        self.current_quote.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn liked_quotes(&self) -> &LikedQuotes {
        &self.liked_quotes
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn activity_logs(&self) -> &VecDeque<Event> {
        &self.activity_logs
    }

    /// Shared handle to the provider, for running a fetch off the UI thread.
    pub fn provider(&self) -> Arc<dyn QuoteProvider> {
        Arc::clone(&self.provider)
    }

    // Fetching

    /// Marks a fetch as outstanding.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.record(Event::fetcher_with_level(
            "Fetching a new quote...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        ));
    }

    /// Applies the outcome of a fetch. The most recent completion wins.
    ///
    /// Returns `true` if the current quote was replaced.
    pub fn complete_fetch(&mut self, result: Result<Quote, ProviderError>) -> bool {
        self.loading = false;
        match result {
            Ok(quote) => {
                self.record(Event::fetcher_with_level(
                    format!("New quote from {}", quote.author),
                    EventType::Success,
                    LogLevel::Info,
                ));
                self.current_quote = Some(quote);
                true
            }
            Err(e) => {
                let level = self.classifier.classify_fetch_error(&e);
                self.record(Event::fetcher_with_level(
                    format!("Error fetching quote: {}", e),
                    EventType::Error,
                    level,
                ));
                false
            }
        }
    }

    /// Fetches one random quote and applies it. Failures are logged, never returned.
    pub async fn fetch_random_quote(&mut self) -> bool {
        self.begin_fetch();
        let provider = self.provider();
        let result = provider.random_quote().await;
        self.complete_fetch(result)
    }

    // Likes

    pub fn is_current_quote_liked(&self) -> bool {
        self.current_quote
            .as_ref()
            .is_some_and(|quote| self.liked_quotes.contains(&quote.text))
    }

    /// Likes the current quote, or unlikes it if already liked.
    ///
    /// Returns the new liked state, or `None` when there is no quote yet.
    pub fn toggle_like(&mut self) -> Option<bool> {
        let quote = self.current_quote.as_ref()?;
        let liked = self.liked_quotes.toggle(LikedQuote::from(quote));
        let (msg, event_type) = if liked {
            (format!("Liked quote by {}", quote.author), EventType::Liked)
        } else {
            (format!("Unliked quote by {}", quote.author), EventType::Unliked)
        };
        self.record(Event::likes_with_level(msg, event_type, LogLevel::Info));
        self.persist();
        Some(liked)
    }

    /// Removes the liked quote with exactly this text. Absent text is not an error.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_like(&mut self, quote_text: &str) -> bool {
        let removed = self.liked_quotes.remove(quote_text) > 0;
        if removed {
            self.record(Event::likes_with_level(
                "Removed quote from likes".to_string(),
                EventType::Unliked,
                LogLevel::Info,
            ));
        }
        self.persist();
        removed
    }

    /// Drops every liked quote. Returns how many there were.
    pub fn clear_likes(&mut self) -> usize {
        let count = self.liked_quotes.len();
        self.liked_quotes.clear();
        self.record(Event::likes_with_level(
            format!("Cleared {} liked quote(s)", count),
            EventType::Unliked,
            LogLevel::Info,
        ));
        self.persist();
        count
    }

    /// Liked quotes whose text or author contains `term`, ignoring case.
    pub fn filtered_liked_quotes(&self, term: &str) -> Vec<&LikedQuote> {
        self.liked_quotes.filter(term)
    }

    /// Liked quotes matching the current search term.
    pub fn visible_liked_quotes(&self) -> Vec<&LikedQuote> {
        self.filtered_liked_quotes(&self.search_term)
    }

    // Search

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    // Persistence

    /// Writes the whole liked collection under the likes key.
    ///
    /// A failed write is recorded as a warning; in-memory state is kept.
    fn persist(&mut self) -> bool {
        match save_json(self.store.as_ref(), LIKES_KEY, &self.liked_quotes) {
            Ok(()) => true,
            Err(e) => {
                let level = self.classifier.classify_store_error(&e);
                self.record(Event::store_with_level(
                    format!("Failed to save likes: {}", e),
                    EventType::Error,
                    level,
                ));
                false
            }
        }
    }

    /// Add an event to activity logs with size limit
    fn record(&mut self, event: Event) {
        log_event(&event);
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
