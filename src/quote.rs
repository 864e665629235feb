//! Quote data model
//!
//! `Quote` is what the provider hands back; `LikedQuote` is what gets
//! persisted. A liked quote is identified by its exact text.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A quote as currently displayed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

/// A quote the user has favorited.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LikedQuote {
    pub quote: String,
    pub author: String,
}

impl LikedQuote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }

    /// Case-insensitive substring match on quote text or author.
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.quote.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

impl From<&Quote> for LikedQuote {
    fn from(quote: &Quote) -> Self {
        Self::new(quote.text.clone(), quote.author.clone())
    }
}

impl Display for LikedQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.quote, self.author)
    }
}

/// Ordered collection of liked quotes, unique by quote text.
///
/// Serializes as a plain JSON array of `{quote, author}` objects. Loading
/// goes through `From<Vec<LikedQuote>>`, so stored duplicates collapse.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<LikedQuote>", into = "Vec<LikedQuote>")]
pub struct LikedQuotes(Vec<LikedQuote>);

impl LikedQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LikedQuote> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[LikedQuote] {
        &self.0
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|item| item.quote == text)
    }

    /// Unlike `quote` if its text is present, otherwise append it.
    ///
    /// Returns `true` when the quote is liked after the call.
    pub fn toggle(&mut self, quote: LikedQuote) -> bool {
        if self.contains(&quote.quote) {
            self.remove(&quote.quote);
            false
        } else {
            self.0.push(quote);
            true
        }
    }

    /// Drop every entry whose text equals `text`. Returns how many were removed.
    pub fn remove(&mut self, text: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|item| item.quote != text);
        before - self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Entries whose quote or author contains `term`, ignoring case.
    /// An empty term returns everything, in order.
    pub fn filter(&self, term: &str) -> Vec<&LikedQuote> {
        let needle = term.to_lowercase();
        self.0
            .iter()
            .filter(|item| item.matches_lowercase(&needle))
            .collect()
    }
}

impl From<Vec<LikedQuote>> for LikedQuotes {
    /// Builds a collection, keeping the first occurrence of any repeated text.
    fn from(items: Vec<LikedQuote>) -> Self {
        let mut liked = LikedQuotes::new();
        for item in items {
            if !liked.contains(&item.quote) {
                liked.0.push(item);
            }
        }
        liked
    }
}

impl From<LikedQuotes> for Vec<LikedQuote> {
    fn from(liked: LikedQuotes) -> Self {
        liked.0
    }
}

impl<'a> IntoIterator for &'a LikedQuotes {
    type Item = &'a LikedQuote;
    type IntoIter = std::slice::Iter<'a, LikedQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LikedQuotes {
        LikedQuotes::from(vec![
            LikedQuote::new("Stay hungry, stay foolish.", "Steve Jobs"),
            LikedQuote::new("Simplicity is the soul of efficiency.", "Austin Freeman"),
            LikedQuote::new("Talk is cheap. Show me the code.", "Linus Torvalds"),
        ])
    }

    #[test]
    // Toggling the same quote twice leaves the collection unchanged.
    fn test_toggle_twice_restores_collection() {
        let mut liked = sample();
        let before = liked.clone();
        let quote = LikedQuote::new("New one", "Someone");

        assert!(liked.toggle(quote.clone()));
        assert_eq!(liked.len(), 4);
        assert!(!liked.toggle(quote));
        assert_eq!(liked, before);
    }

    #[test]
    // Toggle appends at the end, preserving insertion order.
    fn test_toggle_appends_at_end() {
        let mut liked = sample();
        liked.toggle(LikedQuote::new("Last", "Author"));
        assert_eq!(liked.as_slice().last().unwrap().quote, "Last");
    }

    #[test]
    // Identity is the quote text: a different author still unlikes.
    fn test_toggle_matches_on_text_only() {
        let mut liked = sample();
        let liked_now = liked.toggle(LikedQuote::new("Stay hungry, stay foolish.", "Anonymous"));
        assert!(!liked_now);
        assert!(!liked.contains("Stay hungry, stay foolish."));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut liked = sample();
        assert_eq!(liked.remove("not there"), 0);
        assert_eq!(liked.len(), 3);
    }

    #[test]
    // Duplicates in loaded data collapse to the first entry.
    fn test_from_vec_drops_duplicate_text() {
        let liked = LikedQuotes::from(vec![
            LikedQuote::new("A", "first"),
            LikedQuote::new("B", "x"),
            LikedQuote::new("A", "second"),
        ]);
        assert_eq!(liked.len(), 2);
        assert_eq!(liked.as_slice()[0].author, "first");
    }

    #[test]
    fn test_filter_empty_term_returns_all_in_order() {
        let liked = sample();
        let all: Vec<&LikedQuote> = liked.iter().collect();
        assert_eq!(liked.filter(""), all);
    }

    #[test]
    fn test_filter_is_case_insensitive_on_quote_and_author() {
        let liked = sample();

        let by_quote = liked.filter("SHOW ME");
        assert_eq!(by_quote.len(), 1);
        assert_eq!(by_quote[0].author, "Linus Torvalds");

        let by_author = liked.filter("jobs");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].quote, "Stay hungry, stay foolish.");

        assert!(liked.filter("nothing matches this").is_empty());
    }

    #[test]
    // The persisted form is a bare array of {quote, author} objects.
    fn test_serializes_as_plain_array() {
        let liked = LikedQuotes::from(vec![LikedQuote::new("A", "B")]);
        let json = serde_json::to_string(&liked).unwrap();
        assert_eq!(json, r#"[{"quote":"A","author":"B"}]"#);

        let parsed: LikedQuotes = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, liked);
    }
}
