use crate::provider::error::ProviderError;
use crate::quote::Quote;

pub(crate) mod client;
pub use client::HttpQuoteProvider;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch one random quote. Single attempt, no retry.
    async fn random_quote(&self) -> Result<Quote, ProviderError>;
}
