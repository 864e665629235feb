//! HTTP Quote Provider
//!
//! Fetches a random quote from a JSON endpoint returning at least
//! `{"quote": "...", "author": "..."}`.

use crate::consts::cli_consts::quote_provider;
use crate::provider::QuoteProvider;
use crate::provider::error::ProviderError;
use crate::quote::Quote;
use reqwest::{Client, ClientBuilder, Response};
use serde::Deserialize;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("quote-dashboard/", env!("CARGO_PKG_VERSION"));

/// Shape of the provider's response body. Extra fields such as `id` are ignored.
#[derive(Debug, Deserialize)]
struct RandomQuoteResponse {
    quote: String,
    author: String,
}

impl From<RandomQuoteResponse> for Quote {
    fn from(response: RandomQuoteResponse) -> Self {
        Quote::new(response.quote, response.author)
    }
}

#[derive(Debug, Clone)]
pub struct HttpQuoteProvider {
    client: Client,
    url: String,
}

impl HttpQuoteProvider {
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = ClientBuilder::new()
            .connect_timeout(quote_provider::connect_timeout())
            .timeout(quote_provider::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// URL the provider fetches from.
    pub fn endpoint(&self) -> &str {
        &self.url
    }

    async fn handle_response_status(response: Response) -> Result<Response, ProviderError> {
        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }
        Ok(response)
    }

    fn decode_quote(bytes: &[u8]) -> Result<Quote, ProviderError> {
        let body: RandomQuoteResponse = serde_json::from_slice(bytes)?;
        Ok(body.into())
    }
}

#[async_trait::async_trait]
impl QuoteProvider for HttpQuoteProvider {
    async fn random_quote(&self) -> Result<Quote, ProviderError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Self::decode_quote(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one HTTP response on a local port and returns its quote URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/quotes/random", addr)
    }

    #[tokio::test]
    async fn test_success_response_yields_quote() {
        let url = serve_once("200 OK", r#"{"id":1,"quote":"Hi there","author":"Me"}"#).await;
        let provider = HttpQuoteProvider::new(url).unwrap();
        let quote = provider.random_quote().await.unwrap();
        assert_eq!(quote, Quote::new("Hi there", "Me"));
    }

    #[tokio::test]
    // Non-2xx statuses carry the status and body text.
    async fn test_error_status_yields_http_error() {
        let url = serve_once("503 Service Unavailable", "down").await;
        let provider = HttpQuoteProvider::new(url).unwrap();
        match provider.random_quote().await {
            Err(ProviderError::Http { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_malformed() {
        let url = serve_once("200 OK", "<html>not a quote</html>").await;
        let provider = HttpQuoteProvider::new(url).unwrap();
        let result = provider.random_quote().await;
        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }

    #[test]
    // The provider's extra fields are ignored.
    fn test_decode_quote_ignores_extra_fields() {
        let body = br#"{"id": 42, "quote": "Be yourself.", "author": "Oscar Wilde"}"#;
        let quote = HttpQuoteProvider::decode_quote(body).unwrap();
        assert_eq!(quote, Quote::new("Be yourself.", "Oscar Wilde"));
    }

    #[test]
    fn test_decode_quote_rejects_missing_author() {
        let body = br#"{"quote": "Half a quote"}"#;
        let result = HttpQuoteProvider::decode_quote(body);
        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }

    #[test]
    fn test_decode_quote_rejects_non_json() {
        let result = HttpQuoteProvider::decode_quote(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }

    #[tokio::test]
    // A refused connection surfaces as a transport error rather than a panic.
    async fn test_unreachable_endpoint_is_reqwest_error() {
        let provider = HttpQuoteProvider::new("http://127.0.0.1:9/quotes/random").unwrap();
        let result = provider.random_quote().await;
        assert!(matches!(result, Err(ProviderError::Reqwest(_))));
    }
}
