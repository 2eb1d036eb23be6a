//! vklad-moex
//!
//! MOEX ISS connector implementing the `vklad-core` provider roles.
//!
//! History comes from the ISS `history/engines/stock/markets/shares`
//! endpoint, quotes from the realtime `engines/stock/markets/shares`
//! endpoint. Both serve positional column/data JSON tables; decoding lives
//! in `parse`.
//!
#![warn(missing_docs)]

mod client;
mod parse;

use async_trait::async_trait;

use vklad_core::{
    HistoricalSeries, HistoryProvider, HistoryRequest, Quote, QuoteProvider, Symbol,
    VkladConnector, VkladError,
};

use crate::client::IssClient;
use crate::parse::{HistoryEnvelope, QuoteEnvelope, decode_last_price, decode_series};

/// Public root of the MOEX ISS JSON API.
pub const DEFAULT_BASE_URL: &str = "https://iss.moex.com/iss";

/// Main trading board for shares on the Moscow Exchange.
pub const DEFAULT_BOARD: &str = "TQBR";

// ISS rejects requests without a browser-looking User-Agent.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Market-data connector backed by the MOEX ISS API.
#[derive(Debug, Clone)]
pub struct MoexConnector {
    client: IssClient,
    board: String,
}

impl MoexConnector {
    /// Returns a builder with production defaults.
    #[must_use]
    pub fn builder() -> MoexConnectorBuilder {
        MoexConnectorBuilder::default()
    }

    /// Construct a connector with all defaults.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder().build()
    }
}

impl Default for MoexConnector {
    fn default() -> Self {
        Self::new_default()
    }
}

/// Builder for [`MoexConnector`].
#[derive(Debug, Clone)]
pub struct MoexConnectorBuilder {
    base_url: String,
    board: String,
    user_agent: String,
    http: Option<reqwest::Client>,
}

impl Default for MoexConnectorBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            board: DEFAULT_BOARD.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            http: None,
        }
    }
}

impl MoexConnectorBuilder {
    /// Override the ISS API root. Useful for tests pointing at a local
    /// mock server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the trading board segment of the endpoint paths.
    #[must_use]
    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = board.into();
        self
    }

    /// Override the User-Agent header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Supply a preconfigured `reqwest` client (proxies, timeouts, TLS).
    #[must_use]
    pub fn client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalize the connector.
    #[must_use]
    pub fn build(self) -> MoexConnector {
        let http = self.http.unwrap_or_default();
        MoexConnector {
            client: IssClient::new(http, self.base_url, self.user_agent),
            board: self.board,
        }
    }
}

#[async_trait]
impl HistoryProvider for MoexConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(symbol = %symbol, limit = request.limit))
    )]
    async fn history(
        &self,
        symbol: &Symbol,
        request: HistoryRequest,
    ) -> Result<HistoricalSeries, VkladError> {
        let path = format!(
            "history/engines/stock/markets/shares/boards/{}/securities/{}.json?limit={}",
            self.board, symbol, request.limit
        );
        let envelope: HistoryEnvelope = self.client.get_json(&path).await?;
        decode_series(&envelope.history)
    }
}

#[async_trait]
impl QuoteProvider for MoexConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(symbol = %symbol))
    )]
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, VkladError> {
        let path = format!(
            "engines/stock/markets/shares/boards/{}/securities/{}.json",
            self.board, symbol
        );
        let envelope: QuoteEnvelope = self.client.get_json(&path).await?;
        decode_last_price(&envelope.marketdata)
    }
}

impl VkladConnector for MoexConnector {
    fn name(&self) -> &'static str {
        "moex"
    }

    fn vendor(&self) -> &'static str {
        "Moscow Exchange"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self)
    }
}
