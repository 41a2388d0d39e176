//! Quote Fetcher Module
//! Retrieves recent daily closes from the Yahoo Finance chart API.

use super::Quote;
use crate::data::Ticker;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No data returned for {0}")]
    NoData(String),
    #[error("Insufficient data to calculate change ({0} closes)")]
    InsufficientHistory(usize),
    #[error("Invalid close: {0}")]
    InvalidClose(f64),
}

/// Source of quotes for the dashboard.
pub trait QuoteFetcher {
    fn fetch(&self, ticker: &Ticker) -> Result<Quote, FetchError>;
}

/// Blocking client for the Yahoo Finance v8 chart endpoint.
pub struct YahooFetcher {
    client: Client,
    base_url: String,
}

impl YahooFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)",
            ),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}/v8/finance/chart/{}?range=5d&interval=1d",
            self.base_url,
            ticker.as_str()
        )
    }
}

impl QuoteFetcher for YahooFetcher {
    fn fetch(&self, ticker: &Ticker) -> Result<Quote, FetchError> {
        let url = self.chart_url(ticker);
        debug!("Fetching {}", url);

        // Unknown symbols come back as 404 with an error object in the body
        let body = self.client.get(&url).send()?.text()?;
        let closes = parse_chart(ticker, &body)?;
        debug!("{}: {} closes", ticker, closes.len());

        Quote::from_closes(&closes)
    }
}

#[derive(Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize)]
struct ChartResult {
    indicators: Indicators,
}

#[derive(Deserialize)]
struct Indicators {
    quote: Vec<QuoteSeries>,
}

#[derive(Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Extract daily closes, oldest first, from a chart response body.
///
/// Null closes (e.g. a session still in progress) are skipped.
fn parse_chart(ticker: &Ticker, body: &str) -> Result<Vec<f64>, FetchError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;

    if let Some(err) = envelope.chart.error {
        return Err(FetchError::Provider(format!(
            "{}: {}",
            err.code, err.description
        )));
    }

    let series = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .and_then(|result| result.indicators.quote.into_iter().next())
        .ok_or_else(|| FetchError::NoData(ticker.to_string()))?;

    Ok(series.close.into_iter().flatten().collect())
}
