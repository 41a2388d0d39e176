//! Dashboard Configuration
//! Paths, intervals and window settings used to assemble the application.

use std::path::PathBuf;
use std::time::Duration;

/// Quotes are refreshed every 5 minutes
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(300);
/// Watchlist file, relative to the working directory
pub const WATCHLIST_FILE: &str = "stocks.json";
/// Yahoo Finance chart API host
pub const PROVIDER_BASE_URL: &str = "https://query1.finance.yahoo.com";
/// Per-request timeout for the market data provider
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one dashboard session.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub watchlist_path: PathBuf,
    pub refresh_interval: Duration,
    pub provider_base_url: String,
    pub request_timeout: Duration,
    pub window_title: String,
    /// Main window size in points
    pub window_size: [f32; 2],
    /// Edit window size in points
    pub editor_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            watchlist_path: PathBuf::from(WATCHLIST_FILE),
            refresh_interval: REFRESH_INTERVAL,
            provider_base_url: PROVIDER_BASE_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            window_title: "Stock Dashboard".to_string(),
            window_size: [250.0, 400.0],
            editor_size: [300.0, 400.0],
        }
    }
}
