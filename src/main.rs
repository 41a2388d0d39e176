//! Stock Dashboard - Desktop Stock Watchlist
//!
//! Shows the latest price and daily change for a user-maintained list of
//! tickers, refreshed every five minutes.

mod config;
mod dashboard;
mod data;
mod gui;
mod market;
#[cfg(test)]
mod test_support;

use config::DashboardConfig;
use dashboard::Dashboard;
use data::Watchlist;
use eframe::egui;
use gui::DashboardApp;
use market::YahooFetcher;

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = DashboardConfig::default();
    let fetcher = YahooFetcher::new(&config.provider_base_url, config.request_timeout)?;
    let watchlist = Watchlist::load(&config.watchlist_path);
    let dashboard = Dashboard::new(watchlist, Box::new(fetcher), config.refresh_interval);

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.window_size)
            .with_title(config.window_title.as_str()),
        ..Default::default()
    };

    // Run the application
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, dashboard, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
