//! Dashboard State
//! Owns the watchlist, the quote source, rendered rows, the current view and
//! the refresh schedule. UI code drives it and displays the notices it returns.

use crate::data::{Direction, Ticker, Watchlist, WatchlistError};
use crate::market::{Quote, QuoteFetcher};
use log::{info, warn};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to save watchlist: {0}")]
    Persistence(#[source] WatchlistError),
}

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Message to show the user in a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// One rendered line of the main view
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    pub ticker: Ticker,
    pub quote: Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main,
    Edit,
}

/// Recurring deadline polled from the event loop.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshTimer {
    /// Unarmed timer; nothing is due until it is scheduled.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Next deadline is one interval after `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.schedule_at(now + self.interval);
    }

    pub fn schedule_at(&mut self, deadline: Instant) {
        self.next_due = Some(deadline);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// `None` once cancelled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Application state shared by every view.
pub struct Dashboard {
    watchlist: Watchlist,
    fetcher: Box<dyn QuoteFetcher>,
    rows: Vec<QuoteRow>,
    view: View,
    timer: RefreshTimer,
}

impl Dashboard {
    pub fn new(
        watchlist: Watchlist,
        fetcher: Box<dyn QuoteFetcher>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            watchlist,
            fetcher,
            rows: Vec::new(),
            view: View::Main,
            timer: RefreshTimer::new(refresh_interval),
        }
    }

    /// Arm the timer so the first tick performs the initial refresh.
    pub fn start(&mut self, now: Instant) {
        self.timer.schedule_at(now);
    }

    /// Refresh if the timer has fired.
    pub fn tick(&mut self, now: Instant) -> Option<Notice> {
        if self.timer.is_due(now) {
            self.refresh(now)
        } else {
            None
        }
    }

    /// Re-fetch every quote, one ticker at a time, and re-arm the timer.
    pub fn refresh(&mut self, now: Instant) -> Option<Notice> {
        self.rows.clear();
        let mut failures = Vec::new();

        for ticker in self.watchlist.tickers() {
            match self.fetcher.fetch(ticker) {
                Ok(quote) => self.rows.push(QuoteRow {
                    ticker: ticker.clone(),
                    quote,
                }),
                Err(e) => {
                    warn!("Fetch failed for {}: {}", ticker, e);
                    failures.push(format!("Error fetching data for {}: {}", ticker, e));
                }
            }
        }

        self.timer.schedule(now);
        info!(
            "Refreshed {}/{} quotes, next in {}s",
            self.rows.len(),
            self.watchlist.len(),
            self.timer.interval().as_secs()
        );

        if failures.is_empty() {
            None
        } else {
            Some(Notice::error("Data Fetch Error", failures.join("\n")))
        }
    }

    /// Validate and append a ticker typed by the user.
    pub fn add_ticker(&mut self, input: &str) -> Result<Option<Notice>, DashboardError> {
        match self.watchlist.add(input, &*self.fetcher) {
            Ok(quote) => {
                if let Some(ticker) = self.watchlist.tickers().last() {
                    self.rows.push(QuoteRow {
                        ticker: ticker.clone(),
                        quote,
                    });
                }
                Ok(None)
            }
            Err(e) => Self::rejection(e).map(Some),
        }
    }

    pub fn move_ticker(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> Result<(), DashboardError> {
        if self
            .watchlist
            .move_entry(index, direction)
            .map_err(DashboardError::Persistence)?
        {
            self.sync_rows();
        }
        Ok(())
    }

    pub fn delete_ticker(&mut self, index: usize) -> Result<Option<Notice>, DashboardError> {
        match self.watchlist.delete(index) {
            Ok(_) => {
                self.sync_rows();
                Ok(None)
            }
            Err(e) => Self::rejection(e).map(Some),
        }
    }

    pub fn open_editor(&mut self) {
        self.view = View::Edit;
    }

    /// Leave the edit view; returning to the main view refreshes everything.
    pub fn close_editor(&mut self, now: Instant) -> Option<Notice> {
        if self.view != View::Edit {
            return None;
        }
        self.view = View::Main;
        self.refresh(now)
    }

    /// Stop the timer and write the list out one last time.
    pub fn shutdown(&mut self) -> Result<(), DashboardError> {
        self.timer.cancel();
        self.watchlist.save().map_err(DashboardError::Persistence)?;
        info!("Saved watchlist to {}", self.watchlist.path().display());
        Ok(())
    }

    pub fn rows(&self) -> &[QuoteRow] {
        &self.rows
    }

    pub fn tickers(&self) -> &[Ticker] {
        self.watchlist.tickers()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn time_until_refresh(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Keep rows in watchlist order after a local edit
    fn sync_rows(&mut self) {
        let order = self.watchlist.tickers();
        self.rows.retain(|row| order.contains(&row.ticker));
        self.rows.sort_by_key(|row| order.iter().position(|t| t == &row.ticker));
    }

    fn rejection(err: WatchlistError) -> Result<Notice, DashboardError> {
        let notice = match &err {
            WatchlistError::Ticker(_) => Notice::error("Invalid Input", err.to_string()),
            WatchlistError::AlreadyExists(_) => Notice::info("Stock Exists", err.to_string()),
            WatchlistError::InvalidTicker { source, .. } => {
                Notice::error("Invalid Ticker", format!("{}\n\n{}", err, source))
            }
            WatchlistError::IndexOutOfRange { .. } => {
                Notice::warning("Edit Stocks", err.to_string())
            }
            WatchlistError::Io(_) | WatchlistError::Json(_) => {
                return Err(DashboardError::Persistence(err));
            }
        };
        Ok(notice)
    }
}
