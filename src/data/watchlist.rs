//! Watchlist Store Module
//! Ordered, duplicate-free ticker list persisted as a JSON array of strings.

use super::ticker::{Ticker, TickerError};
use crate::market::{FetchError, Quote, QuoteFetcher};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error(transparent)]
    Ticker(#[from] TickerError),
    #[error("'{0}' is already in your dashboard.")]
    AlreadyExists(Ticker),
    #[error("'{ticker}' is invalid.")]
    InvalidTicker {
        ticker: Ticker,
        #[source]
        source: FetchError,
    },
    #[error("No entry at position {index} (watchlist has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Failed to write watchlist: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode watchlist: {0}")]
    Json(#[from] serde_json::Error),
}

impl WatchlistError {
    /// Errors that leave the file and the in-memory list out of step
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_))
    }
}

/// Direction for reordering an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// In-memory watchlist bound to its backing file.
#[derive(Debug)]
pub struct Watchlist {
    path: PathBuf,
    tickers: Vec<Ticker>,
}

impl Watchlist {
    /// Empty watchlist that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tickers: Vec::new(),
        }
    }

    /// Load the watchlist stored at `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty list. Invalid
    /// and repeated entries are dropped.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No watchlist at {}, starting empty", path.display());
                return Self::new(path);
            }
            Err(e) => {
                warn!("Cannot read {}: {}; starting empty", path.display(), e);
                return Self::new(path);
            }
        };

        let entries: Vec<String> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring malformed {}: {}", path.display(), e);
                return Self::new(path);
            }
        };

        let mut seen = HashSet::new();
        let mut tickers = Vec::with_capacity(entries.len());
        for entry in entries {
            match Ticker::parse(&entry) {
                Ok(ticker) if seen.insert(ticker.clone()) => tickers.push(ticker),
                Ok(ticker) => warn!("Dropping duplicate entry {}", ticker),
                Err(e) => warn!("Dropping entry {:?}: {}", entry, e),
            }
        }

        info!("Loaded {} tickers from {}", tickers.len(), path.display());
        Self { path, tickers }
    }

    /// Overwrite the backing file with the current order.
    pub fn save(&self) -> Result<(), WatchlistError> {
        let json = serde_json::to_string(&self.tickers)?;
        fs::write(&self.path, json)?;
        debug!("Saved {} tickers to {}", self.tickers.len(), self.path.display());
        Ok(())
    }

    /// Validate `input` and append it if the provider knows it.
    ///
    /// Returns the quote fetched during validation.
    pub fn add(
        &mut self,
        input: &str,
        fetcher: &dyn QuoteFetcher,
    ) -> Result<Quote, WatchlistError> {
        let ticker = Ticker::parse(input)?;
        if self.contains(&ticker) {
            return Err(WatchlistError::AlreadyExists(ticker));
        }

        let quote = match fetcher.fetch(&ticker) {
            Ok(quote) => quote,
            Err(source) => return Err(WatchlistError::InvalidTicker { ticker, source }),
        };

        info!("Added {}", ticker);
        self.tickers.push(ticker);
        self.save()?;
        Ok(quote)
    }

    /// Swap the entry at `index` with its neighbour.
    ///
    /// Returns `false` without touching the file when there is no neighbour.
    pub fn move_entry(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> Result<bool, WatchlistError> {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };
        let len = self.tickers.len();
        let Some(target) = target.filter(|&t| t < len && index < len) else {
            return Ok(false);
        };

        self.tickers.swap(index, target);
        self.save()?;
        Ok(true)
    }

    /// Remove and return the entry at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Ticker, WatchlistError> {
        if index >= self.tickers.len() {
            return Err(WatchlistError::IndexOutOfRange {
                index,
                len: self.tickers.len(),
            });
        }

        let removed = self.tickers.remove(index);
        info!("Removed {}", removed);
        self.save()?;
        Ok(removed)
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.tickers.contains(ticker)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scratch_dir, StubFetcher};

    fn symbols(list: &Watchlist) -> Vec<&str> {
        list.tickers().iter().map(Ticker::as_str).collect()
    }

    fn seeded(name: &str, entries: &[&str]) -> Watchlist {
        let path = scratch_dir(name).join("stocks.json");
        fs::write(&path, serde_json::to_string(entries).unwrap()).unwrap();
        Watchlist::load(path)
    }

    #[test]
    fn missing_file_loads_empty() {
        let list = Watchlist::load(scratch_dir("missing").join("stocks.json"));
        assert!(list.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let path = scratch_dir("corrupt").join("stocks.json");
        fs::write(&path, "{not json").unwrap();
        assert!(Watchlist::load(&path).is_empty());

        fs::write(&path, r#"{"tickers": ["AAPL"]}"#).unwrap();
        assert!(Watchlist::load(&path).is_empty());
    }

    #[test]
    fn load_drops_duplicates_and_invalid_entries() {
        let list = seeded("dedupe", &["aapl", "MSFT", "AAPL", "BRK.B", ""]);
        assert_eq!(symbols(&list), ["AAPL", "MSFT"]);
    }

    #[test]
    fn save_then_load_round_trips_order() {
        let list = seeded("roundtrip", &["TSLA", "AAPL", "NVDA"]);
        list.save().unwrap();

        assert_eq!(
            fs::read_to_string(list.path()).unwrap(),
            r#"["TSLA","AAPL","NVDA"]"#
        );
        let reloaded = Watchlist::load(list.path());
        assert_eq!(symbols(&reloaded), ["TSLA", "AAPL", "NVDA"]);
    }

    #[test]
    fn add_appends_and_persists() {
        let mut list = seeded("add", &["AAPL"]);
        let fetcher = StubFetcher::with(&[("MSFT", 100.0, 110.0)]);

        let quote = list.add(" msft ", &fetcher).unwrap();

        assert_eq!(quote.change_percent, 10.0);
        assert_eq!(list.len(), 2);
        assert_eq!(symbols(&list), ["AAPL", "MSFT"]);
        assert_eq!(symbols(&Watchlist::load(list.path())), ["AAPL", "MSFT"]);
    }

    #[test]
    fn add_duplicate_is_rejected_without_fetch() {
        let mut list = seeded("dup", &["AAPL"]);
        let fetcher = StubFetcher::with(&[("AAPL", 1.0, 2.0)]);

        let err = list.add("aapl", &fetcher).unwrap_err();

        assert!(matches!(err, WatchlistError::AlreadyExists(_)));
        assert_eq!(err.to_string(), "'AAPL' is already in your dashboard.");
        assert_eq!(fetcher.calls(), 0);
        assert_eq!(symbols(&list), ["AAPL"]);
    }

    #[test]
    fn add_bad_input_is_rejected_without_fetch() {
        let mut list = seeded("badinput", &["AAPL"]);
        let fetcher = StubFetcher::default();

        assert!(matches!(
            list.add("   ", &fetcher),
            Err(WatchlistError::Ticker(TickerError::Empty))
        ));
        assert!(matches!(
            list.add("BRK-B", &fetcher),
            Err(WatchlistError::Ticker(TickerError::NotAlphanumeric(_)))
        ));
        assert_eq!(fetcher.calls(), 0);
        assert_eq!(symbols(&list), ["AAPL"]);
    }

    #[test]
    fn add_unknown_ticker_is_invalid() {
        let mut list = seeded("unknown", &[]);
        let fetcher = StubFetcher::default();

        let err = list.add("ZZZZ", &fetcher).unwrap_err();

        assert_eq!(err.to_string(), "'ZZZZ' is invalid.");
        assert!(list.is_empty());
        assert!(Watchlist::load(list.path()).is_empty());
    }

    #[test]
    fn move_up_then_down_restores_order() {
        let mut list = seeded("move", &["A", "B", "C"]);

        assert!(list.move_entry(2, Direction::Up).unwrap());
        assert_eq!(symbols(&list), ["A", "C", "B"]);
        assert!(list.move_entry(1, Direction::Down).unwrap());
        assert_eq!(symbols(&list), ["A", "B", "C"]);
        assert_eq!(symbols(&Watchlist::load(list.path())), ["A", "B", "C"]);
    }

    #[test]
    fn move_at_boundaries_is_noop() {
        let mut list = seeded("bounds", &["A", "B"]);

        assert!(!list.move_entry(0, Direction::Up).unwrap());
        assert!(!list.move_entry(1, Direction::Down).unwrap());
        assert!(!list.move_entry(7, Direction::Up).unwrap());
        assert_eq!(symbols(&list), ["A", "B"]);
    }

    #[test]
    fn delete_shifts_later_entries() {
        let mut list = seeded("delete", &["A", "B", "C", "D"]);

        assert_eq!(list.delete(1).unwrap().as_str(), "B");
        assert_eq!(symbols(&list), ["A", "C", "D"]);
        assert_eq!(symbols(&Watchlist::load(list.path())), ["A", "C", "D"]);
    }

    #[test]
    fn delete_out_of_range_leaves_list_alone() {
        let mut list = seeded("delete_oob", &["A"]);
        assert!(matches!(
            list.delete(3),
            Err(WatchlistError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(symbols(&list), ["A"]);
    }

    #[test]
    fn write_failure_is_a_persistence_error() {
        // Parent directory does not exist
        let path = scratch_dir("unwritable").join("nope").join("stocks.json");
        let list = Watchlist::new(path);
        let err = list.save().unwrap_err();
        assert!(err.is_persistence());
    }
}
