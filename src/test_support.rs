//! Shared fixtures for unit tests.

use crate::data::Ticker;
use crate::market::{FetchError, Quote, QuoteFetcher};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Fresh, empty directory unique to this process and test name.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("stock_dashboard_tests")
        .join(format!("{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[derive(Default)]
struct StubState {
    closes: HashMap<String, Vec<f64>>,
    calls: usize,
}

/// Canned quote source. Clones share state so a test can keep a handle
/// after giving one away.
#[derive(Clone, Default)]
pub struct StubFetcher {
    state: Rc<RefCell<StubState>>,
}

impl StubFetcher {
    /// `(symbol, previous close, latest close)` triples
    pub fn with(entries: &[(&str, f64, f64)]) -> Self {
        let stub = Self::default();
        for &(symbol, previous, latest) in entries {
            stub.set(symbol, previous, latest);
        }
        stub
    }

    pub fn set(&self, symbol: &str, previous: f64, latest: f64) {
        self.state
            .borrow_mut()
            .closes
            .insert(symbol.to_string(), vec![previous, latest]);
    }

    pub fn remove(&self, symbol: &str) {
        self.state.borrow_mut().closes.remove(symbol);
    }

    pub fn calls(&self) -> usize {
        self.state.borrow().calls
    }
}

impl QuoteFetcher for StubFetcher {
    fn fetch(&self, ticker: &Ticker) -> Result<Quote, FetchError> {
        let mut state = self.state.borrow_mut();
        state.calls += 1;
        match state.closes.get(ticker.as_str()) {
            Some(closes) => Quote::from_closes(closes),
            None => Err(FetchError::Provider(format!("Not Found: No data found for {ticker}"))),
        }
    }
}
