//! Market module - Quote retrieval and arithmetic

mod fetcher;
mod quote;

pub use fetcher::{FetchError, QuoteFetcher, YahooFetcher};
pub use quote::Quote;
