//! Data module - Ticker symbols and the persisted watchlist

mod ticker;
mod watchlist;

pub use ticker::Ticker;
pub use watchlist::{Direction, Watchlist, WatchlistError};
