//! Quote Module
//! Latest price and percent change derived from daily closes.

use super::FetchError;

/// Latest price and percent change against the previous close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub price: f64,
    pub change_percent: f64,
}

impl Quote {
    /// Build a quote from daily closes ordered oldest to newest.
    ///
    /// Uses the last two closes only; both fields are rounded to 2 decimals.
    pub fn from_closes(closes: &[f64]) -> Result<Self, FetchError> {
        let [.., previous, latest] = closes else {
            return Err(FetchError::InsufficientHistory(closes.len()));
        };
        if *previous == 0.0 || !previous.is_finite() {
            return Err(FetchError::InvalidClose(*previous));
        }
        if !latest.is_finite() {
            return Err(FetchError::InvalidClose(*latest));
        }

        let change_percent = (latest - previous) / previous * 100.0;

        Ok(Self {
            price: round2(*latest),
            change_percent: round2(change_percent),
        })
    }

    /// Strictly positive change
    pub fn is_gain(&self) -> bool {
        self.change_percent > 0.0
    }

    pub fn arrow(&self) -> &'static str {
        if self.is_gain() {
            "▲"
        } else {
            "▼"
        }
    }

    pub fn format_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn format_change(&self) -> String {
        format!("{} {:.2}%", self.arrow(), self.change_percent)
    }
}

/// Halves go to the even neighbour
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_of_ten_percent() {
        let quote = Quote::from_closes(&[100.0, 110.0]).unwrap();
        assert_eq!(quote.price, 110.0);
        assert_eq!(quote.change_percent, 10.0);
        assert!(quote.is_gain());
    }

    #[test]
    fn loss_is_rounded_to_two_places() {
        let quote = Quote::from_closes(&[110.0, 100.0]).unwrap();
        assert_eq!(quote.price, 100.0);
        assert_eq!(quote.change_percent, -9.09);
        assert!(!quote.is_gain());
    }

    #[test]
    fn only_last_two_closes_matter() {
        let quote = Quote::from_closes(&[1.0, 2.0, 3.0, 200.0, 201.234]).unwrap();
        assert_eq!(quote.price, 201.23);
        assert_eq!(quote.change_percent, 0.62);
    }

    #[test]
    fn needs_two_closes() {
        assert!(matches!(
            Quote::from_closes(&[]),
            Err(FetchError::InsufficientHistory(0))
        ));
        assert!(matches!(
            Quote::from_closes(&[42.0]),
            Err(FetchError::InsufficientHistory(1))
        ));
    }

    #[test]
    fn zero_previous_close_is_rejected() {
        assert!(matches!(
            Quote::from_closes(&[0.0, 5.0]),
            Err(FetchError::InvalidClose(_))
        ));
    }

    #[test]
    fn latest_non_finite_close_is_reported() {
        match Quote::from_closes(&[100.0, f64::NAN]) {
            Err(FetchError::InvalidClose(close)) => assert!(close.is_nan()),
            other => panic!("unexpected result: {other:?}"),
        }
        match Quote::from_closes(&[f64::INFINITY, 100.0]) {
            Err(FetchError::InvalidClose(close)) => assert_eq!(close, f64::INFINITY),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn halves_round_to_even() {
        let quote = Quote::from_closes(&[100.0, 100.125]).unwrap();
        assert_eq!(quote.price, 100.12);

        let quote = Quote::from_closes(&[100.0, 100.375]).unwrap();
        assert_eq!(quote.price, 100.38);
    }

    #[test]
    fn flat_change_shows_down_arrow() {
        let quote = Quote::from_closes(&[50.0, 50.0]).unwrap();
        assert_eq!(quote.arrow(), "▼");
        assert_eq!(quote.format_change(), "▼ 0.00%");
    }

    #[test]
    fn display_formatting() {
        let quote = Quote {
            price: 187.5,
            change_percent: 1.234,
        };
        assert_eq!(quote.format_price(), "$187.50");
        assert_eq!(quote.format_change(), "▲ 1.23%");
    }
}
