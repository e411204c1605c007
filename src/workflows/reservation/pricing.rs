use chrono::NaiveDateTime;
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Nights between two instants, rounding any partial day up.
pub fn nights(checkin: NaiveDateTime, checkout: NaiveDateTime) -> i64 {
    let millis = (checkout - checkin).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

pub fn total_price(price_per_day: f64, nights: i64) -> f64 {
    price_per_day * nights as f64
}

/// Price breakdown shown before a booking is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: i64,
    pub price_per_day: f64,
    pub total: f64,
}

impl Quote {
    pub fn new(checkin: NaiveDateTime, checkout: NaiveDateTime, price_per_day: f64) -> Self {
        let nights = nights(checkin, checkout);
        Self {
            nights,
            price_per_day,
            total: total_price(price_per_day, nights),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::dates::{midnight, parse_instant};
    use chrono::{Duration, NaiveDate};

    fn at(raw: &str) -> NaiveDateTime {
        parse_instant(raw).expect("valid instant")
    }

    #[test]
    fn whole_days_count_exactly() {
        assert_eq!(nights(at("2024-01-01"), at("2024-01-03")), 2);
        assert_eq!(nights(at("2024-01-01"), at("2024-01-01")), 0);
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(nights(at("2024-01-01T00:00:00"), at("2024-01-02T00:00:01")), 2);
        assert_eq!(nights(at("2024-01-01T23:00:00"), at("2024-01-02T01:00:00")), 1);
    }

    #[test]
    fn reversed_ranges_round_toward_zero() {
        let start = midnight(NaiveDate::from_ymd_opt(2024, 1, 3).expect("valid date"));
        assert_eq!(nights(start, start - Duration::hours(36)), -1);
    }

    #[test]
    fn quote_multiplies_nightly_rate() {
        let quote = Quote::new(at("2024-01-01"), at("2024-01-04"), 1250.5);
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total, 3751.5);
        assert_eq!(total_price(999.0, 0), 0.0);
    }
}
