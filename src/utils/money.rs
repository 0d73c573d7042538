// utils/money.rs
use bigdecimal::{rounding::RoundingMode, BigDecimal, FromPrimitive};

/// Even per-worker split of a booking payment, rounded to 2 decimal places.
pub fn split_per_worker(payment_amount: &BigDecimal, workers_needed: i32) -> BigDecimal {
    if workers_needed <= 0 {
        return BigDecimal::from(0);
    }
    (payment_amount / BigDecimal::from(workers_needed))
        .with_scale_round(2, RoundingMode::HalfUp)
}

pub fn amount_from_f64(amount: f64) -> Option<BigDecimal> {
    BigDecimal::from_f64(amount).map(|a| a.with_scale_round(2, RoundingMode::HalfUp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn splits_evenly_across_workers() {
        let amount = BigDecimal::from_str("3000").unwrap();
        assert_eq!(split_per_worker(&amount, 2), BigDecimal::from_str("1500").unwrap());
        assert_eq!(split_per_worker(&amount, 3), BigDecimal::from_str("1000").unwrap());
    }

    #[test]
    fn split_rounds_to_paise() {
        let amount = BigDecimal::from_str("100").unwrap();
        assert_eq!(split_per_worker(&amount, 3), BigDecimal::from_str("33.33").unwrap());
    }

    #[test]
    fn zero_workers_yields_zero() {
        let amount = BigDecimal::from_str("500").unwrap();
        assert_eq!(split_per_worker(&amount, 0), BigDecimal::from(0));
    }

    #[test]
    fn f64_amounts_keep_two_decimals() {
        assert_eq!(amount_from_f64(33.33).unwrap(), BigDecimal::from_str("33.33").unwrap());
        assert_eq!(amount_from_f64(1500.0).unwrap(), BigDecimal::from_str("1500").unwrap());
    }
}
