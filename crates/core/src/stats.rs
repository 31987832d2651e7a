//! Funnel and profitability arithmetic shared by the dashboard and reports.

/// Budget conversion rate as a percentage rounded to one decimal.
///
/// Defined as `approved / (approved + rejected) * 100`; `0.0` when no budget
/// has reached a terminal funnel status yet.
pub fn conversion_rate(approved: i64, rejected: i64) -> f64 {
    let decided = approved + rejected;
    if decided == 0 {
        return 0.0;
    }
    let pct = approved as f64 / decided as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Profit margin as a percentage of revenue; `0.0` when there is no revenue.
pub fn margin(revenue: f64, profit: f64) -> f64 {
    if revenue > 0.0 {
        profit / revenue * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_rate_zero_denominator() {
        assert_eq!(conversion_rate(0, 0), 0.0);
    }

    #[test]
    fn test_conversion_rate_three_approved_one_rejected() {
        assert_eq!(conversion_rate(3, 1), 75.0);
    }

    #[test]
    fn test_conversion_rate_rounds_to_one_decimal() {
        // 1/3 => 33.333... => 33.3
        assert_eq!(conversion_rate(1, 2), 33.3);
        // 2/3 => 66.666... => 66.7
        assert_eq!(conversion_rate(2, 1), 66.7);
    }

    #[test]
    fn test_margin() {
        assert_eq!(margin(200.0, 50.0), 25.0);
        assert_eq!(margin(0.0, 0.0), 0.0);
    }
}
