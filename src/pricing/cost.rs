use crate::transcript::UsageTotals;

use super::types::ModelPricing;

/// Total cost in USD for the given usage at the given rates.
///
/// Pure and unrounded; rounding happens only at display time.
pub(crate) fn calculate_cost(totals: &UsageTotals, pricing: &ModelPricing) -> f64 {
    totals.input_tokens as f64 * pricing.input
        + totals.output_tokens as f64 * pricing.output
        + totals.cache_creation as f64 * pricing.cache_write
        + totals.cache_read as f64 * pricing.cache_read
}

/// Format a cost for display.
///
/// Costs below a hundredth of a cent get 6 decimal places so tiny sessions
/// do not render as $0.0000.
pub(crate) fn format_cost(cost: f64) -> String {
    if cost.abs() < 0.0001 {
        format!("${:.6}", cost)
    } else {
        format!("${:.4}", cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::get_pricing;

    fn totals(input: i64, output: i64, cache_creation: i64, cache_read: i64) -> UsageTotals {
        UsageTotals {
            input_tokens: input,
            output_tokens: output,
            cache_creation,
            cache_read,
        }
    }

    #[test]
    fn sonnet_cost_with_cache() {
        let cost = calculate_cost(&totals(1000, 500, 200, 100), get_pricing("sonnet"));
        // 1000*3e-6 + 500*15e-6 + 200*3.75e-6 + 100*0.3e-6 = 0.01128
        assert!((cost - 0.01128).abs() < 1e-9);
    }

    #[test]
    fn opus_cost_without_cache() {
        let cost = calculate_cost(&totals(1000, 500, 0, 0), get_pricing("opus"));
        assert!((cost - 0.0175).abs() < 1e-9);
    }

    #[test]
    fn cache_only_cost() {
        let cost = calculate_cost(&totals(0, 0, 1000, 1000), get_pricing("sonnet"));
        assert!((cost - 0.00405).abs() < 1e-9);
    }

    #[test]
    fn zero_totals_cost_exactly_zero() {
        let cost = calculate_cost(&UsageTotals::default(), get_pricing("sonnet"));
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn cost_is_linear_in_each_field() {
        let pricing = get_pricing("haiku");
        let single = calculate_cost(&totals(1, 0, 0, 0), pricing);
        let many = calculate_cost(&totals(1000, 0, 0, 0), pricing);
        assert!((many - single * 1000.0).abs() < 1e-12);
    }

    #[test]
    fn format_small_cost_uses_six_decimals() {
        assert_eq!(format_cost(0.000056), "$0.000056");
        assert_eq!(format_cost(0.0000001), "$0.000000");
    }

    #[test]
    fn format_regular_cost_uses_four_decimals() {
        assert_eq!(format_cost(0.0123), "$0.0123");
        assert_eq!(format_cost(1.2345), "$1.2345");
    }

    #[test]
    fn format_zero_cost() {
        assert_eq!(format_cost(0.0), "$0.000000");
    }

    #[test]
    fn format_threshold_boundary() {
        assert_eq!(format_cost(0.0001), "$0.0001");
        assert_eq!(format_cost(0.00009), "$0.000090");
    }
}
