use crate::config::Config;
use crate::consts::DEFAULT_LABEL;
use crate::pricing::format_cost;
use crate::transcript::UsageTotals;

/// Build the single statusline for the host.
/// Format: "CC: $X.XXXX | In: N | Out: N | Cache: Nw/Nr"
///
/// The caller still runs the result through the output sanitizer, which
/// rewrites the separators for shell safety.
pub(crate) fn build_statusline(totals: &UsageTotals, cost: f64, config: &Config) -> String {
    let label = config.label.as_deref().unwrap_or(DEFAULT_LABEL);
    let mut parts = vec![format!("{}: {}", label, format_cost(cost))];

    if !config.no_breakdown {
        parts.push(format!("In: {}", totals.input_tokens));
        parts.push(format!("Out: {}", totals.output_tokens));
        if totals.cache_tokens() > 0 {
            parts.push(format!(
                "Cache: {}w/{}r",
                totals.cache_creation, totals.cache_read
            ));
        }
    }

    parts.join(" | ")
}
