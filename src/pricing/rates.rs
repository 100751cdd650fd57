//! Static rate table for Anthropic model families.
//!
//! Rates are baked in at compile time; the hook runs offline and must never
//! fetch pricing at invocation time.

use super::types::ModelPricing;

const OPUS: ModelPricing = ModelPricing {
    input: 5e-6,   // $5/M
    output: 25e-6, // $25/M
    cache_write: 6.25e-6,
    cache_read: 0.5e-6,
};

const SONNET: ModelPricing = ModelPricing {
    input: 3e-6,
    output: 15e-6,
    cache_write: 3.75e-6,
    cache_read: 0.3e-6,
};

const HAIKU: ModelPricing = ModelPricing {
    input: 1e-6,
    output: 5e-6,
    cache_write: 1.25e-6,
    cache_read: 0.1e-6,
};

/// Family keys in check order; the first substring hit wins.
const FAMILIES: [(&str, &ModelPricing); 3] =
    [("opus", &OPUS), ("sonnet", &SONNET), ("haiku", &HAIKU)];

/// Resolve pricing for a model name.
///
/// Matching is a case-insensitive substring search, so full model ids like
/// `claude-opus-4-5-20251101` resolve to their family. Unknown names fall
/// back to sonnet rates rather than failing.
pub(crate) fn get_pricing(model: &str) -> &'static ModelPricing {
    let model = model.to_ascii_lowercase();
    for (family, pricing) in FAMILIES {
        if model.contains(family) {
            return pricing;
        }
    }
    &SONNET
}
