mod cost;
mod rates;
mod types;

pub(crate) use cost::{calculate_cost, format_cost};
pub(crate) use rates::get_pricing;
pub(crate) use types::ModelPricing;
