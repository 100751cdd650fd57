/// Model pricing info (per token, not per million)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ModelPricing {
    pub(crate) input: f64,
    pub(crate) output: f64,
    pub(crate) cache_write: f64,
    pub(crate) cache_read: f64,
}
