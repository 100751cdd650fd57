/// Token usage accumulated over one transcript
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct UsageTotals {
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
    pub(crate) cache_creation: i64,
    pub(crate) cache_read: i64,
}

impl UsageTotals {
    pub(crate) fn cache_tokens(&self) -> i64 {
        self.cache_creation + self.cache_read
    }
}
