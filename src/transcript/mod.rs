mod parser;
mod types;

pub(crate) use parser::read_transcript;
pub(crate) use types::UsageTotals;
