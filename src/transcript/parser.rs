//! Claude Code transcript parser
//!
//! Reads one session JSONL file and accumulates token usage. Lines without a
//! usage block (user turns, tool results) and malformed lines are skipped;
//! the hook must tolerate a transcript being appended to mid-read.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use serde::Deserialize;

use crate::error::HookError;

use super::types::UsageTotals;

#[derive(Debug, Deserialize)]
struct TranscriptLine {
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    id: Option<String>,
    model: Option<String>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    input_tokens: Option<i64>,
    output_tokens: Option<i64>,
    cache_creation_input_tokens: Option<i64>,
    cache_read_input_tokens: Option<i64>,
}

/// Sum usage across a transcript and report the model seen last.
///
/// Streaming retries repeat a message id with identical usage, so each id is
/// counted once. A transcript that does not exist yet yields zero totals.
pub(crate) fn read_transcript(path: &Path) -> Result<(UsageTotals, Option<String>), HookError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok((UsageTotals::default(), None));
        }
        Err(err) => return Err(HookError::Io(err)),
    };
    let reader = BufReader::new(file);

    let mut totals = UsageTotals::default();
    let mut model = None;
    let mut seen_ids: HashSet<String> = HashSet::new();

    for line in reader.lines() {
        let line = line.map_err(HookError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let Ok(entry) = serde_json::from_str::<TranscriptLine>(&line) else {
            continue;
        };
        let Some(message) = entry.message else {
            continue;
        };

        if let Some(name) = message.model {
            model = Some(name);
        }

        let Some(usage) = message.usage else {
            continue;
        };
        if let Some(id) = message.id
            && !seen_ids.insert(id)
        {
            continue;
        }

        totals.input_tokens += usage.input_tokens.unwrap_or(0);
        totals.output_tokens += usage.output_tokens.unwrap_or(0);
        totals.cache_creation += usage.cache_creation_input_tokens.unwrap_or(0);
        totals.cache_read += usage.cache_read_input_tokens.unwrap_or(0);
    }

    Ok((totals, model))
}
