use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum HookError {
    #[error("Failed to read hook input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Hook input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hook input must be a JSON object")]
    NotAnObject,

    #[error("Missing transcript_path in hook input")]
    MissingTranscriptPath,

    #[error("transcript_path must be a string")]
    TranscriptPathType,

    #[error("transcript_path contains forbidden pattern {pattern:?}")]
    ForbiddenPattern { pattern: &'static str },

    #[error("Transcript path is not a regular file: {}", path.display())]
    NotARegularFile { path: PathBuf },

    #[error("Failed to inspect transcript path: {0}")]
    PathInspect(std::io::Error),
}
