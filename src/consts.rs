/// Payload field naming the transcript file, as sent by the host.
pub(crate) const TRANSCRIPT_PATH_KEY: &str = "transcript_path";

/// Fallback value when the transcript carries no model name.
pub(crate) const UNKNOWN: &str = "unknown";

/// Default statusline prefix when no label is configured.
pub(crate) const DEFAULT_LABEL: &str = "CC";
