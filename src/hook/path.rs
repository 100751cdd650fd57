//! Transcript path hardening.
//!
//! The path string arrives from an untrusted payload and may later be
//! interpolated where traversal or shell expansion would matter, so the
//! deny-list rejects its patterns anywhere in the string, not only at
//! segment boundaries.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::HookError;

const FORBIDDEN_PATTERNS: [&str; 4] = ["..", "~", "$", "`"];

/// Validate and canonicalize the transcript path.
///
/// Rejects any occurrence of `..`, `~`, `$` or backtick, then resolves to an
/// absolute path with symlinks followed. An existing path must be a regular
/// file; a path that does not exist yet is accepted and absolutized lexically
/// (the transcript may not have been flushed when the hook fires).
pub(crate) fn sanitize_transcript_path(raw: &str) -> Result<PathBuf, HookError> {
    for pattern in FORBIDDEN_PATTERNS {
        if raw.contains(pattern) {
            return Err(HookError::ForbiddenPattern { pattern });
        }
    }

    // Unreachable while "~" is deny-listed; kept so a relaxed pattern set
    // cannot reintroduce literal-tilde paths.
    let expanded = expand_home(raw);

    match fs::canonicalize(&expanded) {
        Ok(resolved) => {
            let meta = fs::metadata(&resolved).map_err(HookError::PathInspect)?;
            if !meta.is_file() {
                return Err(HookError::NotARegularFile { path: resolved });
            }
            Ok(resolved)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => absolutize(&expanded),
        Err(err) => Err(HookError::PathInspect(err)),
    }
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

/// Lexical absolutization for paths that do not exist yet. `..` cannot occur
/// here (already rejected), so only `.` segments need collapsing. A cwd
/// lookup failure is a validation failure, never a relative result.
fn absolutize(path: &Path) -> Result<PathBuf, HookError> {
    let mut out = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().map_err(HookError::PathInspect)?
    };
    for component in path.components() {
        match component {
            Component::CurDir => {}
            other => out.push(other),
        }
    }
    Ok(out)
}
