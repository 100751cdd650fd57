use serde_json::Value;

use crate::consts::TRANSCRIPT_PATH_KEY;
use crate::error::HookError;

/// Structural validation of the untrusted hook payload.
///
/// Returns the raw `transcript_path` string untouched; path hardening is a
/// separate step. No filesystem access happens here.
pub(crate) fn validate_hook_input(payload: &Value) -> Result<&str, HookError> {
    let object = payload.as_object().ok_or(HookError::NotAnObject)?;

    match object.get(TRANSCRIPT_PATH_KEY) {
        None => Err(HookError::MissingTranscriptPath),
        Some(value) if is_falsy(value) => Err(HookError::MissingTranscriptPath),
        Some(Value::String(path)) => Ok(path.as_str()),
        Some(_) => Err(HookError::TranscriptPathType),
    }
}

/// A field holding a falsy value counts as missing; the type error is
/// reserved for values that pass this check but are not strings.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
