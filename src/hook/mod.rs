mod input;
mod output;
mod path;

pub(crate) use input::validate_hook_input;
pub(crate) use output::sanitize_output;
pub(crate) use path::sanitize_transcript_path;
