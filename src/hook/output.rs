/// Neutralize shell-significant characters before the line reaches the host.
///
/// Newlines and carriage returns become spaces, backticks and dollar signs
/// are dropped, pipes become forward slashes. Idempotent: every output
/// character is already safe, so a second pass changes nothing.
pub(crate) fn sanitize_output(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            '\n' | '\r' => Some(' '),
            '`' | '$' => None,
            '|' => Some('/'),
            other => Some(other),
        })
        .collect()
}
