mod config;
mod consts;
mod error;
mod hook;
mod output;
mod pricing;
mod transcript;

use std::io::Read;

use config::Config;
use error::HookError;
use hook::{sanitize_output, sanitize_transcript_path, validate_hook_input};
use output::build_statusline;
use pricing::{calculate_cost, get_pricing};
use transcript::read_transcript;

fn main() {
    match run() {
        Ok(line) => println!("{line}"),
        Err(err) => {
            eprintln!("ccworth: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<String, HookError> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    let payload: serde_json::Value = serde_json::from_str(&raw)?;

    let transcript_path = validate_hook_input(&payload)?;
    let transcript_path = sanitize_transcript_path(transcript_path)?;

    let config = Config::load();
    let (totals, model) = read_transcript(&transcript_path)?;
    let pricing = get_pricing(model.as_deref().unwrap_or(consts::UNKNOWN));
    let cost = calculate_cost(&totals, pricing);

    Ok(sanitize_output(&build_statusline(&totals, cost, &config)))
}
