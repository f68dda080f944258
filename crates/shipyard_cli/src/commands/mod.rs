//! Subcommand implementations.

use serde::Serialize;

pub mod containers;
pub mod demo;
pub mod ships;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Parses `LABEL:VALUE`, splitting on the last `:` so labels may contain one.
pub fn parse_labeled_value(input: &str) -> Result<(String, f64), String> {
    let (label, value) = input
        .rsplit_once(':')
        .ok_or_else(|| format!("expected LABEL:VALUE, got `{input}`"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("missing label in `{input}`"));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid number in `{input}`: {err}"))?;
    Ok((label.to_string(), value))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
