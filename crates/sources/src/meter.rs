//! Energy meter readings from the ioBroker key-value store
//!
//! The store is queried through its CLI as `<tool> state get <object-id>`,
//! which prints the state object as JSON. Only its `val` field is shown.

use crate::command::run_command;
use lcd_sens_core::CollectionError;
use serde_json::Value;
use std::time::Duration;

/// Query one object and format it as `"<label> <val>"`
pub async fn collect(
    tool: &str,
    object_id: &str,
    label: &str,
    timeout: Duration,
) -> Result<String, CollectionError> {
    let args = ["state".to_string(), "get".to_string(), object_id.to_string()];
    let output = run_command(tool, &args, timeout).await?;
    let value = parse_state_value(&output)?;
    Ok(format!("{} {}", label, value))
}

/// Extract `val` from a state object, rendered as display text
pub fn parse_state_value(json: &str) -> Result<String, CollectionError> {
    let state: Value = serde_json::from_str(json.trim())?;
    match state.get("val") {
        None | Some(Value::Null) => Err(CollectionError::MissingField("val")),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
    }
}
