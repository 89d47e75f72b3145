//! JSON Schema validation for flake-master settings

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

/// Get the embedded JSON schema for the settings file
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../docs/settings.schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

    jsonschema::draft7::new(&schema).map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))
}

/// Validate a settings value against the schema
pub fn validate_against_schema(settings: &Value) -> Result<()> {
    let schema = get_schema()?;

    let error_messages: Vec<String> = schema
        .iter_errors(settings)
        .map(|e| format!("  - {e}"))
        .collect();

    if !error_messages.is_empty() {
        return Err(anyhow!(
            "Settings validation failed:\n{}",
            error_messages.join("\n")
        ));
    }

    Ok(())
}
