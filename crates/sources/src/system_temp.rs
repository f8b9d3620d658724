//! Thermal zone temperature collector
//!
//! Reads the kernel's thermal zone file, which holds the temperature in
//! millidegrees Celsius as a single integer.

use lcd_sens_core::constants::MILLIDEGREES_PER_DEGREE;
use lcd_sens_core::CollectionError;
use std::path::Path;

/// Read the sensor file and format it in whole degrees
pub async fn collect(path: &Path) -> Result<String, CollectionError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CollectionError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let millidegrees = parse_millidegrees(&raw)?;
    Ok(format_temperature(millidegrees))
}

/// Parse the integer reading, ignoring surrounding whitespace
pub fn parse_millidegrees(raw: &str) -> Result<i64, CollectionError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|e| CollectionError::Parse {
        value: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// `round(raw / 1000)` followed by `°C`
pub fn format_temperature(millidegrees: i64) -> String {
    let celsius = (millidegrees as f64 / MILLIDEGREES_PER_DEGREE).round();
    format!("{}°C", celsius as i64)
}
