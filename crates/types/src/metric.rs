//! Metric keys, values and per-cycle snapshots

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Text shown in place of a metric that could not be collected
pub const UNAVAILABLE_PLACEHOLDER: &str = "N/A";

/// Identifier of a metric the display can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
    Host,
    Ip,
    Wifi,
    Cpu,
    Mem,
    Disk,
    Temp,
    Meter1,
    Meter2,
    DateTimeNow,
}

impl MetricKey {
    /// Every metric, in display order of the `--print` listing
    pub const ALL: [MetricKey; 10] = [
        MetricKey::Host,
        MetricKey::Ip,
        MetricKey::Wifi,
        MetricKey::Cpu,
        MetricKey::Mem,
        MetricKey::Disk,
        MetricKey::Temp,
        MetricKey::Meter1,
        MetricKey::Meter2,
        MetricKey::DateTimeNow,
    ];

    /// Stable lower-case identifier used in logs
    pub fn id(&self) -> &'static str {
        match self {
            MetricKey::Host => "host",
            MetricKey::Ip => "ip",
            MetricKey::Wifi => "wifi",
            MetricKey::Cpu => "cpu",
            MetricKey::Mem => "mem",
            MetricKey::Disk => "disk",
            MetricKey::Temp => "temp",
            MetricKey::Meter1 => "meter1",
            MetricKey::Meter2 => "meter2",
            MetricKey::DateTimeNow => "datetimenow",
        }
    }

    /// Human-readable description of where the value comes from
    pub fn description(&self) -> &'static str {
        match self {
            MetricKey::Host => "Node name and kernel release",
            MetricKey::Ip => "Address of <hostname>.local",
            MetricKey::Wifi => "WiFi signal level in dBm",
            MetricKey::Cpu => "1 minute load average per core",
            MetricKey::Mem => "Memory in use",
            MetricKey::Disk => "Root filesystem usage",
            MetricKey::Temp => "Thermal zone temperature",
            MetricKey::Meter1 => "Energy meter 1 reading",
            MetricKey::Meter2 => "Energy meter 2 reading",
            MetricKey::DateTimeNow => "Local date and time",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A formatted metric reading, or the marker for a failed collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricValue {
    Text(String),
    Unavailable,
}

impl MetricValue {
    pub fn text(value: impl Into<String>) -> Self {
        MetricValue::Text(value.into())
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MetricValue::Text(_))
    }

    /// The string drawn on the panel
    pub fn as_display(&self) -> &str {
        match self {
            MetricValue::Text(text) => text,
            MetricValue::Unavailable => UNAVAILABLE_PLACEHOLDER,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}

/// Values gathered in one poll cycle
///
/// Snapshots are built fresh every cycle and dropped after rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSnapshot {
    values: HashMap<MetricKey, MetricValue>,
}

impl MetricSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: MetricKey, value: MetricValue) {
        self.values.insert(key, value);
    }

    /// Value for `key`; keys that were never collected read as unavailable
    pub fn get(&self, key: MetricKey) -> &MetricValue {
        self.values.get(&key).unwrap_or(&MetricValue::Unavailable)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(MetricKey, MetricValue)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (MetricKey, MetricValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
