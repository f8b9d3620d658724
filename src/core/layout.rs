//! The fixed panel layout

use lcd_sens_types::{FontSize, LayoutEntry, MetricKey};

/// FontAwesome glyphs used on the panel
pub mod icons {
    pub const MICROCHIP: char = '\u{f2db}';
    pub const BOLT: char = '\u{f0e7}';
    pub const DATABASE: char = '\u{f1c0}';
    pub const THERMOMETER: char = '\u{f2c8}';
    pub const CLOCK: char = '\u{f017}';
    pub const WIFI: char = '\u{f1eb}';
}

use FontSize::Small;

/// Entries of the 160x128 panel, drawn in this order
///
/// WiFi sits at (95, 2) with icon [`icons::WIFI`] and dx 22 when enabled; it
/// shares the top row with the address, which is usually too wide for both.
const DEFAULT_ENTRIES: [LayoutEntry; 8] = [
    LayoutEntry::new(0, 2, None, 0, 0, Small, Some(MetricKey::Ip)),
    LayoutEntry::new(0, 23, Some(icons::MICROCHIP), 22, 0, Small, Some(MetricKey::Cpu)),
    LayoutEntry::new(0, 41, None, 0, 0, Small, Some(MetricKey::Mem)),
    LayoutEntry::new(2, 64, Some(icons::BOLT), 12, 0, Small, Some(MetricKey::Meter1)),
    LayoutEntry::new(87, 41, Some(icons::DATABASE), 22, 0, Small, Some(MetricKey::Disk)),
    LayoutEntry::new(89, 23, Some(icons::THERMOMETER), 22, 0, Small, Some(MetricKey::Temp)),
    LayoutEntry::new(89, 64, Some(icons::BOLT), 12, 0, Small, Some(MetricKey::Meter2)),
    LayoutEntry::new(0, 108, Some(icons::CLOCK), 18, 0, Small, Some(MetricKey::DateTimeNow)),
];

/// Ordered, read-only list of layout entries
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTable {
    entries: Vec<LayoutEntry>,
}

impl LayoutTable {
    pub fn new(entries: Vec<LayoutEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    /// Metrics referenced by the table, first use first, without repeats
    pub fn metrics(&self) -> Vec<MetricKey> {
        let mut keys = Vec::new();
        for key in self.entries.iter().filter_map(|e| e.metric()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES.to_vec())
    }
}
