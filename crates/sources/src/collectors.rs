//! The fixed set of collectors behind the collect-by-key capability

use crate::cpu::CpuSource;
use crate::disk::DiskSource;
use crate::{clock, host, memory, meter, network, system_temp};
use lcd_sens_core::{CollectionError, MetricCollector, MetricKey};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the collectors that talk to files and external programs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectorConfig {
    /// Upper bound for each external command and the address lookup
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
    #[serde(default = "default_wifi_command")]
    pub wifi_command: String,
    #[serde(default = "default_wifi_args")]
    pub wifi_args: Vec<String>,
    #[serde(default = "default_thermal_path")]
    pub thermal_path: PathBuf,
    /// Mount point whose usage `disk` reports
    #[serde(default = "default_disk_mount")]
    pub disk_mount: PathBuf,
    /// Key-value store CLI, invoked as `<tool> state get <object>`
    #[serde(default = "default_meter_tool")]
    pub meter_tool: String,
    #[serde(default = "default_meter1_object")]
    pub meter1_object: String,
    #[serde(default = "default_meter2_object")]
    pub meter2_object: String,
    /// Appended to the host name before resolving it
    #[serde(default = "default_resolve_suffix")]
    pub resolve_suffix: String,
}

fn default_command_timeout_ms() -> u64 {
    lcd_sens_core::constants::COMMAND_TIMEOUT.as_millis() as u64
}

fn default_wifi_command() -> String {
    "/sbin/iwconfig".to_string()
}

fn default_wifi_args() -> Vec<String> {
    vec!["wlan0".to_string()]
}

fn default_thermal_path() -> PathBuf {
    PathBuf::from("/sys/class/thermal/thermal_zone0/temp")
}

fn default_disk_mount() -> PathBuf {
    PathBuf::from("/")
}

fn default_meter_tool() -> String {
    "/usr/bin/iobroker".to_string()
}

fn default_meter1_object() -> String {
    "0_userdata.0.Zaehler1_Test".to_string()
}

fn default_meter2_object() -> String {
    "0_userdata.0.Zaehler2_Test".to_string()
}

fn default_resolve_suffix() -> String {
    ".local".to_string()
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: default_command_timeout_ms(),
            wifi_command: default_wifi_command(),
            wifi_args: default_wifi_args(),
            thermal_path: default_thermal_path(),
            disk_mount: default_disk_mount(),
            meter_tool: default_meter_tool(),
            meter1_object: default_meter1_object(),
            meter2_object: default_meter2_object(),
            resolve_suffix: default_resolve_suffix(),
        }
    }
}

impl CollectorConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}

/// Collectors reading from this host
///
/// Holds the few sysinfo handles that are worth keeping between cycles;
/// every value itself is read fresh on each call.
pub struct SystemCollectors {
    config: CollectorConfig,
    cpu: CpuSource,
    disk: DiskSource,
}

impl SystemCollectors {
    pub fn new(config: CollectorConfig) -> Self {
        let disk = DiskSource::new(config.disk_mount.clone());
        Self {
            config,
            cpu: CpuSource::new(),
            disk,
        }
    }
}

impl MetricCollector for SystemCollectors {
    async fn collect(&self, key: MetricKey) -> Result<String, CollectionError> {
        let timeout = self.config.command_timeout();
        match key {
            MetricKey::Host => host::collect(),
            MetricKey::Ip => network::collect_ip(&self.config.resolve_suffix, timeout).await,
            MetricKey::Wifi => {
                network::collect_wifi(&self.config.wifi_command, &self.config.wifi_args, timeout)
                    .await
            }
            MetricKey::Cpu => self.cpu.collect(),
            MetricKey::Mem => memory::collect(),
            MetricKey::Disk => self.disk.collect(),
            MetricKey::Temp => system_temp::collect(&self.config.thermal_path).await,
            MetricKey::Meter1 => {
                meter::collect(&self.config.meter_tool, &self.config.meter1_object, "Z1", timeout)
                    .await
            }
            MetricKey::Meter2 => {
                meter::collect(&self.config.meter_tool, &self.config.meter2_object, "Z2", timeout)
                    .await
            }
            MetricKey::DateTimeNow => Ok(clock::collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcd_sens_core::MetricValue;

    fn unreachable_config() -> CollectorConfig {
        CollectorConfig {
            command_timeout_ms: 1000,
            wifi_command: "/nonexistent/iwconfig".to_string(),
            thermal_path: PathBuf::from("/nonexistent/temp"),
            disk_mount: PathBuf::from("/nonexistent/mount"),
            meter_tool: "/nonexistent/iobroker".to_string(),
            ..CollectorConfig::default()
        }
    }

    #[test]
    fn test_defaults_from_empty_json() {
        let config: CollectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CollectorConfig::default());
        assert_eq!(config.command_timeout(), Duration::from_secs(5));
        assert_eq!(config.meter_tool, "/usr/bin/iobroker");
        assert_eq!(config.wifi_args, vec!["wlan0".to_string()]);
    }

    #[tokio::test]
    async fn test_unreachable_sources_degrade_to_placeholder() {
        let collectors = SystemCollectors::new(unreachable_config());
        let keys = [
            MetricKey::Wifi,
            MetricKey::Temp,
            MetricKey::Disk,
            MetricKey::Meter1,
            MetricKey::Meter2,
            MetricKey::DateTimeNow,
        ];
        let snapshot = collectors.snapshot(&keys).await;

        for key in &keys[..5] {
            assert_eq!(snapshot.get(*key), &MetricValue::Unavailable, "{}", key);
        }
        assert!(snapshot.get(MetricKey::DateTimeNow).is_available());
    }

    #[tokio::test]
    async fn test_unresolvable_address_degrades_to_placeholder() {
        let collectors = SystemCollectors::new(CollectorConfig {
            resolve_suffix: ".invalid".to_string(),
            command_timeout_ms: 2000,
            ..CollectorConfig::default()
        });
        assert!(collectors.collect(MetricKey::Ip).await.is_err());
        assert_eq!(collectors.collect_value(MetricKey::Ip).await, MetricValue::Unavailable);
    }
}
