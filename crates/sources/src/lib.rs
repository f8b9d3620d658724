//! lcd-sens-sources: Metric collectors for the lcd-Sens status display.
//!
//! Each module reads one kind of data (sysinfo, sysfs files, external
//! commands) and formats it for the panel. [`SystemCollectors`] ties them
//! together behind [`lcd_sens_core::MetricCollector`].

pub mod clock;
mod collectors;
pub mod command;
pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod meter;
pub mod network;
pub mod system_temp;

pub use collectors::{CollectorConfig, SystemCollectors};
pub use cpu::CpuSource;
pub use disk::DiskSource;
