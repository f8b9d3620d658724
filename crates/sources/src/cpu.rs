//! CPU load collector
//!
//! Reports the 1 minute load average relative to the number of logical
//! cores, so a fully loaded machine reads 100%.

use lcd_sens_core::CollectionError;
use std::sync::Mutex;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// CPU load source
pub struct CpuSource {
    system: Mutex<System>,
}

impl CpuSource {
    pub fn new() -> Self {
        // Only the CPU list is needed; usage sampling is not
        let system = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::new()),
        );
        log::debug!("CPU source sees {} logical cores", system.cpus().len());
        Self {
            system: Mutex::new(system),
        }
    }

    /// Number of logical cores
    pub fn core_count(&self) -> usize {
        let system = self.system.lock().unwrap_or_else(|poisoned| {
            log::warn!("CPU system mutex was poisoned, recovering");
            poisoned.into_inner()
        });
        system.cpus().len()
    }

    pub fn collect(&self) -> Result<String, CollectionError> {
        let load = System::load_average();
        format_cpu_load(load.one, self.core_count())
    }
}

impl Default for CpuSource {
    fn default() -> Self {
        Self::new()
    }
}

/// `round(load / cores * 100)` followed by `%`
pub fn format_cpu_load(load_one: f64, cores: usize) -> Result<String, CollectionError> {
    if cores == 0 {
        return Err(CollectionError::NoCores);
    }
    let percent = (load_one / cores as f64 * 100.0).round();
    Ok(format!("{}%", percent as i64))
}
