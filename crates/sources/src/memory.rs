//! Memory (RAM) usage collector

use lcd_sens_core::CollectionError;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use sysinfo::System;

/// Shared sysinfo::System instance used only for memory statistics
static SHARED_MEMORY_SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| {
    log::info!("Creating shared Memory sysinfo::System instance");
    Mutex::new(System::new())
});

/// Refresh memory statistics and format the share in use
pub fn collect() -> Result<String, CollectionError> {
    let (total, available) = {
        // Use unwrap_or_else to recover from poisoned mutex - data may still be valid
        let mut system = SHARED_MEMORY_SYSTEM.lock().unwrap_or_else(|poisoned| {
            log::warn!("Memory system mutex was poisoned, recovering");
            poisoned.into_inner()
        });
        system.refresh_memory();
        (system.total_memory(), system.available_memory())
    };
    format_memory_usage(total, available)
}

/// `MEM: ` followed by `round((total - available) / total * 100)` and `%`
pub fn format_memory_usage(total: u64, available: u64) -> Result<String, CollectionError> {
    if total == 0 {
        return Err(CollectionError::ZeroTotal("memory"));
    }
    let used = total.saturating_sub(available);
    let percent = (used as f64 / total as f64 * 100.0).round();
    Ok(format!("MEM: {}%", percent as i64))
}
