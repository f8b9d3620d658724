//! Disk usage collector for a single mount point

use lcd_sens_core::CollectionError;
use std::path::PathBuf;
use std::sync::Mutex;
use sysinfo::Disks;

/// Disk usage source
///
/// Keeps the disk list from startup and refreshes the space figures on
/// every collection.
pub struct DiskSource {
    disks: Mutex<Disks>,
    mount_point: PathBuf,
}

impl DiskSource {
    pub fn new(mount_point: impl Into<PathBuf>) -> Self {
        Self {
            disks: Mutex::new(Disks::new_with_refreshed_list()),
            mount_point: mount_point.into(),
        }
    }

    pub fn collect(&self) -> Result<String, CollectionError> {
        let (total, available) = {
            let mut disks = self.disks.lock().unwrap_or_else(|poisoned| {
                log::warn!("Disk list mutex was poisoned, recovering");
                poisoned.into_inner()
            });
            disks.refresh();
            let disk = disks
                .iter()
                .find(|d| d.mount_point() == self.mount_point.as_path())
                .ok_or_else(|| {
                    CollectionError::NoMount(self.mount_point.display().to_string())
                })?;
            (disk.total_space(), disk.available_space())
        };
        format_disk_usage(total, available)
    }
}

impl Default for DiskSource {
    fn default() -> Self {
        Self::new("/")
    }
}

/// `round((total - available) / total * 100)` followed by `%`
pub fn format_disk_usage(total: u64, available: u64) -> Result<String, CollectionError> {
    if total == 0 {
        return Err(CollectionError::ZeroTotal("filesystem"));
    }
    let used = total.saturating_sub(available);
    let percent = (used as f64 / total as f64 * 100.0).round();
    Ok(format!("{}%", percent as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_share() {
        assert_eq!(format_disk_usage(32_000, 8_000).unwrap(), "75%");
        assert_eq!(format_disk_usage(100, 100).unwrap(), "0%");
        assert_eq!(format_disk_usage(1000, 994).unwrap(), "1%");
    }

    #[test]
    fn test_zero_total_is_error() {
        assert!(matches!(
            format_disk_usage(0, 0),
            Err(CollectionError::ZeroTotal(_))
        ));
    }

    #[test]
    fn test_unknown_mount_point_is_error() {
        let source = DiskSource::new("/definitely/not/a/mount/point");
        assert!(matches!(source.collect(), Err(CollectionError::NoMount(_))));
    }
}
