//! Backlight control through a sysfs `bl_power` file

use anyhow::{Context, Result};
use std::path::PathBuf;

/// `bl_power` value for a lit panel (FB_BLANK_UNBLANK)
const BL_POWER_ON: &str = "0";
/// `bl_power` value for a dark panel (FB_BLANK_POWERDOWN)
const BL_POWER_OFF: &str = "4";

/// Backlight switch; a no-op when no control file is configured
#[derive(Debug, Clone, Default)]
pub struct Backlight {
    path: Option<PathBuf>,
}

impl Backlight {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn set(&self, on: bool) -> Result<()> {
        let Some(path) = &self.path else {
            log::debug!("No backlight control configured, ignoring set({})", on);
            return Ok(());
        };
        let value = if on { BL_POWER_ON } else { BL_POWER_OFF };
        std::fs::write(path, value)
            .with_context(|| format!("writing backlight state to {}", path.display()))?;
        log::info!("Backlight {}", if on { "on" } else { "off" });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_bl_power() {
        let path = std::env::temp_dir().join(format!("lcd-sens-bl-{}", std::process::id()));
        let backlight = Backlight::new(Some(path.clone()));
        backlight.set(false).unwrap();
        let off = std::fs::read_to_string(&path).unwrap();
        backlight.set(true).unwrap();
        let on = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!((off.as_str(), on.as_str()), ("4", "0"));
    }

    #[test]
    fn test_unconfigured_is_noop() {
        Backlight::default().set(true).unwrap();
    }
}
