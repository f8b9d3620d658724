//! Shared constants for the application

use std::time::Duration;

/// Delay between the first frame and the first steady-state frame
pub const WARM_UP_DELAY: Duration = Duration::from_secs(5);

/// Steady-state refresh cadence
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(60);

/// Upper bound for a single external command or name lookup
pub const COMMAND_TIMEOUT: Duration = Duration::from_millis(5000);

/// Panel geometry of the ST7735 module
pub const PANEL_WIDTH: u32 = 160;
pub const PANEL_HEIGHT: u32 = 128;

/// Extra pixels between lines when a value spans several lines
pub const LINE_SPACING: i32 = 3;

/// Millidegrees per degree Celsius in thermal zone readings
pub const MILLIDEGREES_PER_DEGREE: f64 = 1000.0;
