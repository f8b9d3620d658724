//! lcd-Sens: host status on a small SPI panel
//!
//! This library provides the pieces of the lcd-Sens agent:
//! - The fixed panel layout and the frame renderer
//! - The warm-up/steady refresh scheduler
//! - Output devices (Linux framebuffer, PNG file)
//! - Configuration management

pub mod config;
pub mod core;
pub mod display;

// Re-export commonly used types
pub use config::AppConfig;
pub use core::{FrameRenderer, LayoutTable, Scheduler, StatusDisplay};
pub use display::PanelDevice;
