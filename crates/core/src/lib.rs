//! lcd-sens-core: Core traits, errors and constants for the lcd-Sens status display.
//!
//! This crate contains the seams between the collection side and the drawing
//! side (MetricCollector, Surface, DisplayDevice), the typed error enums and
//! the shared timing and geometry constants.

pub mod constants;
mod collector;
mod error;
mod surface;

pub use collector::MetricCollector;
pub use error::{CollectionError, RenderError};
pub use surface::{DisplayDevice, Surface};

// Re-export types used in trait signatures for convenience
pub use lcd_sens_types::{Color, MetricKey, MetricSnapshot, MetricValue};
