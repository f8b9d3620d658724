//! lcd-sens-types: Shared data types for the lcd-Sens status display.
//!
//! This crate contains pure data types (metric keys and values, layout entries,
//! font keys, colors) shared across all lcd-Sens crates. They carry no Cairo or
//! Tokio dependencies, making them suitable as a foundation layer.

pub mod color;
pub mod font;
pub mod layout;
pub mod metric;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use font::{FontClass, FontKey, FontSet, FontSize};
pub use layout::{EntryContent, LayoutEntry};
pub use metric::{MetricKey, MetricSnapshot, MetricValue, UNAVAILABLE_PLACEHOLDER};
