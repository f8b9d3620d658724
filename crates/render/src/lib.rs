//! lcd-sens-render: Cairo/Pango rendering for the lcd-Sens status display.
//!
//! Provides the [`CairoFrame`] surface, font loading for the four font
//! slots, and the pixel conversions the output devices need.

pub mod cairo_frame;
pub mod fonts;
pub mod pixels;

pub use cairo_frame::CairoFrame;
pub use fonts::{load_font, load_font_set, FontSpec, FontSpecs, FontWeight};
pub use pixels::{pack_rgb565, Pixels, Rotation};
