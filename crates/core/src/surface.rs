//! Drawing surface and output device traits

use crate::error::RenderError;
use lcd_sens_types::Color;

/// A frame being drawn
///
/// Coordinates are pixels from the top-left corner of the panel; `(x, y)`
/// is the top-left of the text's layout box.
pub trait Surface {
    /// Font handle understood by this surface
    type Font;

    /// Draw `text` at `(x, y)` with the given font and color
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: &Self::Font,
        color: Color,
    ) -> Result<(), RenderError>;
}

/// Trait for the panel (or any sink) that shows committed frames
///
/// A frame obtained from [`DisplayDevice::begin_frame`] is owned by the
/// caller until it is handed back to [`DisplayDevice::commit`].
pub trait DisplayDevice {
    type Frame: Surface;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> anyhow::Result<()>;

    /// Start a new, cleared frame
    fn begin_frame(&mut self) -> Result<Self::Frame, RenderError>;

    /// Show a completed frame
    fn commit(&mut self, frame: Self::Frame) -> Result<(), RenderError>;
}
