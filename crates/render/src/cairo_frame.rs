//! Cairo image surface frame with Pango text

use crate::pixels::Pixels;
use anyhow::{anyhow, Context as _, Result};
use cairo::{Context, Format, ImageSurface};
use lcd_sens_core::constants::LINE_SPACING;
use lcd_sens_core::{Color, RenderError, Surface};
use pango::FontDescription;
use pangocairo::functions::{create_layout, show_layout};
use std::path::Path;

/// An in-memory frame the size of the panel
///
/// Created cleared to the background color; text is drawn with Pango so
/// glyph lookup goes through fontconfig.
pub struct CairoFrame {
    surface: ImageSurface,
    cr: Context,
}

impl CairoFrame {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, RenderError> {
        let surface = ImageSurface::create(Format::Rgb24, width as i32, height as i32)
            .map_err(|e| RenderError::Acquire(format!("image surface: {}", e)))?;
        let cr = Context::new(&surface)
            .map_err(|e| RenderError::Acquire(format!("cairo context: {}", e)))?;

        cr.set_source_rgba(background.r, background.g, background.b, background.a);
        cr.paint()
            .map_err(|e| RenderError::Acquire(format!("clearing frame: {}", e)))?;

        Ok(Self { surface, cr })
    }

    pub fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    /// Copy the frame out as `0x00RRGGBB` pixels
    pub fn pixels(&self) -> Result<Pixels> {
        let (width, height) = (self.width(), self.height());
        let stride = self.surface.stride() as usize;
        let mut data = Vec::with_capacity((width * height) as usize);

        self.surface
            .with_data(|bytes| {
                for row in bytes.chunks(stride).take(height as usize) {
                    for px in row[..width as usize * 4].chunks_exact(4) {
                        let value = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                        data.push(value & 0x00ff_ffff);
                    }
                }
            })
            .map_err(|e| anyhow!("reading frame pixels: {}", e))?;

        Ok(Pixels::new(width, height, data))
    }

    /// Write the frame as a PNG file
    pub fn write_png(&self, path: &Path) -> Result<()> {
        self.surface.flush();
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.surface
            .write_to_png(&mut file)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl Surface for CairoFrame {
    type Font = FontDescription;

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: &FontDescription,
        color: Color,
    ) -> Result<(), RenderError> {
        let layout = create_layout(&self.cr);
        layout.set_font_description(Some(font));
        layout.set_spacing(LINE_SPACING * pango::SCALE);
        layout.set_text(text);

        // Pango draws from the top-left of the layout box
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
        self.cr.move_to(x as f64, y as f64);
        show_layout(&self.cr, &layout);

        self.cr.status().map_err(|e| RenderError::Draw {
            x,
            y,
            text: text.to_string(),
            reason: e.to_string(),
        })
    }
}
