//! PNG file output for running without a panel

use super::backlight::Backlight;
use anyhow::Result;
use lcd_sens_core::{Color, DisplayDevice, RenderError};
use lcd_sens_render::CairoFrame;
use std::path::PathBuf;

/// Rewrites one PNG file with every committed frame
pub struct PngDevice {
    path: PathBuf,
    width: u32,
    height: u32,
    backlight: Backlight,
}

impl PngDevice {
    /// Frames are written upright; panel rotation does not apply
    pub fn new(path: PathBuf, width: u32, height: u32, backlight: Backlight) -> Self {
        Self {
            path,
            width,
            height,
            backlight,
        }
    }
}

impl DisplayDevice for PngDevice {
    type Frame = CairoFrame;

    fn set_backlight(&mut self, on: bool) -> Result<()> {
        self.backlight.set(on)
    }

    fn begin_frame(&mut self) -> Result<CairoFrame, RenderError> {
        CairoFrame::new(self.width, self.height, Color::BLACK)
    }

    fn commit(&mut self, frame: CairoFrame) -> Result<(), RenderError> {
        // Write beside the target and rename so readers never see half a file
        let tmp = self.path.with_extension("png.tmp");
        frame.write_png(&tmp).map_err(RenderError::Commit)?;
        std::fs::rename(&tmp, &self.path)
            .map_err(|e| RenderError::Commit(anyhow::Error::new(e).context("replacing PNG")))?;
        log::trace!("Wrote frame to {}", self.path.display());
        Ok(())
    }
}
