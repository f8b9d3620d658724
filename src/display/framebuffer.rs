//! Linux framebuffer output (e.g. `/dev/fb1` from the fbtft ST7735 driver)

use super::backlight::Backlight;
use anyhow::{Context, Result};
use lcd_sens_core::{Color, DisplayDevice, RenderError};
use lcd_sens_render::{CairoFrame, Rotation};
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Writes each committed frame as RGB565 to a framebuffer device
pub struct FramebufferDevice {
    path: PathBuf,
    file: File,
    width: u32,
    height: u32,
    rotation: Rotation,
    bgr: bool,
    backlight: Backlight,
}

impl FramebufferDevice {
    /// Open the device; fails when it is missing or not writable
    pub fn open(
        path: &Path,
        width: u32,
        height: u32,
        rotation: Rotation,
        bgr: bool,
        backlight: Backlight,
    ) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .with_context(|| format!("opening framebuffer {}", path.display()))?;
        log::info!(
            "Opened framebuffer {} ({}x{}, {:?}, {})",
            path.display(),
            width,
            height,
            rotation,
            if bgr { "BGR" } else { "RGB" }
        );
        Ok(Self {
            path: path.to_path_buf(),
            file,
            width,
            height,
            rotation,
            bgr,
            backlight,
        })
    }

    fn write_frame(&mut self, frame: &CairoFrame) -> Result<()> {
        let pixels = frame.pixels()?.rotated(self.rotation);
        let bytes = pixels.to_rgb565(self.bgr);
        self.file.seek(SeekFrom::Start(0))?;
        self.file
            .write_all(&bytes)
            .with_context(|| format!("writing to {}", self.path.display()))?;
        self.file.flush()?;
        Ok(())
    }
}

impl DisplayDevice for FramebufferDevice {
    type Frame = CairoFrame;

    fn set_backlight(&mut self, on: bool) -> Result<()> {
        self.backlight.set(on)
    }

    fn begin_frame(&mut self) -> Result<CairoFrame, RenderError> {
        CairoFrame::new(self.width, self.height, Color::BLACK)
    }

    fn commit(&mut self, frame: CairoFrame) -> Result<(), RenderError> {
        self.write_frame(&frame).map_err(RenderError::Commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcd_sens_core::Surface;

    fn temp_fb(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lcd-sens-{}-{}", name, std::process::id()));
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_blank_frame_is_black_rgb565() {
        let path = temp_fb("fb-blank");
        let mut device =
            FramebufferDevice::open(&path, 160, 128, Rotation::Deg180, false, Backlight::default())
                .unwrap();
        let frame = device.begin_frame().unwrap();
        device.commit(frame).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(bytes.len(), 160 * 128 * 2);
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_commit_overwrites_previous_frame() {
        let path = temp_fb("fb-overwrite");
        let mut device =
            FramebufferDevice::open(&path, 8, 4, Rotation::Deg0, false, Backlight::default())
                .unwrap();
        for _ in 0..3 {
            let mut frame = device.begin_frame().unwrap();
            let mut font = pango::FontDescription::new();
            font.set_family("Sans");
            frame.draw_text(0, 0, "x", &font, Color::WHITE).unwrap();
            device.commit(frame).unwrap();
        }
        let len = std::fs::metadata(&path).unwrap().len();
        std::fs::remove_file(&path).ok();
        assert_eq!(len, 8 * 4 * 2);
    }

    #[test]
    fn test_missing_device_is_error() {
        let result = FramebufferDevice::open(
            Path::new("/nonexistent/fb9"),
            160,
            128,
            Rotation::Deg0,
            false,
            Backlight::default(),
        );
        assert!(result.is_err());
    }
}
