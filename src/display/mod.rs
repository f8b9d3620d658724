//! Output devices that show committed frames

mod backlight;
mod framebuffer;
mod png;

pub use backlight::Backlight;
pub use framebuffer::FramebufferDevice;
pub use png::PngDevice;

use crate::config::{DisplayConfig, OutputConfig};
use anyhow::Result;
use lcd_sens_core::{DisplayDevice, RenderError};
use lcd_sens_render::CairoFrame;

/// The configured output, chosen at startup
pub enum PanelDevice {
    Framebuffer(FramebufferDevice),
    Png(PngDevice),
}

impl PanelDevice {
    /// Open the output named in the config; an unreachable device is fatal
    pub fn open(config: &DisplayConfig) -> Result<Self> {
        let backlight = Backlight::new(config.backlight_path.clone());
        let device = match &config.output {
            OutputConfig::Framebuffer { path } => PanelDevice::Framebuffer(FramebufferDevice::open(
                path,
                config.width,
                config.height,
                config.rotation,
                config.bgr,
                backlight,
            )?),
            OutputConfig::Png { path } => {
                log::info!("Writing frames to {}", path.display());
                PanelDevice::Png(PngDevice::new(path.clone(), config.width, config.height, backlight))
            }
        };
        Ok(device)
    }
}

impl DisplayDevice for PanelDevice {
    type Frame = CairoFrame;

    fn set_backlight(&mut self, on: bool) -> Result<()> {
        match self {
            PanelDevice::Framebuffer(device) => device.set_backlight(on),
            PanelDevice::Png(device) => device.set_backlight(on),
        }
    }

    fn begin_frame(&mut self) -> Result<CairoFrame, RenderError> {
        match self {
            PanelDevice::Framebuffer(device) => device.begin_frame(),
            PanelDevice::Png(device) => device.begin_frame(),
        }
    }

    fn commit(&mut self, frame: CairoFrame) -> Result<(), RenderError> {
        match self {
            PanelDevice::Framebuffer(device) => device.commit(frame),
            PanelDevice::Png(device) => device.commit(frame),
        }
    }
}
