//! One collect-then-render pass over the whole panel

use super::frame_renderer::{DeviceFont, FrameRenderer};
use super::layout::LayoutTable;
use super::scheduler::RenderCycle;
use anyhow::Result;
use lcd_sens_core::{DisplayDevice, MetricCollector, MetricKey, MetricSnapshot};
use lcd_sens_types::FontSet;

/// Collectors, layout, fonts and device wired together
///
/// Owns the device: collectors never see it, and only one frame is ever
/// in flight.
pub struct StatusDisplay<M: MetricCollector, D: DisplayDevice> {
    collectors: M,
    device: D,
    layout: LayoutTable,
    fonts: FontSet<DeviceFont<D>>,
    renderer: FrameRenderer,
    keys: Vec<MetricKey>,
}

impl<M: MetricCollector, D: DisplayDevice> StatusDisplay<M, D> {
    pub fn new(
        collectors: M,
        device: D,
        layout: LayoutTable,
        fonts: FontSet<DeviceFont<D>>,
        renderer: FrameRenderer,
    ) -> Self {
        let keys = layout.metrics();
        Self {
            collectors,
            device,
            layout,
            fonts,
            renderer,
            keys,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Gather every metric the layout uses
    pub async fn collect(&self) -> MetricSnapshot {
        self.collectors.snapshot(&self.keys).await
    }

    /// Collect, then draw and commit one frame
    pub async fn refresh(&mut self) -> Result<()> {
        let values = self.collect().await;
        log::debug!("Collected {} metrics", values.len());
        self.renderer
            .render(&mut self.device, &self.layout, &values, &self.fonts)?;
        Ok(())
    }
}

impl<M: MetricCollector, D: DisplayDevice> RenderCycle for StatusDisplay<M, D> {
    async fn run_cycle(&mut self) -> Result<()> {
        self.refresh().await
    }
}
