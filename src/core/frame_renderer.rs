//! Draws the layout table onto one frame

use super::layout::LayoutTable;
use lcd_sens_core::{Color, DisplayDevice, MetricSnapshot, RenderError, Surface};
use lcd_sens_types::{EntryContent, FontSet, LayoutEntry};

/// Font handle type of a device's frames
pub type DeviceFont<D> = <<D as DisplayDevice>::Frame as Surface>::Font;

/// Renders a snapshot through the layout table
#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer {
    foreground: Color,
}

impl FrameRenderer {
    pub fn new(foreground: Color) -> Self {
        Self { foreground }
    }

    /// Draw every entry and commit the frame once
    ///
    /// An entry that fails to draw is logged and skipped; the frame is
    /// still committed. Only acquiring or committing the frame fails the call.
    pub fn render<D: DisplayDevice>(
        &self,
        device: &mut D,
        layout: &LayoutTable,
        values: &MetricSnapshot,
        fonts: &FontSet<DeviceFont<D>>,
    ) -> Result<(), RenderError> {
        let mut frame = device.begin_frame()?;

        let mut failed = 0;
        for entry in layout.entries() {
            if let Err(e) = self.draw_entry(&mut frame, entry, values, fonts) {
                log::warn!("Skipping layout entry at ({}, {}): {}", entry.x, entry.y, e);
                failed += 1;
            }
        }
        if failed > 0 {
            log::debug!("{} of {} entries failed to draw", failed, layout.entries().len());
        }

        device.commit(frame)
    }

    fn draw_entry<S: Surface>(
        &self,
        frame: &mut S,
        entry: &LayoutEntry,
        values: &MetricSnapshot,
        fonts: &FontSet<S::Font>,
    ) -> Result<(), RenderError> {
        let mut icon_buf = [0u8; 4];
        match entry.content {
            EntryContent::Empty => Ok(()),
            EntryContent::IconOnly { icon } => {
                let glyph = icon.encode_utf8(&mut icon_buf);
                frame.draw_text(entry.x, entry.y, glyph, fonts.icon(entry.font_size), self.foreground)
            }
            EntryContent::TextOnly { metric } => {
                let (x, y) = entry.text_position();
                let text = values.get(metric).as_display();
                frame.draw_text(x, y, text, fonts.text(entry.font_size), self.foreground)
            }
            EntryContent::IconAndText { icon, metric } => {
                let glyph = icon.encode_utf8(&mut icon_buf);
                frame.draw_text(entry.x, entry.y, glyph, fonts.icon(entry.font_size), self.foreground)?;
                let (x, y) = entry.text_position();
                let text = values.get(metric).as_display();
                frame.draw_text(x, y, text, fonts.text(entry.font_size), self.foreground)
            }
        }
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::layout::icons;
    use lcd_sens_core::MetricValue;
    use lcd_sens_types::{FontClass, FontKey, FontSize, MetricKey};

    /// One recorded `draw_text` call
    #[derive(Debug, Clone, PartialEq)]
    pub struct DrawCall {
        pub x: i32,
        pub y: i32,
        pub text: String,
        pub font: FontKey,
    }

    #[derive(Debug, Default)]
    pub struct RecordingFrame {
        pub calls: Vec<DrawCall>,
        /// Text that makes `draw_text` fail
        pub fail_on: Option<String>,
    }

    impl Surface for RecordingFrame {
        type Font = FontKey;

        fn draw_text(
            &mut self,
            x: i32,
            y: i32,
            text: &str,
            font: &FontKey,
            _color: Color,
        ) -> Result<(), RenderError> {
            if self.fail_on.as_deref() == Some(text) {
                return Err(RenderError::Draw {
                    x,
                    y,
                    text: text.to_string(),
                    reason: "injected".to_string(),
                });
            }
            self.calls.push(DrawCall {
                x,
                y,
                text: text.to_string(),
                font: *font,
            });
            Ok(())
        }
    }

    /// Device that keeps every committed frame
    #[derive(Debug, Default)]
    pub struct RecordingDevice {
        pub begun: usize,
        pub committed: Vec<Vec<DrawCall>>,
        pub fail_on: Option<String>,
        pub fail_acquire: bool,
        pub fail_commit: bool,
        pub backlight: Option<bool>,
    }

    impl DisplayDevice for RecordingDevice {
        type Frame = RecordingFrame;

        fn set_backlight(&mut self, on: bool) -> anyhow::Result<()> {
            self.backlight = Some(on);
            Ok(())
        }

        fn begin_frame(&mut self) -> Result<RecordingFrame, RenderError> {
            if self.fail_acquire {
                return Err(RenderError::Acquire("injected".to_string()));
            }
            self.begun += 1;
            Ok(RecordingFrame {
                calls: Vec::new(),
                fail_on: self.fail_on.clone(),
            })
        }

        fn commit(&mut self, frame: RecordingFrame) -> Result<(), RenderError> {
            if self.fail_commit {
                return Err(RenderError::Commit(anyhow::anyhow!("injected")));
            }
            self.committed.push(frame.calls);
            Ok(())
        }
    }

    pub fn key_fonts() -> FontSet<FontKey> {
        FontSet::try_load::<()>(Ok).unwrap()
    }

    fn snapshot() -> MetricSnapshot {
        [
            (MetricKey::Ip, MetricValue::text("IP: 192.168.1.20")),
            (MetricKey::Cpu, MetricValue::text("13%")),
            (MetricKey::Mem, MetricValue::text("MEM: 41%")),
            (MetricKey::Meter1, MetricValue::text("Z1 123.45")),
            (MetricKey::Disk, MetricValue::text("57%")),
            (MetricKey::Temp, MetricValue::text("45°C")),
            (MetricKey::Meter2, MetricValue::text("Z2 98.1")),
            (MetricKey::DateTimeNow, MetricValue::text("07.03.24 09:05:02")),
        ]
        .into_iter()
        .collect()
    }

    const SMALL_ICON: FontKey = FontKey::new(FontClass::Icon, FontSize::Small);
    const SMALL_TEXT: FontKey = FontKey::new(FontClass::Text, FontSize::Small);

    fn call(x: i32, y: i32, text: &str, font: FontKey) -> DrawCall {
        DrawCall {
            x,
            y,
            text: text.to_string(),
            font,
        }
    }

    #[test]
    fn test_default_layout_frame() {
        let mut device = RecordingDevice::default();
        FrameRenderer::default()
            .render(&mut device, &LayoutTable::default(), &snapshot(), &key_fonts())
            .unwrap();

        assert_eq!(device.committed.len(), 1);
        let calls = &device.committed[0];
        assert_eq!(calls.len(), 14);
        assert_eq!(calls[0], call(0, 2, "IP: 192.168.1.20", SMALL_TEXT));
        assert_eq!(calls[1], call(0, 23, &icons::MICROCHIP.to_string(), SMALL_ICON));
        assert_eq!(calls[2], call(22, 23, "13%", SMALL_TEXT));
        assert_eq!(calls[3], call(0, 41, "MEM: 41%", SMALL_TEXT));
        assert_eq!(calls[5], call(14, 64, "Z1 123.45", SMALL_TEXT));
        assert_eq!(calls[11], call(101, 64, "Z2 98.1", SMALL_TEXT));
        assert_eq!(calls[13], call(18, 108, "07.03.24 09:05:02", SMALL_TEXT));
    }

    #[test]
    fn test_unavailable_metric_draws_placeholder() {
        let mut values = snapshot();
        values.insert(MetricKey::Temp, MetricValue::Unavailable);
        let mut device = RecordingDevice::default();
        FrameRenderer::default()
            .render(&mut device, &LayoutTable::default(), &values, &key_fonts())
            .unwrap();

        let calls = &device.committed[0];
        assert_eq!(calls.len(), 14);
        assert!(calls.contains(&call(111, 23, "N/A", SMALL_TEXT)));
        assert!(calls.contains(&call(14, 64, "Z1 123.45", SMALL_TEXT)));
    }

    #[test]
    fn test_empty_entry_draws_nothing() {
        let layout = LayoutTable::new(vec![LayoutEntry::new(10, 10, None, 5, 5, FontSize::Large, None)]);
        let mut device = RecordingDevice::default();
        FrameRenderer::default()
            .render(&mut device, &layout, &MetricSnapshot::new(), &key_fonts())
            .unwrap();
        assert_eq!(device.committed, vec![Vec::<DrawCall>::new()]);
    }

    #[test]
    fn test_icon_only_and_large_fonts() {
        let layout = LayoutTable::new(vec![
            LayoutEntry::new(95, 2, Some(icons::WIFI), 22, 0, FontSize::Large, None),
            LayoutEntry::new(0, 80, None, 4, 2, FontSize::Large, Some(MetricKey::Host)),
        ]);
        let mut device = RecordingDevice::default();
        FrameRenderer::default()
            .render(&mut device, &layout, &MetricSnapshot::new(), &key_fonts())
            .unwrap();

        let large_icon = FontKey::new(FontClass::Icon, FontSize::Large);
        let large_text = FontKey::new(FontClass::Text, FontSize::Large);
        assert_eq!(
            device.committed[0],
            vec![
                call(95, 2, &icons::WIFI.to_string(), large_icon),
                call(4, 82, "N/A", large_text),
            ]
        );
    }

    #[test]
    fn test_failed_entry_still_commits() {
        let mut device = RecordingDevice {
            fail_on: Some("13%".to_string()),
            ..Default::default()
        };
        FrameRenderer::default()
            .render(&mut device, &LayoutTable::default(), &snapshot(), &key_fonts())
            .unwrap();
        assert_eq!(device.committed.len(), 1);
        assert_eq!(device.committed[0].len(), 13);
    }

    #[test]
    fn test_acquire_failure_is_error() {
        let mut device = RecordingDevice {
            fail_acquire: true,
            ..Default::default()
        };
        let result = FrameRenderer::default().render(
            &mut device,
            &LayoutTable::default(),
            &snapshot(),
            &key_fonts(),
        );
        assert!(matches!(result, Err(RenderError::Acquire(_))));
        assert!(device.committed.is_empty());
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let mut device = RecordingDevice::default();
        let renderer = FrameRenderer::default();
        let values = snapshot();
        for _ in 0..2 {
            renderer
                .render(&mut device, &LayoutTable::default(), &values, &key_fonts())
                .unwrap();
        }
        assert_eq!(device.committed.len(), 2);
        assert_eq!(device.committed[0], device.committed[1]);
    }
}
