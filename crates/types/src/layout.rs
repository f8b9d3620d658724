//! Placement directives for the fixed panel layout

use crate::font::FontSize;
use crate::metric::MetricKey;

/// What a layout entry draws
///
/// Decided once when the entry is built, so the renderer never has to
/// re-check optional fields per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryContent {
    /// Draws nothing
    Empty,
    IconOnly { icon: char },
    TextOnly { metric: MetricKey },
    IconAndText { icon: char, metric: MetricKey },
}

/// One entry of the layout table
///
/// The icon sits at `(x, y)`; the metric text is drawn at `(x + dx, y + dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
    pub font_size: FontSize,
    pub content: EntryContent,
}

impl LayoutEntry {
    /// Build an entry from its loose parts, choosing the content variant
    pub const fn new(
        x: i32,
        y: i32,
        icon: Option<char>,
        dx: i32,
        dy: i32,
        font_size: FontSize,
        metric: Option<MetricKey>,
    ) -> Self {
        let content = match (icon, metric) {
            (None, None) => EntryContent::Empty,
            (Some(icon), None) => EntryContent::IconOnly { icon },
            (None, Some(metric)) => EntryContent::TextOnly { metric },
            (Some(icon), Some(metric)) => EntryContent::IconAndText { icon, metric },
        };
        Self {
            x,
            y,
            dx,
            dy,
            font_size,
            content,
        }
    }

    pub fn icon(&self) -> Option<char> {
        match self.content {
            EntryContent::IconOnly { icon } | EntryContent::IconAndText { icon, .. } => Some(icon),
            _ => None,
        }
    }

    pub fn metric(&self) -> Option<MetricKey> {
        match self.content {
            EntryContent::TextOnly { metric } | EntryContent::IconAndText { metric, .. } => {
                Some(metric)
            }
            _ => None,
        }
    }

    /// Where the metric text goes
    pub fn text_position(&self) -> (i32, i32) {
        (self.x + self.dx, self.y + self.dy)
    }

    pub fn is_empty(&self) -> bool {
        self.content == EntryContent::Empty
    }
}
