//! Layout, rendering and scheduling for lcd-Sens

mod frame_renderer;
pub mod layout;
mod scheduler;
mod status_display;

pub use frame_renderer::{DeviceFont, FrameRenderer};
pub use layout::LayoutTable;
pub use scheduler::{Clock, RenderCycle, RunOutcome, Scheduler, SchedulerState, TokioClock};
pub use status_display::StatusDisplay;
