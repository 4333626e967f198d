//! The real-time chart widget: a rolling window over a live signal.
//!
//! [`FrequencyChart`] owns the window buffer and the freeze/trim/resume
//! state machine; [`ChartTask`] runs it on a periodic Tokio timer and feeds
//! every state change to a [`chart_render::Renderer`].

pub mod driver;
pub mod task;

pub use driver::{FrequencyChart, Phase};
pub use task::{ChartTask, Command};
