//! The rendering seam of the chart widget.
//!
//! The real charting library lives outside this repository: it receives the
//! options object plus the series on every state change and is responsible
//! for diffing and redrawing.  [`Renderer`] is that boundary; the built-in
//! [`TermRenderer`] stands in for it in the demo binary by logging a
//! one-line sparkline of the visible window.

use chart_core::Series;
use chart_options::ChartOptions;
use tracing::info;

/// Anything that can draw the chart from an options + series pair.
///
/// Implementations must tolerate being handed the same values twice — the
/// driver re-supplies both halves on every effect and leaves diffing to the
/// renderer.
pub trait Renderer {
    fn render(&mut self, options: &ChartOptions, series: &Series);
}

const BLOCKS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Character used for positions that predate the first real reading.
const GAP: char = ' ';

/// Terminal renderer: one log line per render pass.
#[derive(Debug, Default)]
pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TermRenderer {
    fn render(&mut self, options: &ChartOptions, series: &Series) {
        let state = if options.animations_enabled() {
            "animating"
        } else {
            "frozen"
        };

        info!(
            "{} │{}│ {} ({} samples, {state})",
            options.yaxis.label(options.yaxis.max),
            sparkline(series, options),
            options.yaxis.label(options.yaxis.min),
            series.len(),
        );
    }
}

/// Render the visible window as one block glyph per sample, scaled against
/// the fixed y-axis range (the chart never autoscales).
pub fn sparkline(series: &Series, options: &ChartOptions) -> String {
    let min = options.yaxis.min;
    let span = options.yaxis.max - min;

    series
        .visible()
        .map(|sample| match sample.y {
            None => GAP,
            Some(_) if span <= 0.0 => BLOCKS[0],
            Some(value) => {
                let level = ((value - min) / span * (BLOCKS.len() - 1) as f64).round();
                BLOCKS[(level.max(0.0) as usize).min(BLOCKS.len() - 1)]
            }
        })
        .collect()
}
