use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `freqchart.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Rolling-window parameters.
    pub window: WindowConfig,
    /// Chart appearance forwarded to the renderer.
    pub chart: StyleConfig,
    /// Demo signal generator settings.
    pub demo: DemoConfig,
}

/// Rolling-window parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Visible width in samples.  One sample per tick, so this is also the
    /// window length in seconds at the default tick rate.
    pub series_count: usize,
    /// Update timer period in milliseconds.
    pub tick_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            series_count: 60,
            tick_ms: 1_000,
        }
    }
}

/// Chart appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Chart title shown above the plot area.
    pub title: String,
    /// Line width of the area outline.
    pub stroke_width: f32,
    /// Number of tick labels on the x-axis.
    pub tick_amount: u32,
    /// Lower bound of the fixed y-axis range.
    pub y_min: f64,
    /// Upper bound of the fixed y-axis range.
    pub y_max: f64,
    /// Y-axis title.
    pub y_title: String,
    /// Dynamic-animation speed in milliseconds (matches the tick period so
    /// each new sample slides in over exactly one tick).
    pub animation_speed_ms: u64,
    /// Horizontal reference line position.
    pub annotation_y: f64,
    /// Reference line color (hex, e.g. `"#00E396"`).
    pub annotation_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title:              "Frequency".to_string(),
            stroke_width:       1.0,
            tick_amount:        6,
            y_min:              0.0,
            y_max:              100.0,
            y_title:            "Frequency".to_string(),
            animation_speed_ms: 1_000,
            annotation_y:       60.0,
            annotation_color:   "#00E396".to_string(),
        }
    }
}

/// Settings for the built-in demo signal generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Generator period in milliseconds.  Deliberately offset from the
    /// chart tick so consecutive ticks occasionally read the same value.
    pub interval_ms: u64,
    /// Lower bound of the generated uniform range.
    pub min: f64,
    /// Upper bound of the generated uniform range.
    pub max: f64,
    /// Readings to seed the window with at startup.
    pub init_values: Vec<f64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1_200,
            min:         40.0,
            max:         80.0,
            init_values: Vec::new(),
        }
    }
}
