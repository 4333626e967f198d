pub mod colors;

pub use colors::Color;

use chart_config::ChartConfig;
use serde::Serialize;

/// Compiled renderer configuration derived from [`ChartConfig`].
///
/// This is the options half of what the external charting library consumes
/// on every re-render (the other half being the series data).  The field
/// layout and the camelCase serialization deliberately mirror the shape a
/// JS-side area-chart library expects, so the whole object can be handed
/// over as one JSON value.
///
/// Building one via [`ChartOptions::from_config`] is infallible — an
/// invalid annotation color string falls back to a safe default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartSurface,
    pub annotations: Annotations,
    /// Hover tooltip — disabled: samples scroll away too fast to point at.
    pub tooltip: Toggle,
    /// Per-point value labels — disabled.
    pub data_labels: Toggle,
    pub stroke: Stroke,
    pub title: Title,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub legend: Legend,
}

impl ChartOptions {
    /// Build a [`ChartOptions`] from the loaded configuration.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            chart: ChartSurface {
                kind: ChartKind::Area,
                animations: Animations {
                    enabled: true,
                    easing: Easing::Linear,
                    dynamic_animation: DynamicAnimation {
                        enabled: true,
                        speed: config.chart.animation_speed_ms,
                    },
                },
            },
            annotations: Annotations {
                yaxis: vec![YAnnotation {
                    y: config.chart.annotation_y,
                    border_color: Color::from_hex(&config.chart.annotation_color)
                        .unwrap_or(Color::GREEN),
                }],
            },
            tooltip: Toggle { enabled: false },
            data_labels: Toggle { enabled: false },
            stroke: Stroke {
                curve: Curve::Straight,
                width: config.chart.stroke_width,
            },
            title: Title {
                text: config.chart.title.clone(),
                align: Align::Left,
            },
            xaxis: XAxis {
                kind: AxisKind::Numeric,
                tick_amount: config.chart.tick_amount,
                range: config.window.series_count as u32,
            },
            yaxis: YAxis {
                min: config.chart.y_min,
                max: config.chart.y_max,
                title: config.chart.y_title.clone(),
            },
            legend: Legend {
                horizontal_align: Align::Left,
            },
        }
    }

    /// Whether the renderer should animate series updates.
    pub fn animations_enabled(&self) -> bool {
        self.chart.animations.enabled
    }

    /// Toggle the renderer's transition animation.
    pub fn set_animations(&mut self, enabled: bool) {
        self.chart.animations.enabled = enabled;
    }

    /// Visible window width in samples (the x-axis span).
    pub fn window(&self) -> usize {
        self.xaxis.range as usize
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

/// Chart surface settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSurface {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub animations: Animations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Area,
}

/// Transition animation settings.  `enabled` is the flag the render driver
/// toggles around a trim; everything else is static.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animations {
    pub enabled: bool,
    pub easing: Easing,
    pub dynamic_animation: DynamicAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicAnimation {
    pub enabled: bool,
    /// Milliseconds per sliding step.
    pub speed: u64,
}

/// Static chart annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotations {
    /// Horizontal reference lines.
    pub yaxis: Vec<YAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAnnotation {
    pub y: f64,
    pub border_color: Color,
}

/// A feature that is simply on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub curve: Curve,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Straight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub align: Align,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
}

/// Numeric x-axis spanning the visible window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub tick_amount: u32,
    /// Window width in samples; positions run `1..=range`.
    pub range: u32,
}

impl XAxis {
    /// Tick-label formatter: position `range` is "now", position 1 is the
    /// oldest visible sample.
    pub fn label(&self, x: i32) -> String {
        format!("{} seconds ago", self.range as i32 - x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Numeric,
}

/// Fixed y-axis range; the signal never autoscales the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub min: f64,
    pub max: f64,
    pub title: String,
}

impl YAxis {
    /// Tick-label formatter: integer labels.
    pub fn label(&self, value: f64) -> String {
        format!("{value:.0}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub horizontal_align: Align,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_maps_every_field() {
        let mut config = ChartConfig::default();
        config.window.series_count = 30;
        config.chart.title = "Pressure".to_string();
        config.chart.annotation_y = 42.0;

        let options = ChartOptions::from_config(&config);

        assert!(options.animations_enabled());
        assert_eq!(options.window(), 30);
        assert_eq!(options.xaxis.range, 30);
        assert_eq!(options.title.text, "Pressure");
        assert_eq!(options.annotations.yaxis[0].y, 42.0);
        assert_eq!(options.annotations.yaxis[0].border_color, Color::GREEN);
        assert_eq!(options.yaxis.min, 0.0);
        assert_eq!(options.yaxis.max, 100.0);
    }

    #[test]
    fn bad_annotation_color_falls_back() {
        let mut config = ChartConfig::default();
        config.chart.annotation_color = "chartreuse".to_string();

        let options = ChartOptions::from_config(&config);
        assert_eq!(options.annotations.yaxis[0].border_color, Color::GREEN);
    }

    #[test]
    fn x_axis_labels_count_backwards_from_now() {
        let options = ChartOptions::default();
        assert_eq!(options.xaxis.label(25), "35 seconds ago");
        assert_eq!(options.xaxis.label(60), "0 seconds ago");
        assert_eq!(options.yaxis.label(59.7), "60");
    }

    #[test]
    fn animation_toggle() {
        let mut options = ChartOptions::default();
        options.set_animations(false);
        assert!(!options.animations_enabled());
        // Only the flag moves; the dynamic settings stay put.
        assert!(options.chart.animations.dynamic_animation.enabled);
    }

    #[test]
    fn serializes_in_the_renderer_shape() {
        let json = serde_json::to_value(ChartOptions::default()).unwrap();

        assert_eq!(json["chart"]["type"], "area");
        assert_eq!(json["chart"]["animations"]["easing"], "linear");
        assert_eq!(json["chart"]["animations"]["dynamicAnimation"]["speed"], 1000);
        assert_eq!(json["dataLabels"]["enabled"], false);
        assert_eq!(json["tooltip"]["enabled"], false);
        assert_eq!(json["stroke"]["curve"], "straight");
        assert_eq!(json["xaxis"]["tickAmount"], 6);
        assert_eq!(json["xaxis"]["range"], 60);
        assert_eq!(json["annotations"]["yaxis"][0]["borderColor"], "#00E396");
        assert_eq!(json["legend"]["horizontalAlign"], "left");
    }
}
