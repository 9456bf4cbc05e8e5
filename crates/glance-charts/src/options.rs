//! Chart configuration shared by every chart kind.

use crate::animation::DEFAULT_ANIMATION_DURATION;
use crate::error::ChartError;
use glance_core::{Color, TextStyle};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options every chart carries regardless of kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Spacing around and between elements, in pixels
    pub margin: f32,
    /// Font size for labels and captions
    pub label_text_size: f32,
    /// Surface fill color
    pub background_color: Color,
    /// Default label color
    pub label_color: Color,
    /// Font family for all text; `None` uses the backend default
    pub typeface: Option<String>,
    /// Lower value bound override
    pub min_value: Option<f32>,
    /// Upper value bound override
    pub max_value: Option<f32>,
    /// Whether data changes animate
    pub is_animated: bool,
    /// Length of each entrance or exit animation
    #[serde(with = "duration_millis", rename = "animation_duration_ms")]
    pub animation_duration: Duration,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            margin: 20.0,
            label_text_size: 16.0,
            background_color: Color::WHITE,
            label_color: Color::GRAY,
            typeface: None,
            min_value: None,
            max_value: None,
            is_animated: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl ChartOptions {
    /// Set the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the label text size.
    #[must_use]
    pub fn with_label_text_size(mut self, size: f32) -> Self {
        self.label_text_size = size;
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the value bound overrides.
    #[must_use]
    pub const fn with_value_bounds(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Enable or disable animation.
    #[must_use]
    pub const fn with_animation(mut self, animated: bool) -> Self {
        self.is_animated = animated;
        self
    }

    /// Set the animation length.
    #[must_use]
    pub const fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Text style for labels in `color`.
    #[must_use]
    pub fn text_style(&self, color: Color) -> TextStyle {
        TextStyle::new(self.label_text_size, color).with_typeface(self.typeface.clone())
    }

    /// Check values a config file could get wrong.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ChartError::invalid("margin", "must be a non-negative number"));
        }
        if !self.label_text_size.is_finite() || self.label_text_size <= 0.0 {
            return Err(ChartError::invalid("label_text_size", "must be positive"));
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ChartError::invalid(
                    "min_value",
                    format!("{min} is greater than max_value {max}"),
                ));
            }
        }
        Ok(())
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

// =============================================================================
// Shared enums
// =============================================================================

/// Direction text is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left to right
    #[default]
    Horizontal,
    /// Rotated a quarter turn, reading bottom to top
    Vertical,
}

/// Where axis charts place value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueLabelOption {
    /// In the header above the plotted band
    #[default]
    TopOfChart,
    /// Just past the end of each element
    TopOfElement,
    /// Inside each element
    OverElement,
    /// Not drawn
    None,
}

impl ValueLabelOption {
    /// Whether header space is reserved for value labels.
    #[must_use]
    pub const fn reserves_header(self) -> bool {
        matches!(self, Self::TopOfChart | Self::TopOfElement)
    }
}

/// Marker drawn at each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointMode {
    /// No marker
    None,
    /// Filled circle
    #[default]
    Circle,
    /// Filled square
    Square,
}

/// How consecutive points are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    /// No line
    None,
    /// Straight segments
    Straight,
    /// Horizontal-tangent cubic curves
    #[default]
    Spline,
}

/// Side the Y axis gutter is reserved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxisPosition {
    /// Left of the plot
    #[default]
    Left,
    /// Right of the plot
    Right,
}

/// Series legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendOption {
    /// No legend
    None,
    /// Wrapped rows below the labels
    #[default]
    Bottom,
}

/// Which sides of a donut get captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonutLabelMode {
    /// No captions
    None,
    /// Every caption on the right
    RightOnly,
    /// Captions split between both sides
    #[default]
    LeftAndRight,
}

// =============================================================================
// Axis options
// =============================================================================

/// Options of the shared axis pipeline (bar, point, line and variants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    /// Orientation of the footer labels
    pub label_orientation: Orientation,
    /// Orientation of the value labels
    pub value_label_orientation: Orientation,
    /// Where value labels go
    pub value_label_option: ValueLabelOption,
    /// Draw Y axis tick labels
    pub show_y_axis_text: bool,
    /// Draw horizontal grid lines at the ticks
    pub show_y_axis_lines: bool,
    /// Gutter side
    pub y_axis_position: YAxisPosition,
    /// Upper bound on the number of Y ticks
    pub y_axis_max_ticks: usize,
    /// Tick label color
    pub y_axis_text_color: Color,
    /// Grid line color
    pub y_axis_line_color: Color,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            label_orientation: Orientation::Horizontal,
            value_label_orientation: Orientation::Horizontal,
            value_label_option: ValueLabelOption::TopOfChart,
            show_y_axis_text: false,
            show_y_axis_lines: false,
            y_axis_position: YAxisPosition::Left,
            y_axis_max_ticks: 5,
            y_axis_text_color: Color::GRAY,
            y_axis_line_color: Color::LIGHT_GRAY,
        }
    }
}

impl AxisOptions {
    /// Whether a nice-scale Y axis is laid out.
    #[must_use]
    pub const fn shows_y_axis(&self) -> bool {
        self.show_y_axis_text || self.show_y_axis_lines
    }

    /// Turn the Y axis text and grid lines on.
    #[must_use]
    pub const fn with_y_axis(mut self) -> Self {
        self.show_y_axis_text = true;
        self.show_y_axis_lines = true;
        self
    }

    /// Set the value label placement.
    #[must_use]
    pub const fn with_value_labels(mut self, option: ValueLabelOption) -> Self {
        self.value_label_option = option;
        self
    }

    /// Set both label orientations.
    #[must_use]
    pub const fn with_orientation(mut self, labels: Orientation, value_labels: Orientation) -> Self {
        self.label_orientation = labels;
        self.value_label_orientation = value_labels;
        self
    }
}
