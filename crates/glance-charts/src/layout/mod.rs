//! One [`ChartLayout`](crate::ChartLayout) per chart kind.
//!
//! Axis-based kinds share [`AxisGeometry`]; the radial kinds share the side
//! caption columns.

mod axis;
mod bar;
mod donut;
mod extended_bar;
mod gauge;
mod grouped_bar;
mod line;
mod point;
mod radar;
mod range_bar;

pub use axis::AxisGeometry;
pub use bar::{BarLayout, DEFAULT_MIN_BAR_HEIGHT};
pub use donut::{sector_fractions, DonutLayout, DONUT_START_ANGLE};
pub use extended_bar::ExtendedBarLayout;
pub use gauge::{ring_metrics, HalfRadialGaugeLayout, RadialGaugeLayout};
pub use grouped_bar::{grouped_bar_width, GroupedBarLayout};
pub use line::{spline_controls, LineLayout};
pub use point::{PointLayout, DEFAULT_POINT_SIZE};
pub use radar::{radar_point, spoke_angle, RadarLayout, RADAR_START_ANGLE};
pub use range_bar::RangeBarLayout;
