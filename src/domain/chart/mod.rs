//! Geometry engine: pure functions from numeric series to SVG-ready shapes.

pub mod donut;
pub mod format;
pub mod histogram;
pub mod path;
pub mod sparkline;
pub mod time_series;
pub mod value_objects;

pub use donut::{DonutArc, DonutGeometry, compute_donut_arcs};
pub use histogram::{BarTone, HistogramBar, compute_histogram_bars};
pub use path::SvgPath;
pub use sparkline::{SparklineGeometry, compute_sparkline_path};
pub use time_series::{
    AxisLabel, Gridline, TimeSeriesGeometry, TimeSeriesPath, compute_time_series_path,
};
pub use value_objects::{
    ChartFrame, Color, DonutStyle, HistogramFrame, Padding, Palette, Point, SparklineFrame, Theme,
};
