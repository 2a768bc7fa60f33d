pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{
    ChartPoint, DashboardPayload, EndpointStats, HistogramBucket, SeriesPoint, ServiceHealth,
    StatCard, StatusSlice,
};
pub use repositories::PayloadSource;
pub use value_objects::{HealthLevel, ServiceStatus, StatValue, TimeWindow, TrendDirection};
