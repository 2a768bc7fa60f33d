pub mod config;
pub mod dashboard_service;

pub use config::DashboardConfig;
pub use dashboard_service::{DashboardComposer, DashboardView, EndpointRowView, PageInfo};
