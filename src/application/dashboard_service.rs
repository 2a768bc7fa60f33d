use crate::domain::{
    chart::{
        DonutGeometry, HistogramBar, SparklineGeometry, Theme, TimeSeriesPath,
        compute_donut_arcs, compute_histogram_bars, compute_sparkline_path,
        compute_time_series_path,
    },
    logging::LogComponent,
    telemetry::{DashboardPayload, EndpointStats, HealthLevel, ServiceHealth, StatCard, TimeWindow},
};
use crate::view_state::{PageSize, Pagination, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub struct EndpointRowView {
    pub key: String,
    pub endpoint: EndpointStats,
    pub health: HealthLevel,
    pub sparkline: SparklineGeometry,
    /// Only computed for the expanded row.
    pub histogram: Option<Vec<HistogramBar>>,
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current: usize,
    pub total: usize,
    /// 1-based index of the first row shown; 0 when there are no rows.
    pub first_item: usize,
    pub last_item: usize,
    pub total_items: usize,
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

/// Everything the widget needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub window: TimeWindow,
    pub alert: Option<String>,
    pub stats: Vec<StatCard>,
    pub services: Vec<ServiceHealth>,
    pub traffic: TimeSeriesPath,
    pub status_donut: DonutGeometry,
    pub rows: Vec<EndpointRowView>,
    pub page: PageInfo,
}

/// Pure `payload × view state → geometry` composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardComposer {
    pub theme: Theme,
    pub pagination: Pagination,
}

impl DashboardComposer {
    pub fn new(theme: Theme, page_size: PageSize) -> Self {
        Self { theme, pagination: Pagination::new(page_size) }
    }

    pub fn total_pages(&self, payload: &DashboardPayload) -> usize {
        self.pagination.total_pages(payload.endpoints.len())
    }

    pub fn compose(&self, payload: &DashboardPayload, view: &ViewState) -> DashboardView {
        let endpoints = &payload.endpoints;
        // A refresh may shrink the list below the current page; show the last page then.
        let page = self.pagination.clamp_page(view.current_page, endpoints.len());
        let range = self.pagination.page_range(page, endpoints.len());

        let rows = endpoints[range.clone()].iter().map(|endpoint| self.row(endpoint, view)).collect();

        let alert = if view.alert_dismissed { None } else { payload.alert_text().map(str::to_string) };

        crate::log_debug!(
            LogComponent::Application("Composer"),
            "🧩 {} window: page {}/{} with {} of {} endpoints",
            view.active_window,
            page,
            self.pagination.total_pages(endpoints.len()),
            range.len(),
            endpoints.len()
        );

        DashboardView {
            window: view.active_window,
            alert,
            stats: payload.stats.clone(),
            services: payload.services.clone(),
            traffic: compute_time_series_path(&payload.traffic_series(), &self.theme.traffic),
            status_donut: compute_donut_arcs(
                &payload.status_code_breakdown,
                &self.theme.donut,
                &self.theme.palette,
            ),
            rows,
            page: PageInfo {
                current: page,
                total: self.pagination.total_pages(endpoints.len()),
                first_item: if range.is_empty() { 0 } else { range.start + 1 },
                last_item: range.end,
                total_items: endpoints.len(),
            },
        }
    }

    fn row(&self, endpoint: &EndpointStats, view: &ViewState) -> EndpointRowView {
        let key = endpoint.row_key();
        let health = endpoint.health_level();
        let expanded = view.is_expanded(&key);
        let histogram = expanded.then(|| {
            compute_histogram_bars(&endpoint.histogram, &self.theme.histogram, &self.theme.palette)
        });
        EndpointRowView {
            sparkline: compute_sparkline_path(
                &endpoint.sparkline,
                health,
                &self.theme.sparkline,
                &self.theme.palette,
            ),
            key,
            endpoint: endpoint.clone(),
            health,
            histogram,
            expanded,
        }
    }
}
