use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{DashboardComposer, DashboardConfig, DashboardView, EndpointRowView, PageInfo},
    domain::{
        chart::{
            ChartFrame, DonutGeometry, HistogramBar, HistogramFrame, Palette, SparklineGeometry,
            Theme, TimeSeriesPath,
            format::{format_compact, format_latency_ms, format_percent},
        },
        logging::{LogComponent, get_logger},
        telemetry::{DashboardPayload, ServiceHealth, StatCard, TimeWindow, TrendDirection},
    },
    infrastructure::{FetchController, FetchOutcome, FetchState, HttpPayloadSource},
    view_state::{ViewState, WindowChange},
};

const STYLES: &str = r#"
.api-dashboard {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    color: #111827;
    display: flex;
    flex-direction: column;
    gap: 16px;
}
.dash-header { display: flex; justify-content: space-between; align-items: center; }
.dash-header h2 { margin: 0; font-size: 18px; }
.window-btn {
    border: 1px solid #e5e7eb;
    background: white;
    padding: 4px 10px;
    border-radius: 6px;
    cursor: pointer;
    font-size: 12px;
}
.window-btn.active { background: #6366f1; border-color: #6366f1; color: white; }
.loading { font-size: 12px; color: #9ca3af; margin-left: 8px; }
.error-banner, .alert {
    padding: 8px 12px;
    border-radius: 6px;
    display: flex;
    justify-content: space-between;
}
.error-banner { background: #fef2f2; color: #b91c1c; }
.alert { background: #fffbeb; color: #92400e; }
.alert button { border: none; background: transparent; cursor: pointer; }
.stat-cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 12px; }
.stat-card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; }
.stat-value { font-size: 22px; font-weight: 600; }
.stat-label, .delta { font-size: 12px; color: #6b7280; }
.trend-up { color: #16a34a; }
.trend-down { color: #dc2626; }
.charts { display: grid; grid-template-columns: 2fr 1fr; gap: 16px; }
.axis-label { font-size: 10px; fill: #9ca3af; }
.donut-label { font-size: 18px; font-weight: 600; }
.legend { list-style: none; padding: 0; font-size: 12px; }
.legend-swatch { display: inline-block; width: 8px; height: 8px; border-radius: 2px; margin-right: 6px; }
.services { display: flex; gap: 12px; flex-wrap: wrap; font-size: 12px; }
.health-ok { color: #16a34a; }
.health-warn { color: #d97706; }
.health-bad { color: #dc2626; }
.endpoints { width: 100%; border-collapse: collapse; font-size: 13px; }
.endpoints td, .endpoints th { padding: 6px 8px; border-bottom: 1px solid #f3f4f6; text-align: left; }
.endpoint-row { cursor: pointer; }
.endpoint-row.expanded { background: #f9fafb; }
.method { font-weight: 600; font-size: 11px; margin-right: 6px; }
.pagination { display: flex; gap: 8px; align-items: center; justify-content: flex-end; font-size: 12px; }
.placeholder { color: #9ca3af; padding: 24px; text-align: center; }
"#;

/// 📊 API usage dashboard widget.
///
/// Owns one view state, one fetch controller and (optionally) one refresh
/// timer; all of them are released when the component is unmounted.
#[component]
pub fn ApiDashboard(config: DashboardConfig) -> impl IntoView {
    let theme = Theme::default();
    let composer = DashboardComposer::new(theme.clone(), config.page_size());
    let controller =
        Rc::new(FetchController::new(HttpPayloadSource::new(), config.api_url.clone()));

    let view_state = create_rw_signal(ViewState::new(config.initial_window()));
    let fetch_state = create_rw_signal(FetchState::<DashboardPayload>::default());

    let fetch_window = {
        let controller = Rc::clone(&controller);
        move |window: TimeWindow| {
            let (_disposer, task) = controller.start(window);
            fetch_state.set(controller.state());
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                if task.await == FetchOutcome::Applied {
                    view_state.update_untracked(ViewState::on_data_refresh);
                    fetch_state.set(controller.state());
                }
            });
        }
    };

    // Only a different window triggers a new request; the memo swallows same-value writes.
    let active_window = create_memo(move |_| view_state.with(|state| state.active_window));
    create_effect({
        let fetch_window = fetch_window.clone();
        move |_| fetch_window(active_window.get())
    });

    let refresh_timer = config.refresh_interval_ms().map(|interval_ms| {
        get_logger().info(
            LogComponent::Presentation("ApiDashboard"),
            &format!("⏱️ Auto-refresh every {} ms", interval_ms),
        );
        Interval::new(interval_ms, move || fetch_window(view_state.get_untracked().active_window))
    });

    on_cleanup({
        let controller = Rc::clone(&controller);
        move || {
            drop(refresh_timer);
            controller.invalidate();
            get_logger().info(LogComponent::Presentation("ApiDashboard"), "🧹 Dashboard unmounted");
        }
    });

    let composed = create_memo(move |_| {
        fetch_state.with(|state| {
            state
                .payload
                .as_ref()
                .map(|payload| view_state.with(|view| composer.compose(payload, view)))
        })
    });

    let title = config.title().to_string();
    let palette = theme.palette.clone();
    let traffic_frame = theme.traffic;
    let histogram_frame = theme.histogram;

    view! {
        <style>{STYLES}</style>
        <div class="api-dashboard">
            <div class="dash-header">
                <h2>{title}</h2>
                <div class="window-picker">
                    <WindowPicker view_state=view_state />
                    {move || fetch_state.with(FetchState::is_loading).then(|| view! {
                        <span class="loading">"Loading…"</span>
                    })}
                </div>
            </div>
            {move || fetch_state.with(|state| state.error_message.clone()).map(|message| view! {
                <div class="error-banner">{message}</div>
            })}
            {move || match composed.get() {
                Some(dashboard) => dashboard_body(
                    dashboard,
                    view_state,
                    &palette,
                    traffic_frame,
                    histogram_frame,
                ),
                None => view! { <div class="placeholder">"No data yet"</div> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn WindowPicker(view_state: RwSignal<ViewState>) -> impl IntoView {
    TimeWindow::iter()
        .map(|window| {
            view! {
                <button
                    class="window-btn"
                    class:active=move || view_state.with(|state| state.active_window == window)
                    title=window.description()
                    on:click=move |_| {
                        view_state.update(|state| {
                            if state.select_window(window) == WindowChange::Changed {
                                get_logger().info(
                                    LogComponent::Presentation("WindowPicker"),
                                    &format!("🔄 Switching to {} window", window),
                                );
                            }
                        });
                    }
                >
                    {window.to_string()}
                </button>
            }
        })
        .collect_view()
}

fn dashboard_body(
    dashboard: DashboardView,
    view_state: RwSignal<ViewState>,
    palette: &Palette,
    traffic_frame: ChartFrame,
    histogram_frame: HistogramFrame,
) -> View {
    let DashboardView { alert, stats, services, traffic, status_donut, rows, page, .. } = dashboard;

    view! {
        {alert.map(|text| view! {
            <div class="alert">
                <span>{text}</span>
                <button on:click=move |_| view_state.update(ViewState::dismiss_alert)>"✕"</button>
            </div>
        })}
        {stat_cards(stats)}
        <div class="charts">
            {traffic_chart(traffic, &traffic_frame, palette)}
            {status_donut_chart(status_donut, palette)}
        </div>
        {service_list(services)}
        <table class="endpoints">
            <thead>
                <tr>
                    <th>"Endpoint"</th>
                    <th>"Calls"</th>
                    <th>"Errors"</th>
                    <th>"p50"</th>
                    <th>"p95"</th>
                    <th>"Trend"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| endpoint_row(row, view_state, &histogram_frame))
                    .collect_view()}
            </tbody>
        </table>
        {pagination(page, view_state)}
    }
    .into_view()
}

fn trend_class(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "trend-up",
        TrendDirection::Down => "trend-down",
        TrendDirection::Flat => "trend-flat",
    }
}

fn stat_cards(stats: Vec<StatCard>) -> impl IntoView {
    let cards = stats
        .into_iter()
        .map(|card| {
            let direction = card.delta_dir.unwrap_or_default();
            view! {
                <div class="stat-card">
                    <div class="stat-label">{card.label}</div>
                    <div class="stat-value">{card.value.to_string()}</div>
                    {card.delta.map(|delta| view! {
                        <div class=format!("delta {}", trend_class(direction))>
                            {format!("{} {}", direction.arrow(), delta)}
                        </div>
                    })}
                </div>
            }
        })
        .collect_view();
    view! { <div class="stat-cards">{cards}</div> }
}

fn traffic_chart(traffic: TimeSeriesPath, frame: &ChartFrame, palette: &Palette) -> View {
    let (width, height) = match &traffic {
        TimeSeriesPath::Empty { width, height } => (*width, *height),
        TimeSeriesPath::Plotted(geometry) => (geometry.width, geometry.height),
    };
    let view_box = format!("0 0 {} {}", width, height);

    let Some(geometry) = traffic.geometry().cloned() else {
        return view! { <svg class="traffic-chart" viewBox=view_box></svg> }.into_view();
    };

    let grid_color = palette.grid.to_css();
    let accent = palette.accent.to_css();
    let danger = palette.danger.to_css();
    let left = frame.padding.left;
    let right = frame.width - frame.padding.right;
    let label_y = frame.height - frame.padding.bottom / 3.0;

    let gridlines = geometry
        .gridlines
        .iter()
        .map(|line| {
            view! {
                <line x1=left y1=line.y x2=right y2=line.y stroke=grid_color.clone() stroke-width="1" />
                <text class="axis-label" x={left - 6.0} y={line.y + 3.0} text-anchor="end">
                    {line.label.clone()}
                </text>
            }
        })
        .collect_view();

    let x_labels = geometry
        .x_labels
        .iter()
        .map(|label| {
            view! {
                <text class="axis-label" x=label.x y=label_y text-anchor="middle">
                    {label.text.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="traffic-chart" viewBox=view_box>
            {gridlines}
            <path d=geometry.area_path fill=accent.clone() fill-opacity="0.15" stroke="none" />
            <path d=geometry.primary_path fill="none" stroke=accent stroke-width="2" />
            <path
                d=geometry.secondary_path
                fill="none"
                stroke=danger
                stroke-width="1.5"
                stroke-dasharray="4 3"
            />
            {x_labels}
        </svg>
    }
    .into_view()
}

fn status_donut_chart(donut: DonutGeometry, palette: &Palette) -> View {
    let size = (donut.center.x * 2.0, donut.center.y * 2.0);
    let (cx, cy) = (donut.center.x, donut.center.y);
    let rotation = format!("rotate({} {} {})", donut.rotation_deg, cx, cy);

    let arcs = donut
        .arcs
        .iter()
        .map(|arc| {
            view! {
                <circle
                    cx=cx
                    cy=cy
                    r=donut.radius
                    fill="none"
                    stroke=arc.color.clone()
                    stroke-width=donut.stroke_width
                    stroke-dasharray=arc.dash_array.clone()
                    stroke-dashoffset=arc.dash_offset
                    transform=rotation.clone()
                />
            }
        })
        .collect_view();

    let legend = donut
        .arcs
        .iter()
        .map(|arc| {
            view! {
                <li>
                    <span class="legend-swatch" style=format!("background: {}", arc.color)></span>
                    {format!("{} {}", arc.label, format_percent(arc.percentage))}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="status-donut">
            <svg viewBox=format!("0 0 {} {}", size.0, size.1) width=size.0 height=size.1>
                <circle
                    cx=cx
                    cy=cy
                    r=donut.radius
                    fill="none"
                    stroke=palette.grid.to_css()
                    stroke-width=donut.stroke_width
                />
                {arcs}
                <text class="donut-label" x=cx y={cy + 6.0} text-anchor="middle">
                    {donut.center_label}
                </text>
            </svg>
            <ul class="legend">{legend}</ul>
        </div>
    }
    .into_view()
}

fn service_list(services: Vec<ServiceHealth>) -> impl IntoView {
    let items = services
        .into_iter()
        .map(|service| {
            let detail = service.latency_ms.map(format_latency_ms).unwrap_or_default();
            view! {
                <span class=format!("service health-{}", service.status.health())>
                    {format!("● {} {} {}", service.name, service.status, detail)}
                </span>
            }
        })
        .collect_view();
    view! { <div class="services">{items}</div> }
}

fn sparkline_svg(sparkline: &SparklineGeometry) -> View {
    let view_box = format!("0 0 {} {}", sparkline.width, sparkline.height);
    let marker = sparkline.marker.map(|point| {
        view! { <circle cx=point.x cy=point.y r="2" fill=sparkline.color.clone() /> }
    });
    view! {
        <svg class="sparkline" viewBox=view_box width=sparkline.width height=sparkline.height>
            <path d=sparkline.area_path.clone() fill=sparkline.color.clone() fill-opacity="0.12" stroke="none" />
            <path d=sparkline.line_path.clone() fill="none" stroke=sparkline.color.clone() stroke-width="1.5" />
            {marker}
        </svg>
    }
    .into_view()
}

fn histogram_svg(bars: Vec<HistogramBar>, frame: &HistogramFrame) -> View {
    let label_band = 14.0;
    let view_box = format!("0 0 {} {}", frame.width, frame.height + label_band);
    let bars = bars
        .into_iter()
        .map(|bar| {
            let center = bar.x + bar.width / 2.0;
            view! {
                <rect x=bar.x y=bar.y width=bar.width height=bar.height fill=bar.color rx="2" />
                {bar.count_label.map(|count| view! {
                    <text class="axis-label" x=center y={bar.y + 10.0} text-anchor="middle" fill="white">
                        {count}
                    </text>
                })}
                <text class="axis-label" x=center y={frame.height + label_band - 2.0} text-anchor="middle">
                    {bar.label}
                </text>
            }
        })
        .collect_view();
    view! { <svg class="histogram" viewBox=view_box width=frame.width>{bars}</svg> }.into_view()
}

fn endpoint_row(
    row: EndpointRowView,
    view_state: RwSignal<ViewState>,
    histogram_frame: &HistogramFrame,
) -> View {
    let EndpointRowView { key, endpoint, health, sparkline, histogram, expanded } = row;
    let trend = endpoint.trend_dir.unwrap_or_default();
    let histogram_frame = *histogram_frame;

    view! {
        <tr
            class="endpoint-row"
            class:expanded=expanded
            on:click=move |_| view_state.update(|state| state.toggle_row(&key))
        >
            <td>
                <span class="method">{endpoint.method.to_uppercase()}</span>
                <code>{endpoint.path.clone()}</code>
            </td>
            <td>{format_compact(endpoint.calls as f64)}</td>
            <td class=format!("health-{}", health)>{format_percent(endpoint.error_rate)}</td>
            <td>{endpoint.p50_ms.map(format_latency_ms).unwrap_or_else(|| "–".to_string())}</td>
            <td>{endpoint.p95_ms.map(format_latency_ms).unwrap_or_else(|| "–".to_string())}</td>
            <td>
                {sparkline_svg(&sparkline)}
                {endpoint.trend.clone().map(|text| view! {
                    <span class=trend_class(trend)>{format!("{} {}", trend.arrow(), text)}</span>
                })}
            </td>
        </tr>
        {histogram.map(|bars| view! {
            <tr class="histogram-row">
                <td colspan="6">{histogram_svg(bars, &histogram_frame)}</td>
            </tr>
        })}
    }
    .into_view()
}

fn pagination(page: PageInfo, view_state: RwSignal<ViewState>) -> impl IntoView {
    let PageInfo { current, total, first_item, last_item, total_items } = page;
    view! {
        <div class="pagination">
            <span>{format!("{}–{} of {}", first_item, last_item, total_items)}</span>
            <button
                disabled={!page.has_previous()}
                on:click=move |_| view_state.update(|state| state.select_page(current.saturating_sub(1), total))
            >
                "‹"
            </button>
            <span>{format!("Page {} of {}", current, total)}</span>
            <button
                disabled={!page.has_next()}
                on:click=move |_| view_state.update(|state| state.select_page(current + 1, total))
            >
                "›"
            </button>
        </div>
    }
}
