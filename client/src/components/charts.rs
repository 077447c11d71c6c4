//! HTML/CSS bar and donut charts for the dashboard.
//!
//! DESIGN
//! ======
//! Bars are flex columns whose height is a percentage of the axis maximum;
//! donuts are a `conic-gradient` ring. Geometry is computed by the pure
//! helpers below so it can be tested without a DOM.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::fmt::Write as _;

use leptos::prelude::*;

use crate::net::types::TrafficShare;

/// Bar fill.
pub const BAR_COLOR: &str = "#475569";
/// Donut segment colors, cycled.
pub const DONUT_PALETTE: [&str; 3] = ["#E2E8F0", "#94A3B8", "#334155"];
/// Minimum y-axis maximum for bar charts.
pub const MIN_AXIS_MAX: u64 = 100;

/// One labelled bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
}

/// `max(100, largest value)`.
pub fn axis_max(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(MIN_AXIS_MAX, u64::max)
}

/// Bar height as a percentage of `max`, clamped to `[0, 100]`.
#[allow(clippy::cast_precision_loss)]
pub fn bar_percent(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}

pub fn donut_color(index: usize) -> &'static str {
    DONUT_PALETTE[index % DONUT_PALETTE.len()]
}

/// CSS `conic-gradient(...)` for the shares, proportional to their values.
pub fn conic_gradient(shares: &[TrafficShare]) -> String {
    let total: f64 = shares.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return format!("conic-gradient({} 0% 100%)", DONUT_PALETTE[0]);
    }
    let mut css = String::from("conic-gradient(");
    let mut start = 0.0_f64;
    for (index, share) in shares.iter().enumerate() {
        let end = start + share.value.max(0.0) / total * 100.0;
        if index > 0 {
            css.push_str(", ");
        }
        let _ = write!(css, "{} {}% {}%", donut_color(index), trim_number(start), trim_number(end));
        start = end;
    }
    css.push(')');
    css
}

/// Legend text: `"Shift 1 30%"` style value without trailing zeros.
pub fn legend_value(value: f64) -> String {
    format!("{}%", trim_number(value))
}

fn trim_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Vertical bar chart with a fixed axis starting at zero.
#[component]
pub fn BarChart(title: &'static str, bars: Signal<Vec<Bar>>) -> impl IntoView {
    let max = move || axis_max(bars.get().iter().map(|b| b.value));

    view! {
        <figure class="chart chart--bar">
            <figcaption class="chart__title">{title}</figcaption>
            <div class="chart__axis">
                <span class="chart__axis-max">{max}</span>
                <span class="chart__axis-label">"Jumlah Lalu"</span>
                <span class="chart__axis-min">"0"</span>
            </div>
            <div class="chart__bars">
                {move || {
                    let max = max();
                    bars.get()
                        .into_iter()
                        .map(|bar| {
                            let style = format!("height: {}%; background: {BAR_COLOR};", trim_number(bar_percent(bar.value, max)));
                            let tooltip = format!("{}: {}", bar.label, bar.value);
                            view! {
                                <div class="chart__bar-slot" title=tooltip>
                                    <div class="chart__bar" style=style></div>
                                    <span class="chart__bar-label">{bar.label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </figure>
    }
}

/// Donut ring with a `name value%` legend.
#[component]
pub fn DonutChart(title: &'static str, shares: Signal<Vec<TrafficShare>>) -> impl IntoView {
    let ring_style = move || format!("background: {};", conic_gradient(&shares.get()));

    view! {
        <figure class="chart chart--donut">
            <div class="chart__donut" style=ring_style>
                <div class="chart__donut-hole"></div>
            </div>
            <div class="chart__legend">
                <h3 class="chart__title">{title}</h3>
                {move || {
                    shares
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, share)| {
                            let swatch = format!("background: {};", donut_color(index));
                            view! {
                                <div class="chart__legend-row">
                                    <span class="chart__swatch" style=swatch></span>
                                    <span class="chart__legend-name">{share.name}</span>
                                    <span class="chart__legend-value">{legend_value(share.value)}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </figure>
    }
}
