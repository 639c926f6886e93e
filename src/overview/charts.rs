//! Chart generation and rendering for the expense overview.
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a corresponding HTML container and JavaScript
//! initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    datatype::DataPointItem,
    element::{AxisLabel, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    html::{CARD_STYLE, HeadElement},
    view::SeriesPoint,
};

/// An overview chart with its HTML container ID and ECharts configuration.
pub(super) struct OverviewChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for the overview charts.
pub(super) fn charts_view(charts: &[OverviewChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full grid grid-cols-1 xl:grid-cols-2 gap-4 mb-4"
        {
            @for chart in charts {
                div class=(CARD_STYLE)
                {
                    div
                        id=(chart.id)
                        class="min-h-[320px]"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the overview charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[OverviewChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A line chart with one point per visible expense, in row order.
pub(super) fn expenses_line_chart(points: &[SeriesPoint]) -> Chart {
    let labels: Vec<String> = points.iter().map(|point| point.label.clone()).collect();
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();

    Chart::new()
        .title(Title::new().text("Expenses").subtext("Amount per entry"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter()),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Amount").data(values))
}

/// A pie chart with one slice per category, including zero-valued slices for
/// categories absent from the visible rows.
pub(super) fn category_pie_chart(points: &[SeriesPoint]) -> Chart {
    let data: Vec<DataPointItem> = points
        .iter()
        .map(|point| DataPointItem::new(point.value).name(point.label.clone()))
        .collect();

    Chart::new()
        .title(Title::new().text("By Category").subtext("Visible expenses"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().top("bottom"))
        .series(Pie::new().name("Category").radius("55%").data(data))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
