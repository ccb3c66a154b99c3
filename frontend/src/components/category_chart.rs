use std::collections::BTreeMap;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::CategoryPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 900;
const CANVAS_HEIGHT: u32 = 360;

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    /// Per-record (category, amount) contributions; this component does
    /// the summing
    pub points: Vec<CategoryPoint>,
    pub loading: bool,
}

/// Bar chart of sales by category, one colored bar per category.
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

/// Sum the per-record series into one total per category. BTreeMap keys
/// keep the bars in label order, stable across redraws.
fn totals_by_category(points: &[CategoryPoint]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for point in points {
        *totals.entry(point.category.clone()).or_insert(0.0) += point.amount;
    }
    totals.into_iter().collect()
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().points != old_props.points {
            self.draw_chart(&ctx.props().points);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().points.is_empty() {
            self.draw_chart(&ctx.props().points);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let empty = ctx.props().points.is_empty();
        let loading = ctx.props().loading;

        html! {
            <div class="chart-container">
                <div class="chart-title-header">
                    <h3 class="chart-title">{"Sales by Category"}</h3>
                </div>
                {if empty && loading {
                    html! {
                        <div class="chart-empty">
                            <p>{"Loading chart data..."}</p>
                        </div>
                    }
                } else if empty {
                    html! {
                        <div class="chart-empty">
                            <p>{"No sales match the current filters"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="chart-canvas"
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl CategoryChart {
    fn draw_chart(&self, points: &[CategoryPoint]) {
        let totals = totals_by_category(points);
        if totals.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<String> = totals.iter().map(|(category, _)| category.clone()).collect();
        let y_max = totals
            .iter()
            .map(|(_, total)| *total)
            .fold(f64::NEG_INFINITY, f64::max)
            .max(1.0)
            * 1.1;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d((0..totals.len()).into_segmented(), 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let label_formatter = |x: &SegmentValue<usize>| match x {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Sales ($)")
            .x_desc("Category")
            .y_label_formatter(&|v| format!("${:.0}", v))
            .x_label_formatter(&label_formatter)
            .label_style(("sans-serif", 12, &RGBColor(90, 90, 90)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        // One bar per category, each with its own palette color
        if chart
            .draw_series(totals.iter().enumerate().map(|(i, (_, total))| {
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), *total),
                    ],
                    Palette99::pick(i).filled(),
                );
                bar.set_margin(0, 0, 10, 10);
                bar
            }))
            .is_err()
        {
            return;
        }

        let _ = root.present();
    }
}
