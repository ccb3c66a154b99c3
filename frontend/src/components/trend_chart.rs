use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::TrendPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 900;
const CANVAS_HEIGHT: u32 = 360;

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    /// Chronological (date, amount) points, one per record
    pub points: Vec<TrendPoint>,
    pub loading: bool,
}

/// Line chart of sales over time, drawn with plotters on a canvas.
pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = ();
    type Properties = TrendChartProps;

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
                    <h3 class="chart-title">{"Sales Over Time"}</h3>
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

impl TrendChart {
    fn draw_chart(&self, points: &[TrendPoint]) {
        if points.is_empty() {
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

        // Points arrive chronological, but scan anyway to stay robust
        let mut min_date = points[0].date;
        let mut max_date = points[0].date;
        for point in points {
            if point.date < min_date {
                min_date = point.date;
            }
            if point.date > max_date {
                max_date = point.date;
            }
        }
        // A single-day range would collapse the x axis
        if min_date == max_date {
            max_date = max_date + chrono::Duration::days(1);
        }

        let max_amount = points
            .iter()
            .map(|p| p.amount)
            .fold(f64::NEG_INFINITY, f64::max);
        let y_max = max_amount.max(1.0) * 1.1;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(min_date..max_date, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_desc("Sales ($)")
            .x_desc("Date")
            .y_label_formatter(&|v| format!("${:.0}", v))
            .x_label_formatter(&|d| d.format("%b %d").to_string())
            .label_style(("sans-serif", 12, &RGBColor(90, 90, 90)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .light_line_style(&RGBColor(250, 250, 250))
            .x_labels(8)
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        let line_color = RGBColor(99, 110, 250);
        if chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.date, p.amount)),
                line_color.stroke_width(2),
            ))
            .is_err()
        {
            return;
        }

        // One marker per record so same-day sales stay visible as
        // separate points
        for point in points {
            if chart
                .draw_series(std::iter::once(Circle::new(
                    (point.date, point.amount),
                    3,
                    line_color.filled(),
                )))
                .is_err()
            {
                break;
            }
        }

        let _ = root.present();
    }
}
