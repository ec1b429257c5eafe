use std::error::Error;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::currency::format_currency;
use crate::state::dashboard_view::LineChartData;

const LINE_COLOR: RGBColor = RGBColor(52, 152, 219);

#[derive(Properties, PartialEq)]
pub struct SpendingChartProps {
    pub data: LineChartData,
}

/// Monthly expenditure line chart drawn with plotters onto a canvas
pub struct SpendingChart {
    canvas_ref: NodeRef,
}

impl Component for SpendingChart {
    type Message = ();
    type Properties = SpendingChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props().data != old_props.data
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        if let Err(e) = draw_line_chart(canvas, &ctx.props().data) {
            log::warn!("Failed to draw spending chart: {}", e);
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-card">
                <h3 class="chart-title">{"Monthly Expenditure (₺)"}</h3>
                <canvas id="spendingChart" ref={self.canvas_ref.clone()} width="640" height="300"></canvas>
            </div>
        }
    }
}

/// Upper bound of the y axis: 10% headroom over the largest value, never below 1
fn y_axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn draw_line_chart(canvas: HtmlCanvasElement, data: &LineChartData) -> Result<(), Box<dyn Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    if data.values.is_empty() {
        root.present()?;
        return Ok(());
    }

    let last_index = (data.values.len() - 1).max(1) as f64;
    let labels = &data.labels;
    let x_label = |x: &f64| -> String {
        if x.fract() != 0.0 || *x < 0.0 {
            return String::new();
        }
        labels.get(*x as usize).cloned().unwrap_or_default()
    };
    let y_label = |y: &f64| format_currency(*y);

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..last_index, 0.0..y_axis_max(&data.values))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.values.len())
        .y_labels(6)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .label_style(("sans-serif", 12))
        .draw()?;

    chart.draw_series(
        AreaSeries::new(
            data.values.iter().enumerate().map(|(i, v)| (i as f64, *v)),
            0.0,
            LINE_COLOR.mix(0.1),
        )
        .border_style(LINE_COLOR.stroke_width(3)),
    )?;

    root.present()?;
    Ok(())
}
