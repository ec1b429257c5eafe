use std::error::Error;

use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::state::dashboard_view::DoughnutChartData;

const PALETTE: [RGBColor; 5] = [
    RGBColor(52, 152, 219),
    RGBColor(46, 204, 113),
    RGBColor(231, 76, 60),
    RGBColor(241, 196, 15),
    RGBColor(149, 165, 166),
];

fn slice_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

fn css_color(color: RGBColor) -> String {
    format!("#{:02X}{:02X}{:02X}", color.0, color.1, color.2)
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub data: DoughnutChartData,
}

/// Spending-by-category doughnut with an HTML legend underneath
pub struct CategoryChart {
    canvas_ref: NodeRef,
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
        ctx.props().data != old_props.data
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        if let Err(e) = draw_doughnut(canvas, &ctx.props().data) {
            log::warn!("Failed to draw category chart: {}", e);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-card">
                <h3 class="chart-title">{"Spending by Category"}</h3>
                <canvas id="categoryChart" ref={self.canvas_ref.clone()} width="320" height="320"></canvas>
                <ul class="chart-legend">
                    {for ctx.props().data.slices.iter().enumerate().map(|(i, slice)| html! {
                        <li>
                            <span class="legend-swatch" style={format!("background: {}", css_color(slice_color(i)))}></span>
                            {&slice.label}
                        </li>
                    })}
                </ul>
            </div>
        }
    }
}

fn draw_doughnut(canvas: HtmlCanvasElement, data: &DoughnutChartData) -> Result<(), Box<dyn Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    // A zero total has no angles to draw
    if data.total() <= 0.0 {
        root.present()?;
        return Ok(());
    }

    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.45;

    let sizes: Vec<f64> = data.slices.iter().map(|slice| slice.value.max(0.0)).collect();
    let colors: Vec<RGBColor> = (0..sizes.len()).map(slice_color).collect();
    let labels: Vec<String> = data.slices.iter().map(|slice| slice.label.clone()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.donut_hole(radius * 0.5);
    pie.label_style(("sans-serif", 12).into_font().color(&BLACK));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}
