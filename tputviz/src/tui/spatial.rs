//! Two-factor chart panel.
//!
//! A terminal has no depth, so bars are drawn in an oblique projection on a
//! braille canvas: the y axis recedes up and to the right, and bars are
//! painted back to front so nearer bars cover farther ones.

// Terminal geometry and bar heights are converted to canvas floats
#![allow(clippy::cast_precision_loss)]

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as Segment},
        Block, Borders,
    },
    Frame,
};

use super::theme::Theme;
use crate::chart::{Bar3d, SpatialChart, Tick};

/// Canvas height of the tallest bar
const Z_EXTENT: f64 = 10.0;
/// Horizontal shift per unit of depth
const DEPTH_X: f64 = 0.5;
/// Share of `Z_EXTENT` the whole depth axis rises
const DEPTH_RISE: f64 = 0.4;
/// Room left of the floor for value labels, in x units
const LEFT_MARGIN: f64 = 1.5;
/// Room below the floor for x tick labels, in canvas y units
const BOTTOM_MARGIN: f64 = 1.5;

/// Maps chart coordinates `(x, y, z)` onto the canvas plane.
#[derive(Debug, Clone, Copy)]
struct Projection {
    depth_y: f64,
    z_scale: f64,
}

impl Projection {
    fn new(y_ticks: usize, max_value: f64) -> Self {
        let depth_y = Z_EXTENT * DEPTH_RISE / (y_ticks + 1) as f64;
        let z_scale = if max_value > 0.0 { Z_EXTENT / max_value } else { 0.0 };
        Self { depth_y, z_scale }
    }

    fn project(self, x: f64, y: f64, z: f64) -> (f64, f64) {
        (x + y * DEPTH_X, z * self.z_scale + y * self.depth_y)
    }
}

/// Canvas bounds `([x_min, x_max], [y_min, y_max])` for a grid of the given size.
fn canvas_bounds(x_ticks: usize, y_ticks: usize, projection: Projection) -> ([f64; 2], [f64; 2]) {
    let depth = (y_ticks + 1) as f64;
    let x_max = (x_ticks + 1) as f64 + depth * DEPTH_X + 1.0;
    let y_max = Z_EXTENT + depth * projection.depth_y + 1.0;
    ([-LEFT_MARGIN, x_max], [-BOTTOM_MARGIN, y_max])
}

/// Paint order: farthest row first, left to right within a row.
fn paint_order(bars: &[Bar3d]) -> Vec<&Bar3d> {
    let mut ordered: Vec<&Bar3d> = bars.iter().collect();
    ordered.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));
    ordered
}

fn segment(ctx: &mut Context, from: (f64, f64), to: (f64, f64), color: Color) {
    ctx.draw(&Segment { x1: from.0, y1: from.1, x2: to.0, y2: to.1, color });
}

pub struct SpatialView<'a> {
    chart: &'a SpatialChart,
    value_ticks: Vec<Tick>,
    projection: Projection,
    theme: Theme,
}

impl<'a> SpatialView<'a> {
    pub fn new(chart: &'a SpatialChart, value_ticks: Vec<Tick>, theme: Theme) -> Self {
        let max_value = chart.bars.iter().map(|b| b.z + b.dz).fold(0.0, f64::max);
        let projection = Projection::new(chart.y_axis.ticks.len(), max_value);
        Self { chart, value_ticks, projection, theme }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (x_bounds, y_bounds) =
            canvas_bounds(self.chart.x_axis.ticks.len(), self.chart.y_axis.ticks.len(), self.projection);
        // two braille dots per cell horizontally
        let fill_step = (x_bounds[1] - x_bounds[0]) / (f64::from(area.width.max(1)) * 2.0);

        let axes = Line::from(vec![
            Span::styled(" x: ", self.theme.dim_style()),
            Span::styled(self.chart.x_axis.label.clone(), self.theme.key_style()),
            Span::styled("  y: ", self.theme.dim_style()),
            Span::styled(self.chart.y_axis.label.clone(), self.theme.key_style()),
            Span::raw(" "),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Throughput")
            .title_bottom(axes.centered())
            .border_style(self.theme.border_style());

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(self.theme.background)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                self.paint_floor(ctx, x_bounds[0]);
                for bar in paint_order(&self.chart.bars) {
                    self.paint_bar(ctx, bar, fill_step);
                }
            });
        f.render_widget(canvas, area);
    }

    /// Floor outline, value axis and tick labels.
    fn paint_floor(&self, ctx: &mut Context, x_min: f64) {
        let p = self.projection;
        let x_end = self.chart.x_axis.ticks.len() as f64 + 0.5;
        let y_end = self.chart.y_axis.ticks.len() as f64 + 0.5;
        let dim = self.theme.dim;

        let corners = [
            p.project(0.5, 0.5, 0.0),
            p.project(x_end, 0.5, 0.0),
            p.project(x_end, y_end, 0.0),
            p.project(0.5, y_end, 0.0),
        ];
        for (i, &corner) in corners.iter().enumerate() {
            segment(ctx, corner, corners[(i + 1) % corners.len()], dim);
        }

        let top = self.value_ticks.last().map_or(0.0, |t| t.position);
        segment(ctx, p.project(0.5, 0.5, 0.0), p.project(0.5, 0.5, top), dim);
        for tick in &self.value_ticks {
            let (_, y) = p.project(0.5, 0.5, tick.position);
            ctx.print(x_min, y, Line::styled(tick.label.clone(), Style::new().fg(dim)));
        }

        for tick in &self.chart.x_axis.ticks {
            let (x, _) = p.project(tick.position - 0.25, 0.0, 0.0);
            ctx.print(x, -BOTTOM_MARGIN + 0.5, Line::styled(tick.label.clone(), self.theme.key_style()));
        }
        for tick in &self.chart.y_axis.ticks {
            let (x, y) = p.project(x_end + 0.2, tick.position, 0.0);
            ctx.print(x, y, Line::styled(tick.label.clone(), self.theme.key_style()));
        }
    }

    /// Filled front face plus the visible top and right edges.
    fn paint_bar(&self, ctx: &mut Context, bar: &Bar3d, fill_step: f64) {
        let p = self.projection;
        let color = self.theme.variance_color(bar.variance);
        let (x0, x1) = (bar.x, bar.x + bar.dx);
        let (y0, y1) = (bar.y, bar.y + bar.dy);
        let (z0, z1) = (bar.z, bar.z + bar.dz);

        let mut x = x0;
        while x <= x1 {
            segment(ctx, p.project(x, y0, z0), p.project(x, y0, z1), color);
            x += fill_step.max(f64::EPSILON);
        }

        let front = [p.project(x0, y0, z1), p.project(x1, y0, z1), p.project(x1, y0, z0)];
        let back = [p.project(x0, y1, z1), p.project(x1, y1, z1), p.project(x1, y1, z0)];
        // top face
        segment(ctx, front[0], back[0], color);
        segment(ctx, back[0], back[1], color);
        segment(ctx, back[1], front[1], color);
        // right face
        segment(ctx, front[1], front[2], color);
        segment(ctx, back[1], back[2], color);
        segment(ctx, back[2], front[2], color);
    }
}
