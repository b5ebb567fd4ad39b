//! Rounded UI panels
//!
//! Score box, timer box, info screens and the hero selector all share one
//! rounded-corner outline traced with quadratic curves.

use web_sys::CanvasRenderingContext2d;

/// Corner radius; the rounded part extends `CORNER` past the given rect
const CORNER: f64 = 10.0;

/// Panel outline stroke width
const OUTLINE_WIDTH: f64 = 5.0;

/// Trace the rounded outline of a panel whose body starts at `(x, y)`.
/// Corners bulge outward, so the visual bounds are slightly larger than
/// `width` x `height`.
fn trace_panel(ctx: &CanvasRenderingContext2d, x: f64, y: f64, width: f64, height: f64) {
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(x + width, y);
    ctx.quadratic_curve_to(x + width + CORNER, y, x + width + CORNER, y + CORNER);
    ctx.line_to(x + width + CORNER, y + height + CORNER);
    ctx.quadratic_curve_to(
        x + width + CORNER,
        y + height + 2.0 * CORNER,
        x + width,
        y + height + 2.0 * CORNER,
    );
    ctx.line_to(x, y + height + 2.0 * CORNER);
    ctx.quadratic_curve_to(x - CORNER, y + height + 2.0 * CORNER, x - CORNER, y + height + CORNER);
    ctx.line_to(x - CORNER, y + CORNER);
    ctx.quadratic_curve_to(x - CORNER, y, x, y);
}

/// Fill a rounded panel with `color`
pub fn fill_panel(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: &str,
) {
    ctx.set_fill_style_str(color);
    trace_panel(ctx, x, y, width, height);
    ctx.fill();
}

/// Stroke a rounded panel outline in `color`
pub fn stroke_panel(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: &str,
) {
    ctx.set_line_width(OUTLINE_WIDTH);
    ctx.set_stroke_style_str(color);
    trace_panel(ctx, x, y, width, height);
    ctx.stroke();
}
