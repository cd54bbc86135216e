//! Cairo-based rasterization of shapes into the raster buffer.
//!
//! The raster buffer stores straight-alpha RGBA bytes while Cairo draws into
//! premultiplied native-endian ARGB32. Each render uploads the buffer into a
//! scratch image surface, draws, and writes the result back.

use super::raster::{RasterBuffer, RasterError};
use super::shape::Shape;
use super::{Color, FontDescriptor};
use std::f64::consts::PI;

/// Rasterizes a single shape onto the buffer.
pub fn render_shape(buffer: &mut RasterBuffer, shape: &Shape) -> Result<(), RasterError> {
    with_context(buffer, |ctx| draw_shape(ctx, shape))
}

/// Runs `draw` against a Cairo context backed by a copy of the buffer, then
/// copies the pixels Cairo changed back. If drawing fails the buffer is
/// untouched.
fn with_context<F>(buffer: &mut RasterBuffer, draw: F) -> Result<(), RasterError>
where
    F: FnOnce(&cairo::Context) -> Result<(), cairo::Error>,
{
    let mut surface = to_surface(buffer)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        draw(&ctx)?;
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let row_bytes = buffer.width() as usize * 4;
    let data = surface.data()?;
    for (src_row, dst_row) in data
        .chunks_exact(stride)
        .zip(buffer.pixels_mut().chunks_exact_mut(row_bytes))
    {
        for (src, dst) in src_row.chunks_exact(4).zip(dst_row.chunks_exact_mut(4)) {
            let argb = u32::from_ne_bytes([src[0], src[1], src[2], src[3]]);
            // Untouched pixels keep their exact straight-alpha bytes
            if argb != premultiply(dst) {
                dst.copy_from_slice(&unpremultiply(argb));
            }
        }
    }

    Ok(())
}

/// Copies the buffer into a new ARGB32 image surface.
pub(crate) fn to_surface(buffer: &RasterBuffer) -> Result<cairo::ImageSurface, RasterError> {
    let width = i32::try_from(buffer.width()).map_err(|_| cairo::Error::InvalidSize)?;
    let height = i32::try_from(buffer.height()).map_err(|_| cairo::Error::InvalidSize)?;

    let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    let stride = surface.stride() as usize;
    let row_bytes = buffer.width() as usize * 4;

    {
        let mut data = surface.data()?;
        for (src_row, dst_row) in buffer
            .pixels()
            .chunks_exact(row_bytes)
            .zip(data.chunks_exact_mut(stride))
        {
            for (src, dst) in src_row.chunks_exact(4).zip(dst_row.chunks_exact_mut(4)) {
                dst.copy_from_slice(&premultiply(src).to_ne_bytes());
            }
        }
    }

    Ok(surface)
}

/// Straight RGBA bytes to premultiplied ARGB32.
fn premultiply(rgba: &[u8]) -> u32 {
    let a = u32::from(rgba[3]);
    let mul = |c: u8| (u32::from(c) * a + 127) / 255;
    (a << 24) | (mul(rgba[0]) << 16) | (mul(rgba[1]) << 8) | mul(rgba[2])
}

/// Premultiplied ARGB32 to straight RGBA bytes.
fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = argb >> 24;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let div = |c: u32| ((c * 255 + a / 2) / a).min(255) as u8;
    [
        div((argb >> 16) & 0xff),
        div((argb >> 8) & 0xff),
        div(argb & 0xff),
        a as u8,
    ]
}

/// Dispatches to the drawing routine for each shape variant.
fn draw_shape(ctx: &cairo::Context, shape: &Shape) -> Result<(), cairo::Error> {
    match shape {
        Shape::Segment {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        }
        | Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => {
            set_stroke_style(ctx, *color, *width);
            ctx.move_to(*x1, *y1);
            ctx.line_to(*x2, *y2);
            ctx.stroke()
        }
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            width,
        } => {
            set_stroke_style(ctx, *color, *width);
            ctx.rectangle(*x, *y, *w, *h);
            ctx.stroke()
        }
        Shape::Circle {
            cx,
            cy,
            radius,
            color,
            width,
        } => {
            set_stroke_style(ctx, *color, *width);
            ctx.new_sub_path();
            ctx.arc(*cx, *cy, *radius, 0.0, 2.0 * PI);
            ctx.stroke()
        }
        Shape::Triangle {
            points,
            color,
            width,
        } => {
            set_stroke_style(ctx, *color, *width);
            let [(ax, ay), (bx, by), (cx, cy)] = *points;
            ctx.move_to(ax, ay);
            ctx.line_to(bx, by);
            ctx.line_to(cx, cy);
            ctx.close_path();
            ctx.stroke()
        }
        Shape::Text {
            x,
            y,
            text,
            color,
            size,
            font_descriptor,
        } => {
            draw_text(ctx, *x, *y, text, *color, *size, font_descriptor);
            ctx.status()
        }
    }
}

/// Round caps and joins for every stroke, matching a felt-tip brush.
fn set_stroke_style(ctx: &cairo::Context, color: Color, width: f64) {
    let (r, g, b, a) = color.to_cairo();
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Renders a single line of text with its baseline at `y` using Pango.
///
/// Pango positions layouts by their top-left corner, so the layout is shifted
/// up by its baseline offset.
fn draw_text(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    text: &str,
    color: Color,
    size: f64,
    font_descriptor: &FontDescriptor,
) {
    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font_descriptor.to_pango(size)));
    layout.set_text(text);

    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    let (r, g, b, a) = color.to_cairo();
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x, y - baseline);
    pangocairo::functions::show_layout(ctx, &layout);
}
