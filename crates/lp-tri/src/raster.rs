//! Flat-shaded triangle fill and wireframe overlay.

use lp_core::{Image, ImageView, Point2i, Rgba};

use crate::Triangle;

/// Color written by [`draw_line`] when overlaying triangle edges.
pub const WIREFRAME_COLOR: Rgba = Rgba::TRANSPARENT;

/// Renders `triangles` in order onto a fresh transparent canvas shaped like
/// `src`.
///
/// Each triangle is filled with the source color at its centroid. Pixels on
/// shared edges take the color of whichever triangle comes last. Pixels no
/// triangle covers stay `Rgba::default()`.
pub fn rasterize(triangles: &[Triangle], src: &ImageView<'_, Rgba>) -> Image<Rgba> {
    let mut dst = Image::new_fill(src.width(), src.height(), Rgba::default());
    for t in triangles {
        let color = src.get_point(t.centroid()).copied().unwrap_or_default();
        fill_triangle(&mut dst, t, color);
    }
    dst
}

/// Writes `color` to every pixel of `dst` inside `t`. Returns the number of
/// pixels written.
pub fn fill_triangle(dst: &mut Image<Rgba>, t: &Triangle, color: Rgba) -> usize {
    let Some(rect) = t.bounding_rect().clip(dst.width(), dst.height()) else {
        return 0;
    };

    let mut written = 0;
    for p in rect.points() {
        if t.contains(p)
            && let Some(px) = dst.get_point_mut(p)
        {
            *px = color;
            written += 1;
        }
    }
    written
}

/// Integer Bresenham line from `from` to `to`, both endpoints included.
/// Points outside `dst` are skipped.
pub fn draw_line(dst: &mut Image<Rgba>, from: Point2i, to: Point2i, color: Rgba) {
    walk_line(from, to, |x, y| {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y))
            && let Some(px) = dst.get_point_mut(Point2i::new(x, y))
        {
            *px = color;
        }
    });
}

/// Overlays the three edges of every triangle in [`WIREFRAME_COLOR`].
pub fn draw_wireframe(dst: &mut Image<Rgba>, triangles: &[Triangle]) {
    for t in triangles {
        for (a, b) in t.edges() {
            draw_line(dst, a, b, WIREFRAME_COLOR);
        }
    }
}

/// Visits `max(|dx|, |dy|) + 1` 8-connected points, stepping the major axis
/// once per point.
fn walk_line(from: Point2i, to: Point2i, mut visit: impl FnMut(i64, i64)) {
    let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));

    let step_x = if x1 < x { -1 } else { 1 };
    let step_y = if y1 < y { -1 } else { 1 };
    let dx = (x1 - x).abs() * 2;
    let dy = (y1 - y).abs() * 2;

    visit(x, y);

    if dx > dy {
        let mut frac = dy - dx / 2;
        while x != x1 {
            if frac >= 0 {
                y += step_y;
                frac -= dx;
            }
            x += step_x;
            frac += dy;
            visit(x, y);
        }
    } else {
        let mut frac = dx - dy / 2;
        while y != y1 {
            if frac >= 0 {
                x += step_x;
                frac -= dy;
            }
            y += step_y;
            frac += dx;
            visit(x, y);
        }
    }
}
