//! Triangles from a resolved ownership grid, and their flat-shaded rendering.
//!
//! [`extract_triangles`] turns region adjacency into an ordered triangle
//! list: one or two triangles per 2x2 window where three or four regions
//! meet. [`rasterize`] paints them onto a transparent canvas in list order,
//! and [`draw_wireframe`] optionally overlays their edges.

mod extract;
mod raster;
mod triangle;

pub use extract::{
    TriangleWindows, WindowTriangles, extract_triangles, max_triangles, window_triangles,
};
pub use raster::{WIREFRAME_COLOR, draw_line, draw_wireframe, fill_triangle, rasterize};
pub use triangle::{Rect, Triangle};
