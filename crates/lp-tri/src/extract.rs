//! Triangles from region adjacency.
//!
//! Every 2x2 window of the ownership grid is inspected in raster order of its
//! top-left cell. The distinct owners of its four cells decide the output:
//!
//! | distinct owners | triangles                                  |
//! |-----------------|--------------------------------------------|
//! | 1 or 2          | none                                       |
//! | 3               | the three owners, in first-seen order      |
//! | 4               | `(TL, TR, BL)` then `(TR, BL, BR)`         |
//!
//! First-seen order walks TL, TR, BL, BR. The four-owner split always cuts
//! along the TR-BL diagonal, whichever diagonal is shorter.
//!
//! Nothing is deduplicated: neighbouring windows can emit the same owner
//! triple again, and the rasterizer resolves the overlap by draw order.

use lp_core::Point2i;
use lp_region::OwnerGrid;

use crate::Triangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTriangles {
    None,
    One(Triangle),
    Two(Triangle, Triangle),
}

impl WindowTriangles {
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }
}

/// Classifies the window whose top-left cell is `(x, y)`.
///
/// Windows reaching outside the grid or touching an unassigned cell produce
/// nothing.
pub fn window_triangles(grid: &OwnerGrid, x: usize, y: usize) -> WindowTriangles {
    let (x, y) = (x as i32, y as i32);
    let corners = [
        grid.owner(Point2i::new(x, y)),
        grid.owner(Point2i::new(x + 1, y)),
        grid.owner(Point2i::new(x, y + 1)),
        grid.owner(Point2i::new(x + 1, y + 1)),
    ];
    let [Some(tl), Some(tr), Some(bl), Some(br)] = corners else {
        return WindowTriangles::None;
    };

    let mut distinct = [tl; 4];
    let mut n = 1;
    for owner in [tr, bl, br] {
        if !distinct[..n].contains(&owner) {
            distinct[n] = owner;
            n += 1;
        }
    }

    match n {
        3 => WindowTriangles::One(Triangle::new(distinct[0], distinct[1], distinct[2])),
        4 => WindowTriangles::Two(Triangle::new(tl, tr, bl), Triangle::new(tr, bl, br)),
        _ => WindowTriangles::None,
    }
}

/// Lazy, restartable walk over all windows. Clone it to replay the sequence.
#[derive(Debug, Clone)]
pub struct TriangleWindows<'a> {
    grid: &'a OwnerGrid,
    x: usize,
    y: usize,
    pending: Option<Triangle>,
}

impl<'a> TriangleWindows<'a> {
    pub fn new(grid: &'a OwnerGrid) -> Self {
        Self {
            grid,
            x: 0,
            y: 0,
            pending: None,
        }
    }
}

impl Iterator for TriangleWindows<'_> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        if let Some(t) = self.pending.take() {
            return Some(t);
        }

        let (w, h) = (self.grid.width(), self.grid.height());
        if w < 2 {
            return None;
        }

        while self.y + 1 < h {
            let (x, y) = (self.x, self.y);
            self.x += 1;
            if self.x + 1 >= w {
                self.x = 0;
                self.y += 1;
            }

            match window_triangles(self.grid, x, y) {
                WindowTriangles::None => {}
                WindowTriangles::One(t) => return Some(t),
                WindowTriangles::Two(first, second) => {
                    self.pending = Some(second);
                    return Some(first);
                }
            }
        }

        None
    }
}

pub fn extract_triangles(grid: &OwnerGrid) -> Vec<Triangle> {
    TriangleWindows::new(grid).collect()
}

/// Upper bound on the number of triangles a `width x height` grid can emit.
pub fn max_triangles(width: usize, height: usize) -> usize {
    2 * width.saturating_sub(1) * height.saturating_sub(1)
}
