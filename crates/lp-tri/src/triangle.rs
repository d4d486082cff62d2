use lp_core::Point2i;

/// Inclusive integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: Point2i,
    pub max: Point2i,
}

impl Rect {
    /// Number of columns, counting both edges.
    pub fn width(&self) -> usize {
        (self.max.x - self.min.x) as usize + 1
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y) as usize + 1
    }

    /// Intersection with `[0, width) x [0, height)`, or `None` if empty.
    pub fn clip(&self, width: usize, height: usize) -> Option<Rect> {
        let max_x = self.max.x.min(i32::try_from(width).ok()? - 1);
        let max_y = self.max.y.min(i32::try_from(height).ok()? - 1);
        let min_x = self.min.x.max(0);
        let min_y = self.min.y.max(0);
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Rect {
            min: Point2i::new(min_x, min_y),
            max: Point2i::new(max_x, max_y),
        })
    }

    /// Points in raster order.
    pub fn points(&self) -> impl Iterator<Item = Point2i> + '_ {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Point2i::new(x, y)))
    }
}

/// Three owner coordinates taken from one 2x2 ownership window.
///
/// Vertex order carries no meaning: containment, bounds and centroid are all
/// independent of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub v: [Point2i; 3],
}

impl Triangle {
    pub const fn new(a: Point2i, b: Point2i, c: Point2i) -> Self {
        Self { v: [a, b, c] }
    }

    /// Coordinate-wise mean, truncated.
    pub fn centroid(&self) -> Point2i {
        let [a, b, c] = self.v;
        Point2i::new((a.x + b.x + c.x) / 3, (a.y + b.y + c.y) / 3)
    }

    pub fn bounding_rect(&self) -> Rect {
        let [a, b, c] = self.v;
        Rect {
            min: Point2i::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            max: Point2i::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        }
    }

    /// Half-plane test with inclusive edges.
    ///
    /// `p` is inside unless the three edge signs mix strictly positive and
    /// strictly negative values; zero matches either side, so pixels exactly
    /// on an edge (or on a degenerate, collinear triangle) count as inside.
    pub fn contains(&self, p: Point2i) -> bool {
        let [a, b, c] = self.v;
        let d1 = edge_sign(p, a, b);
        let d2 = edge_sign(p, b, c);
        let d3 = edge_sign(p, c, a);

        let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
        let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
        !(has_neg && has_pos)
    }

    pub fn edges(&self) -> [(Point2i, Point2i); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }

    pub fn has_distinct_vertices(&self) -> bool {
        let [a, b, c] = self.v;
        a != b && b != c && a != c
    }
}

fn edge_sign(p: Point2i, a: Point2i, b: Point2i) -> i64 {
    let (px, py) = (i64::from(p.x), i64::from(p.y));
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    (px - bx) * (ay - by) - (ax - bx) * (py - by)
}
