use lp_core::{Error, Image, Point2i};

/// Per-pixel record of the seed that owns each pixel.
///
/// `None` is the unassigned sentinel. A seed is a cell that owns itself.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerGrid {
    pub(crate) cells: Image<Option<Point2i>>,
}

impl OwnerGrid {
    pub fn unassigned(width: usize, height: usize) -> Self {
        Self {
            cells: Image::new_fill(width, height, None),
        }
    }

    pub fn from_seeds(width: usize, height: usize, seeds: &[Point2i]) -> Self {
        let mut grid = Self::unassigned(width, height);
        for &s in seeds {
            grid.mark_seed(s);
        }
        grid
    }

    /// Wraps raw row-major owners, e.g. a grid resolved elsewhere.
    pub fn from_owners(
        width: usize,
        height: usize,
        owners: Vec<Option<Point2i>>,
    ) -> Result<Self, Error> {
        Ok(Self {
            cells: Image::from_vec(width, height, owners)?,
        })
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn cells(&self) -> &Image<Option<Point2i>> {
        &self.cells
    }

    /// Owner of `p`, or `None` when `p` is unassigned or outside the grid.
    pub fn owner(&self, p: Point2i) -> Option<Point2i> {
        self.cells.get_point(p).copied().flatten()
    }

    /// Makes `p` own itself. Returns `false` when `p` is outside the grid.
    pub fn mark_seed(&mut self, p: Point2i) -> bool {
        match self.cells.get_point_mut(p) {
            Some(cell) => {
                *cell = Some(p);
                true
            }
            None => false,
        }
    }

    pub fn is_seed(&self, p: Point2i) -> bool {
        self.owner(p) == Some(p)
    }

    /// Seeds in raster order.
    pub fn seeds(&self) -> impl Iterator<Item = Point2i> + '_ {
        let w = self.width();
        self.cells
            .data()
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| {
                let p = Point2i::new((i % w) as i32, (i / w) as i32);
                (*cell == Some(p)).then_some(p)
            })
    }

    pub fn seed_count(&self) -> usize {
        self.seeds().count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.cells.data().iter().filter(|c| c.is_none()).count()
    }

    pub fn is_resolved(&self) -> bool {
        self.cells.data().iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use lp_core::Point2i;

    use crate::OwnerGrid;

    #[test]
    fn seeds_own_themselves() {
        let mut grid = OwnerGrid::unassigned(4, 3);
        assert_eq!(grid.unassigned_count(), 12);
        assert!(!grid.is_resolved());

        assert!(grid.mark_seed(Point2i::new(3, 2)));
        assert!(grid.mark_seed(Point2i::new(1, 0)));
        assert!(!grid.mark_seed(Point2i::new(4, 0)));
        assert!(!grid.mark_seed(Point2i::new(-1, 1)));

        assert_eq!(grid.seed_count(), 2);
        assert_eq!(
            grid.seeds().collect::<Vec<_>>(),
            vec![Point2i::new(1, 0), Point2i::new(3, 2)]
        );
        assert!(grid.is_seed(Point2i::new(3, 2)));
        assert!(!grid.is_seed(Point2i::new(0, 0)));
        assert_eq!(grid.owner(Point2i::new(0, 0)), None);
        assert_eq!(grid.owner(Point2i::new(9, 9)), None);
    }

    #[test]
    fn from_owners_checks_shape() {
        let p = Some(Point2i::new(0, 0));
        assert!(OwnerGrid::from_owners(2, 2, vec![p; 4]).is_ok());
        assert!(OwnerGrid::from_owners(2, 2, vec![p; 3]).is_err());
    }

    #[test]
    fn from_seeds_ignores_out_of_range() {
        let grid = OwnerGrid::from_seeds(
            2,
            2,
            &[Point2i::new(0, 0), Point2i::new(1, 1), Point2i::new(2, 2)],
        );
        assert_eq!(grid.seed_count(), 2);
        assert_eq!(grid.unassigned_count(), 2);
    }
}
