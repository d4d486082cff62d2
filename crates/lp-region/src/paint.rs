use lp_core::{Image, ImageView, Rgba};

use crate::OwnerGrid;

/// Flat region mosaic: every pixel takes the source color at its owner.
///
/// Unassigned pixels, and owners falling outside `src`, stay transparent.
pub fn paint_regions(grid: &OwnerGrid, src: &ImageView<'_, Rgba>) -> Image<Rgba> {
    grid.cells().map(|cell| {
        cell.and_then(|owner| src.get_point(owner).copied())
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use lp_core::{Image, Point2i, Rgba};

    use crate::{OwnerGrid, jump_flood, paint_regions};

    #[test]
    fn regions_take_their_seed_color() {
        let (w, h) = (8, 2);
        let mut data = vec![Rgba::gray(0.5); w * h];
        data[0] = Rgba::new(1.0, 0.0, 0.0, 1.0);
        data[7] = Rgba::new(0.0, 0.0, 1.0, 1.0);
        let src = Image::from_vec(w, h, data).expect("valid image");

        let mut grid = OwnerGrid::from_seeds(w, h, &[Point2i::new(0, 0), Point2i::new(7, 0)]);
        jump_flood(&mut grid);
        let out = paint_regions(&grid, &src.as_view());

        assert_eq!(out.get(1, 1), Some(&Rgba::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(out.get(6, 1), Some(&Rgba::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn unassigned_pixels_stay_transparent() {
        let src = Image::new_fill(3, 3, Rgba::gray(1.0));
        let grid = OwnerGrid::from_seeds(3, 3, &[Point2i::new(1, 1)]);
        let out = paint_regions(&grid, &src.as_view());

        assert_eq!(out.get(1, 1), Some(&Rgba::gray(1.0)));
        assert_eq!(out.get(0, 0), Some(&Rgba::TRANSPARENT));
    }
}
