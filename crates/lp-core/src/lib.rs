//! Foundational primitives for the low-poly pipeline.
//!
//! ## Images
//! [`Image`] is an owned, contiguous, row-major grid with the origin at the
//! top-left corner. [`ImageView`] borrows one without copying.
//!
//! ## Coordinates
//! Pipeline stages address pixels with signed [`Point2i`] coordinates so that
//! neighbour offsets can be formed freely. Every signed accessor
//! (`get_point`, `get_point_mut`, `contains`) bounds-checks and returns
//! `None`/`false` outside the image instead of faulting.
//!
//! ## Pixels
//! [`Rgba`] carries four unconstrained `f32` channels. Images coming from the
//! grading stage are expected to have RGB already clamped to `[0, 1]`.

mod color;
mod error;
mod geom;
mod image;

pub use color::{Rgba, rgba8_to_f32, to_rgba8};
pub use error::Error;
pub use geom::Point2i;
pub use image::{Image, ImageView};
