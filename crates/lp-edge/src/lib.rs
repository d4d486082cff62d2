//! Edge strength for vertex placement.
//!
//! Coordinates follow the image convention: origin top-left, `y` down.
//!
//! The gradient field is a same-shape [`lp_core::Image`] of non-negative
//! per-channel magnitudes on the same normalized scale as the input pixels
//! (a unit step yields `4.0`). It is consumed once by the vertex sampler and
//! then dropped.

pub mod gradient;

pub use gradient::{SOBEL_X, SOBEL_Y, gradient_l1, gradient_l1_into};
