//! Umbrella crate for the low-poly workspace.
//!
//! Re-exports the stage crates and adds the configured end-to-end filter,
//! [`lowpolify`]:
//!
//! 1. [`gradient_l1`] measures edge strength;
//! 2. [`sample_vertices`] scatters seeds biased toward edges and the border;
//! 3. [`jump_flood`] grows a region around every seed;
//! 4. [`extract_triangles`] turns region adjacency into triangles;
//! 5. [`rasterize`] fills each triangle with the color at its centroid.
//!
//! The pipeline logs stage results and timings at `debug` level through the
//! `log` facade.

mod config;
mod pipeline;

pub use config::LowPolyConfig;
pub use pipeline::{LowPolyOutput, LowPolyStats, lowpolify, lowpolify_with_stats};

pub use lp_core::*;
pub use lp_edge::*;
pub use lp_region::*;
pub use lp_tri::*;
