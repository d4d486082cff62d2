//! Seed placement and nearest-seed region growth.
//!
//! [`sample_vertices`] scatters seeds over a gradient field, biased toward
//! strong edges and the image border, and always places the four corners.
//! [`jump_flood`] then assigns every pixel to an approximately nearest seed
//! (Manhattan metric) in `O(W * H * log(max(W, H)))`.
//!
//! The resulting [`OwnerGrid`] is the input of triangle extraction.

mod flood;
mod owner;
mod paint;
mod rng;
mod sampler;

pub use flood::{FLOOD_DIRECTIONS, FloodStats, jump_flood};
pub use owner::OwnerGrid;
pub use paint::paint_regions;
pub use rng::{seeded_rng, time_seed};
pub use sampler::{BORDER_PROBABILITY, SampleStats, SamplerParams, sample_vertices};

pub use rand_pcg::Pcg32;
