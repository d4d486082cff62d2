use lp_core::Error;
use lp_region::SamplerParams;
use serde::{Deserialize, Serialize};

/// Knobs of the low-poly filter.
///
/// Missing fields take their defaults when deserializing, so a partial JSON
/// object such as `{"edge_probability": 0.1}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowPolyConfig {
    /// When `false` the input is returned untouched.
    pub enabled: bool,
    /// Interior cells whose R, G and B gradient magnitudes are all `>=` this
    /// are treated as edges.
    pub edge_threshold: f32,
    /// Selection probability for edge cells, in `[0, 1]`.
    pub edge_probability: f32,
    /// Selection probability for all other interior cells, in `[0, 1]`.
    pub non_edge_probability: f32,
    /// Overlay triangle edges after filling.
    pub draw_wireframe: bool,
}

impl Default for LowPolyConfig {
    fn default() -> Self {
        let sampler = SamplerParams::default();
        Self {
            enabled: true,
            edge_threshold: sampler.edge_threshold,
            edge_probability: sampler.edge_probability,
            non_edge_probability: sampler.non_edge_probability,
            draw_wireframe: false,
        }
    }
}

impl LowPolyConfig {
    /// Rejects values the sampler cannot interpret meaningfully.
    ///
    /// The pipeline itself accepts anything; this is for configurations that
    /// arrive from files or command lines.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.edge_threshold.is_finite() || self.edge_threshold < 0.0 {
            return Err(Error::InvalidParameter {
                name: "edge_threshold",
                value: self.edge_threshold,
            });
        }
        for (name, value) in [
            ("edge_probability", self.edge_probability),
            ("non_edge_probability", self.non_edge_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    pub fn sampler_params(&self) -> SamplerParams {
        SamplerParams {
            edge_threshold: self.edge_threshold,
            edge_probability: self.edge_probability,
            non_edge_probability: self.non_edge_probability,
        }
    }
}
