use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Random stream for one pipeline run.
///
/// `Some(seed)` is reproducible; `None` seeds from the wall clock.
pub fn seeded_rng(seed: Option<u64>) -> Pcg32 {
    Pcg32::seed_from_u64(seed.unwrap_or_else(time_seed))
}

/// Seconds since the Unix epoch, or `0` if the clock reads before it.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
