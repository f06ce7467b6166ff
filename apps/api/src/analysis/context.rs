use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

/// Per-request state threaded through one analysis. Nothing here outlives the call.
pub struct AnalysisContext {
    pub analysis_id: Uuid,
    pub received_at: DateTime<Utc>,
    rng: StdRng,
}

impl AnalysisContext {
    /// A fixed `seed` makes skill-gap sampling reproducible; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            analysis_id: Uuid::new_v4(),
            received_at: Utc::now(),
            rng,
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
