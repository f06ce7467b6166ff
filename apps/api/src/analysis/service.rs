use std::sync::Arc;

use anyhow::anyhow;
use tracing::{debug, warn};

use crate::analysis::context::AnalysisContext;
use crate::analysis::pipeline::Analyzer;
use crate::cache::ProfileCache;
use crate::errors::AppError;
use crate::models::report::AnalysisReport;

/// Async front of the pipeline. A cache hit is only evaluated; a miss runs
/// `Analyzer::analyze` on the blocking pool and stores the extracted profile.
#[derive(Clone)]
pub struct AnalysisService {
    analyzer: Arc<Analyzer>,
    cache: Arc<dyn ProfileCache>,
    skill_gap_seed: Option<u64>,
}

impl AnalysisService {
    pub fn new(
        analyzer: Arc<Analyzer>,
        cache: Arc<dyn ProfileCache>,
        skill_gap_seed: Option<u64>,
    ) -> Self {
        Self {
            analyzer,
            cache,
            skill_gap_seed,
        }
    }

    pub async fn analyze(&self, raw_text: String) -> Result<AnalysisReport, AppError> {
        let mut ctx = AnalysisContext::new(self.skill_gap_seed);
        let key = self.analyzer.cache_key(&raw_text);

        let hit = match self.cache.get(&key).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!(
                    backend = self.cache.backend(),
                    "Profile cache read failed, extracting instead: {e}"
                );
                None
            }
        };

        let report = match hit {
            Some(profile) => {
                debug!(analysis_id = %ctx.analysis_id, "Profile cache hit");
                self.analyzer.evaluate(profile, &mut ctx, true)
            }
            None => {
                let analyzer = Arc::clone(&self.analyzer);
                // Extraction is CPU-bound: keep it off the async executor.
                let report =
                    tokio::task::spawn_blocking(move || analyzer.analyze(&raw_text, &mut ctx))
                        .await
                        .map_err(|e| {
                            AppError::Internal(anyhow!("spawn_blocking failed in analysis: {e}"))
                        })??;

                if let Err(e) = self.cache.put(&key, &report.profile).await {
                    warn!(backend = self.cache.backend(), "Profile cache write failed: {e}");
                }
                report
            }
        };

        Ok(report)
    }
}
