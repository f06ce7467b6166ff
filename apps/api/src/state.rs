use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::pipeline::Analyzer;
use crate::analysis::service::AnalysisService;
use crate::cache::build_cache;
use crate::config::Config;
use crate::extraction::recognizer::{EntityRecognizer, HeuristicRecognizer};
use crate::tables::AnalysisTables;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisService,
    /// Read-only vocabularies, shared with the analyzer.
    pub tables: Arc<AnalysisTables>,
    pub config: Config,
}

impl AppState {
    /// Loads the analysis tables and wires the recognizer, cache and analyzer.
    /// Fails on invalid tables or cache configuration.
    pub fn build(config: Config) -> Result<Self> {
        let tables = Arc::new(
            AnalysisTables::load(config.analysis_tables_path.as_deref())
                .context("Failed to load analysis tables")?,
        );

        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(HeuristicRecognizer);
        info!("Entity recognizer initialized (backend: {})", recognizer.backend());

        let cache = build_cache(&config)?;
        let analyzer = Arc::new(Analyzer::new(Arc::clone(&tables), recognizer));
        let analysis = AnalysisService::new(analyzer, cache, config.skill_gap_seed);

        Ok(AppState {
            analysis,
            tables,
            config,
        })
    }
}
