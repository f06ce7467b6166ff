//! The analysis core: `analyze(raw_text, ctx)` composes extraction, scoring
//! and recommendation into one `AnalysisReport`.
//!
//! Everything here is synchronous and CPU-bound; async callers go through
//! `AnalysisService`, which runs extraction on the blocking pool.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::analysis::context::AnalysisContext;
use crate::cache::cache_key;
use crate::extraction::contact::{first_line, SourceText};
use crate::extraction::recognizer::{EntityRecognizer, RecognizerError};
use crate::extraction::ProfileExtractor;
use crate::models::profile::ResumeProfile;
use crate::models::report::AnalysisReport;
use crate::recommendation::{
    recommend_courses, recommend_field, recommend_skill_gaps, Recommendation, MAX_COURSES_SHOWN,
};
use crate::scoring::score_profile;
use crate::tables::AnalysisTables;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Entity extraction failed: {0}")]
    Extraction(#[from] RecognizerError),
}

pub struct Analyzer {
    extractor: ProfileExtractor,
    tables: Arc<AnalysisTables>,
}

impl Analyzer {
    pub fn new(tables: Arc<AnalysisTables>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            extractor: ProfileExtractor::new(Arc::clone(&tables), recognizer),
            tables,
        }
    }

    pub fn extract(&self, raw_text: &str) -> Result<ResumeProfile, AnalysisError> {
        Ok(self.extractor.extract(raw_text)?)
    }

    /// Scores and recommends for an already-extracted profile.
    pub fn evaluate(
        &self,
        profile: ResumeProfile,
        ctx: &mut AnalysisContext,
        cached: bool,
    ) -> AnalysisReport {
        let score_breakdown = score_profile(&profile);
        let total_score = score_breakdown.total();

        let field = recommend_field(&profile.skills, &self.tables);
        let skill_gaps = recommend_skill_gaps(&profile.skills, &self.tables.known_skills, ctx.rng());
        let courses: Vec<String> = recommend_courses(&field, &self.tables)
            .iter()
            .take(MAX_COURSES_SHOWN)
            .cloned()
            .collect();

        debug!(
            analysis_id = %ctx.analysis_id,
            total_score,
            field = %field,
            cached,
            "Analysis evaluated"
        );

        AnalysisReport {
            analysis_id: ctx.analysis_id,
            analyzed_at: ctx.received_at,
            experience_level: profile.experience_level(),
            profile,
            score_breakdown,
            total_score,
            recommendation: Recommendation {
                field,
                skill_gaps,
                courses,
            },
            cached,
        }
    }

    /// Full uncached pipeline for one document. `AnalysisService` runs this on
    /// every cache miss.
    pub fn analyze(
        &self,
        raw_text: &str,
        ctx: &mut AnalysisContext,
    ) -> Result<AnalysisReport, AnalysisError> {
        let profile = self.extract(raw_text)?;
        Ok(self.evaluate(profile, ctx, false))
    }

    /// Memoization key for `raw_text`; equal keys always extract to equal profiles.
    pub fn cache_key(&self, raw_text: &str) -> String {
        cache_key(&SourceText::new(raw_text), first_line(raw_text).as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::recognizer::{AnnotatedText, HeuristicRecognizer};
    use crate::models::profile::ExperienceLevel;
    use crate::scoring::CATEGORY_CAP;

    fn analyzer() -> Analyzer {
        Analyzer::new(
            Arc::new(AnalysisTables::builtin()),
            Arc::new(HeuristicRecognizer),
        )
    }

    const SCENARIO: &str = "John Doe\njohn@x.com\n5 years experience in Python and SQL.\nBachelor of Science in Computer Science.";

    #[test]
    fn test_scenario_report() {
        let mut ctx = AnalysisContext::new(Some(1));
        let report = analyzer().analyze(SCENARIO, &mut ctx).unwrap();

        assert_eq!(report.profile.email.as_deref(), Some("john@x.com"));
        assert_eq!(report.profile.total_experience_years, 5);
        assert_eq!(report.recommendation.field, "Data Science");
        assert_eq!(report.experience_level, ExperienceLevel::Experienced);
        assert_eq!(report.total_score, report.score_breakdown.total());
        assert!(report.total_score <= 100);
        assert!(report.recommendation.courses.len() <= MAX_COURSES_SHOWN);
        assert_eq!(report.analysis_id, ctx.analysis_id);
        assert!(!report.cached);
    }

    #[test]
    fn test_empty_text_scores_15() {
        let mut ctx = AnalysisContext::new(None);
        let report = analyzer().analyze("", &mut ctx).unwrap();
        assert_eq!(report.profile, ResumeProfile::default());
        assert_eq!(report.total_score, 15);
        assert_eq!(report.experience_level, ExperienceLevel::Fresher);
        assert_eq!(report.recommendation.field, "General Software Development");
        // unknown field falls back to the default course list
        assert_eq!(report.recommendation.courses.len(), MAX_COURSES_SHOWN);
        assert_eq!(report.recommendation.skill_gaps.len(), 5);
    }

    #[test]
    fn test_every_category_within_bounds() {
        let noisy = "Dr. A B C D E F\n\u{1F600} ,,,,, 999 years work 10+ years role. \
                     Built Built Built. Developed x. Created y. Implemented z. Project q. Project r.";
        let mut ctx = AnalysisContext::new(Some(3));
        let report = analyzer().analyze(noisy, &mut ctx).unwrap();
        assert!(report.score_breakdown.iter().all(|(_, s)| s <= CATEGORY_CAP));
        assert_eq!(report.total_score, report.score_breakdown.total());
    }

    #[test]
    fn test_same_seed_same_report_content() {
        let a = analyzer().analyze(SCENARIO, &mut AnalysisContext::new(Some(5))).unwrap();
        let b = analyzer().analyze(SCENARIO, &mut AnalysisContext::new(Some(5))).unwrap();
        assert_eq!(a.profile, b.profile);
        assert_eq!(a.recommendation, b.recommendation);
    }

    struct Broken;

    impl EntityRecognizer for Broken {
        fn annotate(&self, _source: &SourceText) -> Result<AnnotatedText, RecognizerError> {
            Err(RecognizerError::Unavailable("model not loaded".to_string()))
        }

        fn backend(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_recognizer_failure_surfaces_as_extraction_error() {
        let analyzer = Analyzer::new(Arc::new(AnalysisTables::builtin()), Arc::new(Broken));
        let err = analyzer
            .analyze(SCENARIO, &mut AnalysisContext::new(None))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Extraction(RecognizerError::Unavailable(_))));
    }

    #[test]
    fn test_cache_key_separates_line_layouts() {
        let analyzer = analyzer();
        assert_eq!(analyzer.cache_key(SCENARIO), analyzer.cache_key(SCENARIO));
        assert_ne!(
            analyzer.cache_key("jane roe\nengineer"),
            analyzer.cache_key("jane roe engineer")
        );
        assert_ne!(
            analyzer.cache_key("resume\nJohn Doe\nEngineer"),
            analyzer.cache_key("resume\nJohn Doe Engineer")
        );
    }
}
