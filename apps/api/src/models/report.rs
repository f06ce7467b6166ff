use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::profile::{ExperienceLevel, ResumeProfile};
use crate::recommendation::Recommendation;
use crate::scoring::ScoreBreakdown;

/// Everything one analysis produces, as returned by the HTTP API.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub profile: ResumeProfile,
    pub score_breakdown: ScoreBreakdown,
    /// Always the sum of `score_breakdown`.
    pub total_score: u32,
    pub experience_level: ExperienceLevel,
    pub recommendation: Recommendation,
    /// The profile was served from the cache rather than re-extracted.
    pub cached: bool,
}
