use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured view of one résumé. Built once per analysis and never mutated.
///
/// `None` is the "not found" sentinel for every optional field; it serializes
/// as `null` and is never confused with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Gazetteer spelling, gazetteer order, no duplicates.
    pub skills: Vec<String>,
    /// Every sentence carrying a degree keyword, in document order.
    pub education: Vec<String>,
    /// Organizations recognized anywhere in the text.
    pub experience: BTreeSet<String>,
    pub total_experience_years: u32,
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub projects: Vec<String>,
    // Not populated by the text extractor; kept so the rubric can score them.
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Fresher,
    Intermediate,
    Experienced,
}

impl ResumeProfile {
    pub fn experience_level(&self) -> ExperienceLevel {
        match self.total_experience_years {
            0 => ExperienceLevel::Fresher,
            1..=2 => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::Experienced,
        }
    }
}
