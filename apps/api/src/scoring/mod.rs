//! Résumé rubric: ten fixed categories, each capped at 10, summed to 0..=100.
//!
//! `score_profile` reads nothing but the profile and has no side effects.
//! Formatting and Keywords are constant placeholders: they are not derived from
//! the document yet and every profile receives the same points for them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::profile::ResumeProfile;

pub const CATEGORY_CAP: u8 = 10;
pub const FORMATTING_PLACEHOLDER: u8 = 8;
pub const KEYWORDS_PLACEHOLDER: u8 = 7;

const NAME_POINTS: u8 = 3;
const EMAIL_POINTS: u8 = 3;
const PHONE_POINTS: u8 = 4;
const DEGREE_POINTS: u8 = 5;
const INSTITUTION_POINTS: u8 = 5;
const POINTS_PER_ITEM: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    ContactInformation,
    Education,
    Skills,
    Experience,
    Projects,
    Certifications,
    SummaryObjective,
    Achievements,
    Formatting,
    Keywords,
}

impl ScoreCategory {
    /// Rubric order.
    pub const ALL: [ScoreCategory; 10] = [
        ScoreCategory::ContactInformation,
        ScoreCategory::Education,
        ScoreCategory::Skills,
        ScoreCategory::Experience,
        ScoreCategory::Projects,
        ScoreCategory::Certifications,
        ScoreCategory::SummaryObjective,
        ScoreCategory::Achievements,
        ScoreCategory::Formatting,
        ScoreCategory::Keywords,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::ContactInformation => "Contact Information",
            ScoreCategory::Education => "Education",
            ScoreCategory::Skills => "Skills",
            ScoreCategory::Experience => "Experience",
            ScoreCategory::Projects => "Projects",
            ScoreCategory::Certifications => "Certifications",
            ScoreCategory::SummaryObjective => "Summary/Objective",
            ScoreCategory::Achievements => "Achievements",
            ScoreCategory::Formatting => "Formatting",
            ScoreCategory::Keywords => "Keywords",
        }
    }
}

/// Per-category points in rubric order. Serializes as an ordered
/// `{ "Contact Information": 10, ... }` map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    scores: [u8; 10],
}

impl ScoreBreakdown {
    pub fn get(&self, category: ScoreCategory) -> u8 {
        self.scores[category as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, u8)> + '_ {
        ScoreCategory::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().map(|s| u32::from(*s)).sum()
    }
}

impl Serialize for ScoreBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.label(), &score)?;
        }
        map.end()
    }
}

pub fn score_profile(profile: &ResumeProfile) -> ScoreBreakdown {
    let mut scores = [0u8; 10];
    let mut set = |category: ScoreCategory, points: u8| {
        scores[category as usize] = points.min(CATEGORY_CAP);
    };

    set(
        ScoreCategory::ContactInformation,
        points_if(profile.name.is_some(), NAME_POINTS)
            + points_if(profile.email.is_some(), EMAIL_POINTS)
            + points_if(profile.phone.is_some(), PHONE_POINTS),
    );
    set(
        ScoreCategory::Education,
        points_if(profile.degree.is_some(), DEGREE_POINTS)
            + points_if(profile.institution.is_some(), INSTITUTION_POINTS),
    );
    set(ScoreCategory::Skills, capped(profile.skills.len(), 1));
    set(
        ScoreCategory::Experience,
        capped(profile.total_experience_years as usize, POINTS_PER_ITEM),
    );
    set(
        ScoreCategory::Projects,
        capped(profile.projects.len(), POINTS_PER_ITEM),
    );
    set(
        ScoreCategory::Certifications,
        capped(profile.certifications.len(), POINTS_PER_ITEM),
    );
    let has_summary = profile
        .summary
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    set(
        ScoreCategory::SummaryObjective,
        points_if(has_summary, CATEGORY_CAP),
    );
    set(
        ScoreCategory::Achievements,
        capped(profile.achievements.len(), POINTS_PER_ITEM),
    );
    set(ScoreCategory::Formatting, FORMATTING_PLACEHOLDER);
    set(ScoreCategory::Keywords, KEYWORDS_PLACEHOLDER);

    ScoreBreakdown { scores }
}

fn points_if(condition: bool, points: u8) -> u8 {
    if condition {
        points
    } else {
        0
    }
}

/// `min(count × per_item, 10)` without overflow on absurd counts.
fn capped(count: usize, per_item: usize) -> u8 {
    count
        .saturating_mul(per_item)
        .min(usize::from(CATEGORY_CAP)) as u8
}
