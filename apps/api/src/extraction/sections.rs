//! Skill & section extraction: gazetteer skills, sentence buckets, degree window
//! and years of experience.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::matching::{contains_any_word_start, find_whole_term, overlaps};
use crate::tables::AnalysisTables;

static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+? years?\b").expect("years pattern compiles"));

/// Characters kept before / after the degree keyword.
const DEGREE_WINDOW_BEFORE: usize = 10;
const DEGREE_WINDOW_AFTER: usize = 20;

pub const MAX_PROJECTS: usize = 5;

/// Sentence-level findings for one document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionScan {
    pub education: Vec<String>,
    pub degree: Option<String>,
    pub total_experience_years: u32,
    pub projects: Vec<String>,
}

/// Classifies each sentence into the education / experience / project buckets.
/// Buckets are independent: one sentence may land in all three.
pub fn scan_sentences(sentences: &[String], tables: &AnalysisTables) -> SectionScan {
    let mut scan = SectionScan::default();

    for sentence in sentences {
        let lower = sentence.to_lowercase();

        if let Some(idx) = first_degree_keyword(&lower, &tables.education_keywords) {
            scan.education.push(sentence.clone());
            if scan.degree.is_none() {
                scan.degree = Some(degree_window(&lower, idx));
            }
        }

        if contains_any_word_start(&lower, &tables.experience_triggers) {
            if let Some(years) = max_years(&lower) {
                scan.total_experience_years = scan.total_experience_years.max(years);
            }
        }

        if scan.projects.len() < MAX_PROJECTS
            && contains_any_word_start(&lower, &tables.project_triggers)
        {
            scan.projects.push(sentence.clone());
        }
    }

    scan
}

/// Byte offset of the first keyword, in table order, that occurs as a whole word.
fn first_degree_keyword(sentence_lower: &str, keywords: &[String]) -> Option<usize> {
    keywords.iter().find_map(|keyword| {
        find_whole_term(sentence_lower, keyword)
            .first()
            .map(|range| range.start)
    })
}

/// `[idx - 10, idx + 20)` in characters around the keyword, clamped to the sentence.
/// A fixed window, so long or unusual phrasing comes back truncated.
fn degree_window(sentence_lower: &str, byte_idx: usize) -> String {
    let chars: Vec<char> = sentence_lower.chars().collect();
    let char_idx = sentence_lower[..byte_idx].chars().count();
    let start = char_idx.saturating_sub(DEGREE_WINDOW_BEFORE);
    let end = (char_idx + DEGREE_WINDOW_AFTER).min(chars.len());
    chars[start..end].iter().collect::<String>().trim().to_string()
}

/// Largest "N years" / "N+ years" / "N year" figure in a lowercased sentence.
/// Figures that do not fit a `u32` are skipped.
pub fn max_years(sentence_lower: &str) -> Option<u32> {
    YEARS_RE
        .captures_iter(sentence_lower)
        .filter_map(|caps| match caps[1].parse::<u32>() {
            Ok(years) => Some(years),
            Err(e) => {
                debug!("Skipping unparseable years figure '{}': {e}", &caps[1]);
                None
            }
        })
        .max()
}

/// Gazetteer skills found in `text_lower`, in gazetteer order.
///
/// An occurrence inside one of `personal_spans` (where the name, email or phone
/// sits) does not count; a skill survives if any other occurrence remains.
pub fn detect_skills(
    text_lower: &str,
    gazetteer: &[String],
    personal_spans: &[Range<usize>],
) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for skill in gazetteer {
        if found.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            continue;
        }
        let survives = find_whole_term(text_lower, skill)
            .iter()
            .any(|occurrence| !personal_spans.iter().any(|span| overlaps(occurrence, span)));
        if survives {
            found.push(skill.clone());
        }
    }
    found
}

/// Byte ranges of every occurrence of the given personal values in `text_lower`.
pub fn personal_spans<'a>(
    text_lower: &str,
    values: impl IntoIterator<Item = &'a str>,
) -> Vec<Range<usize>> {
    values
        .into_iter()
        .map(str::to_lowercase)
        .filter(|v| !v.is_empty())
        .flat_map(|v| {
            text_lower
                .match_indices(v.as_str())
                .map(|(start, m)| start..start + m.len())
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_years_takes_maximum_not_sum() {
        let tables = AnalysisTables::builtin();
        let scan = scan_sentences(
            &sentences(&[
                "5 years experience as a backend engineer.",
                "Then 2 years of work in consulting.",
            ]),
            &tables,
        );
        assert_eq!(scan.total_experience_years, 5);
    }

    #[test]
    fn test_years_only_counted_in_experience_sentences() {
        let tables = AnalysisTables::builtin();
        let scan = scan_sentences(&sentences(&["Volunteered 9 years at the shelter."]), &tables);
        assert_eq!(scan.total_experience_years, 0);
    }

    #[test]
    fn test_years_variants() {
        assert_eq!(max_years("10+ years experience, 1 year lead"), Some(10));
        assert_eq!(max_years("3 year role"), Some(3));
        assert_eq!(max_years("no figures"), None);
    }

    #[test]
    fn test_years_overflow_is_skipped_and_scan_continues() {
        assert_eq!(max_years("99999999999 years of work and 4 years more"), Some(4));
    }

    #[test]
    fn test_degree_first_match_wins() {
        let tables = AnalysisTables::builtin();
        let scan = scan_sentences(
            &sentences(&[
                "Bachelor of Science in Computer Science.",
                "Master of Business Administration.",
            ]),
            &tables,
        );
        assert_eq!(scan.degree.as_deref(), Some("bachelor of science"));
        assert_eq!(scan.education.len(), 2);
    }

    #[test]
    fn test_degree_window_is_clamped() {
        let tables = AnalysisTables::builtin();
        let scan = scan_sentences(
            &sentences(&["I completed my MBA at a school in Lyon with honours."]),
            &tables,
        );
        // "mba" sits at char 15, so the window is chars 5..35
        assert_eq!(scan.degree.as_deref(), Some("pleted my mba at a school in l"));
    }

    #[test]
    fn test_short_degree_keywords_need_whole_words() {
        let tables = AnalysisTables::builtin();
        let scan = scan_sentences(&sentences(&["Built machine learning pipelines."]), &tables);
        assert!(scan.education.is_empty());
        assert_eq!(scan.projects.len(), 1);
    }

    #[test]
    fn test_sentence_can_fill_several_buckets() {
        let tables = AnalysisTables::builtin();
        let scan = scan_sentences(
            &sentences(&["Developed a thesis project during my 2 years master work."]),
            &tables,
        );
        assert_eq!(scan.education.len(), 1);
        assert_eq!(scan.projects.len(), 1);
        assert_eq!(scan.total_experience_years, 2);
    }

    #[test]
    fn test_projects_capped_at_five() {
        let tables = AnalysisTables::builtin();
        let many: Vec<String> = (0..8).map(|i| format!("Built service number {i}.")).collect();
        let scan = scan_sentences(&many, &tables);
        assert_eq!(scan.projects.len(), MAX_PROJECTS);
        assert_eq!(scan.projects[0], "Built service number 0.");
    }

    #[test]
    fn test_skills_case_insensitive_in_gazetteer_order() {
        let tables = AnalysisTables::builtin();
        let skills = detect_skills("sql, python and docker", &tables.skills, &[]);
        assert_eq!(skills, vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_skill_inside_personal_span_is_dropped() {
        let tables = AnalysisTables::builtin();
        let text = "react sharma react.sharma@mail.com python developer";
        let spans = personal_spans(text, ["React Sharma", "react.sharma@mail.com"]);
        let skills = detect_skills(text, &tables.skills, &spans);
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn test_skill_outside_personal_span_is_kept() {
        let tables = AnalysisTables::builtin();
        let text = "react sharma built dashboards in react";
        let spans = personal_spans(text, ["React Sharma"]);
        let skills = detect_skills(text, &tables.skills, &spans);
        assert_eq!(skills, vec!["React"]);
    }
}
