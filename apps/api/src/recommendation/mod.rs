// Career-field, skill-gap and course recommendations from detected skills.
// Field and course lookups are pure; skill-gap sampling draws from the RNG it is handed.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::tables::AnalysisTables;

pub const MAX_SKILL_GAPS: usize = 5;
pub const MAX_COURSES_SHOWN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub field: String,
    pub skill_gaps: Vec<String>,
    pub courses: Vec<String>,
}

/// Field whose skill list overlaps `skills` the most (case-insensitive).
///
/// Fields are visited in table order and only a strictly larger overlap
/// replaces the current best, so ties go to the earlier field. With no
/// overlap at all the table's default field is returned.
pub fn recommend_field(skills: &[String], tables: &AnalysisTables) -> String {
    let detected: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut best: Option<(&str, usize)> = None;
    for field in &tables.fields {
        let overlap = field
            .skills
            .iter()
            .filter(|s| detected.contains(&s.to_lowercase()))
            .count();
        if overlap > best.map_or(0, |(_, n)| n) {
            best = Some((field.name.as_str(), overlap));
        }
    }

    best.map_or_else(|| tables.default_field.clone(), |(name, _)| name.to_string())
}

/// Up to `MAX_SKILL_GAPS` known skills the candidate lacks, sampled without
/// replacement. Membership is case-insensitive; output keeps table spelling.
pub fn recommend_skill_gaps<R: Rng + ?Sized>(
    skills: &[String],
    known_skills: &[String],
    rng: &mut R,
) -> Vec<String> {
    let detected: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let gaps: Vec<&String> = known_skills
        .iter()
        .filter(|k| !detected.contains(&k.to_lowercase()))
        .collect();

    gaps.choose_multiple(rng, MAX_SKILL_GAPS.min(gaps.len()))
        .map(|s| s.to_string())
        .collect()
}

/// Full course list for `field`. Fields without a list get the default one.
pub fn recommend_courses<'a>(field: &str, tables: &'a AnalysisTables) -> &'a [String] {
    tables
        .field(field)
        .or_else(|| tables.field(&tables.default_course_field))
        .map_or(&[][..], |f| f.courses.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_sql_recommends_data_science() {
        let tables = AnalysisTables::builtin();
        let skills = owned(&["Python", "SQL"]);
        assert_eq!(recommend_field(&skills, &tables), "Data Science");
        // stable across calls
        assert_eq!(recommend_field(&skills, &tables), "Data Science");
    }

    #[test]
    fn test_field_overlap_is_case_insensitive() {
        let tables = AnalysisTables::builtin();
        let skills = owned(&["docker", "KUBERNETES", "aws"]);
        assert_eq!(recommend_field(&skills, &tables), "DevOps");
    }

    #[test]
    fn test_no_overlap_returns_default_field() {
        let tables = AnalysisTables::builtin();
        assert_eq!(
            recommend_field(&owned(&["Cobol"]), &tables),
            "General Software Development"
        );
        assert_eq!(recommend_field(&[], &tables), "General Software Development");
    }

    #[test]
    fn test_tie_keeps_earlier_field() {
        let mut tables = AnalysisTables::builtin();
        let first = tables.fields[0].name.clone();
        let shared = tables.fields[0].skills[0].clone();
        tables.fields[1].skills.push(shared.clone());
        assert_eq!(recommend_field(&[shared], &tables), first);
    }

    #[test]
    fn test_skill_gaps_are_a_sample_of_the_complement() {
        let tables = AnalysisTables::builtin();
        let skills = owned(&["Python", "sql"]);
        let mut rng = StdRng::seed_from_u64(7);
        let gaps = recommend_skill_gaps(&skills, &tables.known_skills, &mut rng);

        assert_eq!(gaps.len(), MAX_SKILL_GAPS);
        let unique: HashSet<&String> = gaps.iter().collect();
        assert_eq!(unique.len(), gaps.len());
        for gap in &gaps {
            assert!(tables.known_skills.contains(gap));
            assert!(!gap.eq_ignore_ascii_case("python"));
            assert!(!gap.eq_ignore_ascii_case("sql"));
        }
    }

    #[test]
    fn test_skill_gaps_smaller_than_cap() {
        let known = owned(&["Python", "Go", "Rust"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut gaps = recommend_skill_gaps(&owned(&["Python"]), &known, &mut rng);
        gaps.sort();
        assert_eq!(gaps, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_skill_gaps_empty_when_everything_known() {
        let known = owned(&["Python", "Go"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(recommend_skill_gaps(&owned(&["go", "python"]), &known, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let tables = AnalysisTables::builtin();
        let a = recommend_skill_gaps(&[], &tables.known_skills, &mut StdRng::seed_from_u64(42));
        let b = recommend_skill_gaps(&[], &tables.known_skills, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_courses_for_known_and_unknown_fields() {
        let tables = AnalysisTables::builtin();
        let devops = recommend_courses("DevOps", &tables);
        assert_eq!(devops, tables.field("DevOps").unwrap().courses.as_slice());

        let fallback = recommend_courses("General Software Development", &tables);
        assert_eq!(fallback, tables.field("Data Science").unwrap().courses.as_slice());
        assert!(!fallback.is_empty());
    }
}
