// Extraction: raw résumé text → ResumeProfile.
// Contact fields come from patterns, entities from the recognizer seam,
// skills and sections from the analysis tables. Pure given (text, tables, recognizer).

pub mod contact;
pub mod matching;
pub mod recognizer;
pub mod sections;

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::extraction::contact::{
    extract_email, extract_phone, first_line, normalize_text, SourceText,
};
use crate::extraction::matching::find_whole_term;
use crate::extraction::recognizer::{EntityLabel, EntityRecognizer, RecognizerError};
use crate::extraction::sections::{detect_skills, personal_spans, scan_sentences};
use crate::models::profile::ResumeProfile;
use crate::tables::AnalysisTables;

pub struct ProfileExtractor {
    tables: Arc<AnalysisTables>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl ProfileExtractor {
    pub fn new(tables: Arc<AnalysisTables>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { tables, recognizer }
    }

    /// Extracts a profile from raw document text.
    ///
    /// Missing fields come back as `None` / empty; only a recognizer failure is an error.
    pub fn extract(&self, raw_text: &str) -> Result<ResumeProfile, RecognizerError> {
        let source = SourceText::new(raw_text);
        let annotated = self.recognizer.annotate(&source)?;
        let text = source.text.as_str();

        let name = annotated
            .first(EntityLabel::Person)
            .map(String::from)
            .or_else(|| first_line(raw_text));
        let email = extract_email(text);
        let phone = extract_phone(text);

        let text_lower = text.to_lowercase();
        // The raw-line fallback still carries comma and whitespace runs.
        let span_name = name.as_deref().map(normalize_text);
        let spans = personal_spans(
            &text_lower,
            [span_name.as_deref(), email.as_deref(), phone.as_deref()]
                .into_iter()
                .flatten(),
        );
        let skills = detect_skills(&text_lower, &self.tables.skills, &spans);

        let scan = scan_sentences(&annotated.sentences, &self.tables);

        let organizations: Vec<&str> = annotated.labelled(EntityLabel::Org).collect();
        let institution = organizations
            .iter()
            .find(|org| self.is_institution(org))
            .map(|org| org.to_string());
        let experience: BTreeSet<String> =
            organizations.iter().map(|org| org.to_string()).collect();

        debug!(
            backend = self.recognizer.backend(),
            sentences = annotated.sentences.len(),
            skills = skills.len(),
            organizations = experience.len(),
            "Profile extracted"
        );

        Ok(ResumeProfile {
            name,
            email,
            phone,
            skills,
            education: scan.education,
            experience,
            total_experience_years: scan.total_experience_years,
            degree: scan.degree,
            institution,
            projects: scan.projects,
            certifications: vec![],
            achievements: vec![],
            summary: None,
        })
    }

    fn is_institution(&self, org: &str) -> bool {
        let lower = org.to_lowercase();
        self.tables
            .institution_keywords
            .iter()
            .any(|keyword| !find_whole_term(&lower, keyword).is_empty())
    }
}
