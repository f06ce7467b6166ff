//! Entity recognition seam: sentence segmentation plus PERSON / ORG tagging.
//!
//! `ProfileExtractor` holds an `Arc<dyn EntityRecognizer>`, so a model-backed
//! recognizer can replace `HeuristicRecognizer` without touching the extractor.
//! A recognizer error is fatal to the analysis: every later stage reads its output.

use serde::Serialize;
use thiserror::Error;

use crate::extraction::contact::SourceText;

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// For model-backed recognizers whose model or service cannot be reached.
    #[allow(dead_code)]
    #[error("Recognizer unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityLabel {
    Person,
    Org,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
}

/// Recognizer output for one normalized document.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedText {
    pub sentences: Vec<String>,
    /// Document order.
    pub entities: Vec<Entity>,
}

impl AnnotatedText {
    pub fn first(&self, label: EntityLabel) -> Option<&str> {
        self.entities
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.text.as_str())
    }

    pub fn labelled(&self, label: EntityLabel) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .filter(move |e| e.label == label)
            .map(|e| e.text.as_str())
    }
}

pub trait EntityRecognizer: Send + Sync {
    /// Sentences and entities come from `source.text`; `source.lines` keeps
    /// the line structure for header-sensitive rules.
    fn annotate(&self, source: &SourceText) -> Result<AnnotatedText, RecognizerError>;

    /// Backend label, logged with each extraction.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicRecognizer: rule-based default
// ────────────────────────────────────────────────────────────────────────────

/// Names are only looked for in the document header.
const PERSON_SCAN_TOKENS: usize = 12;
const MIN_NAME_TOKENS: usize = 2;
const MAX_NAME_TOKENS: usize = 4;

const HEADING_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "cv",
    "profile",
    "contact",
    "summary",
    "objective",
    "education",
    "experience",
    "skills",
    "projects",
];

const ORG_SUFFIXES: &[&str] = &[
    "inc",
    "corp",
    "corporation",
    "llc",
    "ltd",
    "limited",
    "company",
    "co",
    "group",
    "technologies",
    "solutions",
    "labs",
    "consulting",
    "bank",
    "foundation",
    "agency",
    "university",
    "college",
    "institute",
    "school",
    "academy",
];

const ORG_CONNECTORS: &[&str] = &["of", "and", "&"];

const CLAUSE_END: &[char] = &[',', ';', ':', '|', ')', '.', '!', '?'];

/// Deterministic recognizer built from capitalization and suffix rules.
///
/// PERSON: first run of 2–4 name-like tokens in the header, never spanning a line break.
/// ORG: capitalized run containing an organization suffix, or directly after "at".
pub struct HeuristicRecognizer;

impl EntityRecognizer for HeuristicRecognizer {
    fn annotate(&self, source: &SourceText) -> Result<AnnotatedText, RecognizerError> {
        let text = source.text.as_str();
        if text.contains('\0') {
            return Err(RecognizerError::UnsupportedInput(
                "text contains NUL bytes".to_string(),
            ));
        }

        let sentences = split_sentences(text);
        let mut entities = Vec::new();

        if let Some(person) = find_person(&source.lines) {
            entities.push(Entity {
                label: EntityLabel::Person,
                text: person,
            });
        }

        for sentence in &sentences {
            let tokens: Vec<&str> = sentence.split_whitespace().collect();
            entities.extend(find_organizations(&tokens).into_iter().map(|text| Entity {
                label: EntityLabel::Org,
                text,
            }));
        }

        Ok(AnnotatedText {
            sentences,
            entities,
        })
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Splits after `.`, `!` or `?` when followed by whitespace or the end of text.
/// Dots inside tokens ("node.js", "x.com") never split.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary {
            let end = idx + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        out.push(fragment.to_string());
    }
}

fn find_person(lines: &[String]) -> Option<String> {
    let mut budget = PERSON_SCAN_TOKENS;
    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().take(budget).collect();
        budget -= tokens.len();
        if let Some(name) = name_run(&tokens) {
            return Some(name);
        }
        if budget == 0 {
            break;
        }
    }
    None
}

/// First run of name-like tokens within one line.
fn name_run(tokens: &[&str]) -> Option<String> {
    let mut run: Vec<&str> = Vec::new();

    for raw in tokens {
        let word = strip_punctuation(raw);
        if is_name_like(word) {
            run.push(word);
            if run.len() == MAX_NAME_TOKENS || ends_name(raw) {
                if run.len() >= MIN_NAME_TOKENS {
                    break;
                }
                run.clear();
            }
        } else {
            if run.len() >= MIN_NAME_TOKENS {
                break;
            }
            run.clear();
        }
    }

    (run.len() >= MIN_NAME_TOKENS).then(|| run.join(" "))
}

/// Clause punctuation ends a name, except the period of an initial ("Q.").
fn ends_name(raw: &str) -> bool {
    match raw.strip_suffix('.') {
        Some(bare) => bare.chars().count() > 1,
        None => ends_clause(raw),
    }
}

fn find_organizations(tokens: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    let mut after_at = false;
    let mut prev_lower = String::new();

    for (idx, raw) in tokens.iter().enumerate() {
        let word = strip_punctuation(raw);
        let lower = word.to_lowercase();
        // Sentence-initial verbs ("Joined", "Leading") are capitalized too.
        let opening_verb = idx == 0 && (lower.ends_with("ed") || lower.ends_with("ing"));
        let capitalized = starts_uppercase(word) && !opening_verb;
        let connector = !run.is_empty() && ORG_CONNECTORS.contains(&lower.as_str());

        if capitalized || connector {
            if run.is_empty() {
                after_at = prev_lower == "at";
            }
            run.push(word);
            if ends_clause(raw) {
                flush_org(&mut run, after_at, &mut found);
            }
        } else {
            flush_org(&mut run, after_at, &mut found);
        }
        prev_lower = lower;
    }
    flush_org(&mut run, after_at, &mut found);
    found
}

fn flush_org(run: &mut Vec<&str>, after_at: bool, found: &mut Vec<String>) {
    while run
        .last()
        .is_some_and(|w| ORG_CONNECTORS.contains(&w.to_lowercase().as_str()))
    {
        run.pop();
    }
    let has_suffix = run.iter().any(|w| is_org_suffix(w));
    if !run.is_empty() && (has_suffix || after_at) {
        let name = run.join(" ").trim_end_matches('.').to_string();
        if !found.contains(&name) {
            found.push(name);
        }
    }
    run.clear();
}

fn strip_punctuation(raw: &str) -> &str {
    raw.trim_start_matches(['(', '"', '\''])
        .trim_end_matches([',', ';', ':', '|', ')', '"', '!', '?'])
}

fn ends_clause(raw: &str) -> bool {
    raw.ends_with(CLAUSE_END)
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_name_like(word: &str) -> bool {
    let bare = word.trim_end_matches('.');
    if !starts_uppercase(bare) {
        return false;
    }
    if !bare
        .chars()
        .all(|c| c.is_alphabetic() || c == '\'' || c == '-')
    {
        return false;
    }
    let lower = bare.to_lowercase();
    !HEADING_WORDS.contains(&lower.as_str()) && !ORG_SUFFIXES.contains(&lower.as_str())
}

fn is_org_suffix(word: &str) -> bool {
    let lower = word.trim_end_matches('.').to_lowercase();
    ORG_SUFFIXES.contains(&lower.as_str())
}
