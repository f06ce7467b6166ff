//! Analysis tables: the read-only vocabularies every pipeline stage consults.
//!
//! Built-in defaults live in `defaults.rs`. A deployment may replace any of them
//! with a TOML file (`ANALYSIS_TABLES_PATH`); missing keys keep their defaults.
//! `validate` runs once at startup so a malformed table stops the process
//! instead of failing individual analyses.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

mod defaults;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("Table '{0}' is empty")]
    Empty(&'static str),

    #[error("Table '{table}' contains a blank entry")]
    BlankEntry { table: &'static str },

    #[error("Career field '{0}' lists no skills")]
    FieldWithoutSkills(String),

    #[error("Default course field '{0}' is missing or has no courses")]
    MissingDefaultCourses(String),

    #[error("Failed to read tables file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tables file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A career field with its representative skills and course list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerField {
    pub name: String,
    pub skills: Vec<String>,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisTables {
    /// Skill gazetteer, matched as whole phrases.
    pub skills: Vec<String>,
    /// Degree keywords; their presence makes a sentence an education sentence.
    pub education_keywords: Vec<String>,
    pub experience_triggers: Vec<String>,
    pub project_triggers: Vec<String>,
    pub institution_keywords: Vec<String>,
    pub known_skills: Vec<String>,
    pub fields: Vec<CareerField>,
    /// Returned when no field overlaps the detected skills.
    pub default_field: String,
    /// Field whose courses are served for fields without their own list.
    pub default_course_field: String,
}

impl Default for AnalysisTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AnalysisTables {
    pub fn builtin() -> Self {
        Self {
            skills: owned(defaults::SKILLS),
            education_keywords: owned(defaults::EDUCATION_KEYWORDS),
            experience_triggers: owned(defaults::EXPERIENCE_TRIGGERS),
            project_triggers: owned(defaults::PROJECT_TRIGGERS),
            institution_keywords: owned(defaults::INSTITUTION_KEYWORDS),
            known_skills: owned(defaults::KNOWN_SKILLS),
            fields: defaults::FIELDS
                .iter()
                .map(|(name, skills, courses)| CareerField {
                    name: name.to_string(),
                    skills: owned(skills),
                    courses: owned(courses),
                })
                .collect(),
            default_field: defaults::DEFAULT_FIELD.to_string(),
            default_course_field: defaults::DEFAULT_COURSE_FIELD.to_string(),
        }
    }

    /// Loads the built-in tables, or the TOML override at `path`, and validates them.
    pub fn load(path: Option<&Path>) -> Result<Self, TablesError> {
        let tables = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| TablesError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                info!("Loading analysis tables from {}", path.display());
                Self::from_toml(&raw)?
            }
            None => Self::builtin(),
        };
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_toml(raw: &str) -> Result<Self, TablesError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        check_list("skills", &self.skills)?;
        check_list("education_keywords", &self.education_keywords)?;
        check_list("experience_triggers", &self.experience_triggers)?;
        check_list("project_triggers", &self.project_triggers)?;
        check_list("institution_keywords", &self.institution_keywords)?;
        check_list("known_skills", &self.known_skills)?;

        if self.fields.is_empty() {
            return Err(TablesError::Empty("fields"));
        }
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(TablesError::BlankEntry { table: "fields" });
            }
            if field.skills.is_empty() {
                return Err(TablesError::FieldWithoutSkills(field.name.clone()));
            }
            check_list("fields.skills", &field.skills)?;
            if field.courses.iter().any(|c| c.trim().is_empty()) {
                return Err(TablesError::BlankEntry {
                    table: "fields.courses",
                });
            }
        }

        if self.default_field.trim().is_empty() {
            return Err(TablesError::BlankEntry {
                table: "default_field",
            });
        }
        match self.field(&self.default_course_field) {
            Some(field) if !field.courses.is_empty() => Ok(()),
            _ => Err(TablesError::MissingDefaultCourses(
                self.default_course_field.clone(),
            )),
        }
    }

    pub fn field(&self, name: &str) -> Option<&CareerField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn check_list(table: &'static str, items: &[String]) -> Result<(), TablesError> {
    if items.is_empty() {
        return Err(TablesError::Empty(table));
    }
    if items.iter().any(|s| s.trim().is_empty()) {
        return Err(TablesError::BlankEntry { table });
    }
    Ok(())
}
