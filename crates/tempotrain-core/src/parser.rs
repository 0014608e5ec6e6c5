//! TOML catalog parser.
//!
//! Loads question catalogs from TOML files and directories, and validates
//! them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Catalog, Question, QuestionKind};

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(default = "default_kind")]
    kind: String,
    prompt: String,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    correct_choice: Option<usize>,
    #[serde(default)]
    explanation: Option<String>,
}

fn default_kind() -> String {
    "mcq".to_string()
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{}", e))?;

            Ok(Question {
                id: q.id,
                kind,
                prompt: q.prompt,
                context: q.context,
                choices: q.choices,
                correct_choice: q.correct_choice,
                explanation: q.explanation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog {
        id: parsed.catalog.id,
        title: parsed.catalog.title,
        description: parsed.catalog.description,
        questions,
    })
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "catalog has no questions and cannot start a session".into(),
        });
    }

    // Check for duplicate question IDs
    let mut seen_ids = std::collections::HashSet::new();
    for question in &catalog.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in &catalog.questions {
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "prompt is empty".into(),
            });
        }

        match question.kind {
            QuestionKind::MultipleChoice => {
                if question.choices.len() < 2 {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id.clone()),
                        message: format!(
                            "multiple-choice question has {} choice(s), needs at least 2",
                            question.choices.len()
                        ),
                    });
                }
                match question.correct_choice {
                    None => warnings.push(ValidationWarning {
                        question_id: Some(question.id.clone()),
                        message: "multiple-choice question has no correct_choice".into(),
                    }),
                    Some(index) if index >= question.choices.len() => {
                        warnings.push(ValidationWarning {
                            question_id: Some(question.id.clone()),
                            message: format!(
                                "correct_choice {} is out of range for {} choices",
                                index,
                                question.choices.len()
                            ),
                        });
                    }
                    Some(_) => {}
                }
            }
            QuestionKind::OpenResponse => {
                if !question.choices.is_empty() {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id.clone()),
                        message: "open-response question lists choices; they will be ignored"
                            .into(),
                    });
                }
            }
        }
    }

    warnings
}
