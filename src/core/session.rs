//! Session file loading, validation, and batch recipe computation.
//!
//! Parses sembrar.yaml and validates structural constraints:
//! - Version must be "1.0"
//! - Flask names must be from the known table
//! - Numeric text that would silently degrade to a fallback is flagged
//!
//! Validation is advisory: `plan` computes every plating regardless, since
//! the calculator itself never rejects input.

use super::recipe::{self, RecipeInput};
use super::types::{Flask, Plating, Recipe, SessionFile};
use indexmap::IndexMap;
use std::path::Path;

/// Validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse a sembrar.yaml file from disk.
pub fn load_session(path: &Path) -> Result<SessionFile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    parse_session(&content)
}

/// Parse a sembrar.yaml from a string.
pub fn parse_session(yaml: &str) -> Result<SessionFile, String> {
    serde_yaml_ng::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
}

/// Validate a parsed session. Returns a list of errors (empty = valid).
pub fn validate_session(session: &SessionFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if session.version != "1.0" {
        errors.push(ValidationError {
            message: format!("version must be \"1.0\", got \"{}\"", session.version),
        });
    }

    if session.name.is_empty() {
        errors.push(ValidationError {
            message: "name must not be empty".to_string(),
        });
    }

    for (id, plating) in &session.platings {
        if let Some(ref flask) = plating.flask {
            if !Flask::is_known_name(flask) {
                errors.push(ValidationError {
                    message: format!(
                        "plating '{}' names unknown flask '{}' (will compute as T75)",
                        id, flask
                    ),
                });
            }
        }

        if let Some(ref area) = plating.custom_area {
            if area.trim().parse::<i64>().map_or(true, |n| n <= 0) {
                errors.push(ValidationError {
                    message: format!(
                        "plating '{}' has non-positive custom area '{}' (will compute as 75 cm²)",
                        id, area
                    ),
                });
            }
        }

        for (field, text) in [
            ("cells_harvested", &plating.cells_harvested),
            ("suspension_volume", &plating.suspension_volume),
            ("cells_per_cm2", &plating.cells_per_cm2),
            ("media_per_cm2", &plating.media_per_cm2),
        ] {
            if !text.is_empty() && text.trim().parse::<f64>().is_err() {
                errors.push(ValidationError {
                    message: format!(
                        "plating '{}' has non-numeric {} '{}' (will compute as 0)",
                        id, field, text
                    ),
                });
            }
        }
    }

    errors
}

/// Build calculator inputs from a plating declaration.
pub fn plating_input(plating: &Plating) -> RecipeInput {
    RecipeInput {
        cells_harvested: plating.cells_harvested.clone(),
        suspension_volume: plating.suspension_volume.clone(),
        cells_per_cm2: plating.cells_per_cm2.clone(),
        media_per_cm2: plating.media_per_cm2.clone(),
        flask: plating
            .flask
            .as_deref()
            .map(Flask::parse_or_default)
            .unwrap_or_default(),
        custom_area: plating.custom_area.clone(),
    }
}

/// Compute recipes for every plating in the session, in declaration order.
/// An optional filter restricts to a single named plating.
pub fn plan_session(
    session: &SessionFile,
    plating_filter: Option<&str>,
) -> Result<IndexMap<String, Recipe>, String> {
    if let Some(filter) = plating_filter {
        if !session.platings.contains_key(filter) {
            return Err(format!("no plating named '{}' in session", filter));
        }
    }

    let mut recipes = IndexMap::new();
    for (id, plating) in &session.platings {
        if let Some(filter) = plating_filter {
            if id != filter {
                continue;
            }
        }
        recipes.insert(id.clone(), recipe::compute(&plating_input(plating)));
    }
    Ok(recipes)
}
