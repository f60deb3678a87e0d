//! Calculator and session schema types.
//!
//! Flasks, plating declarations, and the computed recipe. Session types
//! derive Serialize/Deserialize for YAML roundtripping; numeric plating
//! fields stay raw text so the parse-or-default contract applies uniformly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback culture area when a flask cannot be resolved (cm²).
pub const DEFAULT_AREA_CM2: u32 = 75;

// ============================================================================
// Flasks
// ============================================================================

/// A culture flask size. Standard flasks carry a fixed surface area;
/// `Custom` takes a caller-supplied area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flask {
    T25,
    #[default]
    T75,
    T175,
    T225,
    #[serde(rename = "custom")]
    Custom,
}

impl Flask {
    /// The standard flasks, smallest first.
    pub const STANDARD: [Flask; 4] = [Flask::T25, Flask::T75, Flask::T175, Flask::T225];

    /// Fixed culture area for standard flasks; `None` for `Custom`.
    pub fn standard_area_cm2(self) -> Option<u32> {
        match self {
            Self::T25 => Some(25),
            Self::T75 => Some(75),
            Self::T175 => Some(175),
            Self::T225 => Some(225),
            Self::Custom => None,
        }
    }

    /// Resolve a flask name, falling back to T75 for anything unknown.
    /// Case-insensitive; the calculator never rejects input.
    pub fn parse_or_default(name: &str) -> Flask {
        match name.trim().to_ascii_uppercase().as_str() {
            "T25" => Self::T25,
            "T75" => Self::T75,
            "T175" => Self::T175,
            "T225" => Self::T225,
            "CUSTOM" => Self::Custom,
            _ => Self::default(),
        }
    }

    /// Whether `name` resolves to a flask without hitting the fallback.
    pub fn is_known_name(name: &str) -> bool {
        matches!(
            name.trim().to_ascii_uppercase().as_str(),
            "T25" | "T75" | "T175" | "T225" | "CUSTOM"
        )
    }

    /// Culture area in cm². `Custom` parses the supplied text, falling back
    /// to 75 when absent, unparseable, or non-positive.
    pub fn area_cm2(self, custom_area: Option<&str>) -> u32 {
        match self.standard_area_cm2() {
            Some(area) => area,
            None => custom_area
                .map(super::input::parse_area_or_default)
                .unwrap_or(DEFAULT_AREA_CM2),
        }
    }
}

impl fmt::Display for Flask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::T25 => write!(f, "T25"),
            Self::T75 => write!(f, "T75"),
            Self::T175 => write!(f, "T175"),
            Self::T225 => write!(f, "T225"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

// ============================================================================
// Recipe result
// ============================================================================

/// A computed plating recipe. Full-precision values; rounding and the
/// negative-media clamp are display policy (see `core::format`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recipe {
    /// Resolved culture area (cm²)
    pub flask_area_cm2: u32,

    /// Millions of cells per flask at the target density
    pub cells_per_flask: f64,

    /// mL of media per flask at the target density
    pub media_per_flask: f64,

    /// mL of cell suspension to plate
    pub cell_suspension_volume_ml: f64,

    /// mL of media to add — unclamped, may go negative when the
    /// suspension alone overshoots the flask volume
    pub media_volume_ml: f64,
}

// ============================================================================
// Session file (sembrar.yaml)
// ============================================================================

/// Root session file — one or more named platings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    /// Schema version (must be "1.0")
    pub version: String,

    /// Human-readable session name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Plating declarations (order-preserving)
    #[serde(default)]
    pub platings: IndexMap<String, Plating>,
}

/// A single plating declaration. All numeric fields are raw text;
/// invalid or missing text degrades per the calculator contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plating {
    /// Flask name (T25/T75/T175/T225/custom); unknown names resolve to T75
    #[serde(default)]
    pub flask: Option<String>,

    /// Custom flask area in cm² (only meaningful with `flask: custom`)
    #[serde(default)]
    pub custom_area: Option<String>,

    /// Cells harvested, in millions
    #[serde(default)]
    pub cells_harvested: String,

    /// Harvested suspension volume, in mL
    #[serde(default)]
    pub suspension_volume: String,

    /// Seeding density, M cells per cm²
    #[serde(default = "default_cells_per_cm2")]
    pub cells_per_cm2: String,

    /// Media density, mL per cm²
    #[serde(default = "default_media_per_cm2")]
    pub media_per_cm2: String,
}

fn default_cells_per_cm2() -> String {
    "0.028".to_string()
}

fn default_media_per_cm2() -> String {
    "0.2".to_string()
}

impl Default for Plating {
    fn default() -> Self {
        Self {
            flask: None,
            custom_area: None,
            cells_harvested: String::new(),
            suspension_volume: String::new(),
            cells_per_cm2: default_cells_per_cm2(),
            media_per_cm2: default_media_per_cm2(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
