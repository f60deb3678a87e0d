//! Recipe derivation — the pure calculator core.
//!
//! A recipe is a stateless function of five inputs: harvested cells,
//! suspension volume, flask area, and the two seeding densities. The two
//! per-cm² densities are the single source of truth; every per-flask
//! quantity is derived on each call, never stored independently.

use super::input::parse_or_zero;
use super::types::{Flask, Recipe};

/// Raw calculator inputs — numeric fields as entered, untrusted text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeInput {
    /// Cells harvested, in millions
    pub cells_harvested: String,

    /// Harvested suspension volume, in mL
    pub suspension_volume: String,

    /// Seeding density, M cells per cm²
    pub cells_per_cm2: String,

    /// Media density, mL per cm²
    pub media_per_cm2: String,

    /// Selected flask
    pub flask: Flask,

    /// Custom flask area text (only consulted for `Flask::Custom`)
    pub custom_area: Option<String>,
}

/// Compute a recipe from raw inputs, resolving the flask area first.
pub fn compute(input: &RecipeInput) -> Recipe {
    let area = input.flask.area_cm2(input.custom_area.as_deref());
    compute_recipe(
        &input.cells_harvested,
        &input.suspension_volume,
        area,
        &input.cells_per_cm2,
        &input.media_per_cm2,
    )
}

/// Compute a recipe for a resolved flask area.
///
/// Derivation order:
/// 1. `cells_per_flask = cells_per_cm2 * area`
/// 2. `media_per_flask = media_per_cm2 * area`
/// 3. suspension volume scales the harvest to the per-flask target,
///    guarded to 0 when no cells are specified (avoids division by zero
///    and a meaningless result on an empty form)
/// 4. `media_volume_ml = media_per_flask - suspension`, unclamped
pub fn compute_recipe(
    cells_harvested: &str,
    suspension_volume: &str,
    flask_area_cm2: u32,
    cells_per_cm2: &str,
    media_per_cm2: &str,
) -> Recipe {
    let area = f64::from(flask_area_cm2);

    let cells_per_flask = parse_or_zero(cells_per_cm2) * area;
    let media_per_flask = parse_or_zero(media_per_cm2) * area;

    let harvested = parse_or_zero(cells_harvested);
    let volume = parse_or_zero(suspension_volume);

    let cell_suspension_volume_ml = if harvested > 0.0 && cells_per_flask > 0.0 {
        (cells_per_flask / harvested) * volume
    } else {
        0.0
    };

    let media_volume_ml = media_per_flask - cell_suspension_volume_ml;

    Recipe {
        flask_area_cm2,
        cells_per_flask,
        media_per_flask,
        cell_suspension_volume_ml,
        media_volume_ml,
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_per_flask_is_density_times_area(
            area in 1u32..=10_000,
            cells in 0.0f64..10.0,
            media in 0.0f64..10.0,
        ) {
            let r = compute_recipe("", "", area, &cells.to_string(), &media.to_string());
            let parsed_cells: f64 = cells.to_string().parse().unwrap();
            let parsed_media: f64 = media.to_string().parse().unwrap();
            prop_assert_eq!(r.cells_per_flask, parsed_cells * f64::from(area));
            prop_assert_eq!(r.media_per_flask, parsed_media * f64::from(area));
        }

        #[test]
        fn prop_no_harvest_means_no_suspension(
            area in 1u32..=10_000,
            volume in 0.0f64..100.0,
            harvested in -100.0f64..=0.0,
        ) {
            let r = compute_recipe(
                &harvested.to_string(),
                &volume.to_string(),
                area,
                "0.028",
                "0.2",
            );
            prop_assert_eq!(r.cell_suspension_volume_ml, 0.0);
        }

        #[test]
        fn prop_media_is_budget_minus_suspension(
            area in 1u32..=10_000,
            harvested in 0.001f64..1000.0,
            volume in 0.0f64..100.0,
        ) {
            let r = compute_recipe(
                &harvested.to_string(),
                &volume.to_string(),
                area,
                "0.028",
                "0.2",
            );
            prop_assert_eq!(r.media_volume_ml, r.media_per_flask - r.cell_suspension_volume_ml);
        }

        #[test]
        fn prop_idempotent(
            area in 1u32..=10_000,
            harvested in 0.0f64..1000.0,
            volume in 0.0f64..100.0,
        ) {
            let h = harvested.to_string();
            let v = volume.to_string();
            let r1 = compute_recipe(&h, &v, area, "0.028", "0.2");
            let r2 = compute_recipe(&h, &v, area, "0.028", "0.2");
            prop_assert_eq!(r1, r2);
        }

        #[test]
        fn prop_garbage_text_never_panics(
            text in ".*",
            area in 1u32..=10_000,
        ) {
            // Text like "inf" parses as a float, so only the area is exact
            let r = compute_recipe(&text, &text, area, &text, &text);
            prop_assert_eq!(r.flask_area_cm2, area);
        }
    }
}
