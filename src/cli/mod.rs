//! CLI subcommands — init, validate, compute, plan, flasks.

use crate::core::{format, recipe, session, types};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new session file
    Init {
        /// Directory to initialize (default: current)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Validate sembrar.yaml without computing anything
    Validate {
        /// Path to sembrar.yaml
        #[arg(short, long, default_value = "sembrar.yaml")]
        file: PathBuf,
    },

    /// Compute a single recipe from flags
    Compute {
        /// Cells harvested, in millions
        #[arg(long, default_value = "")]
        cells_harvested: String,

        /// Harvested suspension volume, in mL
        #[arg(long, default_value = "")]
        volume: String,

        /// Flask name (T25/T75/T175/T225/custom); unknown names fall back to T75
        #[arg(long, default_value = "T75")]
        flask: String,

        /// Custom flask area in cm² (with --flask custom)
        #[arg(long)]
        custom_area: Option<String>,

        /// Seeding density, M cells per cm²
        #[arg(long, default_value = "0.028")]
        cells_per_cm2: String,

        /// Media density, mL per cm²
        #[arg(long, default_value = "0.2")]
        media_per_cm2: String,

        /// Emit the full-precision result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute recipes for every plating in a session file
    Plan {
        /// Path to sembrar.yaml
        #[arg(short, long, default_value = "sembrar.yaml")]
        file: PathBuf,

        /// Target a single named plating
        #[arg(short, long)]
        plating: Option<String>,

        /// Emit full-precision results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the flask area table
    Flasks,
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Init { path } => cmd_init(&path),
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Compute {
            cells_harvested,
            volume,
            flask,
            custom_area,
            cells_per_cm2,
            media_per_cm2,
            json,
        } => cmd_compute(
            recipe::RecipeInput {
                cells_harvested,
                suspension_volume: volume,
                cells_per_cm2,
                media_per_cm2,
                flask: types::Flask::parse_or_default(&flask),
                custom_area,
            },
            json,
        ),
        Commands::Plan {
            file,
            plating,
            json,
        } => cmd_plan(&file, plating.as_deref(), json),
        Commands::Flasks => cmd_flasks(),
    }
}

fn cmd_init(path: &Path) -> Result<(), String> {
    let session_path = path.join("sembrar.yaml");
    if session_path.exists() {
        return Err(format!("{} already exists", session_path.display()));
    }

    std::fs::create_dir_all(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))?;

    let template = r#"version: "1.0"
name: my-session
description: "Managed by sembrar"

platings:
  example:
    flask: T75
    cells_harvested: "10"
    suspension_volume: "5"
    cells_per_cm2: "0.028"
    media_per_cm2: "0.2"
"#;
    std::fs::write(&session_path, template)
        .map_err(|e| format!("cannot write {}: {}", session_path.display(), e))?;

    println!("Initialized sembrar session at {}", path.display());
    println!("  Created: {}", session_path.display());
    Ok(())
}

fn cmd_validate(file: &Path) -> Result<(), String> {
    let session = session::load_session(file)?;
    let errors = session::validate_session(&session);

    if errors.is_empty() {
        println!(
            "OK: {} ({} plating(s))",
            session.name,
            session.platings.len()
        );
        Ok(())
    } else {
        for e in &errors {
            eprintln!("  ERROR: {}", e);
        }
        Err(format!("{} validation error(s)", errors.len()))
    }
}

fn cmd_compute(input: recipe::RecipeInput, json: bool) -> Result<(), String> {
    let result = recipe::compute(&input);

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("JSON encode error: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    println!("Flask: {} ({} cm²)", input.flask, result.flask_area_cm2);
    println!();
    print_recipe(&result);
    Ok(())
}

fn cmd_plan(file: &Path, plating_filter: Option<&str>, json: bool) -> Result<(), String> {
    let session = session::load_session(file)?;
    let recipes = session::plan_session(&session, plating_filter)?;

    if json {
        let out = serde_json::to_string_pretty(&recipes)
            .map_err(|e| format!("JSON encode error: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    println!(
        "Planning: {} ({} plating(s))",
        session.name,
        recipes.len()
    );

    for (id, r) in &recipes {
        println!();
        println!("{}: ({} cm²)", id, r.flask_area_cm2);
        print_recipe(r);
    }

    println!();
    println!("Plan: {} plating(s) computed.", recipes.len());
    Ok(())
}

fn cmd_flasks() -> Result<(), String> {
    println!("Flask   Area (cm²)");
    for flask in types::Flask::STANDARD {
        // Standard flasks always carry an area
        if let Some(area) = flask.standard_area_cm2() {
            let name = flask.to_string();
            println!("{name:<7} {area}");
        }
    }
    println!("{:<7} caller-supplied (fallback {})", "custom", types::DEFAULT_AREA_CM2);
    Ok(())
}

/// Display seeding densities and the recipe to stdout.
fn print_recipe(r: &types::Recipe) {
    println!(
        "  Seeding: {} M cells/flask, {} mL media/flask",
        format::one_decimal(r.cells_per_flask),
        format::one_decimal(r.media_per_flask)
    );
    println!("  Recipe:");
    println!(
        "    Cell suspension  {:>6} mL",
        format::one_decimal(r.cell_suspension_volume_ml)
    );
    println!(
        "    Media            {:>6} mL",
        format::display_media(r.media_volume_ml)
    );
}
