//! Sembrar — cell-plating recipe calculator.
//!
//! Seeding densities in, plating recipe out. Pure arithmetic core,
//! YAML session files, table or JSON output.

pub mod cli;
pub mod core;
