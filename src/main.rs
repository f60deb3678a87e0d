//! Sembrar CLI — cell-plating recipe calculator.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sembrar",
    version,
    about = "Cell-plating recipe calculator — seeding densities, flask tables, session planning"
)]
struct Cli {
    #[command(subcommand)]
    command: sembrar::cli::Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = sembrar::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
