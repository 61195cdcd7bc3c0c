use chaintable::cli::run_cli;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Create and run the CLI
    run_cli()
}
