use std::path::PathBuf;

use clap::Parser;
use nbsetup::AppError;

#[derive(Parser)]
#[command(name = "nbsetup")]
#[command(version)]
#[command(
    about = "Bootstrap directories, templates, and configuration for an nbpages publishing workflow",
    long_about = None
)]
struct Cli {
    /// Configuration file to write; an existing file is kept as a timestamped backup
    #[arg(default_value = nbsetup::CONFIG_FILE)]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = nbsetup::setup(&cli.config);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
