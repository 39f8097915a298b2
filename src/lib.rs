//! nbsetup: bootstrap directories, templates, and configuration for an
//! nbpages publishing workflow.
//!
//! One setup routine, three steps in strict sequence: resolve the `origin`
//! remote into hosting identifiers, write `nbpages.cfg` (backing up any
//! existing file), then idempotently create the scaffold directories,
//! default templates, and landing page.

pub mod config;
pub mod error;
pub mod origin;
pub mod scaffold;
pub mod templates;

use std::path::{Path, PathBuf};

pub use config::{CONFIG_FILE, PagesConfig};
pub use error::AppError;
pub use origin::RepoOrigin;

/// Run the setup routine in the current directory.
pub fn setup(config_file: &Path) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    setup_at(&root, config_file)
}

/// Run the setup routine against an explicit repository root.
///
/// A relative `config_file` is resolved against `root`. Any failure aborts
/// the remaining steps; work already on disk is kept (no rollback).
pub fn setup_at(root: &Path, config_file: &Path) -> Result<(), AppError> {
    let origin = origin::resolve(root)?;
    let config = PagesConfig::from_origin(&origin);

    let config_path: PathBuf = if config_file.is_absolute() {
        config_file.to_path_buf()
    } else {
        root.join(config_file)
    };
    println!("- creating {} from the git origin remote", config_path.display());
    config.write(&config_path)?;

    scaffold::build(root, &config)?;
    Ok(())
}
