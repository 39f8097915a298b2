//! Idempotent creation of the project directories, templates, and landing page.

use std::fs;
use std::path::Path;

use crate::config::PagesConfig;
use crate::error::AppError;
use crate::templates;

/// Create the scaffold described by `config` beneath `root`.
///
/// Directories come first; the templates and the landing page live inside
/// them. Fails fast on the first error, leaving earlier steps on disk.
pub fn build(root: &Path, config: &PagesConfig) -> Result<(), AppError> {
    let ordered_dirs = [
        &config.src_dir,
        &config.dst_dir,
        &config.templates_dir,
        &config.figures_dir,
        &config.data_dir,
    ];
    for dir in ordered_dirs {
        ensure_dir(&root.join(dir))?;
    }

    let templates_dir = root.join(&config.templates_dir);
    for template in templates::template_files() {
        write_template_if_needed(&templates_dir.join(&template.name), template.content)?;
    }

    seed_landing_page(&root.join(&config.dst_dir), &config.host_repo)?;
    Ok(())
}

/// Create a directory when absent and verify it exists afterwards.
///
/// An existing entry is a no-op, with no check that it is actually a
/// directory rather than a file.
fn ensure_dir(path: &Path) -> Result<(), AppError> {
    if !path.exists() {
        println!("- creating {} directory", path.display());
        fs::create_dir(path)?;
    } else {
        println!("- {} directory already exists", path.display());
    }

    if !path.exists() {
        return Err(AppError::DirectoryCreationFailed(path.display().to_string()));
    }
    Ok(())
}

/// Write the default template body only when no file exists at `path`.
///
/// Existing files are never diffed against the default or upgraded.
fn write_template_if_needed(path: &Path, content: &str) -> Result<(), AppError> {
    if !path.is_file() {
        println!("- writing {}", path.display());
        fs::write(path, content)?;
    } else {
        println!("- {} already exists", path.display());
    }
    Ok(())
}

/// Seed `index.md` in the destination directory unless one is already there.
fn seed_landing_page(dst_dir: &Path, host_repo: &str) -> Result<(), AppError> {
    let index = dst_dir.join("index.md");
    if !index.exists() {
        println!("- writing index.md to {}", dst_dir.display());
        fs::write(index, format!("# {host_repo}\n"))?;
    }
    Ok(())
}
