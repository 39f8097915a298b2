//! The `nbpages.cfg` configuration file: contents, backup, and round-trip.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::origin::RepoOrigin;

/// Conventional configuration file name.
pub const CONFIG_FILE: &str = "nbpages.cfg";

/// Default directory layout recorded in the configuration.
pub const TEMPLATES_DIR: &str = "templates";
pub const FIGURES_DIR: &str = "figures";
pub const DATA_DIR: &str = "data";
pub const SRC_DIR: &str = "notebooks";
pub const DST_DIR: &str = "docs";

/// Flat nine-key configuration persisted under the `[NBPAGES]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesConfig {
    pub remote_url: String,
    pub host_user: String,
    pub host_repo: String,
    pub pages_url: String,
    pub templates_dir: String,
    pub figures_dir: String,
    pub data_dir: String,
    pub src_dir: String,
    pub dst_dir: String,
}

/// On-disk document shape: a single fixed section holding the flat map.
#[derive(Serialize, Deserialize)]
struct ConfigDocument {
    #[serde(rename = "NBPAGES")]
    nbpages: PagesConfig,
}

impl PagesConfig {
    /// Combine resolved origin values with the fixed default directory names.
    pub fn from_origin(origin: &RepoOrigin) -> Self {
        Self {
            remote_url: origin.remote_url.clone(),
            host_user: origin.host_user.clone(),
            host_repo: origin.host_repo.clone(),
            pages_url: origin.pages_url(),
            templates_dir: TEMPLATES_DIR.to_string(),
            figures_dir: FIGURES_DIR.to_string(),
            data_dir: DATA_DIR.to_string(),
            src_dir: SRC_DIR.to_string(),
            dst_dir: DST_DIR.to_string(),
        }
    }

    /// Write the configuration to `path`, preserving any prior file as a
    /// timestamped backup.
    ///
    /// The backup name carries second granularity; two writes within the same
    /// second overwrite the same backup. That is an accepted limitation of
    /// this one-shot setup tool.
    pub fn write(&self, path: &Path) -> Result<(), AppError> {
        if path.is_file() {
            let backup = backup_path(path);
            println!("- backing up {} to {}", path.display(), backup.display());
            fs::copy(path, &backup)?;
        }

        let document = ConfigDocument { nbpages: self.clone() };
        let rendered = toml::to_string(&document)?;
        println!("- writing {}", path.display());
        fs::write(path, rendered)?;
        Ok(())
    }

    /// Read a configuration previously written by [`PagesConfig::write`].
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let document: ConfigDocument = toml::from_str(&raw)?;
        Ok(document.nbpages)
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%dT%H%M%S");
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".backup-{stamp}"));
    PathBuf::from(name)
}
