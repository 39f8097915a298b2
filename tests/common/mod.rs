//! Shared testing utilities for nbsetup CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Remote URL used by most tests.
#[allow(dead_code)]
pub const ORIGIN_URL: &str = "https://github.com/alice/myproject.git";

/// Testing harness providing an isolated repository for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Initialize a git repository in the work directory with an `origin` remote.
    pub fn init_repo_with_origin(&self, url: &str) {
        let repo = git2::Repository::init(&self.work_dir).expect("Failed to init repository");
        repo.remote("origin", url).expect("Failed to add origin remote");
    }

    /// Initialize a git repository in the work directory without any remote.
    pub fn init_repo_without_origin(&self) {
        git2::Repository::init(&self.work_dir).expect("Failed to init repository");
    }

    /// Build a command for invoking the compiled `nbsetup` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nbsetup").expect("Failed to locate nbsetup binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the default configuration file in the work directory.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("nbpages.cfg")
    }

    /// Names of all entries in the work directory, sorted.
    pub fn work_dir_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Names of configuration backups in the work directory.
    pub fn backup_entries(&self) -> Vec<String> {
        self.work_dir_entries()
            .into_iter()
            .filter(|name| name.starts_with("nbpages.cfg.backup-"))
            .collect()
    }

    /// Assert that all five scaffold directories exist.
    pub fn assert_scaffold_dirs_exist(&self) {
        for name in ["notebooks", "docs", "templates", "figures", "data"] {
            assert!(self.work_dir.join(name).is_dir(), "{name} directory should exist");
        }
    }

    /// Assert that all three default template files exist.
    pub fn assert_templates_exist(&self) {
        for name in ["notebook_header.tpl", "index.md.tpl", "nbpages.tpl"] {
            assert!(
                self.work_dir.join("templates").join(name).is_file(),
                "templates/{name} should exist"
            );
        }
    }
}
