//! Embedded default template bodies for the scaffold.

use include_dir::{Dir, DirEntry, include_dir};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/templates");

/// A default template bundled into the binary.
///
/// Bodies are opaque payloads here; nothing in this crate renders them.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// File name under the templates directory.
    pub name: String,
    /// Template body as UTF-8 text.
    pub content: &'static str,
}

/// Returns the bundled templates, sorted by file name.
pub fn template_files() -> Vec<TemplateFile> {
    let mut files = Vec::new();
    for entry in TEMPLATE_DIR.entries() {
        if let DirEntry::File(file) = entry
            && let Some(content) = file.contents_utf8()
        {
            files.push(TemplateFile {
                name: file.path().to_string_lossy().to_string(),
                content,
            });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}
