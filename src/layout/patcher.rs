use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    Inserted,
    AlreadyPresent,
    MarkerMissing,
    Removed,
    NotPresent,
    LayoutMissing,
}

/// Toggles a single import line in a layout template.
#[derive(Debug, Clone)]
pub struct LayoutPatcher {
    path: PathBuf,
    marker: String,
    import_line: String,
}

impl LayoutPatcher {
    pub fn new(path: PathBuf, marker: impl Into<String>, import_line: impl Into<String>) -> Self {
        Self {
            path,
            marker: marker.into(),
            import_line: import_line.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add_css_imports(&self) -> AppResult<PatchOutcome> {
        let Some(source) = self.read()? else {
            return Ok(PatchOutcome::LayoutMissing);
        };

        if source.contains(&self.import_line) {
            return Ok(PatchOutcome::AlreadyPresent);
        }

        let Some(patched) = insert_import(&source, &self.marker, &self.import_line) else {
            return Ok(PatchOutcome::MarkerMissing);
        };

        fs::write(&self.path, patched)?;
        tracing::debug!(path = %self.path.display(), "inserted css import");
        Ok(PatchOutcome::Inserted)
    }

    pub fn remove_css_imports(&self) -> AppResult<PatchOutcome> {
        let Some(source) = self.read()? else {
            return Ok(PatchOutcome::LayoutMissing);
        };

        let present = source.contains(&self.import_line);
        fs::write(&self.path, strip_import(&source, &self.import_line))?;
        tracing::debug!(path = %self.path.display(), present, "stripped css import");

        Ok(if present {
            PatchOutcome::Removed
        } else {
            PatchOutcome::NotPresent
        })
    }

    fn read(&self) -> AppResult<Option<String>> {
        if !self.path.is_file() {
            tracing::debug!(path = %self.path.display(), "layout file missing");
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&self.path)?))
    }
}

/// Inserts `import` on its own line right after the first line containing
/// `marker`, indented like the marker. `None` when the marker is absent.
pub fn insert_import(source: &str, marker: &str, import: &str) -> Option<String> {
    let marker_at = source.find(marker)?;
    let line_start = source[..marker_at].rfind('\n').map_or(0, |i| i + 1);
    let indent: String = source[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    let after_marker = marker_at + marker.len();
    let (line_end, newline) = match source[after_marker..].find('\n') {
        Some(offset) => {
            let end = after_marker + offset;
            if source[..end].ends_with('\r') {
                (end - 1, "\r\n")
            } else {
                (end, "\n")
            }
        }
        None => (source.len(), "\n"),
    };

    let mut patched = String::with_capacity(source.len() + indent.len() + import.len() + 2);
    patched.push_str(&source[..line_end]);
    patched.push_str(newline);
    patched.push_str(&indent);
    patched.push_str(import);
    patched.push_str(&source[line_end..]);
    Some(patched)
}

/// Drops every line consisting solely of `import`, then any inline leftovers.
/// A dropped final line without a terminator takes the preceding newline
/// with it, undoing `insert_import` on a marker at end of file.
pub fn strip_import(source: &str, import: &str) -> String {
    let mut kept = String::with_capacity(source.len());
    for line in source.split_inclusive('\n') {
        if line.trim() != import {
            kept.push_str(line);
            continue;
        }

        if !line.ends_with('\n') {
            if kept.ends_with("\r\n") {
                kept.truncate(kept.len() - 2);
            } else if kept.ends_with('\n') {
                kept.pop();
            }
        }
    }

    kept.replace(import, "")
}
