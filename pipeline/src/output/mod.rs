//! Writes the chart payload and renders the operator's next steps.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OutputResult;
use crate::models::OutputDocument;

/// Port suggested for the static file server.
pub const SERVE_PORT: u16 = 8000;

/// Serialize a document as 2-space indented JSON.
pub fn to_json(doc: &OutputDocument) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write `doc` to `path`, creating parent directories.
pub fn write_document(doc: &OutputDocument, path: &Path) -> OutputResult<PathBuf> {
    let json = to_json(doc)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(path.to_path_buf())
}

/// Instructions printed after a successful run.
pub fn next_steps(out_path: &Path) -> String {
    let web_dir = out_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    format!(
        "Dáta pre vizualizáciu uložené do: {}\n\
         Ďalší krok:\n  \
         1) prejdite do priečinka '{}' (cd {})\n  \
         2) spustite jednoduchý server: python -m http.server {}\n  \
         3) otvorte prehliadač na adrese http://localhost:{}/",
        out_path.display(),
        web_dir,
        web_dir,
        SERVE_PORT,
        SERVE_PORT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("web").join("nested").join("data.json");

        let written = write_document(&OutputDocument::default(), &path).unwrap();

        assert_eq!(written, path);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"industries\": []"));
    }

    #[test]
    fn test_next_steps_mentions_directory_and_port() {
        let text = next_steps(Path::new("web/data.json"));
        assert!(text.contains("web/data.json"));
        assert!(text.contains("cd web"));
        assert!(text.contains("http.server 8000"));
        assert!(text.contains("http://localhost:8000/"));
    }

    #[test]
    fn test_next_steps_without_parent() {
        let text = next_steps(Path::new("data.json"));
        assert!(text.contains("cd ."));
    }
}
