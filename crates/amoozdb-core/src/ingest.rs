use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::types::IndexedSegment;

/// Turns a tree of `.txt` files into unsaved segments, one per paragraph.
#[derive(Debug, Clone, Default)]
pub struct SegmentSource {
    limit: Option<usize>,
}

impl SegmentSource {
    pub fn new() -> Self { Self::default() }

    /// Reads at most `limit` files.
    pub fn with_limit(limit: usize) -> Self { Self { limit: Some(limit) } }

    pub fn read_directory(&self, data_dir: &Path) -> Result<Vec<IndexedSegment>> {
        let mut files = list_txt_files(data_dir);
        if files.is_empty() {
            info!(dir = %data_dir.display(), "no .txt files found");
            return Ok(vec![]);
        }
        if let Some(limit) = self.limit {
            files.truncate(limit);
        }
        let mut segments = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            debug!(file = %file_path.display(), n = file_index + 1, total = files.len(), "reading");
            let content = read_file_content(file_path)?;
            segments.extend(split_paragraphs(&content).into_iter().map(IndexedSegment::new));
        }
        info!(files = files.len(), segments = segments.len(), "read segments");
        Ok(segments)
    }
}

/// Blank-line separated paragraphs, trimmed, empty ones dropped.
pub fn split_paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_file_content(file_path: &Path) -> Result<String> {
    match fs::read_to_string(file_path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
    }
}

fn list_txt_files(root: &Path) -> Vec<PathBuf> {
    let mut txt_files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("txt"))
        .map(|e| e.path().to_path_buf())
        .collect();
    txt_files.sort();
    txt_files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_are_trimmed_and_blank_ones_dropped() {
        let parts = split_paragraphs("  اول  \r\n\r\n\n\nدوم\nادامه\n\n   \n");
        assert_eq!(parts, vec!["اول".to_string(), "دوم\nادامه".to_string()]);
    }
}
