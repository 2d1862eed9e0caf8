//! Exporting the displayed output as a downloadable file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Filename and MIME type used for exported output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub filename: String,
    pub mime_type: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            filename: "transformed-output.html".to_string(),
            mime_type: "text/html".to_string(),
        }
    }
}

/// Output ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub filename: String,
    pub mime_type: String,
    pub contents: String,
}

impl DownloadArtifact {
    pub fn new(contents: impl Into<String>, config: &DownloadConfig) -> Self {
        Self {
            filename: config.filename.clone(),
            mime_type: config.mime_type.clone(),
            contents: contents.into(),
        }
    }

    /// Write the artifact into `dir` under its filename, returning the full path
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.contents)?;
        Ok(path)
    }
}
