//! Upload staging buffer for images attached to a new issue report.
//!
//! Each selection replaces the staged set wholesale. A selection with more than
//! [`MAX_STAGED_FILES`] entries, or with any file above [`MAX_FILE_SIZE_BYTES`],
//! is rejected and the previously staged files are kept.

use crate::constants::{
    ERROR_FILE_TOO_LARGE, ERROR_TOO_MANY_FILES, MAX_FILE_SIZE_BYTES, MAX_STAGED_FILES, TITLE_FILE_TOO_LARGE,
    TITLE_FILE_UNREADABLE, TITLE_TOO_MANY_FILES,
};
use std::path::{Path, PathBuf};

/// A file selected by the user, held until the report is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{count} files selected, at most {max} are allowed")]
    TooManyFiles { count: usize, max: usize },

    #[error("'{name}' is {size} bytes, the limit is {max} bytes")]
    FileTooLarge { name: String, size: u64, max: u64 },

    #[error("cannot read '{path}': {reason}")]
    Unreadable { path: String, reason: String },
}

impl UploadError {
    /// Title of the notification shown for this error
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            UploadError::TooManyFiles { .. } => TITLE_TOO_MANY_FILES,
            UploadError::FileTooLarge { .. } => TITLE_FILE_TOO_LARGE,
            UploadError::Unreadable { .. } => TITLE_FILE_UNREADABLE,
        }
    }

    /// Body of the notification shown for this error
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            UploadError::TooManyFiles { .. } => ERROR_TOO_MANY_FILES.to_string(),
            UploadError::FileTooLarge { .. } => ERROR_FILE_TOO_LARGE.to_string(),
            UploadError::Unreadable { .. } => self.to_string(),
        }
    }
}

impl StagedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
        }
    }

    /// Resolve a path on disk into a staged file using its metadata
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let unreadable = |reason: String| UploadError::Unreadable {
            path: path.display().to_string(),
            reason,
        };
        let metadata = std::fs::metadata(path).map_err(|e| unreadable(e.to_string()))?;
        if !metadata.is_file() {
            return Err(unreadable("not a regular file".to_string()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| unreadable("path has no file name".to_string()))?;
        Ok(Self::new(name, metadata.len(), path))
    }

    /// Size in MiB with two decimals, e.g. "1.50 MB"
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Ordered, capped list of files waiting to be submitted
#[derive(Debug, Clone, Default)]
pub struct UploadStagingBuffer {
    files: Vec<StagedFile>,
}

impl UploadStagingBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the staged files with `selection`.
    ///
    /// On error the buffer is left exactly as it was.
    pub fn stage(&mut self, selection: Vec<StagedFile>) -> Result<(), UploadError> {
        check_selection(&selection)?;
        self.files = selection;
        Ok(())
    }

    /// Resolve `paths` and stage them; nothing changes if any path is unreadable
    pub fn stage_paths(&mut self, paths: &[PathBuf]) -> Result<(), UploadError> {
        if paths.len() > MAX_STAGED_FILES {
            return Err(UploadError::TooManyFiles {
                count: paths.len(),
                max: MAX_STAGED_FILES,
            });
        }
        let selection = paths
            .iter()
            .map(|path| StagedFile::from_path(path))
            .collect::<Result<Vec<_>, _>>()?;
        self.stage(selection)
    }

    /// Remove the entry at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Option<StagedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    #[must_use]
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Counter line such as "3/10 images uploaded"; `None` hides the list
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.files.is_empty() {
            None
        } else {
            Some(format!("{}/{} images uploaded", self.files.len(), MAX_STAGED_FILES))
        }
    }

    /// One display line per staged file: name and size
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|file| format!("{}  {}", file.name, file.size_label()))
            .collect()
    }
}

fn check_selection(selection: &[StagedFile]) -> Result<(), UploadError> {
    if selection.len() > MAX_STAGED_FILES {
        return Err(UploadError::TooManyFiles {
            count: selection.len(),
            max: MAX_STAGED_FILES,
        });
    }
    if let Some(file) = selection.iter().find(|file| file.size > MAX_FILE_SIZE_BYTES) {
        return Err(UploadError::FileTooLarge {
            name: file.name.clone(),
            size: file.size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }
    Ok(())
}

/// Split user input into paths: one per line or comma-separated, blanks dropped
#[must_use]
pub fn parse_path_list(input: &str) -> Vec<PathBuf> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}
