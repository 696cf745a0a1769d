use crate::error::{GridcalcError, Result};
use crate::storage::{parse_sheet, write_sheet};
use gridcalc_engine::engine::Sheet;
use std::path::{Path, PathBuf};

/// UI-agnostic document state: a sheet plus its file binding.
pub struct Document {
    pub sheet: Sheet,
    /// Path the sheet was loaded from, if any.
    pub file_path: Option<PathBuf>,
}

impl Document {
    /// Create an empty document.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Document {
            sheet: Sheet::new(),
            file_path: None,
        }
    }

    /// Load a sheet file into a fresh document.
    pub fn load(path: &Path) -> Result<Self> {
        let sheet = parse_sheet(path)?;
        Ok(Document {
            sheet,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Evaluate every cell once, in row-major order. Safe to call again;
    /// results are cached per cell and never recomputed.
    pub fn evaluate(&self) {
        self.sheet.evaluate_all();
    }

    /// Write the sheet to a file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_sheet(path, &self.sheet)
    }

    /// Write the sheet back to the path it was loaded from.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.file_path else {
            return Err(GridcalcError::NoFilePath);
        };
        self.write_to(path)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridcalcError;

    #[test]
    fn test_save_without_path_fails() {
        let doc = Document::new();
        assert!(matches!(doc.save(), Err(GridcalcError::NoFilePath)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Document::load(Path::new("/nonexistent/gridcalc_input.txt"));
        assert!(matches!(result, Err(GridcalcError::Io(_))));
    }
}
