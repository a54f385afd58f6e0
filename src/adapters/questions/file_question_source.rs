//! Filesystem question source reading the questionnaire workbook.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::domain::assessment::QuestionCatalog;
use crate::ports::{QuestionSource, TabularParser};

/// Loads questions from a spreadsheet or CSV file on every call.
///
/// The file is re-read each time so edits to the questionnaire show up
/// without a restart. Rows without any values are ignored. Failures are
/// logged and produce an empty catalog.
pub struct FileQuestionSource {
    path: PathBuf,
    parser: Arc<dyn TabularParser>,
}

impl FileQuestionSource {
    pub fn new(path: impl AsRef<Path>, parser: Arc<dyn TabularParser>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            parser,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn load(&self) -> QuestionCatalog {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Question file unavailable");
                return QuestionCatalog::empty();
            }
        };

        match self.parser.parse(&self.file_name(), bytes).await {
            Ok(data) => {
                let rows = data
                    .with_trimmed_headers()
                    .rows
                    .into_iter()
                    .filter(|row| row.values().any(|value| !value.is_null()))
                    .collect();
                let catalog = QuestionCatalog::from_records(rows);
                tracing::debug!(path = %self.path.display(), count = catalog.len(), "Loaded questions");
                catalog
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to parse question file");
                QuestionCatalog::empty()
            }
        }
    }
}
