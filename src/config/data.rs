//! Data file configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locations of the questionnaire and frontend assets
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Questionnaire workbook (xlsx, xls or csv)
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,

    /// Directory holding `index.html` and `Script.js`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl DataConfig {
    /// Validate data configuration
    ///
    /// Files are not required to exist; a missing questionnaire is logged
    /// per request and yields an empty catalog.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.questions_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.questions_path"));
        }
        if self.static_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.static_dir"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_questions_path() -> PathBuf {
    PathBuf::from("data/ONBOARDING_QUE.xlsx")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(".")
}
