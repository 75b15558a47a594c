use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{QueryError, Result};
use crate::traits::{PkgConfigClient, Validation};

/// Scripted stand-in for the host pkg-config tool.
pub struct MockPkgConfig {
    available: bool,
    variables: HashMap<(PathBuf, String), String>,
    versions: HashMap<PathBuf, String>,
    validation: Validation,
    failing_files: HashSet<PathBuf>,
    recorded_validations: Mutex<Vec<(Vec<PathBuf>, Vec<PathBuf>, u32)>>,
}

impl MockPkgConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            variables: HashMap::new(),
            versions: HashMap::new(),
            validation: Validation::Passed,
            failing_files: HashSet::new(),
            recorded_validations: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_variable(
        mut self,
        file: impl Into<PathBuf>,
        name: &str,
        value: &str,
    ) -> Self {
        self.variables
            .insert((file.into(), name.to_string()), value.to_string());
        self
    }

    #[must_use]
    pub fn with_version(mut self, file: impl Into<PathBuf>, version: &str) -> Self {
        self.versions.insert(file.into(), version.to_string());
        self
    }

    #[must_use]
    pub fn with_validation_failure(mut self, diagnostics: &str) -> Self {
        self.validation = Validation::Rejected {
            diagnostics: diagnostics.to_string(),
        };
        self
    }

    /// Makes every query about the given file fail.
    #[must_use]
    pub fn with_query_failure(mut self, file: impl Into<PathBuf>) -> Self {
        self.failing_files.insert(file.into());
        self
    }

    /// # Panics
    ///
    /// Panics when the recording mutex is poisoned.
    #[must_use]
    pub fn validate_calls(&self) -> usize {
        self.recorded_validations.lock().expect("lock poisoned").len()
    }

    /// The arguments of the most recent `validate` call.
    ///
    /// # Panics
    ///
    /// Panics when the recording mutex is poisoned.
    #[must_use]
    pub fn last_validation(&self) -> Option<(Vec<PathBuf>, Vec<PathBuf>, u32)> {
        self.recorded_validations
            .lock()
            .expect("lock poisoned")
            .last()
            .cloned()
    }

    fn scripted_failure(&self, file: &Path) -> Result<()> {
        if self.failing_files.contains(file) {
            return Err(QueryError::Spawn {
                program: "mock-pkg-config".to_string(),
                source: std::io::Error::other("scripted failure"),
            });
        }
        Ok(())
    }
}

impl Default for MockPkgConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PkgConfigClient for MockPkgConfig {
    fn is_available(&self) -> bool {
        self.available
    }

    fn validate(
        &self,
        files: &[PathBuf],
        search_path: &[PathBuf],
        max_depth: u32,
    ) -> Result<Validation> {
        self.recorded_validations
            .lock()
            .expect("lock poisoned")
            .push((files.to_vec(), search_path.to_vec(), max_depth));
        Ok(self.validation.clone())
    }

    fn variable(&self, file: &Path, name: &str) -> Result<String> {
        self.scripted_failure(file)?;
        Ok(self
            .variables
            .get(&(file.to_path_buf(), name.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn modversion(&self, file: &Path) -> Result<String> {
        self.scripted_failure(file)?;
        Ok(self.versions.get(file).cloned().unwrap_or_default())
    }
}

/// Writes a `.pc` fixture at `<root>/usr/<dir>/pkgconfig/<name>`,
/// creating the directories on the way.
///
/// # Panics
///
/// Panics when the fixture cannot be written.
pub fn write_pc_file(root: &Path, dir: &str, name: &str, content: &str) {
    let directory = root.join("usr").join(dir).join("pkgconfig");
    fs::create_dir_all(&directory).expect("should create fixture directories");
    fs::write(directory.join(name), content).expect("should write fixture file");
}
