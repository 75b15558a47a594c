use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifies which check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckTag {
    BadLdflags,
    ValidationFailure,
    BadPaths,
    BadLibdir,
    UnexpectedVersion,
}

impl fmt::Display for CheckTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadLdflags => "bad-ldflags",
            Self::ValidationFailure => "validation-failure",
            Self::BadPaths => "bad-paths",
            Self::BadLibdir => "bad-libdir",
            Self::UnexpectedVersion => "unexpected-version",
        };
        write!(f, "{name}")
    }
}

/// A single problem discovered in the staged tree.
///
/// Paths are always relative to the staging root so that findings stay
/// meaningful after the root itself has been moved or merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub tag: CheckTag,
    pub message: String,
    /// Affected files, in discovery order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,
    /// Extra key/value context, in insertion order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub details: IndexMap<String, String>,
}

impl Finding {
    #[must_use]
    pub fn new(tag: CheckTag, message: impl Into<String>) -> Self {
        Self {
            tag,
            message: message.into(),
            files: Vec::new(),
            details: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.files.push(file.into());
        self
    }

    #[must_use]
    pub fn with_files(mut self, files: impl IntoIterator<Item = PathBuf>) -> Self {
        self.files.extend(files);
        self
    }

    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Everything one audit run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The staging root the audit ran against.
    pub root: PathBuf,
    pub findings: Vec<Finding>,
}

impl Report {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings produced by the given check.
    pub fn with_tag(&self, tag: CheckTag) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |finding| finding.tag == tag)
    }

    /// Turns a root-relative finding path back into an absolute one.
    #[must_use]
    pub fn absolute(&self, file: &Path) -> PathBuf {
        self.root.join(file)
    }
}
