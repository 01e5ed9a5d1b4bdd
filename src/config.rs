//! Configuration management and validation.
//!
//! Provides configuration structures describing the four record sources
//! (file name, expected arity, field separator, header presence) and the
//! data directory they live in. Defaults match the institutional file
//! layout; a TOML file can override any of it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::source_files;

/// Shape of a single delimited record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File name within the data directory
    pub file_name: String,

    /// Expected number of fields per line
    pub field_count: usize,

    /// Single-character field separator
    pub separator: char,

    /// Whether the first line is a header to consume without yielding
    pub has_header: bool,
}

impl SourceConfig {
    /// Create a new source configuration
    pub fn new(file_name: impl Into<String>, field_count: usize, separator: char, has_header: bool) -> Self {
        Self {
            file_name: file_name.into(),
            field_count,
            separator,
            has_header,
        }
    }

    /// Resolve this source's path within a data directory
    pub fn resolve(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.file_name)
    }
}

/// Complete configuration for one registry build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory containing the four record source files
    pub data_dir: PathBuf,

    /// Student records: cwid, name, major
    pub students: SourceConfig,

    /// Instructor records: cwid, name, department
    pub instructors: SourceConfig,

    /// Grade records: student cwid, course, letter grade, instructor cwid
    pub grades: SourceConfig,

    /// Major requirement records: department, kind, course
    pub majors: SourceConfig,
}

impl RegistryConfig {
    /// Build the default configuration for a data directory.
    ///
    /// Field separators and header presence follow the institutional file
    /// layout: students use `;`, instructors and grades use `|`, majors are
    /// tab-separated, and every file carries a header line.
    pub fn for_directory(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            students: SourceConfig::new(source_files::STUDENTS, 3, ';', true),
            instructors: SourceConfig::new(source_files::INSTRUCTORS, 3, '|', true),
            grades: SourceConfig::new(source_files::GRADES, 4, '|', true),
            majors: SourceConfig::new(source_files::MAJORS, 3, '\t', true),
        }
    }

    /// Load configuration with layering: TOML file when present, data
    /// directory override from the CLI applied on top.
    pub fn load_layered(data_dir: PathBuf, config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                info!("Using config file: {}", path.display());
                Self::from_file(path)?
            }
            None => {
                debug!("No config file given, using default source layout");
                Self::for_directory(data_dir.clone())
            }
        };

        // CLI data directory wins over whatever the file says
        config.data_dir = data_dir;
        Ok(config)
    }

    /// Parse a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Validate the configuration before a build
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data directory '{}' is not a directory",
                self.data_dir.display()
            )));
        }

        for source in [&self.students, &self.instructors, &self.grades, &self.majors] {
            if source.file_name.trim().is_empty() {
                return Err(Error::configuration("Source file name cannot be empty".to_string()));
            }
            if source.field_count == 0 {
                return Err(Error::configuration(format!(
                    "Source '{}' must expect at least one field",
                    source.file_name
                )));
            }
        }

        Ok(())
    }
}
