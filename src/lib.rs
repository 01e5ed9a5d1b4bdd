//! Academic Registry Library
//!
//! A Rust library for building an in-memory academic registry from flat,
//! field-delimited record files (students, instructors, grades, major
//! requirements) and deriving per-entity summary views.
//!
//! This library provides tools for:
//! - Streaming delimited text sources with per-line arity validation
//! - Building student/instructor/department maps with referential integrity
//!   checks between grade records and known identities
//! - Computing GPA from letter grades over a fixed grade-point table
//! - Reconciling each student's completed courses against their major's
//!   required and elective course sets
//! - Projecting deterministic, display-ready summary rows for rendering

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod reconciler;
        pub mod record_reader;
        pub mod registry_builder;
        pub mod summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Department, Instructor, Student};
pub use app::services::record_reader::DelimitedRecordReader;
pub use app::services::registry_builder::{Registry, RegistryBuilder};
pub use app::services::summary::SummaryProjector;
pub use config::RegistryConfig;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for registry construction and reporting
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required input source does not resolve to a readable file
    #[error("Source not found: {path}")]
    SourceNotFound { path: String },

    /// A line's field count does not match the expected arity for its source
    #[error("'{path}' has {found} fields on line {line} but expected {expected}")]
    MalformedRecord {
        path: String,
        line: usize,
        found: usize,
        expected: usize,
    },

    /// A grade record references a student CWID that was never ingested
    #[error("A grade for an unknown student with cwid: {cwid}")]
    UnknownStudent { cwid: String },

    /// A grade record references an instructor CWID that was never ingested
    #[error("A grade for an unknown instructor with cwid: {cwid}")]
    UnknownInstructor { cwid: String },

    /// A student's major has no matching majors-file entry at reconciliation time
    #[error("Student {cwid} has major '{major}' with no matching majors entry")]
    UnknownDepartment { major: String, cwid: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Registry construction error
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a source not found error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a malformed record error naming the offending line
    pub fn malformed_record(
        path: impl Into<String>,
        line: usize,
        found: usize,
        expected: usize,
    ) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            line,
            found,
            expected,
        }
    }

    /// Create an unknown student error
    pub fn unknown_student(cwid: impl Into<String>) -> Self {
        Self::UnknownStudent { cwid: cwid.into() }
    }

    /// Create an unknown instructor error
    pub fn unknown_instructor(cwid: impl Into<String>) -> Self {
        Self::UnknownInstructor { cwid: cwid.into() }
    }

    /// Create an unknown department error
    pub fn unknown_department(major: impl Into<String>, cwid: impl Into<String>) -> Self {
        Self::UnknownDepartment {
            major: major.into(),
            cwid: cwid.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a registry construction error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
