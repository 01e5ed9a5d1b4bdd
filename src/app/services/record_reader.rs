//! Delimited record reader for field-separated text sources
//!
//! Streams a text file line by line, splits each line on a configured
//! separator, and validates the field count before yielding. The iterator is
//! lazy, finite, and non-restartable: it fuses after the first error and the
//! underlying file handle is released when it is dropped, whether iteration
//! completed, stopped early, or failed.

use crate::config::SourceConfig;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::debug;

/// Reader for one delimited record source
#[derive(Debug)]
pub struct DelimitedRecordReader;

impl DelimitedRecordReader {
    /// Open a delimited source and return its record iterator.
    ///
    /// Fails with [`Error::SourceNotFound`] when the path does not resolve
    /// to a file.
    pub fn open(
        path: &Path,
        expected_fields: usize,
        separator: char,
        has_header: bool,
    ) -> Result<RecordIter> {
        if !path.is_file() {
            return Err(Error::source_not_found(path.display().to_string()));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        debug!(
            "Reading {} expecting {} fields per line (separator {:?}, header: {})",
            path.display(),
            expected_fields,
            separator,
            has_header
        );

        Ok(RecordIter {
            path: path.display().to_string(),
            lines: BufReader::new(file).lines(),
            expected_fields,
            separator,
            has_header,
            line_number: 0,
            done: false,
        })
    }

    /// Open the source described by a [`SourceConfig`] within a data directory
    pub fn open_source(data_dir: &Path, source: &SourceConfig) -> Result<RecordIter> {
        Self::open(
            &source.resolve(data_dir),
            source.field_count,
            source.separator,
            source.has_header,
        )
    }
}

/// Lazy iterator over the field tuples of one delimited source
///
/// Yields `Ok(fields)` per valid data line. Line numbers are 1-indexed and
/// count the header line. A line whose split arity mismatches the expected
/// field count yields [`Error::MalformedRecord`] naming that line, after
/// which the iterator is exhausted. The header line is arity-checked like
/// any other line but never yielded.
#[derive(Debug)]
pub struct RecordIter {
    path: String,
    lines: Lines<BufReader<File>>,
    expected_fields: usize,
    separator: char,
    has_header: bool,
    line_number: usize,
    done: bool,
}

impl Iterator for RecordIter {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(Error::io(
                        format!("Failed to read line from {}", self.path),
                        e,
                    )));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            self.line_number += 1;

            // Lines strips the newline; drop a Windows carriage return too
            let line = line.strip_suffix('\r').unwrap_or(&line);

            let fields: Vec<String> = line
                .split(self.separator)
                .map(|field| field.to_string())
                .collect();

            if fields.len() != self.expected_fields {
                self.done = true;
                return Some(Err(Error::malformed_record(
                    self.path.clone(),
                    self.line_number,
                    fields.len(),
                    self.expected_fields,
                )));
            }

            if self.has_header && self.line_number == 1 {
                continue;
            }

            return Some(Ok(fields));
        }
    }
}
