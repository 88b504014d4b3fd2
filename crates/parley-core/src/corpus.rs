//! CSV-backed corpus stores.
//!
//! Files are comma-delimited with a header row that is skipped. Columns are
//! positional: intent and classifier corpora hold `[query_text, label]`, the
//! question-answering corpus holds `[index, question, answer]`. Nothing here
//! caches: every `load` reads the file again, so appends are visible to the
//! next reader immediately.
//!
//! Appends go after the last existing row. Rows edited by hand are read
//! verbatim, but a file whose columns were reordered will be misread.
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::traits::CorpusSource;
use crate::types::{LabeledText, QaPair};

/// Read-only `[query_text, label]` corpus.
#[derive(Debug, Clone)]
pub struct CsvCorpus {
    path: PathBuf,
}

impl CsvCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for CsvCorpus {
    fn load(&self) -> Result<Vec<LabeledText>> {
        let rows = read_rows(&self.path, 2)?;
        debug!(path = %self.path.display(), rows = rows.len(), "loaded labeled corpus");
        Ok(rows.into_iter().map(|r| LabeledText::new(&r[0], &r[1])).collect())
    }
}

/// Append-only `[index, question, answer]` corpus.
#[derive(Debug, Clone)]
pub struct QaStore {
    path: PathBuf,
}

impl QaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<QaPair>> {
        let rows = read_rows(&self.path, 3)?;
        debug!(path = %self.path.display(), rows = rows.len(), "loaded qa corpus");
        Ok(rows
            .into_iter()
            .map(|r| QaPair { index: r[0].trim().parse().ok(), question: r[1].to_string(), answer: r[2].to_string() })
            .collect())
    }

    /// Write one row after the last existing row. Existing bytes are never
    /// rewritten; a missing trailing newline is added first.
    pub fn append_row(&self, index: u64, question: &str, answer: &str) -> Result<()> {
        let io_err = |source| Error::Io { path: self.path.clone(), source };
        let needs_newline = ends_without_newline(&self.path).map_err(io_err)?;
        let mut file = OpenOptions::new().append(true).open(&self.path).map_err(io_err)?;
        if needs_newline {
            file.write_all(b"\n").map_err(io_err)?;
        }
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        writer
            .write_record([index.to_string().as_str(), question, answer])
            .map_err(|source| Error::Csv { path: self.path.clone(), source })?;
        writer.flush().map_err(io_err)?;
        info!(path = %self.path.display(), index, "appended qa row");
        Ok(())
    }
}

/// Identity for the next appended row: one past the largest stored index, or
/// one past the row count when no stored index is numeric.
pub fn next_index(rows: &[QaPair]) -> u64 {
    rows.iter().filter_map(|r| r.index).max().map_or(rows.len() as u64 + 1, |max| max + 1)
}

fn read_rows(path: &Path, expected: usize) -> Result<Vec<StringRecord>> {
    let file = File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| Error::Csv { path: path.to_path_buf(), source })?;
        if record.len() < expected {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(Error::MalformedRow { path: path.to_path_buf(), line, expected });
        }
        rows.push(record);
    }
    Ok(rows)
}

fn ends_without_newline(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
