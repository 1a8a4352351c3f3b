//! Delimited file loading and summarizing
//!
//! Reads a header row plus records, counts everything, and keeps only the
//! first rows needed for the preview.

use crate::{
    core::table::render_preview,
    error::{DataError, Result},
};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};
use tracing::{debug, error, instrument};

/// Shape and leading rows of a tabular file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// File the summary was produced from
    pub path: PathBuf,
    /// Number of data rows, header excluded
    pub rows: usize,
    /// Number of columns in the header
    pub columns: usize,
    /// Column names
    pub headers: Vec<String>,
    /// First rows of the file, each padded to `columns` cells
    pub head: Vec<Vec<String>>,
}

impl Summary {
    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Preview table of the header and the kept rows
    pub fn render_head(&self) -> String {
        render_preview(&self.headers, &self.head)
    }
}

/// Loads delimited files and produces a [`Summary`]
#[derive(Debug, Clone, Default)]
pub struct FileSummarizer {
    delimiter: Option<u8>,
}

impl FileSummarizer {
    /// Create a summarizer that infers the delimiter from the file extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed delimiter instead of inferring one
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Option<u8>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Delimiter used for `path`
    ///
    /// `.tsv` and `.tab` files are tab-separated; everything else is comma-separated.
    pub fn delimiter_for(&self, path: &Path) -> u8 {
        if let Some(delimiter) = self.delimiter {
            return delimiter;
        }

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("tsv" | "tab") => b'\t',
            _ => b',',
        }
    }

    /// Summarize `path`, keeping at most `head_count` preview rows
    ///
    /// Failures are logged at ERROR with their full cause chain before being
    /// returned.
    #[instrument(skip(self))]
    pub fn summarize<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        head_count: usize,
    ) -> Result<Summary> {
        let path = path.as_ref();

        self.load(path, head_count).inspect_err(|e| {
            error!("Failed to process file: {}", e.chain());
        })
    }

    fn load(&self, path: &Path, head_count: usize) -> Result<Summary> {
        let delimiter = self.delimiter_for(path);
        debug!(
            "Reading {} with delimiter {:?}",
            path.display(),
            char::from(delimiter)
        );

        let file = File::open(path).map_err(|e| DataError::read(path, e))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DataError::parse(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(DataError::empty(path));
        }

        let columns = headers.len();
        let mut rows = 0usize;
        let mut head = Vec::with_capacity(head_count.min(64));
        let mut record = StringRecord::new();

        while reader
            .read_record(&mut record)
            .map_err(|e| DataError::parse(path, e))?
        {
            if record.len() > columns {
                let line = record.position().map_or(0, |pos| pos.line());
                return Err(DataError::malformed(path, line, columns, record.len()));
            }

            if head.len() < head_count {
                let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
                cells.resize(columns, String::new());
                head.push(cells);
            }

            rows += 1;
        }

        debug!("Loaded {} rows x {} columns", rows, columns);

        Ok(Summary {
            path: path.to_path_buf(),
            rows,
            columns,
            headers,
            head,
        })
    }
}
