use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, QueryInstance};
use crate::core::Dataset;
use crate::streams::arff::parser::{
    ParsedRow, RowMode, is_comment_or_empty, parse_header, parse_row,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Reads a nominal ARFF file whose last attribute is the class.
///
/// The header is parsed once on open. Each `read_*` call rewinds to the
/// first data line, so a stream can be read more than once.
#[derive(Debug)]
pub struct ArffFileStream {
    path: PathBuf,
    reader: BufReader<File>,
    header: Arc<InstanceHeader>,
    data_start_pos: u64,
}

impl ArffFileStream {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let mut reader = BufReader::new(File::open(&path)?);
        let (header, data_start_pos) = parse_header(&mut reader)?;
        debug!(
            path = %path.display(),
            relation = header.relation_name(),
            attributes = header.number_of_attributes(),
            "parsed ARFF header"
        );

        Ok(ArffFileStream {
            path,
            reader,
            header: Arc::new(header),
            data_start_pos,
        })
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reopens the file and seeks back to the first data line.
    pub fn restart(&mut self) -> Result<(), Error> {
        self.reader = BufReader::new(File::open(&self.path)?);
        self.reader.seek(SeekFrom::Start(self.data_start_pos))?;
        Ok(())
    }

    /// Loads every data row as a labeled training instance. Values outside a
    /// declared domain and `?` anywhere are errors.
    pub fn read_dataset(&mut self) -> Result<Dataset, Error> {
        let rows = self.read_rows(RowMode::Training)?;
        let mut instances = Vec::with_capacity(rows.len());
        for (line_no, row) in rows {
            let Some(label) = row.label else {
                return Err(invalid_at(line_no, "training row without a label"));
            };
            instances.push(DenseInstance::new(row.values, label));
        }
        Dataset::new(Arc::clone(&self.header), instances)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    /// Loads every data row as a query. A `?` class marks the row unlabeled.
    pub fn read_queries(&mut self) -> Result<Vec<QueryInstance>, Error> {
        Ok(self
            .read_rows(RowMode::Query)?
            .into_iter()
            .map(|(_, row)| QueryInstance::new(row.values, row.label))
            .collect())
    }

    fn read_rows(&mut self, mode: RowMode) -> Result<Vec<(usize, ParsedRow)>, Error> {
        self.restart()?;
        let mut rows = Vec::new();
        let mut line = String::new();
        let mut line_no = 0;
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            line_no += 1;
            if is_comment_or_empty(&line) {
                continue;
            }
            let row = parse_row(&self.header, line.trim(), mode)
                .map_err(|e| invalid_at(line_no, &e.to_string()))?;
            rows.push((line_no, row));
        }
        debug!(path = %self.path.display(), rows = rows.len(), ?mode, "read ARFF rows");
        Ok(rows)
    }
}

fn invalid_at(data_line: usize, message: &str) -> Error {
    Error::new(
        ErrorKind::InvalidData,
        format!("data line {data_line}: {message}"),
    )
}
