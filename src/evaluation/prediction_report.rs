use crate::classifiers::Classifier;
use crate::core::{DatasetError, QueryInstance};
use crate::evaluation::errors::ExportError;
use crate::evaluation::prediction::Prediction;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Tsv,
    Json,
}

impl ReportFormat {
    fn delimiter(self) -> Option<char> {
        match self {
            ReportFormat::Csv => Some(','),
            ReportFormat::Tsv => Some('\t'),
            ReportFormat::Json => None,
        }
    }
}

/// Predictions for a batch of queries, in query order.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    relation: String,
    class_name: String,
    attribute_names: Vec<String>,
    accuracy: Option<f64>,
    predictions: Vec<Prediction>,
}

impl PredictionReport {
    /// Classifies every query. Stops at the first query the classifier rejects.
    pub fn evaluate(
        classifier: &dyn Classifier,
        queries: &[QueryInstance],
    ) -> Result<Self, DatasetError> {
        let header = classifier.header();
        let mut predictions = Vec::with_capacity(queries.len());
        for query in queries {
            let predicted = classifier.predict_values(query.values())?;
            debug!(values = ?query.values(), predicted = %predicted, "classified query");
            predictions.push(Prediction::new(
                query.values().to_vec(),
                predicted,
                query.expected().map(str::to_string),
            ));
        }

        let mut report = Self {
            relation: header.relation_name().to_string(),
            class_name: header.class_attribute().name().to_string(),
            attribute_names: header
                .input_attributes()
                .iter()
                .map(|a| a.name().to_string())
                .collect(),
            accuracy: None,
            predictions,
        };
        report.accuracy = report.compute_accuracy();
        info!(
            queries = report.len(),
            labeled = report.labeled_count(),
            accuracy = ?report.accuracy,
            "evaluated queries"
        );
        Ok(report)
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn labeled_count(&self) -> usize {
        self.predictions
            .iter()
            .filter(|p| p.actual.is_some())
            .count()
    }

    pub fn correct_count(&self) -> usize {
        self.predictions
            .iter()
            .filter(|p| p.is_correct() == Some(true))
            .count()
    }

    /// Share of labeled queries predicted correctly; `None` without labeled queries.
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    fn compute_accuracy(&self) -> Option<f64> {
        match self.labeled_count() {
            0 => None,
            labeled => Some(self.correct_count() as f64 / labeled as f64),
        }
    }

    pub fn export(&self, path: &Path, format: ReportFormat) -> Result<(), ExportError> {
        let mut out = BufWriter::new(File::create(path)?);
        match format.delimiter() {
            Some(delimiter) => self.write_delimited(&mut out, delimiter)?,
            None => {
                serde_json::to_writer_pretty(&mut out, self)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        info!(path = %path.display(), ?format, rows = self.len(), "exported predictions");
        Ok(())
    }

    fn write_delimited<W: Write>(&self, out: &mut W, delimiter: char) -> std::io::Result<()> {
        let header = self
            .attribute_names
            .iter()
            .map(String::as_str)
            .chain(["predicted", "actual"]);
        write_record(out, header, delimiter)?;

        for p in &self.predictions {
            let record = p
                .values
                .iter()
                .map(String::as_str)
                .chain([p.predicted.as_str(), p.actual.as_deref().unwrap_or("")]);
            write_record(out, record, delimiter)?;
        }
        Ok(())
    }
}

fn write_record<'a, W: Write>(
    out: &mut W,
    fields: impl Iterator<Item = &'a str>,
    delimiter: char,
) -> std::io::Result<()> {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            write!(out, "{delimiter}")?;
        }
        if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
            write!(out, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            write!(out, "{field}")?;
        }
    }
    writeln!(out)
}

impl Display for PredictionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for p in &self.predictions {
            write!(f, "Data: ")?;
            p.fmt_values(f)?;
            writeln!(f, " -> {}? {}", self.class_name, p.predicted)?;
        }
        Ok(())
    }
}
