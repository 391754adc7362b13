use crate::classifiers::DecisionTree;
use crate::core::{Dataset, DatasetError, QueryInstance};
use crate::evaluation::PredictionReport;
use std::time::{Duration, Instant};
use tracing::info;

/// Trains a tree on one dataset and classifies a batch of queries with it.
pub struct TrainAndPredict {
    dataset: Dataset,
    queries: Vec<QueryInstance>,
    attributes: Vec<String>,
}

#[derive(Debug)]
pub struct TrainingOutcome {
    pub tree: DecisionTree,
    pub report: PredictionReport,
    pub elapsed: Duration,
}

impl TrainAndPredict {
    pub fn new(dataset: Dataset, queries: Vec<QueryInstance>) -> Result<Self, DatasetError> {
        if dataset.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        Ok(Self {
            dataset,
            queries,
            attributes: Vec::new(),
        })
    }

    /// Re-classifies the training rows themselves, labels included.
    pub fn on_training_rows(dataset: Dataset) -> Result<Self, DatasetError> {
        let queries = dataset.iter().cloned().map(QueryInstance::from).collect();
        Self::new(dataset, queries)
    }

    /// Restricts split candidates to the named attributes. Empty means all.
    pub fn with_attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn queries(&self) -> &[QueryInstance] {
        &self.queries
    }

    pub fn run(&self) -> Result<TrainingOutcome, DatasetError> {
        let start = Instant::now();
        let tree = if self.attributes.is_empty() {
            DecisionTree::fit(&self.dataset)?
        } else {
            DecisionTree::fit_on_named_attributes(&self.dataset, &self.attributes)?
        };
        let report = PredictionReport::evaluate(&tree, &self.queries)?;
        let elapsed = start.elapsed();
        info!(
            rows = self.dataset.len(),
            queries = self.queries.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            "task finished"
        );
        Ok(TrainingOutcome {
            tree,
            report,
            elapsed,
        })
    }
}
