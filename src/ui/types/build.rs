use crate::core::{Dataset, QueryInstance};
use crate::datasets::smartphone_queries;
use crate::streams::arff::ArffFileStream;
use crate::tasks::TrainAndPredict;
use crate::ui::types::choices::{QuerySource, TaskChoice, TrainingSource};
use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn build_dataset(source: &TrainingSource) -> Result<Dataset> {
    match source {
        TrainingSource::Builtin(choice) => choice
            .load()
            .with_context(|| format!("failed to load built-in dataset '{choice}'")),
        TrainingSource::Arff(path) => ArffFileStream::new(path)
            .and_then(|mut stream| stream.read_dataset())
            .with_context(|| format!("failed to read training data from {}", path.display())),
    }
}

fn read_query_file(path: &Path) -> Result<(ArffFileStream, Vec<QueryInstance>)> {
    let mut stream = ArffFileStream::new(path)
        .with_context(|| format!("failed to open queries {}", path.display()))?;
    let queries = stream
        .read_queries()
        .with_context(|| format!("failed to read queries from {}", path.display()))?;
    Ok((stream, queries))
}

/// Loads the training set and queries a [`TaskChoice`] names.
pub fn build_task(choice: &TaskChoice) -> Result<TrainAndPredict> {
    let dataset = build_dataset(&choice.training)?;

    let task = match &choice.queries {
        QuerySource::BuiltinQueries => TrainAndPredict::new(dataset, smartphone_queries()),
        QuerySource::TrainingRows => TrainAndPredict::on_training_rows(dataset),
        QuerySource::Arff(path) => {
            let (stream, queries) = read_query_file(path)?;
            let expected = dataset.header().input_attributes();
            let found = stream.header().input_attributes();
            if expected.len() != found.len()
                || expected.iter().zip(found).any(|(a, b)| a.name() != b.name())
            {
                bail!(
                    "query file {} does not declare the training attributes in the same order",
                    path.display()
                );
            }
            TrainAndPredict::new(dataset, queries)
        }
    }
    .context("failed to prepare task")?;

    Ok(task.with_attributes(choice.attributes.clone()))
}
