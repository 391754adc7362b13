use crate::classifiers::id3::class_distribution::ClassDistribution;
use crate::classifiers::id3::nodes::{Branch, Node, SplitNode};
use crate::classifiers::id3::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::classifiers::id3::splitter::partition_by;
use crate::core::{DatasetError, DenseInstance, InstanceHeader};
use std::borrow::Borrow;
use tracing::{debug, trace};

/// Builds a tree from `rows` using information gain over the candidate
/// `attributes` (input attribute indices into `header`).
pub fn build_tree<R: Borrow<DenseInstance>>(
    rows: &[R],
    attributes: &[usize],
    header: &InstanceHeader,
) -> Result<Node, DatasetError> {
    TreeBuilder::new(header, &InfoGainSplitCriterion).build(rows, attributes)
}

struct SplitCandidate<'a> {
    attribute_index: usize,
    merit: f64,
    partitions: Vec<(&'a str, Vec<&'a DenseInstance>)>,
}

/// Greedy top-down induction with multiway splits on nominal attributes.
pub struct TreeBuilder<'h> {
    header: &'h InstanceHeader,
    split_criterion: &'h dyn SplitCriterion,
}

impl<'h> TreeBuilder<'h> {
    pub fn new(header: &'h InstanceHeader, split_criterion: &'h dyn SplitCriterion) -> Self {
        Self {
            header,
            split_criterion,
        }
    }

    pub fn build<R: Borrow<DenseInstance>>(
        &self,
        rows: &[R],
        attributes: &[usize],
    ) -> Result<Node, DatasetError> {
        let count = self.header.number_of_input_attributes();
        if let Some(&index) = attributes.iter().find(|&&index| index >= count) {
            return Err(DatasetError::AttributeIndexOutOfRange { index, count });
        }
        let rows: Vec<&DenseInstance> = rows
            .iter()
            .map(<R as Borrow<DenseInstance>>::borrow)
            .collect();
        self.grow(&rows, attributes)
    }

    fn grow(&self, rows: &[&DenseInstance], attributes: &[usize]) -> Result<Node, DatasetError> {
        let distribution = ClassDistribution::from_instances(rows.iter().copied());
        let default_label = distribution.majority().ok_or(DatasetError::EmptyDataset)?;

        if distribution.is_pure() {
            return Ok(Node::leaf(default_label));
        }
        if attributes.is_empty() {
            return Ok(Node::leaf(default_label));
        }

        let Some(best) = self.best_split(rows, &distribution, attributes) else {
            return Ok(Node::leaf(default_label));
        };

        let attribute_name = self
            .header
            .attribute_at_index(best.attribute_index)
            .map(|attr| attr.name().to_string())
            .ok_or(DatasetError::AttributeIndexOutOfRange {
                index: best.attribute_index,
                count: self.header.number_of_input_attributes(),
            })?;

        debug!(
            attribute = %attribute_name,
            gain = best.merit,
            branches = best.partitions.len(),
            rows = rows.len(),
            default = default_label,
            "split"
        );

        let remaining: Vec<usize> = attributes
            .iter()
            .copied()
            .filter(|&index| index != best.attribute_index)
            .collect();

        let mut branches = Vec::with_capacity(best.partitions.len());
        for (value, subset) in best.partitions {
            let child = self.grow(&subset, &remaining)?;
            branches.push(Branch::new(value.to_string(), child));
        }

        Ok(Node::Split(SplitNode::new(
            attribute_name,
            default_label.to_string(),
            branches,
        )))
    }

    /// Candidate with strictly the highest positive merit; the earliest
    /// attribute keeps a tie.
    fn best_split<'a>(
        &self,
        rows: &'a [&DenseInstance],
        pre_split_dist: &ClassDistribution<'_>,
        attributes: &[usize],
    ) -> Option<SplitCandidate<'a>> {
        let mut best: Option<SplitCandidate<'a>> = None;
        let mut best_merit = 0.0;

        for &attribute_index in attributes {
            let partitions = partition_by(rows, attribute_index);
            let merit = {
                let post_split_dists: Vec<ClassDistribution<'_>> = partitions
                    .iter()
                    .map(|(_, subset)| ClassDistribution::from_instances(subset.iter().copied()))
                    .collect();
                self.split_criterion
                    .get_merit_of_split(pre_split_dist, &post_split_dists)
            };
            trace!(
                attribute = attribute_index,
                criterion = self.split_criterion.name(),
                merit,
                "candidate"
            );

            if merit > best_merit {
                best_merit = merit;
                best = Some(SplitCandidate {
                    attribute_index,
                    merit,
                    partitions,
                });
            }
        }
        best
    }
}
