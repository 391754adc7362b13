use crate::classifiers::id3::class_distribution::ClassDistribution;
use crate::classifiers::id3::split_criteria::split_criterion::SplitCriterion;

/// Information gain: entropy before the split minus the size-weighted
/// entropy of the branches.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn post_split_entropy(
        &self,
        pre_split_dist: &ClassDistribution<'_>,
        post_split_dists: &[ClassDistribution<'_>],
    ) -> f64 {
        let total = pre_split_dist.total();
        if total == 0 {
            return 0.0;
        }
        let mut new_entropy = 0.0;
        for dist in post_split_dists {
            let prob = dist.total() as f64 / total as f64;
            new_entropy += prob * dist.entropy();
        }
        new_entropy
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_merit_of_split(
        &self,
        pre_split_dist: &ClassDistribution<'_>,
        post_split_dists: &[ClassDistribution<'_>],
    ) -> f64 {
        pre_split_dist.entropy() - self.post_split_entropy(pre_split_dist, post_split_dists)
    }

    fn name(&self) -> &'static str {
        "info-gain"
    }
}
