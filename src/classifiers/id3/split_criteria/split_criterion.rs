use crate::classifiers::id3::class_distribution::ClassDistribution;

pub trait SplitCriterion {
    /// Merit of partitioning `pre_split_dist` into `post_split_dists`. Higher is better;
    /// a split that does not improve on the unsplit node scores 0.
    fn get_merit_of_split(
        &self,
        pre_split_dist: &ClassDistribution<'_>,
        post_split_dists: &[ClassDistribution<'_>],
    ) -> f64;

    fn name(&self) -> &'static str;
}
