mod info_gain_split_criterion;
mod split_criterion;

pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::SplitCriterion;
