use crate::core::DenseInstance;
use std::borrow::Borrow;

/// Label counts in first-seen order.
///
/// Scanning order matters: it decides which label wins a majority tie and the
/// order in which entropy terms are accumulated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDistribution<'a> {
    counts: Vec<(&'a str, usize)>,
    total: usize,
}

impl<'a> ClassDistribution<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_instances<I>(instances: I) -> Self
    where
        I: IntoIterator<Item = &'a DenseInstance>,
    {
        let mut distribution = Self::new();
        for instance in instances {
            distribution.observe(instance.label());
        }
        distribution
    }

    pub fn observe(&mut self, label: &'a str) {
        match self.counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label, 1)),
        }
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn number_of_classes(&self) -> usize {
        self.counts.len()
    }

    /// True when at most one distinct label was observed.
    pub fn is_pure(&self) -> bool {
        self.counts.len() < 2
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| *l == label)
            .map_or(0, |(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Shannon entropy in bits. An empty distribution has entropy 0.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        let mut ent = 0.0;
        for &(_, count) in &self.counts {
            let prob = count as f64 / total;
            ent -= prob * prob.log2();
        }
        ent
    }

    /// Most frequent label; the earliest observed label wins ties.
    pub fn majority(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(label, count) in &self.counts {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }
}

/// Entropy of the trailing labels of `rows`.
pub fn entropy<R: Borrow<DenseInstance>>(rows: &[R]) -> f64 {
    ClassDistribution::from_instances(rows.iter().map(<R as Borrow<DenseInstance>>::borrow))
        .entropy()
}

/// Most frequent label of `rows`, or `None` when `rows` is empty.
pub fn majority_label<R: Borrow<DenseInstance>>(rows: &[R]) -> Option<&str> {
    ClassDistribution::from_instances(rows.iter().map(<R as Borrow<DenseInstance>>::borrow))
        .majority()
}
