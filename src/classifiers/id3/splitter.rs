use crate::core::DenseInstance;
use std::borrow::Borrow;

/// Rows whose value at `attribute_index` equals `value`, in their original order.
pub fn split_rows<'a, R: Borrow<DenseInstance>>(
    rows: &'a [R],
    attribute_index: usize,
    value: &str,
) -> Vec<&'a DenseInstance> {
    rows.iter()
        .map(<R as Borrow<DenseInstance>>::borrow)
        .filter(|row| row.value_at_index(attribute_index) == Some(value))
        .collect()
}

/// Distinct values of `attribute_index` in first-seen order.
pub fn distinct_values<'a, R: Borrow<DenseInstance>>(
    rows: &'a [R],
    attribute_index: usize,
) -> Vec<&'a str> {
    let mut values: Vec<&'a str> = Vec::new();
    for row in rows.iter().map(<R as Borrow<DenseInstance>>::borrow) {
        if let Some(value) = row.value_at_index(attribute_index)
            && !values.contains(&value)
        {
            values.push(value);
        }
    }
    values
}

/// Partitions `rows` by the value of `attribute_index`, one group per
/// distinct value in first-seen order.
pub fn partition_by<'a, R: Borrow<DenseInstance>>(
    rows: &'a [R],
    attribute_index: usize,
) -> Vec<(&'a str, Vec<&'a DenseInstance>)> {
    distinct_values(rows, attribute_index)
        .into_iter()
        .map(|value| (value, split_rows(rows, attribute_index, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::instances;

    fn rows() -> Vec<DenseInstance> {
        instances(&[
            vec!["A", "X", "Yes"],
            vec!["A", "Y", "No"],
            vec!["B", "X", "Yes"],
            vec!["B", "Y", "Yes"],
            vec!["C", "X", "No"],
        ])
    }

    #[test]
    fn split_keeps_matching_rows_in_order() {
        let data = rows();
        let subset = split_rows(&data, 1, "X");
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|r| r.value_at_index(1) == Some("X")));
        let firsts: Vec<_> = subset.iter().map(|r| r.value_at_index(0).unwrap()).collect();
        assert_eq!(firsts, vec!["A", "B", "C"]);
    }

    #[test]
    fn split_on_absent_value_is_empty() {
        let data = rows();
        assert!(split_rows(&data, 0, "Z").is_empty());
        assert!(split_rows(&data, 9, "A").is_empty());
    }

    #[test]
    fn split_does_not_touch_input() {
        let data = rows();
        let before = data.clone();
        let _ = split_rows(&data, 0, "A");
        assert_eq!(data, before);
    }

    #[test]
    fn distinct_values_in_first_seen_order() {
        let data = rows();
        assert_eq!(distinct_values(&data, 0), vec!["A", "B", "C"]);
        assert_eq!(distinct_values(&data, 1), vec!["X", "Y"]);
    }

    #[test]
    fn partition_is_complete() {
        let data = rows();
        for attr in 0..2 {
            let groups = partition_by(&data, attr);
            let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
            assert_eq!(total, data.len());
            for (value, group) in &groups {
                assert!(group.iter().all(|r| r.value_at_index(attr) == Some(*value)));
            }
        }
    }

    #[test]
    fn split_accepts_borrowed_rows() {
        let data = rows();
        let refs: Vec<&DenseInstance> = data.iter().collect();
        let subset = split_rows(&refs, 0, "B");
        assert_eq!(subset.len(), 2);
        let nested = split_rows(&subset, 1, "Y");
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].label(), "Yes");
    }
}
