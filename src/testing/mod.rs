pub mod dummies;
pub mod stubs;

use crate::core::DenseInstance;

/// Labeled instances from row literals; the last value of each row is the label.
pub fn instances<S: AsRef<str>, R: AsRef<[S]>>(rows: &[R]) -> Vec<DenseInstance> {
    rows.iter()
        .filter_map(|row| {
            let values = row.as_ref().iter().map(|v| v.as_ref().to_string()).collect();
            DenseInstance::from_row(values)
        })
        .collect()
}
