pub mod attributes;
pub mod dataset;
pub mod errors;
pub mod instance_header;
pub mod instances;

pub use dataset::Dataset;
pub use errors::DatasetError;
pub use instance_header::InstanceHeader;
pub use instances::{DenseInstance, QueryInstance};
