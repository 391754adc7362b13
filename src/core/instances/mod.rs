pub mod dense_instance;
pub mod query_instance;

pub use dense_instance::DenseInstance;
pub use query_instance::QueryInstance;
