mod errors;
mod prediction;
mod prediction_report;

pub use errors::ExportError;
pub use prediction::Prediction;
pub use prediction_report::{PredictionReport, ReportFormat};
