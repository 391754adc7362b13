use crate::evaluation::ReportFormat;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DumpFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl From<DumpFormat> for ReportFormat {
    fn from(value: DumpFormat) -> Self {
        match value {
            DumpFormat::Csv => ReportFormat::Csv,
            DumpFormat::Tsv => ReportFormat::Tsv,
            DumpFormat::Json => ReportFormat::Json,
        }
    }
}
