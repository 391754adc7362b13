use crate::core::{Dataset, DatasetError};
use crate::datasets::{smartphone, smartphone_extended};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Built-in training sets selectable from the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DatasetChoice {
    #[default]
    #[strum(
        message = "Smartphone",
        detailed_message = "12 labeled rows of brand, RAM, storage and price band."
    )]
    Smartphone,
    #[strum(
        message = "Smartphone (extended)",
        detailed_message = "96 labeled rows over the same four attributes."
    )]
    SmartphoneExtended,
}

impl DatasetChoice {
    pub fn load(self) -> Result<Dataset, DatasetError> {
        match self {
            DatasetChoice::Smartphone => smartphone(),
            DatasetChoice::SmartphoneExtended => smartphone_extended(),
        }
    }
}
