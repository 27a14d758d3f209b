//! Top-level ILR message.
//!
//! Field names follow the ILR XML schema so a single set of definitions
//! reads both XML submissions and their JSON equivalents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::destination::LearnerDestinationAndProgression;
use crate::learner::Learner;

/// A complete ILR submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub learning_provider: Option<LearningProvider>,
    #[serde(rename = "Learner", default)]
    pub learners: Vec<Learner>,
    #[serde(rename = "LearnerDestinationandProgression", default)]
    pub learner_destination_and_progressions: Vec<LearnerDestinationAndProgression>,
}

impl Message {
    /// Provider UKPRN, when the message carries one.
    pub fn ukprn(&self) -> Option<i64> {
        self.learning_provider
            .as_ref()
            .map(|provider| provider.ukprn)
    }

    /// Collection year code (e.g. `"1920"`).
    pub fn collection_year(&self) -> Option<&str> {
        self.collection_details()
            .and_then(|details| details.year.as_deref())
    }

    pub fn file_preparation_date(&self) -> Option<NaiveDate> {
        self.collection_details()
            .and_then(|details| details.file_preparation_date)
    }

    fn collection_details(&self) -> Option<&CollectionDetails> {
        self.header
            .as_ref()
            .and_then(|header| header.collection_details.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    #[serde(default)]
    pub collection_details: Option<CollectionDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectionDetails {
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub file_preparation_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningProvider {
    #[serde(rename = "UKPRN")]
    pub ukprn: i64,
}
