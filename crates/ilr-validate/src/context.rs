//! Shared state handed to every rule during a validation run.

use chrono::NaiveDate;
use ilr_model::{
    AcademicYear, LarsData, Learner, LearnerDestinationAndProgression, Message, ValidationOptions,
};
use tracing::warn;

use crate::util::CaseInsensitiveMap;

/// Lookups over the message being validated.
#[derive(Debug, Clone, Default)]
pub struct FileData<'a> {
    learners: CaseInsensitiveMap<&'a Learner>,
    destinations: CaseInsensitiveMap<&'a LearnerDestinationAndProgression>,
}

impl<'a> FileData<'a> {
    pub fn new(message: &'a Message) -> Self {
        let mut data = Self::default();
        for learner in &message.learners {
            data.learners
                .insert_first(&learner.learn_ref_number, learner);
        }
        for destination in &message.learner_destination_and_progressions {
            data.destinations
                .insert_first(&destination.learn_ref_number, destination);
        }
        data
    }

    pub fn learner(&self, learn_ref_number: &str) -> Option<&'a Learner> {
        self.learners.get(learn_ref_number).copied()
    }

    pub fn destination_and_progression(
        &self,
        learn_ref_number: &str,
    ) -> Option<&'a LearnerDestinationAndProgression> {
        self.destinations.get(learn_ref_number).copied()
    }
}

/// Context for a validation run: resolved dates, options, file lookups and
/// optional reference data.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    pub reference_date: NaiveDate,
    pub academic_year: AcademicYear,
    pub options: &'a ValidationOptions,
    pub lars: Option<&'a LarsData>,
    file_data: FileData<'a>,
}

impl<'a> ValidationContext<'a> {
    /// Build a context for `message`.
    ///
    /// The reference date is taken from the options, then the message file
    /// preparation date, then today. The academic year is taken from the
    /// options, then the message collection year, then the year containing the
    /// reference date.
    pub fn new(message: &'a Message, options: &'a ValidationOptions) -> Self {
        let reference_date = options
            .reference_date
            .or_else(|| message.file_preparation_date())
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let academic_year = options
            .academic_year
            .or_else(|| {
                let code = message.collection_year()?;
                AcademicYear::from_code(code)
                    .inspect_err(|error| warn!(%error, "ignoring message collection year"))
                    .ok()
            })
            .unwrap_or_else(|| AcademicYear::containing(reference_date));

        Self {
            reference_date,
            academic_year,
            options,
            lars: None,
            file_data: FileData::new(message),
        }
    }

    pub fn with_lars(mut self, lars: &'a LarsData) -> Self {
        self.lars = Some(lars);
        self
    }

    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.options.is_enabled(rule_name)
    }

    pub fn learner(&self, learn_ref_number: &str) -> Option<&'a Learner> {
        self.file_data.learner(learn_ref_number)
    }

    pub fn destination_and_progression(
        &self,
        learn_ref_number: &str,
    ) -> Option<&'a LearnerDestinationAndProgression> {
        self.file_data.destination_and_progression(learn_ref_number)
    }
}
