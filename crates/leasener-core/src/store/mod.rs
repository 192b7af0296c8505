//! # Example Store
//!
//! Built-in annotated example tables, one per training task. Each task
//! names the labels it registers on the recognizer; every label its
//! examples reference is among them.

pub mod end_date;
pub mod lease_dates;
pub mod rehearsal;

use std::fmt;
use std::str::FromStr;

use crate::error::{LeaseNerError, Result};
use crate::example::{RawExample, TrainingExample};
use crate::labels::{
    CARDINAL, DATE, END_DATE, FAC, GPE, LOC, LabelSet, MONEY, ORG, PERSON, START_DATE,
};

/// A built-in training task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Teach a single new `END_DATE` label.
    EndDate,
    /// Teach `START_DATE` and `END_DATE` alongside rehearsal labels.
    LeaseDates,
    /// Only the rehearsal rows.
    Rehearsal,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::EndDate, Task::LeaseDates, Task::Rehearsal];

    pub fn name(&self) -> &'static str {
        match self {
            Task::EndDate => "end-date",
            Task::LeaseDates => "lease-dates",
            Task::Rehearsal => "rehearsal",
        }
    }

    /// The task's examples in table order, duplicates included.
    pub fn examples(&self) -> Vec<TrainingExample> {
        match self {
            Task::EndDate => from_table(end_date::EXAMPLES),
            Task::LeaseDates => {
                let mut examples = lease_dates::template_examples();
                examples.extend(from_table(lease_dates::CONTRACT_EXAMPLES));
                examples.extend(from_table(rehearsal::EXAMPLES));
                examples
            }
            Task::Rehearsal => from_table(rehearsal::EXAMPLES),
        }
    }

    /// Labels to register before training, in registration order.
    pub fn labels(&self) -> LabelSet {
        match self {
            Task::EndDate => LabelSet::from_labels([END_DATE]),
            Task::LeaseDates => LabelSet::from_labels([
                START_DATE, END_DATE, ORG, MONEY, GPE, PERSON, DATE, LOC, CARDINAL, FAC,
            ]),
            Task::Rehearsal => {
                LabelSet::from_labels([DATE, ORG, GPE, FAC, CARDINAL, MONEY, PERSON, LOC])
            }
        }
    }

    /// Text to run the trained model on as a smoke test.
    pub fn test_text(&self) -> &'static str {
        match self {
            Task::EndDate => "the contract begins on June 6, 2019",
            Task::LeaseDates | Task::Rehearsal => {
                "THIS COMMERCIAL LEASE AGREEMENT is made and entered into effective starting \
                 February 1, 2012 until January 31, 2013, by and between FRONTAGE ROAD COMMERCIAL \
                 PROPERTIES, LLC, with mailing address of 607 Triple Tree Road, Bozeman, Montana, \
                 59715, hereinafter referred to as “Landlord,” and MSU Extension, a division of \
                 Montana State University, hereinafter referred to as “Tenant.”"
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Task {
    type Err = LeaseNerError;

    fn from_str(s: &str) -> Result<Self> {
        Task::ALL
            .into_iter()
            .find(|task| task.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Task::ALL.iter().map(Task::name).collect();
                LeaseNerError::Configuration(format!(
                    "unknown task {s:?}, expected one of {}",
                    known.join(", ")
                ))
            })
    }
}

fn from_table(table: &[RawExample]) -> Vec<TrainingExample> {
    table.iter().map(TrainingExample::from_raw).collect()
}
