//! # Leasener Trainer
//!
//! Fine-tunes the entity recognizer of a [`leasener_core::Model`] on
//! annotated examples: reshuffled epochs, compounding batch sizes and
//! feature dropout.

pub mod schedule;
pub mod trainer;

pub use schedule::{BatchSchedule, Compounding, batch_sizes, minibatch};
pub use trainer::{EpochReport, TrainConfig, Trainer, TrainingRun, train};
