//! # Leasener
//!
//! Extracts lease start and end dates from legal documents with an entity
//! recognizer that can be fine-tuned on annotated examples.
//!
//! ```rust
//! use leasener::{Task, TrainConfig, evaluate, train};
//!
//! let task = Task::EndDate;
//! let config = TrainConfig::new().with_iterations(2);
//! let (model, run) = train(&task.examples(), &task.labels(), config, None).unwrap();
//!
//! assert_eq!(run.iteration_count(), 2);
//! let text = task.test_text();
//! for ent in evaluate(&model, text).unwrap() {
//!     assert!(ent.end <= text.chars().count());
//! }
//! ```

pub use leasener_core::{
    ComponentId, Doc, EntityAnnotation, EntitySpan, LabelSet, LeaseNerError, Model, Result, Task,
    TrainingExample, evaluate, export, reload_and_verify,
};
pub use leasener_prep::{TextExtractor, annotate_lines, write_gold_json};
pub use leasener_trainer::{BatchSchedule, TrainConfig, Trainer, TrainingRun, train};
