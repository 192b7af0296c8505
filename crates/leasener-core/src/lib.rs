//! # Leasener Core
//!
//! Entity recognition for lease date ranges: a BIO label scheme, a
//! tokenizer with char offsets, a feature-based tagger with constrained
//! Viterbi decoding, a regex date ruler, and the pipeline [`Model`] that
//! ties them together and persists to a directory.
//!
//! ## Quick Start
//!
//! ```rust
//! use leasener_core::{Model, evaluate};
//! use leasener_core::labels::END_DATE;
//!
//! let mut model = Model::blank("en");
//! model.add_ner().add_label(END_DATE);
//! model.add_ruler().unwrap();
//!
//! let ents = evaluate(&model, "shall expire on January 31, 2022 unless").unwrap();
//! assert_eq!(ents[0].text, "January 31, 2022");
//! ```
pub mod error;
pub mod example;
pub mod features;
pub mod labels;
pub mod ner;
pub mod persist;
pub mod pipeline;
pub mod ruler;
pub mod store;
pub mod tokenizer;
pub mod viterbi;

// Re-export primary API
pub use error::{LeaseNerError, Result};
pub use example::{EntityAnnotation, RawExample, TrainingExample};
pub use labels::{LabelSet, Tag};
pub use ner::{EntityRecognizer, GoldSequence, UpdateOptions};
pub use persist::{export, reload_and_verify};
pub use pipeline::{ComponentId, ComponentScope, Doc, EntitySpan, Model, ModelMeta, evaluate};
pub use ruler::DateRuler;
pub use store::Task;
pub use tokenizer::{Token, Tokenizer};
pub use viterbi::ViterbiDecoder;
