//! # Leasener Prep
//!
//! Turns lease documents into training material: text extraction from
//! PDFs and plaintext, model-assisted annotation of raw lines, and
//! gold-standard JSON export.

pub mod annotate;
pub mod extract;
pub mod gold;

pub use annotate::{annotate_lines, annotate_text};
pub use extract::{
    ExtractedDocument, ExtractionReport, SourceKind, TextExtractor, ensure_distinct_outputs,
    split_lines, text_output_path,
};
pub use gold::{
    GoldDocument, GoldParagraph, GoldToken, gold_documents, json_output_path, write_gold_json,
};
