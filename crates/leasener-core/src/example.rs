//! # Training Examples
//!
//! A training example is a text plus the entity spans annotated in it.
//! Spans are half-open char offsets (`[start, end)`) into the text.
//!
//! Examples are read-only input to training. Duplicates are valid and are
//! never collapsed; they weight training toward the repeated rows.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LeaseNerError, Result};
use crate::labels::{LabelSet, Tag};
use crate::ner::GoldSequence;
use crate::tokenizer::{Token, Tokenizer};

/// A labelled span within an example's text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityAnnotation {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl EntityAnnotation {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }
}

/// Literal `(text, [(start, end, label)])` row as written in the example tables.
pub type RawExample = (&'static str, &'static [(usize, usize, &'static str)]);

/// A sentence with its annotated entity spans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    #[serde(default)]
    pub entities: Vec<EntityAnnotation>,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, entities: Vec<EntityAnnotation>) -> Self {
        Self {
            text: text.into(),
            entities,
        }
    }

    /// Build an example from a literal table row.
    pub fn from_raw(raw: &RawExample) -> Self {
        let (text, spans) = *raw;
        Self::new(
            text,
            spans
                .iter()
                .map(|&(start, end, label)| EntityAnnotation::new(start, end, label))
                .collect(),
        )
    }

    /// Length of the text in chars, the unit of all offsets.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Surface text of an annotation.
    pub fn span_text(&self, entity: &EntityAnnotation) -> String {
        self.text
            .chars()
            .skip(entity.start)
            .take(entity.end.saturating_sub(entity.start))
            .collect()
    }

    /// Check spans are in bounds, non-empty and non-overlapping.
    ///
    /// # Errors
    ///
    /// `InvalidExample` naming the offending span and text.
    pub fn validate_spans(&self) -> Result<()> {
        let len = self.char_len();
        let mut spans: Vec<&EntityAnnotation> = self.entities.iter().collect();
        spans.sort_by_key(|e| (e.start, e.end));

        let mut prev_end = 0;
        for (i, entity) in spans.iter().enumerate() {
            if entity.start >= entity.end || entity.end > len {
                return Err(LeaseNerError::InvalidExample(format!(
                    "span ({}, {}, {}) out of bounds for text of {len} chars: {:?}",
                    entity.start, entity.end, entity.label, self.text
                )));
            }
            if i > 0 && entity.start < prev_end {
                return Err(LeaseNerError::InvalidExample(format!(
                    "span ({}, {}, {}) overlaps a previous span in {:?}",
                    entity.start, entity.end, entity.label, self.text
                )));
            }
            prev_end = entity.end;
        }
        Ok(())
    }

    /// Check every span label is registered in `labels`.
    ///
    /// # Errors
    ///
    /// `Configuration` naming the unregistered label.
    pub fn validate_labels(&self, labels: &LabelSet) -> Result<()> {
        match self.entities.iter().find(|e| !labels.contains(&e.label)) {
            Some(entity) => Err(LeaseNerError::Configuration(format!(
                "label {:?} used in {:?} is not registered",
                entity.label, self.text
            ))),
            None => Ok(()),
        }
    }

    /// Both [`validate_labels`](Self::validate_labels) and
    /// [`validate_spans`](Self::validate_spans).
    pub fn validate(&self, labels: &LabelSet) -> Result<()> {
        self.validate_labels(labels)?;
        self.validate_spans()
    }

    /// BIO gold tags per token.
    ///
    /// Tokens covered by a span that does not align with token boundaries
    /// get `None` (unknown) instead of a tag.
    pub fn gold_tags(&self, tokens: &[Token], labels: &LabelSet) -> Result<Vec<Option<Tag>>> {
        let mut tags = vec![Some(Tag::Outside); tokens.len()];

        for entity in &self.entities {
            let label = labels.index_of(&entity.label).ok_or_else(|| {
                LeaseNerError::Configuration(format!(
                    "label {:?} is not registered",
                    entity.label
                ))
            })?;

            match Tokenizer::align_span(tokens, entity.start, entity.end) {
                Some((first, end)) => {
                    tags[first] = Some(Tag::Begin(label));
                    for tag in &mut tags[first + 1..end] {
                        *tag = Some(Tag::Inside(label));
                    }
                }
                None => {
                    tracing::debug!(
                        start = entity.start,
                        end = entity.end,
                        text = %self.text,
                        "span does not align with tokens; marking as unknown"
                    );
                    for (tag, token) in tags.iter_mut().zip(tokens) {
                        if token.start < entity.end && token.end > entity.start {
                            *tag = None;
                        }
                    }
                }
            }
        }

        Ok(tags)
    }

    /// Tokenize and tag this example for training.
    pub fn to_gold(&self, tokenizer: &Tokenizer, labels: &LabelSet) -> Result<GoldSequence> {
        let tokens = tokenizer.tokenize(&self.text);
        let tags = self.gold_tags(&tokens, labels)?;
        Ok(GoldSequence { tokens, tags })
    }
}

/// Validate a whole example table against `labels`, stopping at the first error.
pub fn validate_all(examples: &[TrainingExample], labels: &LabelSet) -> Result<()> {
    examples.iter().try_for_each(|example| example.validate(labels))
}

/// Union of labels referenced by `examples`, in first-seen order.
pub fn referenced_labels(examples: &[TrainingExample]) -> LabelSet {
    LabelSet::from_labels(
        examples
            .iter()
            .flat_map(|e| e.entities.iter().map(|a| a.label.clone())),
    )
}

/// Read examples from a JSON Lines file, one example per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LeaseNerError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut examples = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| LeaseNerError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        examples.push(serde_json::from_str(line)?);
    }

    Ok(examples)
}

/// Write examples as JSON Lines.
pub fn write_jsonl<W: Write>(writer: W, examples: &[TrainingExample]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for example in examples {
        serde_json::to_writer(&mut writer, example)?;
        writer
            .write_all(b"\n")
            .map_err(|e| LeaseNerError::io("<jsonl output>", e))?;
    }
    writer
        .flush()
        .map_err(|e| LeaseNerError::io("<jsonl output>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{DATE, END_DATE, START_DATE};

    const ONSET: &str = "the onset will be on Jan 4, 2019 and the ending will be on June 14, 2034";

    const ONSET_ROW: RawExample = (ONSET, &[(21, 32, START_DATE), (59, 72, END_DATE)]);

    fn example(text: &str, spans: &[(usize, usize, &str)]) -> TrainingExample {
        TrainingExample::new(
            text,
            spans
                .iter()
                .map(|&(start, end, label)| EntityAnnotation::new(start, end, label))
                .collect(),
        )
    }

    fn onset_example() -> TrainingExample {
        TrainingExample::from_raw(&ONSET_ROW)
    }

    #[test]
    fn test_span_text() {
        let example = onset_example();
        assert_eq!(example.span_text(&example.entities[0]), "Jan 4, 2019");
        assert_eq!(example.span_text(&example.entities[1]), "June 14, 2034");
    }

    #[test]
    fn test_validate_ok() {
        let labels = LabelSet::from_labels([START_DATE, END_DATE]);
        onset_example().validate(&labels).unwrap();
    }

    #[test]
    fn test_validate_unregistered_label() {
        let labels = LabelSet::from_labels([END_DATE]);
        let err = onset_example().validate(&labels).unwrap_err();
        assert!(matches!(err, LeaseNerError::Configuration(ref msg) if msg.contains(START_DATE)));
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let example = example("ends 2019", &[(5, 20, DATE)]);
        assert!(matches!(
            example.validate_spans(),
            Err(LeaseNerError::InvalidExample(_))
        ));
    }

    #[test]
    fn test_validate_overlap() {
        let example = example("on Jan 4, 2019", &[(3, 14, DATE), (7, 14, END_DATE)]);
        assert!(matches!(
            example.validate_spans(),
            Err(LeaseNerError::InvalidExample(_))
        ));
    }

    #[test]
    fn test_validate_empty_span() {
        let example = example("on Jan 4, 2019", &[(3, 3, DATE)]);
        assert!(example.validate_spans().is_err());
    }

    #[test]
    fn test_gold_tags() {
        let labels = LabelSet::from_labels([START_DATE, END_DATE]);
        let gold = onset_example().to_gold(&Tokenizer::new(), &labels).unwrap();
        let begins: Vec<usize> = gold
            .tags
            .iter()
            .enumerate()
            .filter(|(_, t)| matches!(t, Some(Tag::Begin(_))))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(begins.len(), 2);
        assert_eq!(gold.tokens[begins[0]].text, "Jan");
        assert_eq!(gold.tokens[begins[1]].text, "June");
        assert_eq!(gold.tags[begins[1]], Some(Tag::Begin(1)));
        assert!(gold.tags.iter().all(Option::is_some));
    }

    #[test]
    fn test_gold_tags_misaligned_span_is_unknown() {
        let labels = LabelSet::from_labels([DATE]);
        // "an 4, 2019" starts inside "Jan"
        let example = example("on Jan 4, 2019 ok", &[(4, 14, DATE)]);
        let gold = example.to_gold(&Tokenizer::new(), &labels).unwrap();
        assert_eq!(gold.tags[0], Some(Tag::Outside));
        assert!(gold.tags[1..5].iter().all(Option::is_none));
        assert_eq!(gold.tags[5], Some(Tag::Outside));
    }

    #[test]
    fn test_referenced_labels() {
        let labels = referenced_labels(&[onset_example(), onset_example()]);
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec![START_DATE, END_DATE]);
    }

    #[test]
    fn test_jsonl_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examples.jsonl");
        let examples = vec![onset_example(), TrainingExample::new("no dates here", vec![])];

        write_jsonl(File::create(&path).unwrap(), &examples).unwrap();
        let loaded = read_jsonl(&path).unwrap();
        assert_eq!(loaded, examples);
    }

    #[test]
    fn test_read_jsonl_missing_file() {
        assert!(matches!(
            read_jsonl("/nonexistent/examples.jsonl"),
            Err(LeaseNerError::Io { .. })
        ));
    }
}
