//! Gold-standard JSON export.
//!
//! One record per document:
//!
//! ```json
//! {"id": 0, "paragraphs": [{"raw": "...", "entities": [[45, 61, "DATE"]],
//!   "tokens": [{"id": 0, "orth": "The", "ner": "O"}]}]}
//! ```
//!
//! Token `ner` tags use the BILUO scheme; `-` marks tokens an entity only
//! partly covers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use leasener_core::{Doc, EntitySpan, LeaseNerError, Model, Result, Token, Tokenizer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldToken {
    pub id: usize,
    pub orth: String,
    pub ner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldParagraph {
    pub raw: String,
    /// `(start_char, end_char, label)`
    pub entities: Vec<(usize, usize, String)>,
    pub tokens: Vec<GoldToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldDocument {
    pub id: usize,
    pub paragraphs: Vec<GoldParagraph>,
}

impl GoldDocument {
    /// Record for a processed document.
    pub fn from_doc(id: usize, doc: &Doc) -> Self {
        let paragraph = GoldParagraph {
            raw: doc.text.clone(),
            entities: doc
                .ents
                .iter()
                .map(|e| (e.start, e.end, e.label.clone()))
                .collect(),
            tokens: doc
                .tokens
                .iter()
                .zip(biluo_tags(&doc.tokens, &doc.ents))
                .map(|(token, ner)| GoldToken {
                    id: token.index,
                    orth: token.text.clone(),
                    ner,
                })
                .collect(),
        };
        Self {
            id,
            paragraphs: vec![paragraph],
        }
    }
}

/// BILUO tag per token for char-offset entities.
pub fn biluo_tags(tokens: &[Token], ents: &[EntitySpan]) -> Vec<String> {
    let mut tags = vec!["O".to_string(); tokens.len()];
    for ent in ents {
        match Tokenizer::align_span(tokens, ent.start, ent.end) {
            Some((first, end)) if end - first == 1 => {
                tags[first] = format!("U-{}", ent.label);
            }
            Some((first, end)) => {
                tags[first] = format!("B-{}", ent.label);
                for tag in &mut tags[first + 1..end - 1] {
                    *tag = format!("I-{}", ent.label);
                }
                tags[end - 1] = format!("L-{}", ent.label);
            }
            None => {
                for (tag, token) in tags.iter_mut().zip(tokens) {
                    if token.start < ent.end && token.end > ent.start {
                        *tag = "-".to_string();
                    }
                }
            }
        }
    }
    tags
}

/// Run `model` over each text and build its gold record.
pub fn gold_documents<'a, I>(model: &Model, texts: I) -> Result<Vec<GoldDocument>>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(id, text)| Ok(GoldDocument::from_doc(id, &model.pipe(text)?)))
        .collect()
}

/// `<stem>.json`, next to `input` or inside `out_dir`.
pub fn json_output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => {
            let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
            name.push(".json");
            dir.join(name)
        }
        None => input.with_extension("json"),
    }
}

/// Write records as a JSON array, flushing before return.
pub fn write_gold_json<P: AsRef<Path>>(path: P, docs: &[GoldDocument]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LeaseNerError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, docs)?;
    writer.flush().map_err(|e| LeaseNerError::io(path, e))?;
    tracing::info!(path = %path.display(), documents = docs.len(), "wrote gold json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leasener_core::labels::DATE;

    fn ruler_model() -> Model {
        let mut model = Model::blank("en");
        model.add_ruler().unwrap();
        model
    }

    #[test]
    fn test_biluo_tags() {
        let doc = ruler_model()
            .pipe("expires 01/31/2022 or on January 31, 2022 unless")
            .unwrap();
        let tags = biluo_tags(&doc.tokens, &doc.ents);
        assert_eq!(
            tags,
            vec!["O", "U-DATE", "O", "O", "B-DATE", "I-DATE", "I-DATE", "L-DATE", "O"]
        );
    }

    #[test]
    fn test_misaligned_entity_marks_missing() {
        let tokens = Tokenizer::new().tokenize("on Jan 4, 2019");
        let ents = vec![EntitySpan {
            start: 4,
            end: 14,
            label: DATE.to_string(),
            text: "an 4, 2019".to_string(),
        }];
        let tags = biluo_tags(&tokens, &ents);
        assert_eq!(tags, vec!["O", "-", "-", "-", "-"]);
    }

    #[test]
    fn test_json_output_path() {
        assert_eq!(
            json_output_path(Path::new("docs/short_form_lease.pdf"), None),
            PathBuf::from("docs/short_form_lease.json")
        );
        assert_eq!(
            json_output_path(Path::new("docs/lease.v2.txt"), Some(Path::new("json"))),
            PathBuf::from("json/lease.v2.json")
        );
    }

    #[test]
    fn test_write_gold_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.json");
        let docs = gold_documents(
            &ruler_model(),
            ["The commencement date of the rental shall be February 1, 2012"],
        )
        .unwrap();
        write_gold_json(&path, &docs).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let paragraph = &value[0]["paragraphs"][0];
        assert_eq!(value[0]["id"], 0);
        assert_eq!(paragraph["entities"][0], serde_json::json!([45, 61, "DATE"]));
        assert_eq!(paragraph["tokens"][0]["orth"], "The");
        assert_eq!(paragraph["tokens"][8]["ner"], "B-DATE");
    }
}
