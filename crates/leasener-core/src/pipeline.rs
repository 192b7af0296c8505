//! # Pipeline Model
//!
//! A [`Model`] is the unit that training mutates and export persists: a
//! tokenizer followed by an ordered list of optional components. Which
//! components run is an explicit set on the model rather than ambient state;
//! [`Model::select_components`] swaps it for the lifetime of a scope guard.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use oorandom::Rand32;
use serde::{Deserialize, Serialize};

use crate::error::{LeaseNerError, Result};
use crate::example::TrainingExample;
use crate::labels::LabelSet;
use crate::ner::{EntityRecognizer, GoldSequence, UpdateOptions};
use crate::ruler::DateRuler;
use crate::tokenizer::{Token, Tokenizer};

/// Identifies a pipeline component.
///
/// Variant order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentId {
    /// Statistical entity recognizer.
    Ner,
    /// Regex date matcher.
    DateRuler,
}

impl ComponentId {
    pub const ALL: [ComponentId; 2] = [ComponentId::Ner, ComponentId::DateRuler];

    pub fn name(&self) -> &'static str {
        match self {
            ComponentId::Ner => "ner",
            ComponentId::DateRuler => "date_ruler",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentId {
    type Err = LeaseNerError;

    fn from_str(s: &str) -> Result<Self> {
        ComponentId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| LeaseNerError::Configuration(format!("unknown component: {s:?}")))
    }
}

/// Descriptive metadata persisted alongside a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    pub name: String,
    pub lang: String,
    pub version: String,
    /// Components present, in pipeline order.
    #[serde(default)]
    pub pipeline: Vec<ComponentId>,
}

impl ModelMeta {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            name: "blank".to_string(),
            lang: lang.into(),
            version: "0.0.0".to_string(),
            pipeline: Vec::new(),
        }
    }
}

/// A recognized entity as char offsets into the processed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
    /// Surface text of the span.
    pub text: String,
}

/// Output of running the pipeline over one text.
#[derive(Debug, Clone)]
pub struct Doc {
    pub text: String,
    pub tokens: Vec<Token>,
    /// Entities sorted by start offset, never overlapping.
    pub ents: Vec<EntitySpan>,
}

/// Tokenizer plus entity components.
#[derive(Debug, Clone)]
pub struct Model {
    meta: ModelMeta,
    tokenizer: Tokenizer,
    ner: Option<EntityRecognizer>,
    ruler: Option<DateRuler>,
    active: BTreeSet<ComponentId>,
}

impl Model {
    /// A model with a tokenizer and no components.
    pub fn blank(lang: impl Into<String>) -> Self {
        Self::from_parts(ModelMeta::new(lang), None, None)
    }

    /// Assemble a model from loaded parts; every present component is active.
    pub(crate) fn from_parts(
        mut meta: ModelMeta,
        ner: Option<EntityRecognizer>,
        ruler: Option<DateRuler>,
    ) -> Self {
        meta.pipeline = ComponentId::ALL
            .into_iter()
            .filter(|id| match id {
                ComponentId::Ner => ner.is_some(),
                ComponentId::DateRuler => ruler.is_some(),
            })
            .collect();
        let active = meta.pipeline.iter().copied().collect();

        Self {
            meta,
            tokenizer: Tokenizer::new(),
            ner,
            ruler,
            active,
        }
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut ModelMeta {
        &mut self.meta
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Add the entity recognizer if missing and return it.
    pub fn add_ner(&mut self) -> &mut EntityRecognizer {
        if self.ner.is_none() {
            self.register(ComponentId::Ner);
            tracing::debug!(model = %self.meta.name, "added ner component");
        }
        self.ner.get_or_insert_with(EntityRecognizer::new)
    }

    /// Add the rule-based date matcher if missing.
    pub fn add_ruler(&mut self) -> Result<()> {
        if self.ruler.is_none() {
            self.ruler = Some(DateRuler::new()?);
            self.register(ComponentId::DateRuler);
            tracing::debug!(model = %self.meta.name, "added date ruler component");
        }
        Ok(())
    }

    fn register(&mut self, id: ComponentId) {
        if !self.meta.pipeline.contains(&id) {
            self.meta.pipeline.push(id);
            self.meta.pipeline.sort();
        }
        self.active.insert(id);
    }

    pub fn ner(&self) -> Option<&EntityRecognizer> {
        self.ner.as_ref()
    }

    pub fn ner_mut(&mut self) -> Option<&mut EntityRecognizer> {
        self.ner.as_mut()
    }

    pub fn ruler(&self) -> Option<&DateRuler> {
        self.ruler.as_ref()
    }

    pub fn has_component(&self, id: ComponentId) -> bool {
        self.meta.pipeline.contains(&id)
    }

    /// Labels on the recognizer's output layer; empty without one.
    pub fn labels(&self) -> LabelSet {
        self.ner
            .as_ref()
            .map(|ner| ner.labels().clone())
            .unwrap_or_default()
    }

    /// The recognizer's move names; empty without one.
    pub fn move_names(&self) -> Vec<String> {
        self.ner
            .as_ref()
            .map(EntityRecognizer::move_names)
            .unwrap_or_default()
    }

    /// Names of the components present, in pipeline order.
    pub fn pipe_names(&self) -> Vec<&'static str> {
        self.meta.pipeline.iter().map(ComponentId::name).collect()
    }

    pub fn active_components(&self) -> &BTreeSet<ComponentId> {
        &self.active
    }

    /// Restrict the active components until the returned guard drops.
    ///
    /// Ids of components the model does not have are ignored.
    pub fn select_components<I>(&mut self, ids: I) -> ComponentScope<'_>
    where
        I: IntoIterator<Item = ComponentId>,
    {
        let selected: BTreeSet<ComponentId> = ids
            .into_iter()
            .filter(|id| self.has_component(*id))
            .collect();
        tracing::debug!(?selected, "selecting components");
        let previous = std::mem::replace(&mut self.active, selected);
        ComponentScope {
            model: self,
            previous,
        }
    }

    /// Run the active components over `text`.
    pub fn pipe(&self, text: &str) -> Result<Doc> {
        self.pipe_with(text, &self.active)
    }

    /// Run the components in `active` over `text`, in pipeline order.
    pub fn pipe_with(&self, text: &str, active: &BTreeSet<ComponentId>) -> Result<Doc> {
        let tokens = self.tokenizer.tokenize(text);
        let mut ents: Vec<EntitySpan> = Vec::new();

        if let Some(ner) = self.ner.as_ref().filter(|_| active.contains(&ComponentId::Ner)) {
            for (first, end, label) in ner.predict_spans(&tokens)? {
                let label = ner.labels().get(label).ok_or_else(|| {
                    LeaseNerError::Decode(format!("predicted unknown label index {label}"))
                })?;
                let (start_tok, end_tok) = (&tokens[first], &tokens[end - 1]);
                ents.push(EntitySpan {
                    start: start_tok.start,
                    end: end_tok.end,
                    label: label.to_string(),
                    text: text[start_tok.byte_start..end_tok.byte_end].to_string(),
                });
            }
        }

        if let Some(ruler) = self
            .ruler
            .as_ref()
            .filter(|_| active.contains(&ComponentId::DateRuler))
        {
            for m in ruler.find(text) {
                let overlaps = ents.iter().any(|e| m.start < e.end && e.start < m.end);
                if !overlaps {
                    ents.push(EntitySpan {
                        start: m.start,
                        end: m.end,
                        label: m.label.to_string(),
                        text: char_slice(text, m.start, m.end),
                    });
                }
            }
            ents.sort_by_key(|e| e.start);
        }

        Ok(Doc {
            text: text.to_string(),
            tokens,
            ents,
        })
    }

    /// Tokenize and tag an example against the recognizer's labels.
    ///
    /// # Errors
    ///
    /// `Configuration` if the model has no recognizer or the example uses a
    /// label it does not know.
    pub fn make_gold(&self, example: &TrainingExample) -> Result<GoldSequence> {
        let ner = self.ner.as_ref().ok_or_else(|| {
            LeaseNerError::Configuration("model has no ner component".to_string())
        })?;
        example.to_gold(&self.tokenizer, ner.labels())
    }

    /// One update step of every active trainable component.
    ///
    /// Returns the summed loss; inactive components stay frozen.
    pub fn update(
        &mut self,
        batch: &[&GoldSequence],
        options: UpdateOptions,
        rng: &mut Rand32,
    ) -> Result<f32> {
        if !self.active.contains(&ComponentId::Ner) {
            return Ok(0.0);
        }
        match self.ner.as_mut() {
            Some(ner) => ner.update(batch, options, rng),
            None => Err(LeaseNerError::Configuration(
                "model has no ner component".to_string(),
            )),
        }
    }
}

/// Guard returned by [`Model::select_components`].
///
/// Derefs to the model; restores the previously active components on drop.
pub struct ComponentScope<'a> {
    model: &'a mut Model,
    previous: BTreeSet<ComponentId>,
}

impl Deref for ComponentScope<'_> {
    type Target = Model;

    fn deref(&self) -> &Model {
        self.model
    }
}

impl DerefMut for ComponentScope<'_> {
    fn deref_mut(&mut self) -> &mut Model {
        self.model
    }
}

impl Drop for ComponentScope<'_> {
    fn drop(&mut self) {
        self.model.active = std::mem::take(&mut self.previous);
    }
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Run `model` over `text` and return the recognized spans.
///
/// Read-only; offsets are chars and always lie within `text`.
pub fn evaluate(model: &Model, text: &str) -> Result<Vec<EntitySpan>> {
    Ok(model.pipe(text)?.ents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::RawExample;
    use crate::labels::{DATE, END_DATE, START_DATE};

    const ONSET: &str = "the onset will be on Jan 4, 2019 and the ending will be on June 14, 2034";

    const ONSET_ROW: RawExample = (ONSET, &[(21, 32, START_DATE), (59, 72, END_DATE)]);

    fn onset_example() -> TrainingExample {
        TrainingExample::from_raw(&ONSET_ROW)
    }

    #[test]
    fn test_blank_has_no_components() {
        let model = Model::blank("en");
        assert!(model.pipe_names().is_empty());
        assert!(model.move_names().is_empty());
        assert!(model.pipe("anything at all").unwrap().ents.is_empty());
    }

    #[test]
    fn test_add_components_in_pipeline_order() {
        let mut model = Model::blank("en");
        model.add_ruler().unwrap();
        model.add_ner().add_label(END_DATE);
        assert_eq!(model.pipe_names(), vec!["ner", "date_ruler"]);
        assert_eq!(model.move_names(), vec!["O", "B-END_DATE", "I-END_DATE"]);
    }

    #[test]
    fn test_component_id_from_str() {
        assert_eq!("ner".parse::<ComponentId>().unwrap(), ComponentId::Ner);
        assert_eq!(
            "date_ruler".parse::<ComponentId>().unwrap(),
            ComponentId::DateRuler
        );
        assert!("tagger".parse::<ComponentId>().is_err());
    }

    #[test]
    fn test_select_components_restores_on_drop() {
        let mut model = Model::blank("en");
        model.add_ner();
        model.add_ruler().unwrap();
        let before = model.active_components().clone();

        {
            let scoped = model.select_components([ComponentId::Ner]);
            assert_eq!(scoped.active_components().len(), 1);
            assert!(scoped.active_components().contains(&ComponentId::Ner));
        }

        assert_eq!(model.active_components(), &before);
    }

    #[test]
    fn test_select_components_ignores_missing() {
        let mut model = Model::blank("en");
        model.add_ner();
        let scoped = model.select_components([ComponentId::DateRuler]);
        assert!(scoped.active_components().is_empty());
    }

    #[test]
    fn test_ruler_labels_dates() {
        let mut model = Model::blank("en");
        model.add_ruler().unwrap();
        let ents = evaluate(&model, ONSET).unwrap();
        assert_eq!(ents.len(), 2);
        assert_eq!(ents[0].label, DATE);
        assert_eq!(ents[0].text, "Jan 4, 2019");
        assert_eq!((ents[1].start, ents[1].end), (59, 72));
    }

    #[test]
    fn test_inactive_ner_is_frozen() {
        let mut model = Model::blank("en");
        model.add_ner().add_label(START_DATE);
        model.ner_mut().unwrap().add_label(END_DATE);
        model.add_ruler().unwrap();
        let gold = model.make_gold(&onset_example()).unwrap();
        let mut rng = Rand32::new(0);

        let mut scoped = model.select_components([ComponentId::DateRuler]);
        let loss = scoped.update(&[&gold], UpdateOptions::default(), &mut rng).unwrap();
        assert_eq!(loss, 0.0);
        drop(scoped);

        assert_eq!(model.ner().unwrap().num_features(), 0);
    }

    #[test]
    fn test_make_gold_without_ner() {
        let model = Model::blank("en");
        assert!(matches!(
            model.make_gold(&onset_example()),
            Err(LeaseNerError::Configuration(_))
        ));
    }

    #[test]
    fn test_trained_spans_within_bounds() {
        let mut model = Model::blank("en");
        let ner = model.add_ner();
        ner.add_label(START_DATE);
        ner.add_label(END_DATE);
        let gold = model.make_gold(&onset_example()).unwrap();
        let mut rng = Rand32::new(3);
        let options = UpdateOptions {
            dropout: 0.0,
            learning_rate: 1.0,
        };
        for _ in 0..30 {
            model.update(&[&gold], options, &mut rng).unwrap();
        }

        let len = ONSET.chars().count();
        let ents = evaluate(&model, ONSET).unwrap();
        assert!(ents.iter().all(|e| e.start < e.end && e.end <= len));
        let labels: Vec<&str> = ents.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec![START_DATE, END_DATE]);
    }
}
