//! # Entity Recognizer
//!
//! Feature-based linear-chain tagger over the BIO tags of a [`LabelSet`].
//! Emission scores are sums of per-feature weight vectors; a transition
//! matrix scores adjacent tag pairs; decoding is constrained Viterbi.
//!
//! Training is a batched structured-perceptron update: every example in a
//! batch is decoded with the weights as they stood at the start of the
//! batch, and all corrections are applied together afterwards.

use std::collections::{BTreeMap, HashMap};

use oorandom::Rand32;
use serde::{Deserialize, Serialize};

use crate::error::{LeaseNerError, Result};
use crate::features::{self, BIAS};
use crate::labels::{LabelSet, Tag};
use crate::tokenizer::Token;
use crate::viterbi::ViterbiDecoder;

/// A tokenized training sequence with its gold tags.
///
/// `None` marks tokens whose gold tag is unknown (a span that did not align
/// with token boundaries); they contribute neither loss nor updates.
#[derive(Debug, Clone)]
pub struct GoldSequence {
    pub tokens: Vec<Token>,
    pub tags: Vec<Option<Tag>>,
}

/// Options for a single update step.
#[derive(Debug, Clone, Copy)]
pub struct UpdateOptions {
    /// Probability of dropping each feature while computing the update.
    pub dropout: f32,
    /// Step size applied to every weight correction.
    pub learning_rate: f32,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            dropout: 0.35,
            learning_rate: 1.0,
        }
    }
}

/// Statistical named-entity recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecognizer {
    labels: LabelSet,
    /// Feature name to per-tag weights.
    weights: BTreeMap<String, Vec<f32>>,
    /// `transitions[prev][curr]`
    transitions: Vec<Vec<f32>>,
}

impl EntityRecognizer {
    /// Create a recognizer with no labels (only the `O` tag).
    pub fn new() -> Self {
        Self {
            labels: LabelSet::new(),
            weights: BTreeMap::new(),
            transitions: vec![vec![0.0]],
        }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn num_tags(&self) -> usize {
        self.labels.num_tags()
    }

    /// Tag names in index order.
    pub fn move_names(&self) -> Vec<String> {
        self.labels.move_names()
    }

    /// Number of features with learned weights.
    pub fn num_features(&self) -> usize {
        self.weights.len()
    }

    /// Register a label on the output layer.
    ///
    /// New tags get zero weights. Returns `false` if the label already existed.
    pub fn add_label(&mut self, label: &str) -> bool {
        if !self.labels.add(label) {
            return false;
        }

        let num_tags = self.num_tags();
        for weights in self.weights.values_mut() {
            weights.resize(num_tags, 0.0);
        }
        for row in &mut self.transitions {
            row.resize(num_tags, 0.0);
        }
        self.transitions.resize(num_tags, vec![0.0; num_tags]);

        tracing::debug!(label, num_tags, "registered entity label");
        true
    }

    /// Check the weight shapes against the label set, e.g. after loading.
    pub fn validate(&self) -> Result<()> {
        let num_tags = self.num_tags();
        if self.transitions.len() != num_tags
            || self.transitions.iter().any(|row| row.len() != num_tags)
        {
            return Err(LeaseNerError::Decode(format!(
                "transition matrix does not match {num_tags} tags"
            )));
        }
        if let Some((feature, _)) = self.weights.iter().find(|(_, w)| w.len() != num_tags) {
            return Err(LeaseNerError::Decode(format!(
                "weights for feature {feature:?} do not match {num_tags} tags"
            )));
        }
        Ok(())
    }

    fn emissions(&self, features: &[Vec<String>]) -> Vec<Vec<f32>> {
        let num_tags = self.num_tags();
        features
            .iter()
            .map(|token_features| {
                let mut scores = vec![0.0f32; num_tags];
                for feature in token_features {
                    if let Some(weights) = self.weights.get(feature) {
                        for (score, w) in scores.iter_mut().zip(weights) {
                            *score += w;
                        }
                    }
                }
                scores
            })
            .collect()
    }

    fn decode(&self, features: &[Vec<String>]) -> Result<Vec<Tag>> {
        let emissions = self.emissions(features);
        let path = ViterbiDecoder::new(self.num_tags()).decode(&emissions, &self.transitions)?;
        path.into_iter()
            .map(|idx| {
                Tag::from_index(idx)
                    .ok_or_else(|| LeaseNerError::Decode(format!("invalid tag index: {idx}")))
            })
            .collect()
    }

    /// Predict one tag per token.
    pub fn predict(&self, tokens: &[Token]) -> Result<Vec<Tag>> {
        self.decode(&features::sequence_features(tokens))
    }

    /// Predict entity spans as `(first_token, end_token, label_index)`.
    pub fn predict_spans(&self, tokens: &[Token]) -> Result<Vec<(usize, usize, usize)>> {
        Ok(tags_to_spans(&self.predict(tokens)?))
    }

    /// Perform one update step against every sequence in `batch` at once.
    ///
    /// Returns the batch loss: the number of tokens whose predicted tag
    /// disagreed with a known gold tag.
    pub fn update(
        &mut self,
        batch: &[&GoldSequence],
        options: UpdateOptions,
        rng: &mut Rand32,
    ) -> Result<f32> {
        let num_tags = self.num_tags();
        let lr = options.learning_rate;
        let mut weight_deltas: HashMap<String, Vec<f32>> = HashMap::new();
        let mut transition_deltas = vec![vec![0.0f32; num_tags]; num_tags];
        let mut loss = 0.0f32;

        for gold in batch {
            if gold.tokens.len() != gold.tags.len() {
                return Err(LeaseNerError::InvalidExample(format!(
                    "{} tokens but {} gold tags",
                    gold.tokens.len(),
                    gold.tags.len()
                )));
            }
            if let Some(tag) = gold.tags.iter().flatten().find(|t| t.index() >= num_tags) {
                return Err(LeaseNerError::Configuration(format!(
                    "gold tag {tag} is outside the {num_tags} registered tags"
                )));
            }

            let features: Vec<Vec<String>> = features::sequence_features(&gold.tokens)
                .into_iter()
                .map(|token_features| drop_features(token_features, options.dropout, rng))
                .collect();
            let predicted = self.decode(&features)?;

            // Unknown gold positions take the prediction, so they never push.
            let target: Vec<Tag> = gold
                .tags
                .iter()
                .zip(&predicted)
                .map(|(gold_tag, pred)| gold_tag.unwrap_or(*pred))
                .collect();

            for (i, (truth, pred)) in target.iter().zip(&predicted).enumerate() {
                if truth == pred {
                    continue;
                }
                loss += 1.0;
                for feature in &features[i] {
                    let delta = weight_deltas
                        .entry(feature.clone())
                        .or_insert_with(|| vec![0.0; num_tags]);
                    delta[truth.index()] += lr;
                    delta[pred.index()] -= lr;
                }
            }

            for i in 1..target.len() {
                let gold_pair = (target[i - 1].index(), target[i].index());
                let pred_pair = (predicted[i - 1].index(), predicted[i].index());
                if gold_pair != pred_pair {
                    transition_deltas[gold_pair.0][gold_pair.1] += lr;
                    transition_deltas[pred_pair.0][pred_pair.1] -= lr;
                }
            }
        }

        for (feature, delta) in weight_deltas {
            let weights = self
                .weights
                .entry(feature)
                .or_insert_with(|| vec![0.0; num_tags]);
            for (w, d) in weights.iter_mut().zip(delta) {
                *w += d;
            }
        }
        for (row, delta_row) in self.transitions.iter_mut().zip(transition_deltas) {
            for (t, d) in row.iter_mut().zip(delta_row) {
                *t += d;
            }
        }

        Ok(loss)
    }
}

impl Default for EntityRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop each non-bias feature with probability `dropout`.
fn drop_features(features: Vec<String>, dropout: f32, rng: &mut Rand32) -> Vec<String> {
    if dropout <= 0.0 {
        return features;
    }
    features
        .into_iter()
        .filter(|feature| feature == BIAS || rng.rand_float() >= dropout)
        .collect()
}

/// Group a BIO tag sequence into `(first_token, end_token, label_index)` spans.
///
/// A stray `I-L` that does not continue an `L` entity opens a new one.
pub fn tags_to_spans(tags: &[Tag]) -> Vec<(usize, usize, usize)> {
    let mut spans = Vec::new();
    let mut open: Option<(usize, usize)> = None;

    for (i, tag) in tags.iter().enumerate() {
        match *tag {
            Tag::Inside(label) if open.is_some_and(|(_, l)| l == label) => {}
            Tag::Begin(label) | Tag::Inside(label) => {
                if let Some((start, l)) = open.take() {
                    spans.push((start, i, l));
                }
                open = Some((i, label));
            }
            Tag::Outside => {
                if let Some((start, l)) = open.take() {
                    spans.push((start, i, l));
                }
            }
        }
    }
    if let Some((start, l)) = open {
        spans.push((start, tags.len(), l));
    }

    spans
}
