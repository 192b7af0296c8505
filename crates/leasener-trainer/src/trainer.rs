//! Training loop for the entity recognizer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use leasener_core::example::validate_all;
use leasener_core::{
    ComponentId, GoldSequence, LabelSet, LeaseNerError, Model, Result, TrainingExample,
    UpdateOptions,
};
use oorandom::Rand32;
use serde::{Deserialize, Serialize};

use crate::schedule::{BatchSchedule, minibatch};

/// Training options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Number of passes over the examples
    pub iterations: usize,
    /// Feature dropout rate in `[0, 1]`
    pub dropout: f32,
    pub learning_rate: f32,
    /// Seed for shuffling and dropout
    pub seed: u64,
    pub batch: BatchSchedule,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            iterations: 30,
            dropout: 0.35,
            learning_rate: 1.0,
            seed: 0,
            batch: BatchSchedule::default(),
        }
    }
}

impl TrainConfig {
    /// Create a new training configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from a JSON file; missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LeaseNerError::io(path, e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        let dropout = config.dropout;
        Ok(config.with_dropout(dropout))
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the dropout rate, clamped to `[0, 1]`.
    pub fn with_dropout(mut self, dropout: f32) -> Self {
        self.dropout = dropout.clamp(0.0, 1.0);
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_batch(mut self, batch: BatchSchedule) -> Self {
        self.batch = batch;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.batch.validate()?;
        if !(0.0..=1.0).contains(&self.dropout) {
            return Err(LeaseNerError::Configuration(format!(
                "dropout must be in [0, 1], got {}",
                self.dropout
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LeaseNerError::Configuration(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    fn update_options(&self) -> UpdateOptions {
        UpdateOptions {
            dropout: self.dropout,
            learning_rate: self.learning_rate,
        }
    }
}

/// Loss of one pass over the examples.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    pub iteration: usize,
    pub loss: f32,
    pub batches: usize,
}

/// Per-epoch record of one training run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingRun {
    pub epochs: Vec<EpochReport>,
}

impl TrainingRun {
    pub fn iteration_count(&self) -> usize {
        self.epochs.len()
    }

    pub fn losses(&self) -> Vec<f32> {
        self.epochs.iter().map(|e| e.loss).collect()
    }
}

/// Drives fine-tuning of a [`Model`]'s entity recognizer.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Load `base` (a path or installed name) or start a blank model, then
    /// make sure it has a recognizer with every label of `labels`.
    pub fn prepare_model(&self, base: Option<&str>, labels: &LabelSet) -> Result<Model> {
        let mut model = match base {
            Some(name) => {
                let model = Model::load(name)?;
                tracing::info!(model = name, "loaded model");
                model
            }
            None => {
                tracing::info!("created blank 'en' model");
                Model::blank("en")
            }
        };
        register_labels(&mut model, labels);
        Ok(model)
    }

    /// Train `model` on `examples` in place.
    ///
    /// Every epoch reshuffles the examples and splits them with the batch
    /// schedule, which keeps growing across epochs. Only the recognizer is
    /// active while training.
    ///
    /// # Errors
    ///
    /// `Configuration` before any update if an example uses a label outside
    /// `labels` or the options are invalid; `InvalidExample` for bad spans.
    pub fn train(
        &self,
        model: &mut Model,
        examples: &[TrainingExample],
        labels: &LabelSet,
    ) -> Result<TrainingRun> {
        self.config.validate()?;
        validate_all(examples, labels)?;
        register_labels(model, labels);

        let golds: Vec<GoldSequence> = examples
            .iter()
            .map(|example| model.make_gold(example))
            .collect::<Result<_>>()?;

        let options = self.config.update_options();
        let mut rng = Rand32::new(self.config.seed);
        let mut sizes = self.config.batch.sizes();
        let mut order: Vec<usize> = (0..golds.len()).collect();
        let mut run = TrainingRun::default();

        tracing::info!(
            examples = golds.len(),
            iterations = self.config.iterations,
            labels = labels.len(),
            "starting training"
        );

        let mut scope = model.select_components([ComponentId::Ner]);
        for iteration in 0..self.config.iterations {
            shuffle(&mut order, &mut rng);
            let shuffled: Vec<&GoldSequence> = order.iter().map(|&i| &golds[i]).collect();
            let batches = minibatch(&shuffled, &mut sizes);

            let mut loss = 0.0f32;
            for batch in &batches {
                let batch_loss = scope.update(batch, options, &mut rng)?;
                tracing::debug!(iteration, size = batch.len(), loss = batch_loss, "batch");
                loss += batch_loss;
            }

            tracing::info!(iteration, loss, batches = batches.len(), "losses");
            run.epochs.push(EpochReport {
                iteration,
                loss,
                batches: batches.len(),
            });
        }

        Ok(run)
    }
}

/// Add a recognizer if missing and register every label on it.
pub fn register_labels(model: &mut Model, labels: &LabelSet) {
    let ner = model.add_ner();
    for label in labels.iter() {
        ner.add_label(label);
    }
}

/// Uniform Fisher-Yates shuffle.
pub fn shuffle<T>(items: &mut [T], rng: &mut Rand32) {
    for i in (1..items.len()).rev() {
        let j = rng.rand_range(0..(i as u32 + 1)) as usize;
        items.swap(i, j);
    }
}

/// Build or load a model, register `labels` and train it on `examples`.
pub fn train(
    examples: &[TrainingExample],
    labels: &LabelSet,
    config: TrainConfig,
    base_model: Option<&str>,
) -> Result<(Model, TrainingRun)> {
    let trainer = Trainer::new(config);
    let mut model = trainer.prepare_model(base_model, labels)?;
    let run = trainer.train(&mut model, examples, labels)?;
    Ok((model, run))
}
