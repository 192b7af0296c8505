//! Fine-tune the lease date recognizer.
//!
//! Trains on a built-in task or a JSON Lines file, prints what the trained
//! model finds in a test text, then optionally saves the model, reloads it
//! and checks the reloaded recognizer knows the same moves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use leasener_core::example::{read_jsonl, referenced_labels};
use leasener_core::{EntitySpan, Model, Task, evaluate, export, reload_and_verify};
use leasener_trainer::{BatchSchedule, TrainConfig, Trainer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train an entity recognizer for lease start and end dates")]
#[command(version)]
struct Cli {
    /// Base model directory or installed name; a blank model if omitted
    #[arg(short, long)]
    model: Option<String>,

    /// Name written to the saved model's meta
    #[arg(long = "new-model-name", default_value = "lease_dates")]
    new_model_name: String,

    /// Directory to save the trained model to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of training iterations
    #[arg(short = 'n', long)]
    n_iter: Option<usize>,

    /// Feature dropout rate
    #[arg(long)]
    dropout: Option<f32>,

    /// Update step size
    #[arg(long)]
    learning_rate: Option<f32>,

    /// First batch size of the compounding schedule
    #[arg(long)]
    batch_start: Option<f64>,

    /// Largest batch size of the compounding schedule
    #[arg(long)]
    batch_stop: Option<f64>,

    /// Per-batch growth factor of the compounding schedule
    #[arg(long)]
    batch_compound: Option<f64>,

    /// Seed for shuffling and dropout
    #[arg(long, env = "LEASENER_SEED")]
    seed: Option<u64>,

    /// Built-in example set to train on
    #[arg(short, long, default_value = "lease-dates")]
    task: Task,

    /// JSON Lines examples to train on instead of the task's
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON file with training options; flags override it
    #[arg(short, long, env = "LEASENER_CONFIG")]
    config: Option<PathBuf>,

    /// Text to run the trained model on
    #[arg(long)]
    test_text: Option<String>,
}

impl Cli {
    fn train_config(&self) -> Result<TrainConfig> {
        let mut config = match &self.config {
            Some(path) => TrainConfig::from_json_file(path)
                .with_context(|| format!("reading training config {}", path.display()))?,
            None => TrainConfig::new(),
        };

        if let Some(n_iter) = self.n_iter {
            config = config.with_iterations(n_iter);
        }
        if let Some(dropout) = self.dropout {
            config = config.with_dropout(dropout);
        }
        if let Some(learning_rate) = self.learning_rate {
            config = config.with_learning_rate(learning_rate);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        let batch = config.batch;
        config = config.with_batch(BatchSchedule::new(
            self.batch_start.unwrap_or(batch.start),
            self.batch_stop.unwrap_or(batch.stop),
            self.batch_compound.unwrap_or(batch.compound),
        ));

        Ok(config)
    }
}

fn print_entities(text: &str, ents: &[EntitySpan]) {
    println!("Entities in {text:?}");
    for ent in ents {
        println!("{} {}", ent.label, ent.text);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.train_config()?;

    let (examples, labels) = match &cli.data {
        Some(path) => {
            let examples = read_jsonl(path)
                .with_context(|| format!("reading examples from {}", path.display()))?;
            let labels = referenced_labels(&examples);
            if labels.is_empty() {
                (examples, cli.task.labels())
            } else {
                (examples, labels)
            }
        }
        None => (cli.task.examples(), cli.task.labels()),
    };
    info!(
        examples = examples.len(),
        labels = ?labels.iter().collect::<Vec<_>>(),
        "training data"
    );

    let trainer = Trainer::new(config);
    let mut model = trainer
        .prepare_model(cli.model.as_deref(), &labels)
        .context("preparing model")?;
    if cli.model.is_none() {
        model.add_ruler()?;
    }
    let move_names = model.move_names();

    let run = trainer
        .train(&mut model, &examples, &labels)
        .context("training failed")?;
    info!(iterations = run.iteration_count(), losses = ?run.losses(), "training complete");

    let test_text = cli
        .test_text
        .clone()
        .unwrap_or_else(|| cli.task.test_text().to_string());
    print_entities(&test_text, &evaluate(&model, &test_text)?);

    if let Some(output_dir) = &cli.output_dir {
        model.meta_mut().name = cli.new_model_name.clone();
        export(&model, output_dir)
            .with_context(|| format!("saving model to {}", output_dir.display()))?;
        println!("Saved model to {}", output_dir.display());

        let reloaded: Model = reload_and_verify(output_dir, &move_names)
            .with_context(|| format!("reloading model from {}", output_dir.display()))?;
        print_entities(&test_text, &evaluate(&reloaded, &test_text)?);
    }

    Ok(())
}
