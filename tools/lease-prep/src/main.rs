//! Lease document preparation tool
//!
//! Extracts text from lease PDFs, annotates raw lines with a model to
//! bootstrap training examples, and exports gold-standard JSON.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use leasener_core::Model;
use leasener_core::example::write_jsonl;
use leasener_prep::{
    TextExtractor, annotate_lines, ensure_distinct_outputs, gold_documents, json_output_path,
    split_lines, text_output_path, write_gold_json,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "lease-prep")]
#[command(about = "Prepare lease documents for entity recognizer training")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Chars to drop from the start of each extracted document
    #[arg(short, long, global = true, env = "LEASENER_SKIP_CHARS", default_value_t = 0)]
    skip_chars: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract plain text from PDF or text documents
    Extract {
        /// Documents to extract
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write `<name>.txt` files here instead of printing
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Annotate each line of a text file with a model, as JSON Lines examples
    Annotate {
        /// Text file, one sentence per line
        input: PathBuf,

        /// Model directory or installed name; a date ruler if omitted
        #[arg(short, long)]
        model: Option<String>,

        /// JSON Lines output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run a model over documents and write gold-standard JSON
    ExportJson {
        /// Documents to export
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Model directory or installed name; a date ruler if omitted
        #[arg(short, long)]
        model: Option<String>,

        /// Directory for the `.json` files; next to each input if omitted
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn load_model(name: Option<&str>) -> Result<Model> {
    match name {
        Some(name) => {
            let model = Model::load(name)?;
            info!(model = name, pipeline = ?model.pipe_names(), "loaded model");
            Ok(model)
        }
        None => {
            let mut model = Model::blank("en");
            model.add_ruler()?;
            Ok(model)
        }
    }
}

fn extract(extractor: &TextExtractor, inputs: &[PathBuf], output_dir: Option<&Path>) -> Result<()> {
    let report = extractor.extract_all(inputs);
    if report.documents.is_empty() {
        bail!("no document could be extracted");
    }

    if let Some(dir) = output_dir {
        ensure_distinct_outputs(
            report
                .documents
                .iter()
                .map(|doc| (doc.path.as_path(), text_output_path(&doc.path, dir))),
        )?;
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    for doc in &report.documents {
        match output_dir {
            Some(dir) => {
                let out = text_output_path(&doc.path, dir);
                std::fs::write(&out, &doc.text)
                    .with_context(|| format!("writing {}", out.display()))?;
                info!(input = %doc.path.display(), output = %out.display(), "extracted");
            }
            None => println!("{}", doc.text),
        }
    }

    if !report.failures.is_empty() {
        warn!(failed = report.failures.len(), "some documents were skipped");
    }
    Ok(())
}

fn annotate(input: &Path, model: Option<&str>, output: Option<&Path>) -> Result<()> {
    let model = load_model(model)?;
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let examples = annotate_lines(&model, split_lines(&text))?;

    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_jsonl(file, &examples)?;
            info!(path = %path.display(), examples = examples.len(), "wrote examples");
        }
        None => write_jsonl(io::stdout().lock(), &examples)?,
    }
    Ok(())
}

fn export_json(
    extractor: &TextExtractor,
    inputs: &[PathBuf],
    model: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<()> {
    let model = load_model(model)?;
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let report = extractor.extract_all(inputs);
    ensure_distinct_outputs(
        report
            .documents
            .iter()
            .map(|doc| (doc.path.as_path(), json_output_path(&doc.path, output_dir))),
    )?;
    for doc in &report.documents {
        let docs = gold_documents(&model, [doc.text.as_str()])?;
        let out = json_output_path(&doc.path, output_dir);
        write_gold_json(&out, &docs)?;
        println!("{}", out.display());
    }

    if report.documents.is_empty() {
        bail!("no document could be extracted");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let extractor = TextExtractor::new().with_skip_chars(cli.skip_chars);

    match &cli.command {
        Commands::Extract { inputs, output_dir } => {
            extract(&extractor, inputs, output_dir.as_deref())
        }
        Commands::Annotate {
            input,
            model,
            output,
        } => annotate(input, model.as_deref(), output.as_deref()),
        Commands::ExportJson {
            inputs,
            model,
            output_dir,
        } => export_json(&extractor, inputs, model.as_deref(), output_dir.as_deref()),
    }
}
