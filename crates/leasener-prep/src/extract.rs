//! Text extraction from lease documents.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use leasener_core::{LeaseNerError, Result};

/// Source format, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    PlainText,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => SourceKind::Pdf,
            _ => SourceKind::PlainText,
        }
    }
}

/// Text pulled out of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub path: PathBuf,
    pub text: String,
}

/// Outcome of extracting a set of documents.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub documents: Vec<ExtractedDocument>,
    pub failures: Vec<LeaseNerError>,
}

/// PDF and plaintext extractor.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    /// Chars dropped from the start of every document (cover pages, boilerplate)
    pub skip_chars: usize,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_chars(mut self, skip_chars: usize) -> Self {
        self.skip_chars = skip_chars;
        self
    }

    /// Extract the text of one document.
    ///
    /// # Errors
    ///
    /// `Extraction` if the file cannot be read or decoded, or nothing but
    /// whitespace is left after skipping.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let failed = |reason: String| LeaseNerError::Extraction {
            path: path.display().to_string(),
            reason,
        };

        let bytes = std::fs::read(path).map_err(|e| failed(e.to_string()))?;
        let text = match SourceKind::from_path(path) {
            SourceKind::Pdf => {
                pdf_extract::extract_text_from_mem(&bytes).map_err(|e| failed(e.to_string()))?
            }
            SourceKind::PlainText => {
                String::from_utf8(bytes).map_err(|e| failed(format!("not UTF-8: {e}")))?
            }
        };

        let text: String = text.chars().skip(self.skip_chars).collect();
        if text.trim().is_empty() {
            return Err(failed(format!(
                "no text left after skipping {} chars",
                self.skip_chars
            )));
        }

        tracing::debug!(path = %path.display(), chars = text.chars().count(), "extracted text");
        Ok(text)
    }

    /// Extract every document, logging and collecting failures instead of
    /// stopping at the first one.
    pub fn extract_all<P: AsRef<Path>>(&self, paths: &[P]) -> ExtractionReport {
        let mut report = ExtractionReport::default();
        for path in paths {
            let path = path.as_ref();
            match self.extract(path) {
                Ok(text) => report.documents.push(ExtractedDocument {
                    path: path.to_path_buf(),
                    text,
                }),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping document");
                    report.failures.push(e);
                }
            }
        }
        report
    }
}

/// Non-blank lines of `text`, trailing whitespace removed.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// `<dir>/<stem>.txt` for an extracted `input`.
pub fn text_output_path(input: &Path, dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".txt");
    dir.join(name)
}

/// Fail if two inputs would be written to the same output file.
///
/// # Errors
///
/// `Configuration` naming the shared output and both inputs.
pub fn ensure_distinct_outputs<'a, I>(pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a Path, PathBuf)>,
{
    let mut seen: Vec<(&Path, PathBuf)> = Vec::new();
    let mut outputs = HashSet::new();
    for (input, output) in pairs {
        if !outputs.insert(output.clone()) {
            let first = seen
                .iter()
                .find(|(_, out)| *out == output)
                .map(|(path, _)| path.display().to_string())
                .unwrap_or_default();
            return Err(LeaseNerError::Configuration(format!(
                "{} and {} would both be written to {}",
                first,
                input.display(),
                output.display()
            )));
        }
        seen.push((input, output));
    }
    Ok(())
}
