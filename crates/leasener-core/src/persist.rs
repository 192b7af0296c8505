//! # Model Directories
//!
//! A persisted model is a directory:
//!
//! ```text
//! <dir>/meta.json        ModelMeta
//! <dir>/ner/model.json   EntityRecognizer (labels, weights, transitions)
//! ```
//!
//! The date ruler has no state; its presence is recorded in `meta.pipeline`.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{LeaseNerError, Result};
use crate::ner::EntityRecognizer;
use crate::pipeline::{ComponentId, Model, ModelMeta};
use crate::ruler::DateRuler;

pub const META_FILE: &str = "meta.json";
pub const NER_DIR: &str = "ner";
pub const NER_FILE: &str = "model.json";

/// Directory holding installed named models.
pub fn models_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("leasener").join("models"))
}

/// Resolve a base model given as a directory path or an installed name.
pub fn resolve_model_path(name: &str) -> Result<PathBuf> {
    let direct = Path::new(name);
    if direct.is_dir() {
        return Ok(direct.to_path_buf());
    }

    if let Some(installed) = models_dir().map(|dir| dir.join(name)) {
        if installed.is_dir() {
            return Ok(installed);
        }
    }

    Err(LeaseNerError::ModelLoad {
        name: name.to_string(),
        reason: match models_dir() {
            Some(dir) => format!("no model directory at that path or under {}", dir.display()),
            None => "no model directory at that path".to_string(),
        },
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| LeaseNerError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| LeaseNerError::io(path, e))?;
    writer
        .into_inner()
        .map_err(|e| LeaseNerError::io(path, e.into_error()))?
        .sync_all()
        .map_err(|e| LeaseNerError::io(path, e))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| LeaseNerError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LeaseNerError::io(path, e.into()))
}

impl Model {
    /// Write the model to `dir`, creating it if absent.
    ///
    /// All files are flushed and synced before this returns.
    ///
    /// # Errors
    ///
    /// `Io` if `dir` exists but is not a directory, or on any write failure.
    pub fn to_disk<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if dir.exists() && !dir.is_dir() {
            return Err(LeaseNerError::io(
                dir,
                io::Error::new(
                    io::ErrorKind::NotADirectory,
                    "export target exists and is not a directory",
                ),
            ));
        }
        fs::create_dir_all(dir).map_err(|e| LeaseNerError::io(dir, e))?;

        write_json(&dir.join(META_FILE), self.meta())?;
        if let Some(ner) = self.ner() {
            let ner_dir = dir.join(NER_DIR);
            fs::create_dir_all(&ner_dir).map_err(|e| LeaseNerError::io(&ner_dir, e))?;
            write_json(&ner_dir.join(NER_FILE), ner)?;
        }

        tracing::info!(path = %dir.display(), model = %self.meta().name, "saved model");
        Ok(())
    }

    /// Read a model written by [`to_disk`](Self::to_disk).
    ///
    /// # Errors
    ///
    /// `Io` if a file is missing or not valid JSON; `Consistency` if the
    /// recognizer's weights do not fit its label set.
    pub fn from_disk<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let meta: ModelMeta = read_json(&dir.join(META_FILE))?;

        let ner = if meta.pipeline.contains(&ComponentId::Ner) {
            let ner_path = dir.join(NER_DIR).join(NER_FILE);
            let ner: EntityRecognizer = read_json(&ner_path)?;
            ner.validate().map_err(|e| LeaseNerError::Consistency {
                path: ner_path.display().to_string(),
                reason: e.to_string(),
            })?;
            Some(ner)
        } else {
            None
        };
        let ruler = if meta.pipeline.contains(&ComponentId::DateRuler) {
            Some(DateRuler::new()?)
        } else {
            None
        };

        tracing::debug!(path = %dir.display(), model = %meta.name, "loaded model");
        Ok(Self::from_parts(meta, ner, ruler))
    }

    /// Load a base model by directory path or installed name.
    ///
    /// # Errors
    ///
    /// `ModelLoad` naming the model if it cannot be found or read.
    pub fn load(name: &str) -> Result<Self> {
        let path = resolve_model_path(name)?;
        Self::from_disk(&path).map_err(|e| LeaseNerError::ModelLoad {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Persist `model` to `dir`. See [`Model::to_disk`].
pub fn export<P: AsRef<Path>>(model: &Model, dir: P) -> Result<()> {
    model.to_disk(dir)
}

/// Reload the model in `dir` and check it recognizes exactly `expected_moves`.
///
/// # Errors
///
/// `Consistency` naming both move lists on mismatch or if the files are
/// mis-shaped; `Io` if they cannot be read or parsed.
pub fn reload_and_verify<P: AsRef<Path>>(dir: P, expected_moves: &[String]) -> Result<Model> {
    let dir = dir.as_ref();
    tracing::info!(path = %dir.display(), "loading from");
    let model = Model::from_disk(dir)?;

    let found = model.move_names();
    if found != expected_moves {
        return Err(LeaseNerError::Consistency {
            path: dir.display().to_string(),
            reason: format!("moves {found:?} do not match expected {expected_moves:?}"),
        });
    }
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{END_DATE, START_DATE};

    fn labelled_model() -> Model {
        let mut model = Model::blank("en");
        model.meta_mut().name = "lease_dates".to_string();
        let ner = model.add_ner();
        ner.add_label(START_DATE);
        ner.add_label(END_DATE);
        model.add_ruler().unwrap();
        model
    }

    #[test]
    fn test_export_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("model");
        let model = labelled_model();
        let moves = model.move_names();

        export(&model, &out).unwrap();
        assert!(out.join(META_FILE).is_file());
        assert!(out.join(NER_DIR).join(NER_FILE).is_file());

        let reloaded = reload_and_verify(&out, &moves).unwrap();
        assert_eq!(reloaded.meta(), model.meta());
        assert_eq!(reloaded.ner(), model.ner());
        assert_eq!(reloaded.pipe_names(), vec!["ner", "date_ruler"]);
    }

    #[test]
    fn test_export_onto_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("not_a_dir");
        fs::write(&target, b"keep me").unwrap();

        let err = export(&labelled_model(), &target).unwrap_err();
        assert!(matches!(err, LeaseNerError::Io { .. }));
        assert_eq!(fs::read(&target).unwrap(), b"keep me");
    }

    #[test]
    fn test_export_into_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        export(&labelled_model(), dir.path()).unwrap();
        export(&labelled_model(), dir.path()).unwrap();
        assert!(dir.path().join(META_FILE).is_file());
    }

    #[test]
    fn test_reload_detects_move_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        export(&labelled_model(), dir.path()).unwrap();

        let expected = vec!["O".to_string(), "B-END_DATE".to_string(), "I-END_DATE".to_string()];
        let err = reload_and_verify(dir.path(), &expected).unwrap_err();
        match err {
            LeaseNerError::Consistency { reason, .. } => {
                assert!(reason.contains("B-START_DATE"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reload_corrupt_meta_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let model = labelled_model();
        export(&model, dir.path()).unwrap();
        fs::write(dir.path().join(META_FILE), b"{not json").unwrap();

        let err = reload_and_verify(dir.path(), &model.move_names()).unwrap_err();
        match err {
            LeaseNerError::Io { path, .. } => assert!(path.ends_with(META_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reload_misshaped_recognizer_is_consistency() {
        let dir = tempfile::tempdir().unwrap();
        let model = labelled_model();
        export(&model, dir.path()).unwrap();

        let ner_path = dir.path().join(NER_DIR).join(NER_FILE);
        let mut saved: serde_json::Value =
            serde_json::from_slice(&fs::read(&ner_path).unwrap()).unwrap();
        let rows = saved["transitions"].as_array_mut().unwrap();
        let extra = rows[0].clone();
        rows.push(extra);
        fs::write(&ner_path, serde_json::to_vec(&saved).unwrap()).unwrap();

        let err = reload_and_verify(dir.path(), &model.move_names()).unwrap_err();
        match err {
            LeaseNerError::Consistency { path, reason } => {
                assert!(path.ends_with(NER_FILE));
                assert!(reason.contains("transition"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reload_missing_dir_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = reload_and_verify(dir.path().join("missing"), &[]).unwrap_err();
        assert!(matches!(err, LeaseNerError::Io { .. }));
    }

    #[test]
    fn test_load_by_path_and_unknown_name() {
        let dir = tempfile::tempdir().unwrap();
        export(&labelled_model(), dir.path()).unwrap();

        let path = dir.path().to_str().unwrap();
        assert_eq!(Model::load(path).unwrap().meta().name, "lease_dates");

        assert!(matches!(
            Model::load("no_such_model_installed_here"),
            Err(LeaseNerError::ModelLoad { .. })
        ));
    }

    #[test]
    fn test_load_corrupt_model_is_model_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(META_FILE), b"{not json").unwrap();
        let path = dir.path().to_str().unwrap();
        assert!(matches!(
            Model::load(path),
            Err(LeaseNerError::ModelLoad { .. })
        ));
    }
}
