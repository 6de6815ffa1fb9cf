//! JSON configuration and per-file I/O helpers.
//!
//! Directory layout is left to the caller: these helpers read and write one
//! metadata record, label file, or manifest at a time.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chesslabel_core::{ImageSize, NotationError};
use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::generate::BoxParams;
use crate::labels::{format_label_file, ClassManifest, LabelError, LabelRecord, LabelVocabulary};
use crate::metadata::{CaptureMetadata, CaptureRecord, LabelSource, SyntheticMetadata};
use crate::summary::CaptureSummary;

#[derive(thiserror::Error, Debug)]
pub enum AnnotateIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Label(#[from] LabelError),
}

/// Records stored as one JSON document per file.
pub trait JsonFile: Serialize + DeserializeOwned {
    /// Load a JSON document from disk.
    fn load_json(path: impl AsRef<Path>) -> Result<Self, AnnotateIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this value to disk as compact JSON.
    fn write_json(&self, path: impl AsRef<Path>) -> Result<(), AnnotateIoError> {
        let path = path.as_ref();
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

impl JsonFile for SyntheticMetadata {}
impl JsonFile for CaptureRecord {}
impl JsonFile for CaptureMetadata {}
impl JsonFile for LabelSource {}
impl JsonFile for CaptureSummary {}
impl JsonFile for ClassManifest {}
impl JsonFile for AnnotateConfig {}

fn default_corner_box_size() -> f64 {
    BoxParams::default().corner_box_size
}

/// Settings for turning metadata into detector labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotateConfig {
    /// Image size used for box generation and normalization.
    #[serde(default)]
    pub image: ImageSize,
    #[serde(default = "default_corner_box_size")]
    pub corner_box_size: f64,
    /// Custom class names; the default vocabulary when absent.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub metadata_path: Option<String>,
    #[serde(default)]
    pub label_path: Option<String>,
    #[serde(default)]
    pub manifest_path: Option<String>,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            image: ImageSize::default(),
            corner_box_size: default_corner_box_size(),
            labels: None,
            metadata_path: None,
            label_path: None,
            manifest_path: None,
        }
    }
}

impl AnnotateConfig {
    pub fn box_params(&self) -> BoxParams {
        BoxParams {
            corner_box_size: self.corner_box_size,
        }
    }

    /// Build the class vocabulary, validating custom names.
    pub fn build_vocabulary(&self) -> Result<LabelVocabulary, LabelError> {
        match &self.labels {
            Some(names) => LabelVocabulary::new(names.iter().cloned()),
            None => Ok(LabelVocabulary::default()),
        }
    }

    /// Resolve the label file path.
    pub fn label_path(&self) -> PathBuf {
        self.label_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("labels.txt"))
    }

    /// Resolve the class manifest path.
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data.yaml"))
    }
}

/// Write label records as a label text file.
pub fn write_label_file(
    records: &[LabelRecord],
    path: impl AsRef<Path>,
) -> Result<(), AnnotateIoError> {
    let path = path.as_ref();
    fs::write(path, format_label_file(records))?;
    debug!("wrote {} labels to {}", records.len(), path.display());
    Ok(())
}

/// Write the class manifest as training-config YAML.
pub fn write_manifest_yaml(
    manifest: &ClassManifest,
    path: impl AsRef<Path>,
) -> Result<(), AnnotateIoError> {
    fs::write(path, manifest.to_yaml())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chesslabel_core::{Board, BoundingBox};

    #[test]
    fn config_defaults_from_empty_json() {
        let cfg: AnnotateConfig = serde_json::from_str("{}").expect("config");
        assert_eq!(cfg, AnnotateConfig::default());
        assert_eq!(cfg.image, ImageSize::new(640, 640));
        assert_eq!(cfg.box_params(), BoxParams::default());
        assert_eq!(cfg.build_vocabulary(), Ok(LabelVocabulary::default()));
        assert_eq!(cfg.label_path(), PathBuf::from("labels.txt"));
        assert_eq!(cfg.manifest_path(), PathBuf::from("data.yaml"));
    }

    #[test]
    fn config_custom_labels_are_validated() {
        let raw = r#"{"image": {"width": 416, "height": 416}, "labels": ["corner", "corner"]}"#;
        let cfg: AnnotateConfig = serde_json::from_str(raw).expect("config");
        assert_eq!(cfg.image, ImageSize::new(416, 416));
        assert!(matches!(
            cfg.build_vocabulary(),
            Err(LabelError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn metadata_round_trips_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("000.json");
        let md = SyntheticMetadata {
            fen: Board::starting(),
            bounding_boxes: vec![BoundingBox::corner(0.0, 0.0, 20.0)],
        };
        md.write_json(&path).expect("write");
        assert_eq!(SyntheticMetadata::load_json(&path).expect("load"), md);
    }

    #[test]
    fn bad_notation_in_metadata_surfaces_as_json_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"fen": "8/8 w", "bounding_boxes": []}"#).expect("write");
        assert!(matches!(
            SyntheticMetadata::load_json(&path),
            Err(AnnotateIoError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            CaptureRecord::load_json(dir.path().join("missing.json")),
            Err(AnnotateIoError::Io(_))
        ));
    }

    #[test]
    fn label_and_manifest_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let labels = dir.path().join("000.txt");
        let manifest = dir.path().join("data.yaml");
        let record = LabelRecord {
            class_id: 12,
            center_x: 0.5625,
            center_y: 0.0625,
            width: 0.125,
            height: 0.125,
        };
        write_label_file(&[record, record], &labels).expect("labels");
        write_manifest_yaml(&LabelVocabulary::default().manifest(), &manifest).expect("yaml");

        let text = fs::read_to_string(&labels).expect("read labels");
        assert_eq!(text.lines().count(), 2);
        assert!(!text.ends_with('\n'));
        let yaml = fs::read_to_string(&manifest).expect("read yaml");
        assert!(yaml.starts_with("nc: 13\nnames: ['corner'"));
    }
}
