//! Detection label normalization.
//!
//! Boxes become `class_id center_x center_y width height` records with all
//! spatial values divided by the image width or height, the plain-text
//! format used by YOLO-style detector training.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chesslabel_core::{BoundingBox, ImageSize};
use serde::{Deserialize, Serialize};

/// Default class vocabulary; class id is the index.
pub const DEFAULT_LABELS: [&str; 13] = [
    "corner", "p", "r", "n", "b", "q", "k", "P", "R", "N", "B", "Q", "K",
];

/// Errors produced while building a vocabulary or normalizing boxes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("unknown label {label:?}")]
    UnknownLabel { label: String },
    #[error("label {label:?} appears more than once in the vocabulary")]
    DuplicateLabel { label: String },
    #[error("label vocabulary is empty")]
    EmptyVocabulary,
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

/// Ordered, immutable set of class names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelVocabulary {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl LabelVocabulary {
    /// Build a vocabulary from unique, non-empty names.
    pub fn new<I, S>(names: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(LabelError::EmptyVocabulary);
        }
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(LabelError::DuplicateLabel {
                    label: name.clone(),
                });
            }
        }
        Ok(Self::from_unique(names))
    }

    fn from_unique(names: Vec<String>) -> Self {
        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self { names, ids }
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed vocabulary.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn class_id(&self, label: &str) -> Result<usize, LabelError> {
        self.ids
            .get(label)
            .copied()
            .ok_or_else(|| LabelError::UnknownLabel {
                label: label.to_owned(),
            })
    }

    pub fn name(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    pub fn manifest(&self) -> ClassManifest {
        ClassManifest {
            class_count: self.names.len(),
            class_names: self.names.clone(),
        }
    }
}

impl Default for LabelVocabulary {
    fn default() -> Self {
        Self::from_unique(DEFAULT_LABELS.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl TryFrom<Vec<String>> for LabelVocabulary {
    type Error = LabelError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<LabelVocabulary> for Vec<String> {
    fn from(vocab: LabelVocabulary) -> Self {
        vocab.names
    }
}

/// One normalized detection label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub class_id: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Space-separated fields. Coordinates always carry a decimal point
/// (`1.0`, not `1`) so existing label files are reproduced byte for byte.
impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} {:?} {:?} {:?}",
            self.class_id, self.center_x, self.center_y, self.width, self.height
        )
    }
}

/// Class count and names for configuring a detector head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassManifest {
    pub class_count: usize,
    pub class_names: Vec<String>,
}

impl ClassManifest {
    /// Training-config text: `nc: <count>` and a flow list of names.
    pub fn to_yaml(&self) -> String {
        let names: Vec<String> = self
            .class_names
            .iter()
            .map(|name| format!("'{}'", name.replace('\'', "''")))
            .collect();
        format!("nc: {}\nnames: [{}]", self.class_count, names.join(", "))
    }
}

fn check_image(image: ImageSize) -> Result<(f64, f64), LabelError> {
    if image.is_empty() {
        return Err(LabelError::InvalidImageSize {
            width: image.width,
            height: image.height,
        });
    }
    Ok((f64::from(image.width), f64::from(image.height)))
}

/// Normalize one box against the image size.
pub fn normalize_box(
    bbox: &BoundingBox,
    image: ImageSize,
    vocab: &LabelVocabulary,
) -> Result<LabelRecord, LabelError> {
    let (img_w, img_h) = check_image(image)?;
    let class_id = vocab.class_id(&bbox.label)?;
    let (cx, cy) = bbox.center();
    Ok(LabelRecord {
        class_id,
        center_x: cx / img_w,
        center_y: cy / img_h,
        width: bbox.width / img_w,
        height: bbox.height / img_h,
    })
}

/// Normalize every box, in input order. Fails on the first bad box.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(boxes, vocab), fields(num_boxes = boxes.len()))
)]
pub fn normalize_boxes(
    boxes: &[BoundingBox],
    image: ImageSize,
    vocab: &LabelVocabulary,
) -> Result<Vec<LabelRecord>, LabelError> {
    check_image(image)?;
    boxes
        .iter()
        .map(|bbox| normalize_box(bbox, image, vocab))
        .collect()
}

/// One record per line, no trailing newline.
pub fn format_label_file(records: &[LabelRecord]) -> String {
    records
        .iter()
        .map(LabelRecord::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
