//! Per-sample metadata records.
//!
//! - [`SyntheticMetadata`]: written next to each rendered synthetic image.
//! - [`CaptureRecord`]: raw annotation of a real photograph, as supplied by
//!   the capture dataset.
//! - [`CaptureMetadata`]: normalized form of a [`CaptureRecord`].
//! - [`LabelSource`]: the part of either metadata form the label normalizer
//!   reads.

use chesslabel_core::{Board, BoundingBox, ImageSize};
use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::camera::{classify_camera, CameraPosition, CameraSpecs};
use crate::generate::{capture_boxes, synthetic_boxes, BoxParams};

/// Metadata of a synthetic (rendered) sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyntheticMetadata {
    pub fen: Board,
    pub bounding_boxes: Vec<BoundingBox>,
}

impl SyntheticMetadata {
    /// Piece boxes followed by the four image-corner boxes.
    pub fn from_board(board: &Board, image: ImageSize, params: &BoxParams) -> Self {
        Self {
            fen: *board,
            bounding_boxes: synthetic_boxes(board, image, params),
        }
    }
}

/// One annotated piece of a real capture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceAnnotation {
    /// Piece symbol, e.g. `"Q"`.
    pub piece: String,
    /// Board square, e.g. `"d1"`.
    pub square: String,
    /// Pixel box `[left, top, width, height]`.
    #[serde(rename = "box")]
    pub bbox: [f64; 4],
}

/// Raw annotation of a real capture.
///
/// `fen` is carried through verbatim; capture datasets may use placement-only
/// or full six-field notation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub fen: String,
    #[serde(default)]
    pub camera: Option<CameraSpecs>,
    /// Board corner points in pixels.
    #[serde(default)]
    pub corners: Vec<Point2<f64>>,
    #[serde(default)]
    pub pieces: Vec<PieceAnnotation>,
}

/// Normalized metadata of a real capture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureMetadata {
    pub fen: String,
    pub camera_position: CameraPosition,
    pub bounding_boxes: Vec<BoundingBox>,
}

impl CaptureMetadata {
    /// Classify the camera view and build corner boxes followed by piece boxes.
    pub fn from_record(record: &CaptureRecord, params: &BoxParams) -> Self {
        let camera_position = classify_camera(record.camera.as_ref());
        debug!(
            "capture {}: camera {}, {} corners, {} pieces",
            record.fen,
            camera_position,
            record.corners.len(),
            record.pieces.len()
        );
        Self {
            fen: record.fen.clone(),
            camera_position,
            bounding_boxes: capture_boxes(record, params),
        }
    }
}

/// Any metadata record carrying `bounding_boxes`; other fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSource {
    pub bounding_boxes: Vec<BoundingBox>,
}

impl From<SyntheticMetadata> for LabelSource {
    fn from(md: SyntheticMetadata) -> Self {
        Self {
            bounding_boxes: md.bounding_boxes,
        }
    }
}

impl From<CaptureMetadata> for LabelSource {
    fn from(md: CaptureMetadata) -> Self {
        Self {
            bounding_boxes: md.bounding_boxes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTURE_JSON: &str = r#"{
        "fen": "8/8/8/8/8/8/8/4K3",
        "camera": {"angle": 12.5, "location": [-1.2, 0.1, 1.0]},
        "corners": [[5.0, 7.0], [600.0, 12.0], [590.0, 580.0], [14.0, 570.0]],
        "pieces": [{"piece": "K", "square": "e1", "box": [300, 500, 40, 60]}],
        "lighting": "dim"
    }"#;

    #[test]
    fn capture_record_normalizes_corners_then_pieces() {
        let record: CaptureRecord = serde_json::from_str(CAPTURE_JSON).expect("record");
        let md = CaptureMetadata::from_record(&record, &BoxParams::default());

        assert_eq!(md.fen, "8/8/8/8/8/8/8/4K3");
        assert_eq!(md.camera_position, CameraPosition::Left);
        assert_eq!(md.bounding_boxes.len(), 5);
        assert!(md.bounding_boxes[..4].iter().all(BoundingBox::is_corner));
        assert_eq!(md.bounding_boxes[0], BoundingBox::corner(0.0, 0.0, 20.0));
        assert_eq!(md.bounding_boxes[1], BoundingBox::corner(590.0, 2.0, 20.0));
        assert_eq!(
            md.bounding_boxes[4],
            BoundingBox::new("K", 300.0, 500.0, 40.0, 60.0).with_position("e1")
        );
    }

    #[test]
    fn capture_without_camera_is_unknown() {
        let raw = r#"{"fen": "8/8/8/8/8/8/8/8 w", "corners": [], "pieces": []}"#;
        let record: CaptureRecord = serde_json::from_str(raw).expect("record");
        let md = CaptureMetadata::from_record(&record, &BoxParams::default());
        assert_eq!(md.camera_position, CameraPosition::Unknown);
        assert!(md.bounding_boxes.is_empty());
    }

    #[test]
    fn capture_with_empty_location_is_unknown() {
        let raw = r#"{
            "fen": "8/8/8/8/8/8/8/4K3",
            "camera": {"location": []},
            "corners": [[5.0, 7.0]],
            "pieces": []
        }"#;
        let record: CaptureRecord = serde_json::from_str(raw).expect("record");
        let md = CaptureMetadata::from_record(&record, &BoxParams::default());
        assert_eq!(md.camera_position, CameraPosition::Unknown);
        assert_eq!(md.bounding_boxes, vec![BoundingBox::corner(0.0, 0.0, 20.0)]);
    }

    #[test]
    fn capture_metadata_json_shape() {
        let record: CaptureRecord = serde_json::from_str(CAPTURE_JSON).expect("record");
        let md = CaptureMetadata::from_record(&record, &BoxParams::default());
        let value = serde_json::to_value(&md).expect("serialize");
        assert_eq!(value["camera_position"], "left");
        assert_eq!(value["bounding_boxes"][4]["position"], "e1");
        assert_eq!(value["bounding_boxes"][4]["type"], "K");
    }

    #[test]
    fn synthetic_metadata_round_trips_through_json() {
        let board = Board::starting();
        let md = SyntheticMetadata::from_board(&board, ImageSize::default(), &BoxParams::default());
        let json = serde_json::to_string(&md).expect("serialize");
        let back: SyntheticMetadata = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, md);

        let source: LabelSource = serde_json::from_str(&json).expect("label source");
        assert_eq!(source.bounding_boxes.len(), 32 + 4);
    }
}
