//! Annotation pipeline for chess detector datasets.
//!
//! Current focus:
//! - bounding boxes from a [`Board`](chesslabel_core::Board) rendered as a
//!   full-frame image (synthetic samples),
//! - normalization of real-capture annotations (corner points, piece boxes,
//!   camera view),
//! - YOLO-style label records and the class manifest.
//!
//! Image capture, rendering, and directory layout are handled elsewhere.

mod camera;
mod generate;
mod io;
mod labels;
mod metadata;
mod summary;
mod synth;

pub use camera::{
    classify_angle, classify_camera, classify_location, planar_angle_deg, CameraPosition,
    CameraSpecs,
};
pub use generate::{
    annotated_piece_box, capture_boxes, image_corner_boxes, piece_boxes, point_corner_boxes,
    synthetic_boxes, BoxParams,
};
pub use io::{write_label_file, write_manifest_yaml, AnnotateConfig, AnnotateIoError, JsonFile};
pub use labels::{
    format_label_file, normalize_box, normalize_boxes, ClassManifest, LabelError, LabelRecord,
    LabelVocabulary, DEFAULT_LABELS,
};
pub use metadata::{CaptureMetadata, CaptureRecord, LabelSource, PieceAnnotation, SyntheticMetadata};
pub use summary::CaptureSummary;
pub use synth::{piece_multiset, random_board, SYNTHETIC_ACTIVE_COLOR};
