//! High-level facade crate for the `chesslabel-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the board codec (`chesslabel-core`) and the
//!   annotation pipeline (`chesslabel-annotate`),
//! - end-to-end helpers that go from a board or a capture record to
//!   detector-ready label records.
//!
//! ## Quickstart
//!
//! ```
//! use chesslabel::annotate::{BoxParams, LabelVocabulary};
//! use chesslabel::core::{Board, ImageSize};
//! use chesslabel::pipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let board: Board = "4K3/8/8/8/8/8/8/8 w".parse()?;
//! let labels = pipeline::synthetic_labels(
//!     &board,
//!     ImageSize::new(640, 640),
//!     &BoxParams::default(),
//!     &LabelVocabulary::default(),
//! )?;
//! assert_eq!(labels[0].class_id, 12);
//! assert_eq!(labels[0].center_x, 0.5625);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `chesslabel::core`: squares, boards, notation, bounding boxes, logger.
//! - `chesslabel::annotate`: camera view, box generation, labels, metadata I/O.
//! - `chesslabel::pipeline`: end-to-end helpers.

pub use chesslabel_annotate as annotate;
pub use chesslabel_core as core;

pub use chesslabel_annotate::{
    CameraPosition, CaptureMetadata, CaptureRecord, LabelRecord, LabelVocabulary,
    SyntheticMetadata,
};
pub use chesslabel_core::{Board, BoundingBox, Color, ImageSize, PieceKind, Square};

pub mod pipeline;
