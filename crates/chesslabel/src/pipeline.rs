use std::path::Path;

use chesslabel_annotate::{
    normalize_boxes, random_board, AnnotateIoError, BoxParams, CaptureMetadata, CaptureRecord,
    CaptureSummary, JsonFile, LabelError, LabelRecord, LabelSource, LabelVocabulary,
    SyntheticMetadata, SYNTHETIC_ACTIVE_COLOR,
};
use chesslabel_core::{Board, ImageSize, NotationError};
use log::{debug, info};
use rand::Rng;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the in-memory pipeline helpers.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Label(#[from] LabelError),
}

/// Draw a random board and build the metadata to store next to its render.
pub fn generate_synthetic_sample<R: Rng + ?Sized>(
    rng: &mut R,
    image: ImageSize,
    params: &BoxParams,
) -> SyntheticMetadata {
    let board = random_board(rng, SYNTHETIC_ACTIVE_COLOR);
    debug!("synthetic board {board}");
    SyntheticMetadata::from_board(&board, image, params)
}

/// Board -> synthetic boxes -> normalized labels.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(board, params, vocab), fields(width = image.width, height = image.height))
)]
pub fn synthetic_labels(
    board: &Board,
    image: ImageSize,
    params: &BoxParams,
    vocab: &LabelVocabulary,
) -> Result<Vec<LabelRecord>, PipelineError> {
    let metadata = SyntheticMetadata::from_board(board, image, params);
    Ok(normalize_boxes(&metadata.bounding_boxes, image, vocab)?)
}

/// Same as [`synthetic_labels`], starting from board notation.
pub fn labels_from_notation(
    notation: &str,
    image: ImageSize,
    params: &BoxParams,
    vocab: &LabelVocabulary,
) -> Result<Vec<LabelRecord>, PipelineError> {
    let board = Board::parse(notation)?;
    synthetic_labels(&board, image, params, vocab)
}

/// Capture record -> normalized metadata -> labels.
pub fn capture_labels(
    record: &CaptureRecord,
    image: ImageSize,
    params: &BoxParams,
    vocab: &LabelVocabulary,
) -> Result<(CaptureMetadata, Vec<LabelRecord>), PipelineError> {
    let metadata = CaptureMetadata::from_record(record, params);
    let labels = normalize_boxes(&metadata.bounding_boxes, image, vocab)?;
    Ok((metadata, labels))
}

/// Normalize one capture record file into `dest`, counting it in `summary`.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(params, summary)))]
pub fn process_capture_file(
    src: &Path,
    dest: &Path,
    params: &BoxParams,
    summary: &mut CaptureSummary,
) -> Result<CaptureMetadata, AnnotateIoError> {
    let record = CaptureRecord::load_json(src)?;
    let metadata = CaptureMetadata::from_record(&record, params);
    metadata.write_json(dest)?;
    summary.record_metadata(&metadata);
    info!(
        "{} -> {} ({} boxes, camera {})",
        src.display(),
        dest.display(),
        metadata.bounding_boxes.len(),
        metadata.camera_position
    );
    Ok(metadata)
}

/// Read a metadata file (either form) and write its label file.
///
/// Returns the number of labels written.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(vocab)))]
pub fn write_sample_labels(
    metadata_path: &Path,
    label_path: &Path,
    image: ImageSize,
    vocab: &LabelVocabulary,
) -> Result<usize, AnnotateIoError> {
    let source = LabelSource::load_json(metadata_path)?;
    let labels = normalize_boxes(&source.bounding_boxes, image, vocab)?;
    chesslabel_annotate::write_label_file(&labels, label_path)?;
    info!(
        "{} -> {} ({} labels)",
        metadata_path.display(),
        label_path.display(),
        labels.len()
    );
    Ok(labels.len())
}
