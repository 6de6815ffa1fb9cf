use approx::assert_relative_eq;
use chesslabel::annotate::{
    format_label_file, BoxParams, CaptureSummary, ClassManifest, JsonFile, LabelVocabulary,
};
use chesslabel::core::{Board, BoundingBox, Color, ImageSize, START_NOTATION};
use chesslabel::{pipeline, CameraPosition, SyntheticMetadata};
use std::fs;

const CAPTURE_JSON: &str = r#"{
    "fen": "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "camera": {"location": [0.05, 1.2, 0.9]},
    "corners": [[120.0, 80.0], [1100.0, 95.0], [1150.0, 1020.0], [8.0, 990.0]],
    "pieces": [
        {"piece": "r", "square": "a8", "box": [130, 60, 90, 140]},
        {"piece": "K", "square": "e1", "box": [600, 850, 100, 160]}
    ]
}"#;

#[test]
fn start_position_notation_round_trips() {
    let board: Board = START_NOTATION.parse().expect("start position");
    assert_eq!(board.to_string(), START_NOTATION);
    assert_eq!(board.active_color(), Color::White);
    assert_eq!(board.pieces().count(), 32);
}

#[test]
fn lone_white_king_end_to_end() {
    let board = Board::parse("4K3/8/8/8/8/8/8/8 w").expect("notation");
    let image = ImageSize::new(640, 640);
    let md = SyntheticMetadata::from_board(&board, image, &BoxParams::default());

    assert_eq!(md.bounding_boxes.len(), 5);
    assert_eq!(
        md.bounding_boxes[0],
        BoundingBox::new("K", 320.0, 0.0, 80.0, 80.0)
    );

    let labels = pipeline::synthetic_labels(
        &board,
        image,
        &BoxParams::default(),
        &LabelVocabulary::default(),
    )
    .expect("labels");
    assert_eq!(labels.len(), 5);
    assert_eq!(labels[0].class_id, 12);
    assert_relative_eq!(labels[0].center_x, 0.5625);
    assert_relative_eq!(labels[0].center_y, 0.0625);
    assert!(labels[1..].iter().all(|l| l.class_id == 0));

    let text = format_label_file(&labels);
    assert_eq!(text.lines().count(), 5);
    assert!(text.starts_with("12 0.5625 0.0625 0.125 0.125\n0 "));
}

#[test]
fn capture_record_to_labels() {
    let record = serde_json::from_str(CAPTURE_JSON).expect("record");
    let image = ImageSize::new(1200, 1100);
    let (md, labels) = pipeline::capture_labels(
        &record,
        image,
        &BoxParams::default(),
        &LabelVocabulary::default(),
    )
    .expect("labels");

    assert_eq!(md.camera_position, CameraPosition::Top);
    assert_eq!(md.bounding_boxes.len(), 6);
    assert_eq!(md.bounding_boxes[3], BoundingBox::corner(0.0, 980.0, 20.0));
    assert_eq!(md.bounding_boxes[5].position.as_deref(), Some("e1"));

    let class_ids: Vec<usize> = labels.iter().map(|l| l.class_id).collect();
    assert_eq!(class_ids, vec![0, 0, 0, 0, 2, 12]);
    assert_relative_eq!(labels[4].center_x, 175.0 / 1200.0);
    assert_relative_eq!(labels[4].height, 140.0 / 1100.0);
}

#[test]
fn capture_files_are_normalized_and_counted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = dir.path().join("sample.json");
    let dest = dir.path().join("sample.norm.json");
    let labels = dir.path().join("sample.txt");
    fs::write(&src, CAPTURE_JSON).expect("write record");

    let mut summary = CaptureSummary::new();
    let md = pipeline::process_capture_file(&src, &dest, &BoxParams::default(), &mut summary)
        .expect("process");
    assert_eq!(summary.num_files, 1);
    assert_eq!(summary.count(CameraPosition::Top), 1);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dest).expect("read")).expect("json");
    assert_eq!(written["camera_position"], "top");
    assert_eq!(written["fen"], md.fen.as_str());

    let count = pipeline::write_sample_labels(
        &dest,
        &labels,
        ImageSize::new(1200, 1100),
        &LabelVocabulary::default(),
    )
    .expect("labels");
    assert_eq!(count, 6);
    let text = fs::read_to_string(&labels).expect("read labels");
    assert_eq!(text.lines().count(), 6);
    assert!(!text.ends_with('\n'));
}

#[test]
fn synthetic_metadata_file_feeds_label_writer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let md_path = dir.path().join("0.json");
    let label_path = dir.path().join("0.txt");
    let manifest_path = dir.path().join("data.json");

    let board = Board::starting();
    let image = ImageSize::default();
    SyntheticMetadata::from_board(&board, image, &BoxParams::default())
        .write_json(&md_path)
        .expect("write metadata");

    let vocab = LabelVocabulary::default();
    let count =
        pipeline::write_sample_labels(&md_path, &label_path, image, &vocab).expect("labels");
    assert_eq!(count, 36);

    vocab.manifest().write_json(&manifest_path).expect("manifest");
    let manifest = ClassManifest::load_json(&manifest_path).expect("load manifest");
    assert_eq!(manifest.class_count, 13);
    assert_eq!(manifest.class_names[12], "K");
}

#[test]
fn unknown_label_in_file_aborts_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let md_path = dir.path().join("odd.json");
    let label_path = dir.path().join("odd.txt");
    fs::write(
        &md_path,
        r#"{"bounding_boxes": [{"type": "pawn", "left": 0, "top": 0, "width": 1, "height": 1}]}"#,
    )
    .expect("write");

    let res = pipeline::write_sample_labels(
        &md_path,
        &label_path,
        ImageSize::default(),
        &LabelVocabulary::default(),
    );
    assert!(res.is_err());
    assert!(!label_path.exists());
}
