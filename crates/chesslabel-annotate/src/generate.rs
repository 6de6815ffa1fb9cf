//! Bounding-box generation.
//!
//! Synthetic samples are rendered as a full-frame board, so every square is
//! an exact `width/8 × height/8` cell and the board corners are the image
//! corners. Real captures supply corner points and per-piece boxes directly.

use chesslabel_core::{Board, BoundingBox, ImageSize, BOARD_SIZE};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::metadata::{CaptureRecord, PieceAnnotation};

fn default_corner_box_size() -> f64 {
    20.0
}

/// Box generation settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxParams {
    /// Side length of corner-marker boxes in pixels.
    #[serde(default = "default_corner_box_size")]
    pub corner_box_size: f64,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            corner_box_size: default_corner_box_size(),
        }
    }
}

/// One box per non-blank square, in notation order.
///
/// Cell size is the integer pixel size `image / 8`.
pub fn piece_boxes(board: &Board, image: ImageSize) -> Vec<BoundingBox> {
    let cells = BOARD_SIZE as u32;
    let cell_w = f64::from(image.width / cells);
    let cell_h = f64::from(image.height / cells);

    board
        .pieces()
        .filter_map(|(rank, file, square)| {
            let symbol = square.encode()?;
            Some(BoundingBox::new(
                symbol.to_string(),
                file as f64 * cell_w,
                rank as f64 * cell_h,
                cell_w,
                cell_h,
            ))
        })
        .collect()
}

/// Corner boxes anchored inside the four image corners.
///
/// Order: top-left, top-right, bottom-left, bottom-right. Offsets are clamped
/// at zero for images smaller than a corner box.
pub fn image_corner_boxes(image: ImageSize, params: &BoxParams) -> Vec<BoundingBox> {
    let size = params.corner_box_size;
    let right = (f64::from(image.width) - size).max(0.0);
    let bottom = (f64::from(image.height) - size).max(0.0);
    vec![
        BoundingBox::corner(0.0, 0.0, size),
        BoundingBox::corner(right, 0.0, size),
        BoundingBox::corner(0.0, bottom, size),
        BoundingBox::corner(right, bottom, size),
    ]
}

/// Synthetic-sample boxes: pieces, then image corners.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(board, params), fields(width = image.width, height = image.height))
)]
pub fn synthetic_boxes(board: &Board, image: ImageSize, params: &BoxParams) -> Vec<BoundingBox> {
    let mut boxes = piece_boxes(board, image);
    boxes.extend(image_corner_boxes(image, params));
    boxes
}

/// Corner boxes centered on each point, top-left clamped at zero.
pub fn point_corner_boxes(corners: &[Point2<f64>], params: &BoxParams) -> Vec<BoundingBox> {
    let size = params.corner_box_size;
    let half = size / 2.0;
    corners
        .iter()
        .map(|p| BoundingBox::corner((p.x - half).max(0.0), (p.y - half).max(0.0), size))
        .collect()
}

/// Pass an annotated piece box through unchanged, keeping its square.
pub fn annotated_piece_box(piece: &PieceAnnotation) -> BoundingBox {
    let [left, top, width, height] = piece.bbox;
    BoundingBox::new(piece.piece.clone(), left, top, width, height).with_position(&piece.square)
}

/// Real-capture boxes: corner points, then annotated pieces.
pub fn capture_boxes(record: &CaptureRecord, params: &BoxParams) -> Vec<BoundingBox> {
    let mut boxes = point_corner_boxes(&record.corners, params);
    boxes.extend(record.pieces.iter().map(annotated_piece_box));
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chesslabel_core::{Color, PieceKind, Square, START_NOTATION};

    fn lone_white_king() -> Board {
        let mut ranks = [[Square::BLANK; BOARD_SIZE]; BOARD_SIZE];
        ranks[0][4] = Square::new(PieceKind::King, Color::White);
        Board::new(ranks, Color::White)
    }

    #[test]
    fn lone_king_on_640_board() {
        let boxes = synthetic_boxes(
            &lone_white_king(),
            ImageSize::new(640, 640),
            &BoxParams::default(),
        );
        assert_eq!(boxes.len(), 5);
        assert_eq!(boxes[0], BoundingBox::new("K", 320.0, 0.0, 80.0, 80.0));
        assert!(boxes[1..].iter().all(BoundingBox::is_corner));
    }

    #[test]
    fn image_corners_stay_inside_the_image() {
        let boxes = image_corner_boxes(ImageSize::new(640, 480), &BoxParams::default());
        let anchors: Vec<(f64, f64)> = boxes.iter().map(|b| (b.left, b.top)).collect();
        assert_eq!(
            anchors,
            vec![(0.0, 0.0), (620.0, 0.0), (0.0, 460.0), (620.0, 460.0)]
        );
        assert!(boxes.iter().all(|b| b.width == 20.0 && b.height == 20.0));
    }

    #[test]
    fn tiny_image_clamps_corner_offsets() {
        let boxes = image_corner_boxes(ImageSize::new(10, 30), &BoxParams::default());
        assert_eq!((boxes[3].left, boxes[3].top), (0.0, 10.0));
    }

    #[test]
    fn cell_size_uses_integer_division() {
        let board = Board::parse("7p/8/8/8/8/8/8/8 b").expect("valid");
        let boxes = piece_boxes(&board, ImageSize::new(650, 645));
        assert_eq!(boxes, vec![BoundingBox::new("p", 567.0, 0.0, 81.0, 80.0)]);
    }

    #[test]
    fn starting_position_yields_one_box_per_piece() {
        let board = Board::parse(START_NOTATION).expect("valid");
        let boxes = piece_boxes(&board, ImageSize::default());
        assert_eq!(boxes.len(), 32);
        assert_eq!(boxes[0].label, "r");
        assert_eq!((boxes[31].left, boxes[31].top), (560.0, 560.0));
        assert_eq!(boxes[31].label, "R");
    }

    #[test]
    fn point_corners_are_centered_and_clamped() {
        let corners = [Point2::new(100.0, 200.0), Point2::new(4.0, 300.0)];
        let boxes = point_corner_boxes(&corners, &BoxParams { corner_box_size: 20.0 });
        assert_eq!(boxes[0], BoundingBox::corner(90.0, 190.0, 20.0));
        assert_eq!(boxes[1], BoundingBox::corner(0.0, 290.0, 20.0));
    }

    #[test]
    fn custom_corner_size() {
        let params = BoxParams {
            corner_box_size: 32.0,
        };
        let boxes = image_corner_boxes(ImageSize::new(640, 640), &params);
        assert_eq!(boxes[3], BoundingBox::corner(608.0, 608.0, 32.0));
    }
}
