//! Camera-view classification.
//!
//! The capture camera sits above the board, so only the planar `(x, y)` part
//! of its location matters. A camera straight overhead (`x = y = 0`) reads as
//! 0 degrees, like any other `atan2(0, 0)`. The angle between that vector and the +x axis is
//! bucketed into the side of the board (in notation orientation, rank 8 at
//! the top) the camera looks from.

use std::fmt;

use log::debug;
use nalgebra::Vector3;
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// Side of the board the camera looks from.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraPosition {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Unknown,
}

impl CameraPosition {
    pub const ALL: [CameraPosition; 5] = [
        CameraPosition::Top,
        CameraPosition::Bottom,
        CameraPosition::Left,
        CameraPosition::Right,
        CameraPosition::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CameraPosition::Top => "top",
            CameraPosition::Bottom => "bottom",
            CameraPosition::Left => "left",
            CameraPosition::Right => "right",
            CameraPosition::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CameraPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera block of a capture record. Fields other than `location` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraSpecs {
    /// Anything other than a 3-element numeric array reads as `None`.
    #[serde(default, deserialize_with = "lenient_location")]
    pub location: Option<Vector3<f64>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocationField {
    Point(Vector3<f64>),
    Other(IgnoredAny),
}

fn lenient_location<'de, D>(deserializer: D) -> Result<Option<Vector3<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LocationField>::deserialize(deserializer)? {
        Some(LocationField::Point(p)) => Ok(Some(p)),
        Some(LocationField::Other(_)) => {
            debug!("ignoring malformed camera location");
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Half-open `[start, end)` interval in degrees.
struct Bucket {
    start: f64,
    end: f64,
    position: CameraPosition,
}

impl Bucket {
    #[inline]
    fn contains(&self, angle: f64) -> bool {
        angle >= self.start && angle < self.end
    }
}

// Checked in order. Top and bottom come first so they win the shared
// boundaries; in particular [315, 316) is bottom, not right.
const BUCKETS: [Bucket; 5] = [
    Bucket {
        start: 46.0,
        end: 136.0,
        position: CameraPosition::Top,
    },
    Bucket {
        start: 226.0,
        end: 316.0,
        position: CameraPosition::Bottom,
    },
    Bucket {
        start: 0.0,
        end: 46.0,
        position: CameraPosition::Right,
    },
    Bucket {
        start: 315.0,
        end: 360.0,
        position: CameraPosition::Right,
    },
    Bucket {
        start: 136.0,
        end: 226.0,
        position: CameraPosition::Left,
    },
];

const REFERENCE_AXIS: [f64; 2] = [1.0, 0.0];

/// Angle of `(x, y)` from the +x axis in degrees, within `[0, 360)`.
///
/// `None` only when a coordinate is NaN; infinities and the origin go
/// through `atan2` as usual.
pub fn planar_angle_deg(x: f64, y: f64) -> Option<f64> {
    if x.is_nan() || y.is_nan() {
        return None;
    }
    let [ax, ay] = REFERENCE_AXIS;
    let mut angle = (y.atan2(x) - ay.atan2(ax)).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle >= 360.0 {
        angle -= 360.0;
    }
    Some(angle)
}

/// Bucket an angle in degrees; angles outside every bucket are `Unknown`.
pub fn classify_angle(angle_deg: f64) -> CameraPosition {
    BUCKETS
        .iter()
        .find(|bucket| bucket.contains(angle_deg))
        .map_or(CameraPosition::Unknown, |bucket| bucket.position)
}

/// A zero-length location carries no direction and is `Unknown`.
pub fn classify_location(location: &Vector3<f64>) -> CameraPosition {
    if location.iter().all(|&c| c == 0.0) {
        return CameraPosition::Unknown;
    }
    planar_angle_deg(location.x, location.y).map_or(CameraPosition::Unknown, classify_angle)
}

/// Classify optional camera data. Missing camera or location is `Unknown`.
pub fn classify_camera(camera: Option<&CameraSpecs>) -> CameraPosition {
    camera
        .and_then(|specs| specs.location.as_ref())
        .map_or(CameraPosition::Unknown, classify_location)
}
