//! Per-dataset counts of processed captures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::camera::CameraPosition;
use crate::metadata::CaptureMetadata;

/// Number of processed samples and their camera-view distribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSummary {
    pub num_files: usize,
    pub count_camera_position: BTreeMap<CameraPosition, usize>,
}

impl CaptureSummary {
    /// Empty summary with a zero count for every position.
    pub fn new() -> Self {
        Self {
            num_files: 0,
            count_camera_position: CameraPosition::ALL.iter().map(|&p| (p, 0)).collect(),
        }
    }

    pub fn record(&mut self, position: CameraPosition) {
        self.num_files += 1;
        *self.count_camera_position.entry(position).or_insert(0) += 1;
    }

    pub fn record_metadata(&mut self, metadata: &CaptureMetadata) {
        self.record(metadata.camera_position);
    }

    pub fn count(&self, position: CameraPosition) -> usize {
        self.count_camera_position
            .get(&position)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for CaptureSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<&'a CaptureMetadata> for CaptureSummary {
    fn extend<T: IntoIterator<Item = &'a CaptureMetadata>>(&mut self, iter: T) {
        for metadata in iter {
            self.record_metadata(metadata);
        }
    }
}
