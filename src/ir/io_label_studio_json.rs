//! Label Studio task JSON writer.
//!
//! Each input image becomes one task holding a single result set of
//! `rectanglelabels` results, stored under either `annotations` or
//! `predictions`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rand::{Rng, RngExt};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::model::AnnotationRecord;
use super::ImageId;
use crate::error::VocStudioError;

const RECTANGLE_LABELS: &str = "rectanglelabels";
const RESULT_ID_LEN: usize = 10;

// ============================================================================
// Label Studio schema types
// ============================================================================

/// Which task key the result set is stored under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutType {
    /// Human annotations.
    #[default]
    Annotations,
    /// Model predictions.
    Predictions,
}

impl OutType {
    /// The JSON key for this output type.
    pub fn key(&self) -> &'static str {
        match self {
            OutType::Annotations => "annotations",
            OutType::Predictions => "predictions",
        }
    }
}

/// One Label Studio task: an image plus its result set.
#[derive(Clone, Debug, PartialEq)]
pub struct LsTask {
    pub data: LsTaskData,
    pub out_type: OutType,
    pub result_sets: Vec<LsResultSet>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LsTaskData {
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LsResultSet {
    pub result: Vec<LsResult>,
    pub ground_truth: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LsResult {
    pub id: String,
    #[serde(rename = "type")]
    pub result_type: &'static str,
    pub value: LsRectangleValue,
    pub to_name: String,
    pub from_name: String,
    pub image_rotation: i32,
    pub original_width: u32,
    pub original_height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LsRectangleValue {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: i32,
    pub rectanglelabels: Vec<String>,
}

// The result-set key depends on `out_type`, so the task is written by hand.
impl Serialize for LsTask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("data", &self.data)?;
        map.serialize_entry(self.out_type.key(), &self.result_sets)?;
        map.end()
    }
}

impl LsTask {
    /// Seed an empty task for `file_name` hosted under `image_root_url`.
    pub fn new(out_type: OutType, image_root_url: &str, file_name: &str) -> Self {
        Self {
            data: LsTaskData {
                image: join_image_url(image_root_url, file_name),
            },
            out_type,
            result_sets: vec![LsResultSet {
                result: Vec::new(),
                ground_truth: false,
            }],
        }
    }

    /// Results of the (single) result set.
    pub fn results(&self) -> &[LsResult] {
        self.result_sets
            .first()
            .map(|set| set.result.as_slice())
            .unwrap_or_default()
    }

    /// Append `result`, replacing its id if another result of this task
    /// already uses it.
    pub fn push_result<R: Rng + ?Sized>(&mut self, mut result: LsResult, rng: &mut R) {
        while self.results().iter().any(|existing| existing.id == result.id) {
            result.id = random_result_id(rng);
        }

        match self.result_sets.first_mut() {
            Some(set) => set.result.push(result),
            None => self.result_sets.push(LsResultSet {
                result: vec![result],
                ground_truth: false,
            }),
        }
    }
}

// ============================================================================
// Conversion: VOC record -> Label Studio result
// ============================================================================

/// Names linking a result to the labeling config.
#[derive(Clone, Debug)]
pub struct ControlNames<'a> {
    /// Control tag name, already suffixed for rectangles.
    pub from_name: &'a str,
    /// Object tag name the control applies to.
    pub to_name: &'a str,
}

/// Build a `rectanglelabels` result from one VOC record.
///
/// Returns `None` when the record's image has a zero dimension.
pub fn create_bbox<R: Rng + ?Sized>(
    record: &AnnotationRecord,
    names: &ControlNames<'_>,
    rng: &mut R,
) -> Option<LsResult> {
    let pct = record
        .bbox
        .to_percent(record.image_width, record.image_height)?;
    let (x, y, width, height) = pct.as_tuple();

    Some(LsResult {
        id: random_result_id(rng),
        result_type: RECTANGLE_LABELS,
        value: LsRectangleValue {
            x,
            y,
            width,
            height,
            rotation: 0,
            rectanglelabels: vec![record.label.clone()],
        },
        to_name: names.to_name.to_string(),
        from_name: names.from_name.to_string(),
        image_rotation: 0,
        original_width: record.image_width,
        original_height: record.image_height,
    })
}

/// A random token of 10 lowercase hex digits.
pub fn random_result_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bits = rng.random::<u64>() & ((1u64 << (4 * RESULT_ID_LEN)) - 1);
    format!("{bits:0width$x}", width = RESULT_ID_LEN)
}

/// Join an image root URL and a file name with path-join rules.
///
/// A `/` is inserted unless the root is empty or already ends with one; a
/// file name starting with `/` replaces the root. Nothing is URL-encoded.
pub fn join_image_url(root: &str, file_name: &str) -> String {
    if root.is_empty() || file_name.starts_with('/') {
        file_name.to_string()
    } else if root.ends_with('/') {
        format!("{root}{file_name}")
    } else {
        format!("{root}/{file_name}")
    }
}

// ============================================================================
// Writing
// ============================================================================

/// Write tasks as one compact JSON array, ordered by image id.
///
/// The document is serialized in memory first, so a serialization failure
/// never creates `path`.
pub fn write_label_studio_json(
    path: &Path,
    tasks: &BTreeMap<ImageId, LsTask>,
) -> Result<(), VocStudioError> {
    let ordered: Vec<&LsTask> = tasks.values().collect();
    let json = serde_json::to_vec(&ordered).map_err(|source| {
        VocStudioError::LabelStudioJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::write(path, json).map_err(|source| VocStudioError::LabelStudioJsonIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize tasks to a compact JSON string, ordered by image id.
pub fn to_label_studio_string(tasks: &BTreeMap<ImageId, LsTask>) -> Result<String, VocStudioError> {
    let ordered: Vec<&LsTask> = tasks.values().collect();
    serde_json::to_string(&ordered).map_err(|source| VocStudioError::LabelStudioJsonWrite {
        path: Path::new("<string>").to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
