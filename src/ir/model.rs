//! Core records flowing through the VOC → Label Studio pipeline.
//!
//! The reader produces one [`VocFile`] per XML file; its
//! [`AnnotationRecord`]s are consumed by the task aggregator, and the labels
//! it saw are folded into a run-wide [`CategorySet`].

use std::collections::{BTreeMap, BTreeSet};

use super::bbox::BBoxXYWH;
use super::ids::ImageId;
use super::space::Pixel;

/// One detected object read from a VOC file.
///
/// Image metadata is copied into every record so a record can be turned into
/// a Label Studio result on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationRecord {
    /// Upper-left corner plus size, in pixels.
    pub bbox: BBoxXYWH<Pixel>,

    /// Contents of `<object><name>`.
    pub label: String,

    /// Contents of `<filename>`.
    pub image_filename: String,

    pub image_width: u32,
    pub image_height: u32,

    /// Position of the source file in the input listing.
    pub image_id: ImageId,
}

/// Everything read from a single VOC annotation file.
#[derive(Clone, Debug, PartialEq)]
pub struct VocFile {
    pub image_id: ImageId,
    pub filename: String,
    pub width: u32,
    pub height: u32,

    /// One record per `<object>`, in document order.
    pub annotations: Vec<AnnotationRecord>,

    /// Distinct labels of this file, in first-seen order.
    pub categories: CategorySet,
}

/// An insertion-ordered set of category labels.
///
/// Re-inserting a label is a no-op, so a label seen in several files keeps
/// the index of its first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
    seen: BTreeSet<String>,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` if absent. Returns true when the label is new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    /// Appends every label of `other` that is not yet present.
    pub fn extend_from(&mut self, other: &CategorySet) {
        for name in other.iter() {
            self.insert(name);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Index → label mapping, index being first-seen order.
    pub fn to_index_map(&self) -> BTreeMap<usize, String> {
        self.names.iter().cloned().enumerate().collect()
    }
}

impl<'a> FromIterator<&'a str> for CategorySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
