//! Label Studio labeling-config generation.
//!
//! The config declares the image object tag and one control tag per
//! registered annotation type, each listing every observed category.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use rand::{Rng, RngExt};

use crate::error::VocStudioError;

const LABEL_CONFIG_EXTENSION: &str = "label_config.xml";

/// Label Studio control tag types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlTag {
    RectangleLabels,
}

impl ControlTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlTag::RectangleLabels => "RectangleLabels",
        }
    }
}

impl fmt::Display for ControlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control-tag name → tag type, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: Vec<(String, ControlTag)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `from_name` once. Returns true on first registration.
    pub fn register(&mut self, from_name: &str, tag: ControlTag) -> bool {
        if self.get(from_name).is_some() {
            return false;
        }
        self.entries.push((from_name.to_string(), tag));
        true
    }

    pub fn get(&self, from_name: &str) -> Option<ControlTag> {
        self.entries
            .iter()
            .find(|(name, _)| name == from_name)
            .map(|(_, tag)| *tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ControlTag)> {
        self.entries.iter().map(|(name, tag)| (name.as_str(), *tag))
    }
}

/// Path of the label config belonging to `output`: its extension replaced by
/// `label_config.xml`.
pub fn label_config_path(output: &Path) -> PathBuf {
    output.with_extension(LABEL_CONFIG_EXTENSION)
}

/// Render the labeling config.
///
/// Labels are listed by ascending category index with a random background
/// colour each. With an empty tag map a single `RectangleLabels` control
/// named `from_name` is emitted.
pub fn generate_label_config<R: Rng + ?Sized>(
    categories: &BTreeMap<usize, String>,
    tags: &TagMap,
    to_name: &str,
    from_name: &str,
    rng: &mut R,
) -> String {
    let mut labels = String::new();
    for name in categories.values() {
        let (r, g, b) = (rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
        writeln!(
            labels,
            "    <Label value=\"{}\" background=\"rgba({r}, {g}, {b}, 1)\"/>",
            xml_escape(name)
        )
        .expect("write to string");
    }

    let fallback;
    let tags = if tags.is_empty() {
        let mut default_tags = TagMap::new();
        default_tags.register(from_name, ControlTag::RectangleLabels);
        fallback = default_tags;
        &fallback
    } else {
        tags
    };

    let to_name = xml_escape(to_name);
    let mut xml = String::new();

    writeln!(xml, "<View>").expect("write to string");
    writeln!(xml, "  <Image name=\"{to_name}\" value=\"$image\"/>").expect("write to string");
    for (control_name, tag) in tags.iter() {
        writeln!(xml, "  <Header value=\"{tag}\"/>").expect("write to string");
        writeln!(
            xml,
            "  <{tag} name=\"{}\" toName=\"{to_name}\">",
            xml_escape(control_name)
        )
        .expect("write to string");
        xml.push_str(&labels);
        writeln!(xml, "  </{tag}>").expect("write to string");
    }
    writeln!(xml, "</View>").expect("write to string");

    xml
}

/// Write a rendered labeling config to `path`.
pub fn write_label_config(path: &Path, config: &str) -> Result<(), VocStudioError> {
    fs::write(path, config).map_err(|source| VocStudioError::LabelConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
